//! Teacher account creation from the command line.

use gradebook_core::hash_password;
use sqlx::PgPool;

/// Inserts a teacher unless one with the same name, department and email
/// already exists. Returns the new id.
pub async fn create_teacher(
    db: &PgPool,
    name: &str,
    department: &str,
    email: &str,
    password: &str,
) -> Result<i64, Box<dyn std::error::Error>> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS(
             SELECT 1 FROM teachers
             WHERE name = $1 AND department = $2 AND email = $3
         )",
    )
    .bind(name)
    .bind(department)
    .bind(email)
    .fetch_one(db)
    .await?;

    if exists {
        return Err("Teacher already exists".into());
    }

    let password_hash = hash_password(password)?;

    let id = sqlx::query_scalar(
        "INSERT INTO teachers (name, department, email, password_hash)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(name)
    .bind(department)
    .bind(email)
    .bind(&password_hash)
    .fetch_one(db)
    .await?;

    Ok(id)
}
