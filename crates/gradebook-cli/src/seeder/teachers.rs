//! Teacher seeding functionality.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::TeacherSeed;

pub const SEED_EMAIL_DOMAIN: &str = "example.com";

const DEPARTMENTS: [&str; 8] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Literature",
    "Computer Science",
    "Geography",
];

/// Generates teacher rows in parallel. Every row shares `password_hash`.
pub fn generate_teachers(count: usize, password_hash: &str) -> Vec<TeacherSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            // Index suffix keeps (name, department, email) unique within a run.
            let email = format!(
                "{}.{}+teacher{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                idx,
                SEED_EMAIL_DOMAIN
            );

            TeacherSeed {
                name: format!("{} {}", first_name, last_name),
                department: DEPARTMENTS[idx % DEPARTMENTS.len()].to_string(),
                email,
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

pub async fn seed_teachers(
    db: &PgPool,
    count: usize,
    password_hash: &str,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👩‍🏫 Seeding {} teachers...", count);

    let teachers = generate_teachers(count, password_hash);
    let ids = insert_teachers_batch(db, &teachers).await?;

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn insert_teachers_batch(
    db: &PgPool,
    teachers: &[TeacherSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 4 params per teacher
    const BATCH_SIZE: usize = 1000;
    let mut all_ids = Vec::with_capacity(teachers.len());

    for chunk in teachers.chunks(BATCH_SIZE) {
        all_ids.extend(insert_teachers_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_teachers_chunk(
    tx: &mut Transaction<'_, Postgres>,
    teachers: &[TeacherSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    if teachers.is_empty() {
        return Ok(Vec::new());
    }

    let mut query =
        String::from("INSERT INTO teachers (name, department, email, password_hash) VALUES ");

    for i in 0..teachers.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4
        ));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for teacher in teachers {
        q = q
            .bind(&teacher.name)
            .bind(&teacher.department)
            .bind(&teacher.email)
            .bind(&teacher.password_hash);
    }

    let ids: Vec<i64> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Deletes seeded teachers. Their students go with them through the
/// cascading foreign key.
pub async fn clear_teachers(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded teachers...");

    let deleted = sqlx::query("DELETE FROM teachers WHERE email LIKE $1")
        .bind(format!("%@{}", SEED_EMAIL_DOMAIN))
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} teachers in {:?}",
        deleted,
        start_time.elapsed()
    );

    Ok(deleted)
}
