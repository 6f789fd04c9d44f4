//! Fake data seeding for development and load testing.
//!
//! Rows are generated in parallel with rayon and written with multi-row
//! `INSERT` statements, one transaction per table. Every seeded teacher gets
//! an `@example.com` address so [`clear_all`] can find them again.

pub mod courses;
pub mod models;
pub mod students;
pub mod teachers;

use gradebook_core::hash_password;
use sqlx::PgPool;
use std::time::Instant;

pub use models::{SeedConfig, DEFAULT_SEED_PASSWORD};
pub use teachers::SEED_EMAIL_DOMAIN;

/// Seeds teachers, then their courses, then their students.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} teachers, {} courses, {} students\n",
        config.num_teachers,
        config.total_courses(),
        config.total_students()
    );

    // One hash for every seeded account; bcrypt per row would dominate the run.
    let password_hash = hash_password(&config.password)?;

    let teacher_ids = teachers::seed_teachers(db, config.num_teachers, &password_hash).await?;
    let course_ids = courses::seed_courses(db, &teacher_ids, config.courses_per_teacher).await?;

    let teacher_courses = group_courses(&teacher_ids, &course_ids, config.courses_per_teacher);
    students::seed_students(db, &teacher_courses, config.students_per_teacher).await?;

    println!("\n✅ Seeding completed in {:?}", start_time.elapsed());
    println!(
        "   Seeded teachers log in with password: {}",
        config.password
    );

    Ok(())
}

/// Removes everything [`seed_all`] created.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    courses::clear_courses(db, SEED_EMAIL_DOMAIN).await?;
    teachers::clear_teachers(db).await?;

    println!("\n✅ Cleared seeded data in {:?}", start_time.elapsed());
    Ok(())
}

/// Pairs each teacher with the course ids generated for them. Course ids
/// arrive in teacher order, `per_teacher` at a time.
fn group_courses(
    teacher_ids: &[i64],
    course_ids: &[i64],
    per_teacher: usize,
) -> Vec<students::TeacherCourses> {
    if per_teacher == 0 {
        return teacher_ids.iter().map(|&id| (id, Vec::new())).collect();
    }

    teacher_ids
        .iter()
        .zip(course_ids.chunks(per_teacher))
        .map(|(&id, chunk)| (id, chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_courses_by_teacher() {
        let grouped = group_courses(&[1, 2], &[10, 11, 20, 21], 2);
        assert_eq!(grouped, vec![(1, vec![10, 11]), (2, vec![20, 21])]);
    }

    #[test]
    fn test_group_courses_without_courses() {
        let grouped = group_courses(&[1, 2], &[], 0);
        assert_eq!(grouped, vec![(1, vec![]), (2, vec![])]);
    }
}
