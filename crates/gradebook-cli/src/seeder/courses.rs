//! Course seeding functionality.

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::CourseSeed;

const SUBJECTS: [&str; 10] = [
    "Algebra",
    "Mechanics",
    "Organic Chemistry",
    "Genetics",
    "World History",
    "Poetry",
    "Algorithms",
    "Cartography",
    "Statistics",
    "Databases",
];

/// Generates `courses_per_teacher` courses for each teacher, in teacher order.
pub fn generate_courses(teacher_ids: &[i64], courses_per_teacher: usize) -> Vec<CourseSeed> {
    teacher_ids
        .par_iter()
        .enumerate()
        .flat_map(|(teacher_idx, &teacher_id)| {
            (0..courses_per_teacher)
                .map(|course_idx| {
                    let subject = SUBJECTS[(teacher_idx + course_idx) % SUBJECTS.len()];
                    CourseSeed {
                        title: format!("{} {}", subject, 100 + teacher_idx * 10 + course_idx),
                        description: Some(Sentence(6..12).fake()),
                        teacher_id: Some(teacher_id),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub async fn seed_courses(
    db: &PgPool,
    teacher_ids: &[i64],
    courses_per_teacher: usize,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "📚 Seeding {} courses ({} per teacher)...",
        teacher_ids.len() * courses_per_teacher,
        courses_per_teacher
    );

    let courses = generate_courses(teacher_ids, courses_per_teacher);
    let ids = insert_courses_batch(db, &courses).await?;

    println!(
        "   ✓ Inserted {} courses in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn insert_courses_batch(
    db: &PgPool,
    courses: &[CourseSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 3 params per course
    const BATCH_SIZE: usize = 1500;
    let mut all_ids = Vec::with_capacity(courses.len());

    for chunk in courses.chunks(BATCH_SIZE) {
        all_ids.extend(insert_courses_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_courses_chunk(
    tx: &mut Transaction<'_, Postgres>,
    courses: &[CourseSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    if courses.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO courses (title, description, teacher_id) VALUES ");

    for i in 0..courses.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 3;
        query.push_str(&format!(
            "(${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3
        ));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for course in courses {
        q = q
            .bind(&course.title)
            .bind(&course.description)
            .bind(course.teacher_id);
    }

    let ids: Vec<i64> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Deletes courses owned by seeded teachers. Courses would otherwise survive
/// their teacher with a cleared `teacher_id`.
pub async fn clear_courses(
    db: &PgPool,
    email_domain: &str,
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded courses...");

    let deleted = sqlx::query(
        "DELETE FROM courses c
         USING teachers t
         WHERE c.teacher_id = t.id AND t.email LIKE $1",
    )
    .bind(format!("%@{}", email_domain))
    .execute(db)
    .await?
    .rows_affected();

    println!(
        "   ✓ Deleted {} courses in {:?}",
        deleted,
        start_time.elapsed()
    );

    Ok(deleted)
}
