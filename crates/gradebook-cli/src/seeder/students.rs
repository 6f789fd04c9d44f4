//! Student seeding functionality.

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::StudentSeed;

/// A teacher and the ids of the courses they own.
pub type TeacherCourses = (i64, Vec<i64>);

/// Generates students for each teacher, spreading them round-robin over that
/// teacher's courses. Teachers without courses get students with no course.
pub fn generate_students(
    teachers: &[TeacherCourses],
    students_per_teacher: usize,
) -> Vec<StudentSeed> {
    teachers
        .par_iter()
        .flat_map(|(teacher_id, course_ids)| {
            (0..students_per_teacher)
                .map(|idx| StudentSeed {
                    title: Name().fake(),
                    description: Sentence(4..10).fake(),
                    teacher_id: *teacher_id,
                    course_id: (!course_ids.is_empty()).then(|| course_ids[idx % course_ids.len()]),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub async fn seed_students(
    db: &PgPool,
    teachers: &[TeacherCourses],
    students_per_teacher: usize,
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🎓 Seeding {} students ({} per teacher)...",
        teachers.len() * students_per_teacher,
        students_per_teacher
    );

    let students = generate_students(teachers, students_per_teacher);
    let inserted = insert_students_batch(db, &students).await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

pub async fn insert_students_batch(
    db: &PgPool,
    students: &[StudentSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 4 params per student
    const BATCH_SIZE: usize = 1000;
    let mut inserted = 0;

    for chunk in students.chunks(BATCH_SIZE) {
        inserted += insert_students_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;
    Ok(inserted)
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    if students.is_empty() {
        return Ok(0);
    }

    let mut query =
        String::from("INSERT INTO students (title, description, teacher_id, course_id) VALUES ");

    for i in 0..students.len() {
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

    let mut q = sqlx::query(&query);
    for student in students {
        q = q
            .bind(&student.title)
            .bind(&student.description)
            .bind(student.teacher_id)
            .bind(student.course_id);
    }

    Ok(q.execute(&mut **tx).await?.rows_affected())
}
