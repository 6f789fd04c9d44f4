use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::{AppError, ListQuery, Paginated, Populate};
use gradebook_models::COURSE_RELATION;

use crate::modules::courses::service::CourseService;
use crate::modules::students::model::{
    CreateStudentDto, Student, StudentResponse, UpdateStudentDto,
};
use crate::modules::write_error;

const STUDENT_COLUMNS: &str =
    "id, title, description, teacher_id, course_id, created_at, updated_at";

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (title, description, teacher_id, course_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.teacher_id)
        .bind(dto.course_id)
        .fetch_one(db)
        .await
        .map_err(|e| write_error(e, "Failed to create student"))
    }

    /// One page of students plus the unfiltered total, fetched concurrently.
    #[instrument(skip(db))]
    pub async fn list_students(
        db: &PgPool,
        query: &ListQuery,
    ) -> Result<Paginated<StudentResponse>, AppError> {
        let direction = query.sort.as_sql();
        let select = format!(
            "SELECT {STUDENT_COLUMNS} FROM students
             ORDER BY created_at {direction}, id {direction}
             LIMIT $1 OFFSET $2"
        );

        let fetch = sqlx::query_as::<_, Student>(&select)
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(db);
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students").fetch_one(db);

        let (students, total) = tokio::try_join!(fetch, count)
            .context("Failed to fetch students")
            .map_err(AppError::database)?;

        let data = Self::attach_courses(db, students, &query.populate).await?;
        Ok(query.paginate(data, total))
    }

    #[instrument(skip(db))]
    pub async fn get_student(
        db: &PgPool,
        id: i64,
        populate: &Populate,
    ) -> Result<StudentResponse, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        let mut populated = Self::attach_courses(db, vec![student], populate).await?;
        populated
            .pop()
            .ok_or_else(|| AppError::internal_error("Student lost while populating".to_string()))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: i64,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "UPDATE students
             SET title = COALESCE($1, title),
                 description = COALESCE($2, description),
                 teacher_id = COALESCE($3, teacher_id),
                 course_id = CASE WHEN $4 THEN $5 ELSE course_id END,
                 updated_at = NOW()
             WHERE id = $6
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.teacher_id)
        .bind(dto.course_id.is_some())
        .bind(dto.course_id.flatten())
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| write_error(e, "Failed to update student"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        Ok(())
    }

    async fn attach_courses(
        db: &PgPool,
        students: Vec<Student>,
        populate: &Populate,
    ) -> Result<Vec<StudentResponse>, AppError> {
        if !populate.includes(COURSE_RELATION) {
            return Ok(students.into_iter().map(StudentResponse::from).collect());
        }

        let mut course_ids: Vec<i64> = students.iter().filter_map(|s| s.course_id).collect();
        course_ids.sort_unstable();
        course_ids.dedup();

        let courses = CourseService::courses_by_ids(db, &course_ids).await?;

        Ok(students
            .into_iter()
            .map(|student| {
                let course = student.course_id.and_then(|id| courses.get(&id).cloned());
                StudentResponse {
                    student,
                    course: Some(course),
                }
            })
            .collect())
    }
}
