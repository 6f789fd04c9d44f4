use std::collections::HashMap;

use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::{AppError, ListQuery, Paginated};

use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};
use crate::modules::write_error;

const COURSE_COLUMNS: &str = "id, title, description, teacher_id, created_at, updated_at";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "INSERT INTO courses (title, description, teacher_id)
             VALUES ($1, $2, $3)
             RETURNING {COURSE_COLUMNS}"
        ))
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| write_error(e, "Failed to create course"))
    }

    #[instrument(skip(db))]
    pub async fn list_courses(db: &PgPool, query: &ListQuery) -> Result<Paginated<Course>, AppError> {
        let direction = query.sort.as_sql();
        let select = format!(
            "SELECT {COURSE_COLUMNS} FROM courses
             ORDER BY created_at {direction}, id {direction}
             LIMIT $1 OFFSET $2"
        );

        let fetch = sqlx::query_as::<_, Course>(&select)
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(db);
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses").fetch_one(db);

        let (courses, total) = tokio::try_join!(fetch, count)
            .context("Failed to fetch courses")
            .map_err(AppError::database)?;

        Ok(query.paginate(courses, total))
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &PgPool, id: i64) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch course by ID")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        id: i64,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses
             SET title = COALESCE($1, title),
                 description = CASE WHEN $2 THEN $3 ELSE description END,
                 teacher_id = CASE WHEN $4 THEN $5 ELSE teacher_id END,
                 updated_at = NOW()
             WHERE id = $6
             RETURNING {COURSE_COLUMNS}"
        ))
        .bind(dto.title)
        .bind(dto.description.is_some())
        .bind(dto.description.flatten())
        .bind(dto.teacher_id.is_some())
        .bind(dto.teacher_id.flatten())
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| write_error(e, "Failed to update course"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete course")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }

    /// Courses keyed by id, for eager-loading a student's `courseId`.
    #[instrument(skip(db, ids), fields(count = ids.len()))]
    pub async fn courses_by_ids(db: &PgPool, ids: &[i64]) -> Result<HashMap<i64, Course>, AppError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(db)
        .await
        .context("Failed to fetch courses by ID")
        .map_err(AppError::database)?;

        Ok(courses.into_iter().map(|c| (c.id, c)).collect())
    }

    /// Courses grouped by teacher, each group in creation order.
    #[instrument(skip(db, teacher_ids), fields(count = teacher_ids.len()))]
    pub async fn courses_by_teachers(
        db: &PgPool,
        teacher_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Course>>, AppError> {
        if teacher_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses
             WHERE teacher_id = ANY($1)
             ORDER BY created_at ASC, id ASC"
        ))
        .bind(teacher_ids)
        .fetch_all(db)
        .await
        .context("Failed to fetch courses by teacher")
        .map_err(AppError::database)?;

        let mut grouped: HashMap<i64, Vec<Course>> = HashMap::new();
        for course in courses {
            if let Some(teacher_id) = course.teacher_id {
                grouped.entry(teacher_id).or_default().push(course);
            }
        }
        Ok(grouped)
    }
}
