use anyhow::Context;
use sqlx::PgPool;
use tracing::{instrument, warn};

use gradebook_auth::TokenIssuer;
use gradebook_core::password::{
    PasswordError, hash_password_async, verify_dummy_password_async, verify_password_async,
};
use gradebook_core::{AppError, ListQuery, Paginated, Populate};
use gradebook_models::COURSE_RELATION;
use gradebook_observability::{
    LoginFailure, track_login_failure, track_login_success, track_teacher_registered,
    track_token_issued,
};

use crate::modules::courses::service::CourseService;
use crate::modules::teachers::model::{
    LoginRequest, LoginResponse, RegisterTeacherDto, Teacher, TeacherCredentials,
    TeacherResponse, UpdateTeacherDto,
};
use crate::modules::write_error;

const TEACHER_COLUMNS: &str = "id, name, department, email, created_at, updated_at";

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Every rejected login answers with the same 401; the reason is only
/// logged and counted.
fn reject_login(reason: LoginFailure) -> AppError {
    warn!(reason = %reason, "Login rejected");
    track_login_failure(reason);
    AppError::unauthorized(INVALID_CREDENTIALS)
}

pub struct TeacherService;

impl TeacherService {
    /// Creates a teacher unless one with the same name, department and email
    /// already exists. The check and the insert are not atomic.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register_teacher(
        db: &PgPool,
        dto: RegisterTeacherDto,
    ) -> Result<Teacher, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM teachers WHERE name = $1 AND department = $2 AND email = $3
            )",
        )
        .bind(&dto.name)
        .bind(&dto.department)
        .bind(&dto.email)
        .fetch_one(db)
        .await
        .context("Failed to check for existing teacher")
        .map_err(AppError::database)?;

        if exists {
            return Err(AppError::conflict(anyhow::anyhow!(
                "Teacher with this name, department and email already exists"
            )));
        }

        let password_hash = hash_password_async(dto.password)
            .await
            .map_err(AppError::internal)?;

        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "INSERT INTO teachers (name, department, email, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(dto.name)
        .bind(dto.department)
        .bind(dto.email)
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| write_error(e, "Failed to create teacher"))?;

        track_teacher_registered();
        Ok(teacher)
    }

    /// Verifies credentials by email and issues an access token.
    #[instrument(skip(db, tokens, dto), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        tokens: &TokenIssuer,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let found = sqlx::query_as::<_, TeacherCredentials>(
            "SELECT id, name, email, password_hash FROM teachers
             WHERE email = $1
             ORDER BY id
             LIMIT 1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch teacher credentials")
        .map_err(AppError::database)?;

        // An unknown email still pays for one bcrypt verification.
        let Some(credentials) = found else {
            verify_dummy_password_async(dto.password)
                .await
                .map_err(AppError::internal)?;
            return Err(reject_login(LoginFailure::UnknownEmail));
        };

        match verify_password_async(dto.password, credentials.password_hash.clone()).await {
            Ok(true) => {}
            Ok(false) => return Err(reject_login(LoginFailure::PasswordMismatch)),
            Err(PasswordError::MalformedHash) => {
                return Err(reject_login(LoginFailure::MalformedHash));
            }
            Err(e) => return Err(AppError::internal(e)),
        }

        let access_token = tokens
            .issue(&credentials.identity())
            .map_err(AppError::internal)?;

        track_login_success();
        track_token_issued();

        Ok(LoginResponse { access_token })
    }

    #[instrument(skip(db))]
    pub async fn list_teachers(
        db: &PgPool,
        query: &ListQuery,
    ) -> Result<Paginated<TeacherResponse>, AppError> {
        let direction = query.sort.as_sql();
        let select = format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers
             ORDER BY created_at {direction}, id {direction}
             LIMIT $1 OFFSET $2"
        );

        let fetch = sqlx::query_as::<_, Teacher>(&select)
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(db);
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teachers").fetch_one(db);

        let (teachers, total) = tokio::try_join!(fetch, count)
            .context("Failed to fetch teachers")
            .map_err(AppError::database)?;

        let data = Self::attach_courses(db, teachers, &query.populate).await?;
        Ok(query.paginate(data, total))
    }

    #[instrument(skip(db))]
    pub async fn get_teacher(
        db: &PgPool,
        id: i64,
        populate: &Populate,
    ) -> Result<TeacherResponse, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch teacher by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        let mut populated = Self::attach_courses(db, vec![teacher], populate).await?;
        populated
            .pop()
            .ok_or_else(|| AppError::internal_error("Teacher lost while populating".to_string()))
    }

    /// Merges the supplied fields over the stored teacher. A new password is
    /// re-hashed before storage.
    #[instrument(skip(db, dto))]
    pub async fn update_teacher(
        db: &PgPool,
        id: i64,
        dto: UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        let password_hash = match dto.password {
            Some(password) => Some(
                hash_password_async(password)
                    .await
                    .map_err(AppError::internal)?,
            ),
            None => None,
        };

        sqlx::query_as::<_, Teacher>(&format!(
            "UPDATE teachers
             SET name = COALESCE($1, name),
                 department = COALESCE($2, department),
                 email = COALESCE($3, email),
                 password_hash = COALESCE($4, password_hash),
                 updated_at = NOW()
             WHERE id = $5
             RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(dto.name)
        .bind(dto.department)
        .bind(dto.email)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| write_error(e, "Failed to update teacher"))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_teacher(db: &PgPool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete teacher")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        Ok(())
    }

    async fn attach_courses(
        db: &PgPool,
        teachers: Vec<Teacher>,
        populate: &Populate,
    ) -> Result<Vec<TeacherResponse>, AppError> {
        if !populate.includes(COURSE_RELATION) {
            return Ok(teachers.into_iter().map(TeacherResponse::from).collect());
        }

        let teacher_ids: Vec<i64> = teachers.iter().map(|t| t.id).collect();
        let mut courses = CourseService::courses_by_teachers(db, &teacher_ids).await?;

        Ok(teachers
            .into_iter()
            .map(|teacher| {
                let teacher_courses = courses.remove(&teacher.id).unwrap_or_default();
                TeacherResponse {
                    teacher,
                    courses: Some(teacher_courses),
                }
            })
            .collect())
    }
}
