use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use gradebook_core::{AppError, Paginated, PaginationParams, PopulateParams};
use gradebook_models::{ErrorResponse, MessageResponse};

use crate::middleware::auth::AuthUser;
use crate::modules::teachers::model::{
    AuthCheckResponse, LoginRequest, LoginResponse, RegisterTeacherDto, Teacher,
    TeacherResponse, UpdateTeacherDto,
};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    post,
    path = "/api/teachers/register",
    request_body = RegisterTeacherDto,
    responses(
        (status = 201, description = "Teacher registered", body = Teacher),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 409, description = "Teacher already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn register_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterTeacherDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = TeacherService::register_teacher(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// `POST /teachers` registers exactly like `POST /teachers/register`, behind the gate.
#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = RegisterTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = Teacher),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Teacher already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterTeacherDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = TeacherService::register_teacher(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    post,
    path = "/api/teachers/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn login_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = TeacherService::login(&state.db, &state.tokens, dto).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/teachers/checkTeacherAuth",
    responses(
        (status = 200, description = "Token is valid", body = AuthCheckResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
#[instrument(skip(auth_user), fields(teacher_id = auth_user.teacher_id()))]
pub async fn check_teacher_auth(auth_user: AuthUser) -> Json<AuthCheckResponse> {
    Json(AuthCheckResponse { user: auth_user.0 })
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of teachers", body = Paginated<TeacherResponse>),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Json<Paginated<TeacherResponse>>, AppError> {
    let query = params
        .validate::<Teacher>(state.pagination.limits())
        .map_err(AppError::bad_request)?;

    let page = TeacherService::list_teachers(&state.db, &query).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(
        ("id" = i64, Path, description = "Teacher ID"),
        PopulateParams
    ),
    responses(
        (status = 200, description = "Teacher details", body = TeacherResponse),
        (status = 400, description = "Invalid populate value", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedQuery(params): ValidatedQuery<PopulateParams>,
) -> Result<Json<TeacherResponse>, AppError> {
    let populate = params
        .validate::<Teacher>()
        .map_err(AppError::bad_request)?;

    let teacher = TeacherService::get_teacher(&state.db, id, &populate).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = Teacher),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::update_teacher(&state.db, id, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    TeacherService::delete_teacher(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Teacher deleted successfully")))
}
