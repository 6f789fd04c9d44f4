use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gradebook_config::CorsConfig;
use gradebook_observability::{logging_middleware, metrics_middleware};

use crate::docs::ApiDoc;
use crate::middleware::auth::require_auth;
use crate::modules::courses::router::init_courses_router;
use crate::modules::students::router::init_students_router;
use crate::modules::teachers::router::{init_teacher_auth_router, init_teachers_router};
use crate::state::AppState;

/// Applies the bearer-token gate to a route group when `protect` is set.
fn gated(router: Router<AppState>, state: &AppState, protect: bool) -> Router<AppState> {
    if protect {
        router.route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
    } else {
        router
    }
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    let teachers = init_teacher_auth_router().merge(gated(init_teachers_router(), &state, true));
    let students = gated(init_students_router(), &state, state.access.protect_students);
    let courses = gated(init_courses_router(), &state, state.access.protect_courses);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/teachers", teachers)
                .nest("/students", students)
                .nest("/courses", courses),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
