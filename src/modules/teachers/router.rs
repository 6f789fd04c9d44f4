use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::teachers::controller::{
    check_teacher_auth, create_teacher, delete_teacher, get_teacher, get_teachers,
    login_teacher, register_teacher, update_teacher,
};
use crate::state::AppState;

/// Registration and login. Never gated.
pub fn init_teacher_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_teacher))
        .route("/login", post(login_teacher))
}

/// Teacher CRUD and the auth check. Always gated by the router.
pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_teacher).get(get_teachers))
        .route("/checkTeacherAuth", get(check_teacher_auth))
        .route(
            "/{id}",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
}
