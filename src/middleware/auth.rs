use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use gradebook_auth::{Claims, TokenError};
use gradebook_core::AppError;

use crate::state::AppState;

/// The verified claims of the bearer token on the current request.
///
/// Reuses the claims stored by [`require_auth`] when the route group is gated;
/// otherwise reads and verifies the `Authorization: Bearer` header itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn teacher_id(&self) -> i64 {
        self.0.id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::unauthorized("Missing or malformed authorization header"))?;

        let claims = state.tokens.verify(bearer.token()).map_err(|e| match e {
            TokenError::Expired => AppError::unauthorized("Token has expired"),
            _ => AppError::unauthorized("Invalid token"),
        })?;

        Ok(AuthUser(claims))
    }
}

/// Route-group gate: rejects with 401 unless the request carries a valid
/// bearer token, then exposes the claims to handlers as [`AuthUser`].
pub async fn require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let user = AuthUser::from_request_parts(&mut parts, &state).await?;
    tracing::debug!(teacher_id = user.teacher_id(), "Authenticated request");
    parts.extensions.insert(user);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
