use gradebook_auth::TokenIssuer;
use gradebook_config::{AccessConfig, CorsConfig, JwtConfig, PaginationConfig};
use gradebook_db::{PgPool, init_db_pool};

/// Shared, immutable per-process state. Cloned into every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub tokens: TokenIssuer,
    pub pagination: PaginationConfig,
    pub access: AccessConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        tokens: TokenIssuer::new(&JwtConfig::from_env()),
        pagination: PaginationConfig::from_env(),
        access: AccessConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
