//! Gradebook Observability
//!
//! - Tracing subscriber with console, rolling file and OpenTelemetry layers
//! - HTTP request logging middleware
//! - Prometheus metrics and business counters
//!
//! Everything beyond console logging sits behind the `observability` feature
//! (default on). At runtime `OBSERVABILITY_ENABLED=false` turns it off again,
//! leaving compact console logging. With the feature disabled, no-op stubs
//! with the same names are exported so callers compile unchanged.
//!
//! ```no_run
//! use gradebook_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
pub mod events;

pub use events::LoginFailure;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

#[cfg(feature = "observability")]
use std::sync::OnceLock;

#[cfg(feature = "observability")]
static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Reads `OBSERVABILITY_ENABLED` once; anything but `false`/`0` enables.
#[cfg(feature = "observability")]
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| basic_logging::env_flag_enabled(&v))
            .unwrap_or(true)
    })
}

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_login_failure,
    track_login_success, track_teacher_registered, track_token_issued,
};

#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    use crate::events::LoginFailure;

    /// Placeholder for the Prometheus handle.
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_tracing() {
        crate::basic_logging::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_app(_handle: PrometheusHandle) -> Router {
        Router::new()
    }

    pub fn track_teacher_registered() {}
    pub fn track_login_success() {}
    pub fn track_login_failure(_reason: LoginFailure) {}
    pub fn track_token_issued() {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
