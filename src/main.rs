use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

use gradebook::router::init_router;
use gradebook::state::init_app_state;
use gradebook_config::ServerConfig;
use gradebook_db::run_migrations;
use gradebook_observability::{init_metrics, init_tracing, metrics_app, shutdown_tracer};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await;

    if let Err(e) = run_migrations(&state.db).await {
        error!(error = %e, "Failed to run database migrations");
        std::process::exit(1);
    }

    if let Some(handle) = init_metrics() {
        let metrics_addr = server_config.metrics_addr();
        tokio::spawn(async move {
            match TcpListener::bind(&metrics_addr).await {
                Ok(listener) => {
                    info!("📊 Metrics available at http://{metrics_addr}/metrics");
                    if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                        error!(error = %e, "Metrics server stopped");
                    }
                }
                Err(e) => error!(error = %e, addr = %metrics_addr, "Failed to bind metrics server"),
            }
        });
    }

    let app = init_router(state);
    let addr = server_config.addr();

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %addr, "Failed to bind server");
            std::process::exit(1);
        }
    };

    info!("🚀 Server running on http://{addr}");
    info!("📚 Swagger UI available at http://{addr}/swagger-ui");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
    }

    shutdown_tracer().await;
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
