//! TOPSIS Ranker HTTP server
//!
//! Run with: cargo run
//! Configure with `TOPSIS_RANKER__*` environment variables (see `config`).

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use topsis_ranker::adapters::http::{build_router, ProjectHandlers, TopsisHandlers};
use topsis_ranker::adapters::storage::InMemoryProjectRepository;
use topsis_ranker::application::CalculateTopsisHandler;
use topsis_ranker::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    info!("TOPSIS Ranker starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let repository = Arc::new(InMemoryProjectRepository::new());
    let topsis = TopsisHandlers::new(Arc::new(CalculateTopsisHandler::new(
        config.limits.clone(),
    )));
    let projects = ProjectHandlers::new(repository, config.limits.clone());
    let app = build_router(topsis, projects, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` overrides the configured filter. Production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
