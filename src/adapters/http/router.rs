//! Axum router - mounts every endpoint and the middleware stack.

use axum::{routing::get, Json, Router};
use http::HeaderValue;
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use super::project::{import_routes, project_routes, ProjectHandlers};
use super::topsis::{topsis_routes, TopsisHandlers};
use crate::config::ServerConfig;

/// Routes without middleware. Used directly by tests.
pub fn api_router(topsis: TopsisHandlers, projects: ProjectHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/topsis", topsis_routes(topsis))
        .nest("/api/projects", project_routes(projects.clone()))
        .nest("/api/import", import_routes(projects))
}

/// Full application router with tracing, CORS and request timeout.
pub fn build_router(
    topsis: TopsisHandlers,
    projects: ProjectHandlers,
    server: &ServerConfig,
) -> Router {
    api_router(topsis, projects)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness check
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Configured origins win. Without any, development is permissive and
/// production allows no cross-origin requests.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .origins()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    } else if server.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    }
}
