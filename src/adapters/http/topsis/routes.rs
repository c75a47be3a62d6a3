//! HTTP routes for direct TOPSIS calculations.

use axum::{routing::post, Router};

use super::handlers::{calculate_topsis, TopsisHandlers};

/// Creates the calculation router, to be nested under `/api/topsis`.
pub fn topsis_routes(handlers: TopsisHandlers) -> Router {
    Router::new()
        .route("/calculate", post(calculate_topsis))
        .with_state(handlers)
}
