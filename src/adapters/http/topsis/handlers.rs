//! HTTP handlers for direct TOPSIS calculations.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error_response::error_response;
use crate::application::{CalculateTopsisCommand, CalculateTopsisError, CalculateTopsisHandler};

use super::dto::CalculateTopsisRequest;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TopsisHandlers {
    calculate_handler: Arc<CalculateTopsisHandler>,
}

impl TopsisHandlers {
    pub fn new(calculate_handler: Arc<CalculateTopsisHandler>) -> Self {
        Self { calculate_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/topsis/calculate - Rank a caller-supplied decision matrix
pub async fn calculate_topsis(
    State(handlers): State<TopsisHandlers>,
    Json(req): Json<CalculateTopsisRequest>,
) -> Response {
    let cmd = CalculateTopsisCommand::from(req);

    match handlers.calculate_handler.handle(cmd) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => handle_topsis_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_topsis_error(error: CalculateTopsisError) -> Response {
    error_response(error.code(), error.to_string())
}
