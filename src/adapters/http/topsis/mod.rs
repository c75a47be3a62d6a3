//! HTTP adapter for direct TOPSIS calculations.

mod dto;
mod handlers;
mod routes;

pub use dto::CalculateTopsisRequest;
pub use handlers::TopsisHandlers;
pub use routes::topsis_routes;
