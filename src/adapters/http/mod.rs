//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter module (dto, handlers, routes); `router`
//! assembles them under `/api` and applies the shared middleware.

pub mod error_response;
pub mod project;
pub mod router;
pub mod topsis;

pub use error_response::ErrorResponse;
pub use project::ProjectHandlers;
pub use router::{api_router, build_router};
pub use topsis::TopsisHandlers;
