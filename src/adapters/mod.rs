//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `http` - Axum REST API
//! - `storage` - Project repository implementations

pub mod http;
pub mod storage;

pub use storage::InMemoryProjectRepository;
