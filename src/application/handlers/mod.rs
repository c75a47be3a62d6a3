//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod project;
pub mod topsis;
