//! Stateless TOPSIS handlers.

mod calculate_topsis;

pub use calculate_topsis::{CalculateTopsisCommand, CalculateTopsisError, CalculateTopsisHandler};
