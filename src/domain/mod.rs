//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `topsis` - Pure TOPSIS ranking engine
//! - `project` - Decision projects that assemble engine input

pub mod foundation;
pub mod project;
pub mod topsis;
