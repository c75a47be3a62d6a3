//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the vocabulary
//! of the ranking domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, LimitExceeded, ValidationError};
pub use ids::{AlternativeId, CriterionId, ProjectId};
pub use timestamp::Timestamp;
