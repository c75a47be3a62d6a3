//! Project-specific error types.

use thiserror::Error;

use super::ImportError;
use crate::domain::foundation::{
    AlternativeId, CriterionId, DomainError, ErrorCode, LimitExceeded, ProjectId,
    ValidationError,
};
use crate::domain::topsis::TopsisError;

/// Project-specific errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Criterion not found: {0}")]
    CriterionNotFound(CriterionId),

    #[error("Alternative not found: {0}")]
    AlternativeNotFound(AlternativeId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Project must have criteria and alternatives")]
    Incomplete,

    #[error(transparent)]
    LimitExceeded(#[from] LimitExceeded),

    #[error(transparent)]
    Calculation(#[from] TopsisError),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Concurrent modification: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Infrastructure(String),
}

impl ProjectError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProjectError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectError::NotFound(_) => ErrorCode::ProjectNotFound,
            ProjectError::CriterionNotFound(_) => ErrorCode::CriterionNotFound,
            ProjectError::AlternativeNotFound(_) => ErrorCode::AlternativeNotFound,
            ProjectError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProjectError::Incomplete => ErrorCode::ProjectIncomplete,
            ProjectError::LimitExceeded(_) => ErrorCode::LimitExceeded,
            ProjectError::Calculation(err) => err.code(),
            ProjectError::Import(_) => ErrorCode::ValidationFailed,
            ProjectError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            ProjectError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for ProjectError {
    fn from(err: ValidationError) -> Self {
        ProjectError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ProjectError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ConcurrencyConflict => ProjectError::Conflict(err.message),
            _ => ProjectError::Infrastructure(err.to_string()),
        }
    }
}
