//! Errors raised by the TOPSIS engine.
//!
//! Only malformed input is an error. The two degenerate numeric cases (a
//! zero-norm column, an alternative equal to both ideals) have defined
//! zero-substitution results and never surface here.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// The input vector a length check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Weights,
    CriterionTypes,
    AlternativeNames,
    CriterionNames,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VectorKind::Weights => "weight vector",
            VectorKind::CriterionTypes => "criterion type vector",
            VectorKind::AlternativeNames => "alternative names",
            VectorKind::CriterionNames => "criterion names",
        };
        write!(f, "{}", s)
    }
}

/// The input does not have the shape of an m×n decision problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Decision matrix is empty ({alternatives} alternatives, {criteria} criteria)")]
    EmptyMatrix { alternatives: usize, criteria: usize },

    #[error("Row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("The {vector} has {actual} entries, expected {expected}")]
    LengthMismatch {
        vector: VectorKind,
        expected: usize,
        actual: usize,
    },
}

/// Errors returned by `TopsisEngine`. No partial result accompanies them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Criterion type '{value}' at position {index} must be 'benefit' or 'cost'")]
    InvalidCriterionType { index: usize, value: String },

    #[error("Value at row {row}, column {column} is not a finite number")]
    NonFiniteValue { row: usize, column: usize },

    #[error("Weight at position {index} must be a finite, non-negative number, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },
}

impl TopsisError {
    /// Maps the error onto the shared error code vocabulary.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::Shape(_) => ErrorCode::InvalidShape,
            TopsisError::InvalidCriterionType { .. } => ErrorCode::InvalidCriterionType,
            TopsisError::NonFiniteValue { .. } | TopsisError::InvalidWeight { .. } => {
                ErrorCode::InvalidValue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_names_the_vector() {
        let err = TopsisError::from(ShapeError::LengthMismatch {
            vector: VectorKind::Weights,
            expected: 4,
            actual: 5,
        });
        assert_eq!(err.to_string(), "The weight vector has 5 entries, expected 4");
        assert_eq!(err.code(), ErrorCode::InvalidShape);
    }

    #[test]
    fn invalid_criterion_type_maps_to_its_own_code() {
        let err = TopsisError::InvalidCriterionType {
            index: 2,
            value: "neutral".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidCriterionType);
        assert!(err.to_string().contains("'neutral'"));
    }

    #[test]
    fn invalid_weight_maps_to_invalid_value() {
        let err = TopsisError::InvalidWeight {
            index: 0,
            weight: -1.0,
        };
        assert_eq!(err.code(), ErrorCode::InvalidValue);
    }
}
