//! Decision Matrix - Validated m×n table of alternative scores.

use serde::Serialize;

use super::{ShapeError, TopsisError};

/// Dense row-major matrix, one row per alternative.
pub type Matrix = Vec<Vec<f64>>;

/// A rectangular, non-empty matrix of finite values.
///
/// Rows are alternatives, columns are criteria. Construction is the only
/// place the shape is checked; every later stage relies on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    rows: Matrix,
    criteria: usize,
}

impl DecisionMatrix {
    /// Validates and wraps the given rows.
    ///
    /// # Errors
    ///
    /// - `ShapeError::EmptyMatrix` if there are no rows or the first row is empty
    /// - `ShapeError::RaggedRow` if any row length differs from the first
    /// - `TopsisError::NonFiniteValue` if any cell is NaN or infinite
    pub fn new(rows: Matrix) -> Result<Self, TopsisError> {
        let criteria = rows.first().map(Vec::len).unwrap_or(0);

        if rows.is_empty() || criteria == 0 {
            return Err(ShapeError::EmptyMatrix {
                alternatives: rows.len(),
                criteria,
            }
            .into());
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != criteria {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: criteria,
                    actual: values.len(),
                }
                .into());
            }
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(TopsisError::NonFiniteValue { row, column });
            }
        }

        Ok(Self { rows, criteria })
    }

    /// Number of alternatives (m).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria (n).
    pub fn criterion_count(&self) -> usize {
        self.criteria
    }

    /// All rows, in input order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Values of column `j`, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.rows.iter().map(move |row| row[j])
    }
}
