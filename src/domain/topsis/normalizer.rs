//! Vector Normalizer - Euclidean (L2) column normalization.

use super::magnitude::Magnitude;
use super::{DecisionMatrix, Matrix};

/// Scales every criterion column to unit L2 norm.
pub struct VectorNormalizer;

impl VectorNormalizer {
    /// Computes the L2 norm of each column.
    ///
    /// A column whose true norm exceeds `f64::MAX` reports infinity here;
    /// `normalize` still scales it correctly.
    pub fn column_norms(matrix: &DecisionMatrix) -> Vec<f64> {
        Self::column_magnitudes(matrix)
            .iter()
            .map(Magnitude::length)
            .collect()
    }

    /// Produces `R[i][j] = M[i][j] / sqrt(Σᵢ M[i][j]²)`.
    ///
    /// # Edge Cases
    /// - All-zero column: the norm is zero and the whole column yields 0.0
    ///   instead of NaN. This is a defined result, not an error.
    /// - Very large values: columns are scaled by their largest magnitude
    ///   before squaring, so no finite input overflows to a zero column.
    pub fn normalize(matrix: &DecisionMatrix) -> Matrix {
        let magnitudes = Self::column_magnitudes(matrix);

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&magnitudes)
                    .map(|(&value, magnitude)| {
                        if magnitude.is_zero() {
                            0.0
                        } else {
                            magnitude.divide(value)
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn column_magnitudes(matrix: &DecisionMatrix) -> Vec<Magnitude> {
        (0..matrix.criterion_count())
            .map(|j| Magnitude::of(matrix.column(j)))
            .collect()
    }
}
