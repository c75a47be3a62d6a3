//! Weighting Stage - Column-wise scaling of the normalized matrix.

use super::Matrix;

/// Applies criterion weights to a normalized matrix.
pub struct WeightingStage;

impl WeightingStage {
    /// Produces `W[i][j] = R[i][j] * weight[j]`.
    ///
    /// Weights are used as given. They need not sum to 1; rankings stay
    /// valid, only absolute magnitudes change.
    pub fn apply(normalized: &[Vec<f64>], weights: &[f64]) -> Matrix {
        normalized
            .iter()
            .map(|row| row.iter().zip(weights).map(|(r, w)| r * w).collect())
            .collect()
    }
}
