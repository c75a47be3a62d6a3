//! Distance Calculator - Euclidean distance to each ideal point.

use serde::{Deserialize, Serialize};

use super::magnitude::Magnitude;
use super::IdealPoints;

/// Distances of every alternative to the positive (D⁺) and negative (D⁻) ideals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distances {
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
}

/// Computes separation measures from the ideal points.
pub struct DistanceCalculator;

impl DistanceCalculator {
    /// Computes `D⁺[i] = ‖W[i] − A⁺‖₂` and `D⁻[i] = ‖W[i] − A⁻‖₂` for every row.
    pub fn compute(weighted: &[Vec<f64>], ideal: &IdealPoints) -> Distances {
        let (positive, negative) = weighted
            .iter()
            .map(|row| {
                (
                    Self::euclidean(row, &ideal.positive),
                    Self::euclidean(row, &ideal.negative),
                )
            })
            .unzip();

        Distances { positive, negative }
    }

    /// Euclidean distance between a row and a point of the same length.
    ///
    /// Differences are scaled by the largest one before squaring, so large
    /// weights do not overflow the sum.
    pub fn euclidean(row: &[f64], point: &[f64]) -> f64 {
        Magnitude::of(row.iter().zip(point).map(|(v, p)| v - p)).length()
    }
}
