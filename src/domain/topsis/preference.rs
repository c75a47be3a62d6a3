//! Preference Scorer - Relative closeness to the positive ideal.

use super::Distances;

/// Score assigned when an alternative coincides with both ideal points.
///
/// `D⁺ + D⁻ = 0` only happens when every alternative is identical on every
/// criterion, so no alternative is preferable to any other.
pub const DEGENERATE_SCORE: f64 = 0.0;

/// Computes closeness coefficients from separation measures.
pub struct PreferenceScorer;

impl PreferenceScorer {
    /// Scores every alternative with `V[i] = D⁻[i] / (D⁺[i] + D⁻[i])`.
    pub fn score(distances: &Distances) -> Vec<f64> {
        distances
            .positive
            .iter()
            .zip(&distances.negative)
            .map(|(&d_plus, &d_minus)| Self::closeness(d_plus, d_minus))
            .collect()
    }

    /// Closeness coefficient of a single alternative, in `[0, 1]`.
    ///
    /// # Edge Cases
    /// - `d_plus + d_minus == 0`: returns `DEGENERATE_SCORE` instead of NaN
    /// - `d_minus` infinite while `d_plus` is finite: 1.0
    /// - Both infinite: `DEGENERATE_SCORE`. The result is never NaN
    pub fn closeness(d_plus: f64, d_minus: f64) -> f64 {
        if d_minus.is_infinite() && d_plus.is_finite() {
            return 1.0;
        }
        let score = d_minus / (d_plus + d_minus);
        if score.is_nan() {
            DEGENERATE_SCORE
        } else {
            score.clamp(0.0, 1.0)
        }
    }
}
