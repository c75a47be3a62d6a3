//! Overflow-safe Euclidean length.

/// Euclidean length of a vector stored as `scale * relative`.
///
/// `scale` is the largest absolute component, so every squared term is at
/// most 1 and the sum cannot overflow even for components near `f64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Magnitude {
    pub scale: f64,
    pub relative: f64,
}

impl Magnitude {
    /// Measures `values`. Squares are summed in iteration order.
    pub fn of<I>(values: I) -> Self
    where
        I: Iterator<Item = f64> + Clone,
    {
        let scale = values.clone().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        if scale == 0.0 {
            return Self {
                scale,
                relative: 0.0,
            };
        }
        if !scale.is_finite() {
            return Self {
                scale,
                relative: 1.0,
            };
        }

        let relative = values.map(|v| (v / scale).powi(2)).sum::<f64>().sqrt();
        Self { scale, relative }
    }

    /// The length itself. Infinite only if the true length exceeds `f64::MAX`.
    pub fn length(&self) -> f64 {
        self.scale * self.relative
    }

    pub fn is_zero(&self) -> bool {
        self.scale == 0.0
    }

    /// `value / length`, without ever forming the length.
    pub fn divide(&self, value: f64) -> f64 {
        value / self.scale / self.relative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_plain_euclidean_length() {
        let m = Magnitude::of([3.0, -4.0].into_iter());
        assert_eq!(m.length(), 5.0);
    }

    #[test]
    fn zero_vector_has_zero_length() {
        let m = Magnitude::of([0.0, 0.0].into_iter());
        assert!(m.is_zero());
        assert_eq!(m.length(), 0.0);
    }

    #[test]
    fn huge_components_do_not_overflow() {
        let m = Magnitude::of([1e200, 2e200].into_iter());
        let expected = 5f64.sqrt() * 1e200;
        assert!(m.length().is_finite());
        assert!((m.length() / expected - 1.0).abs() < 1e-12);
        assert!((m.divide(2e200) - 2.0 / 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn length_beyond_f64_range_divides_finitely() {
        let m = Magnitude::of([f64::MAX, f64::MAX].into_iter());
        assert!(m.length().is_infinite());
        assert!((m.divide(f64::MAX) - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }
}
