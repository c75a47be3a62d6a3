//! Ideal Point Extractor - Best and worst value per criterion.

use serde::{Deserialize, Serialize};

use super::CriterionType;

/// Positive (A⁺) and negative (A⁻) ideal points, one value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
}

/// Extracts ideal points from a weighted matrix.
pub struct IdealPointExtractor;

impl IdealPointExtractor {
    /// Computes A⁺ and A⁻ column by column.
    ///
    /// # Algorithm
    /// - Benefit: A⁺ = max, A⁻ = min
    /// - Cost: A⁺ = min, A⁻ = max
    ///
    /// The weighted matrix must have at least one row.
    pub fn extract(weighted: &[Vec<f64>], types: &[CriterionType]) -> IdealPoints {
        let (positive, negative) = types
            .iter()
            .enumerate()
            .map(|(j, criterion_type)| {
                let (min, max) = Self::column_extremes(weighted, j);
                match criterion_type {
                    CriterionType::Benefit => (max, min),
                    CriterionType::Cost => (min, max),
                }
            })
            .unzip();

        IdealPoints { positive, negative }
    }

    /// Returns `(min, max)` of column `j`.
    fn column_extremes(weighted: &[Vec<f64>], j: usize) -> (f64, f64) {
        weighted
            .iter()
            .map(|row| row[j])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benefit_ideal_is_max_and_anti_ideal_is_min() {
        let weighted = vec![vec![0.1], vec![0.4], vec![0.2]];
        let ideal = IdealPointExtractor::extract(&weighted, &[CriterionType::Benefit]);

        assert_eq!(ideal.positive, vec![0.4]);
        assert_eq!(ideal.negative, vec![0.1]);
    }

    #[test]
    fn cost_ideal_is_min_and_anti_ideal_is_max() {
        let weighted = vec![vec![0.1], vec![0.4], vec![0.2]];
        let ideal = IdealPointExtractor::extract(&weighted, &[CriterionType::Cost]);

        assert_eq!(ideal.positive, vec![0.1]);
        assert_eq!(ideal.negative, vec![0.4]);
    }

    #[test]
    fn mixed_types_are_handled_per_column() {
        let weighted = vec![vec![1.0, 5.0], vec![3.0, 2.0]];
        let ideal = IdealPointExtractor::extract(
            &weighted,
            &[CriterionType::Cost, CriterionType::Benefit],
        );

        assert_eq!(ideal.positive, vec![1.0, 5.0]);
        assert_eq!(ideal.negative, vec![3.0, 2.0]);
    }

    #[test]
    fn single_row_ideals_coincide() {
        let weighted = vec![vec![0.7, 0.3]];
        let ideal = IdealPointExtractor::extract(
            &weighted,
            &[CriterionType::Benefit, CriterionType::Cost],
        );

        assert_eq!(ideal.positive, ideal.negative);
    }
}
