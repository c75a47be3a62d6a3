//! TOPSIS Engine - Runs the full ranking pipeline.

use serde::{Deserialize, Serialize};

use super::{
    CriterionType, DecisionMatrix, DistanceCalculator, IdealPointExtractor, Matrix,
    PreferenceScorer, RankedAlternative, RankingAssembler, ShapeError, TopsisError,
    VectorKind, VectorNormalizer, WeightingStage,
};

/// Unvalidated engine input, as assembled by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisInput {
    pub matrix: Matrix,
    pub weights: Vec<f64>,
    pub criterion_types: Vec<CriterionType>,
    pub alternative_names: Vec<String>,
    pub criterion_names: Vec<String>,
}

/// Every artifact of a TOPSIS calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisResult {
    pub alternative_names: Vec<String>,
    pub criterion_names: Vec<String>,
    pub normalized_matrix: Matrix,
    pub weighted_matrix: Matrix,
    /// A⁺, one value per criterion.
    pub positive_ideal: Vec<f64>,
    /// A⁻, one value per criterion.
    pub negative_ideal: Vec<f64>,
    /// D⁺, one value per alternative.
    pub positive_distances: Vec<f64>,
    /// D⁻, one value per alternative.
    pub negative_distances: Vec<f64>,
    /// Closeness coefficient per alternative, in input order.
    pub preference_scores: Vec<f64>,
    pub ranking: Vec<RankedAlternative>,
}

impl TopsisResult {
    /// The top-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.ranking.first()
    }
}

/// Stateless TOPSIS calculator.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Ranks the alternatives of `matrix`.
    ///
    /// # Errors
    ///
    /// - `ShapeError::LengthMismatch` if `weights`, `types`, `alternative_names`
    ///   or `criterion_names` do not match the matrix dimensions
    /// - `TopsisError::InvalidWeight` if a weight is negative or not finite
    ///
    /// Zero-norm columns and zero total distance are not errors; see
    /// `VectorNormalizer::normalize` and `PreferenceScorer::closeness`.
    pub fn compute(
        matrix: &DecisionMatrix,
        weights: &[f64],
        types: &[CriterionType],
        alternative_names: &[String],
        criterion_names: &[String],
    ) -> Result<TopsisResult, TopsisError> {
        let m = matrix.alternative_count();
        let n = matrix.criterion_count();

        check_length(VectorKind::Weights, n, weights.len())?;
        check_length(VectorKind::CriterionTypes, n, types.len())?;
        check_length(VectorKind::AlternativeNames, m, alternative_names.len())?;
        check_length(VectorKind::CriterionNames, n, criterion_names.len())?;

        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(TopsisError::InvalidWeight { index, weight });
        }

        let normalized_matrix = VectorNormalizer::normalize(matrix);
        let weighted_matrix = WeightingStage::apply(&normalized_matrix, weights);
        let ideal = IdealPointExtractor::extract(&weighted_matrix, types);
        let distances = DistanceCalculator::compute(&weighted_matrix, &ideal);
        let preference_scores = PreferenceScorer::score(&distances);
        let ranking = RankingAssembler::assemble(&preference_scores, alternative_names);

        Ok(TopsisResult {
            alternative_names: alternative_names.to_vec(),
            criterion_names: criterion_names.to_vec(),
            normalized_matrix,
            weighted_matrix,
            positive_ideal: ideal.positive,
            negative_ideal: ideal.negative,
            positive_distances: distances.positive,
            negative_distances: distances.negative,
            preference_scores,
            ranking,
        })
    }

    /// Validates the raw matrix, then runs `compute`.
    pub fn run(input: &TopsisInput) -> Result<TopsisResult, TopsisError> {
        let matrix = DecisionMatrix::new(input.matrix.clone())?;
        Self::compute(
            &matrix,
            &input.weights,
            &input.criterion_types,
            &input.alternative_names,
            &input.criterion_names,
        )
    }
}

fn check_length(vector: VectorKind, expected: usize, actual: usize) -> Result<(), ShapeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ShapeError::LengthMismatch {
            vector,
            expected,
            actual,
        })
    }
}
