//! TOPSIS Module - Multi-criteria ranking by closeness to an ideal solution.
//!
//! Given an m×n decision matrix (m alternatives scored on n criteria), a weight
//! per criterion and a benefit/cost type per criterion, the engine ranks the
//! alternatives by their relative closeness to the positive ideal point.
//!
//! # Pipeline
//!
//! 1. `VectorNormalizer` - Euclidean (L2) column normalization
//! 2. `WeightingStage` - Column-wise scaling by the weight vector
//! 3. `IdealPointExtractor` - Positive and negative ideal points per criterion type
//! 4. `DistanceCalculator` - Euclidean distance of every alternative to both ideals
//! 5. `PreferenceScorer` - Closeness coefficient `D⁻ / (D⁺ + D⁻)`
//!
//! `RankingAssembler` then orders the alternatives, and `TopsisEngine` runs the
//! whole pipeline, returning every intermediate artifact in a `TopsisResult`.
//!
//! # Design Philosophy
//!
//! Every stage is a pure function of the previous stage's output. Nothing is
//! mutated after creation, nothing is logged and no I/O is performed.

mod criterion_type;
mod decision_matrix;
mod distance;
mod engine;
mod errors;
mod ideal_point;
mod magnitude;
mod normalizer;
mod preference;
mod ranking;
mod weighting;

pub use criterion_type::{parse_criterion_types, CriterionType};
pub use decision_matrix::{DecisionMatrix, Matrix};
pub use distance::{DistanceCalculator, Distances};
pub use engine::{TopsisEngine, TopsisInput, TopsisResult};
pub use errors::{ShapeError, TopsisError, VectorKind};
pub use ideal_point::{IdealPointExtractor, IdealPoints};
pub use normalizer::VectorNormalizer;
pub use preference::{PreferenceScorer, DEGENERATE_SCORE};
pub use ranking::{RankedAlternative, RankingAssembler};
pub use weighting::WeightingStage;
