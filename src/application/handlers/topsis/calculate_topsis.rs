//! CalculateTopsisHandler - Ranks a decision matrix supplied directly by the caller.
//!
//! Nothing is persisted. Criterion types arrive as text and are parsed here,
//! so an unknown type fails before any numeric work starts.

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LimitsConfig;
use crate::domain::foundation::{ErrorCode, LimitExceeded};
use crate::domain::topsis::{
    parse_criterion_types, Matrix, TopsisEngine, TopsisError, TopsisInput, TopsisResult,
};

/// Command carrying a raw decision problem.
#[derive(Debug, Clone)]
pub struct CalculateTopsisCommand {
    pub matrix: Matrix,
    pub weights: Vec<f64>,
    pub criterion_types: Vec<String>,
    pub alternative_names: Vec<String>,
    pub criterion_names: Vec<String>,
}

/// Why a direct calculation was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculateTopsisError {
    #[error(transparent)]
    Engine(#[from] TopsisError),

    #[error(transparent)]
    LimitExceeded(#[from] LimitExceeded),
}

impl CalculateTopsisError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CalculateTopsisError::Engine(err) => err.code(),
            CalculateTopsisError::LimitExceeded(_) => ErrorCode::LimitExceeded,
        }
    }
}

/// Handler for direct calculations.
pub struct CalculateTopsisHandler {
    limits: LimitsConfig,
}

impl CalculateTopsisHandler {
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    pub fn handle(&self, cmd: CalculateTopsisCommand) -> Result<TopsisResult, CalculateTopsisError> {
        let alternatives = cmd.matrix.len();
        let criteria = cmd.matrix.first().map_or(0, Vec::len);
        LimitExceeded::check("alternatives", self.limits.max_alternatives, alternatives)?;
        LimitExceeded::check("criteria", self.limits.max_criteria, criteria)?;

        let input = TopsisInput {
            criterion_types: parse_criterion_types(&cmd.criterion_types)?,
            matrix: cmd.matrix,
            weights: cmd.weights,
            alternative_names: cmd.alternative_names,
            criterion_names: cmd.criterion_names,
        };

        let result = TopsisEngine::run(&input).map_err(|err| {
            warn!(code = %err.code(), error = %err, "TOPSIS input rejected");
            err
        })?;

        debug!(alternatives, criteria, "Calculated TOPSIS ranking");
        Ok(result)
    }
}
