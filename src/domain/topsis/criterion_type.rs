//! Benefit/cost orientation of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TopsisError;

/// Whether higher or lower values of a criterion are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher is better.
    Benefit,
    /// Lower is better.
    Cost,
}

impl CriterionType {
    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "benefit",
            CriterionType::Cost => "cost",
        }
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CriterionType {
    type Err = String;

    /// Accepts `benefit` or `cost`, case-insensitively and ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(CriterionType::Benefit),
            "cost" => Ok(CriterionType::Cost),
            _ => Err(s.to_string()),
        }
    }
}

/// Parses a vector of textual criterion types.
///
/// The first unrecognized entry fails the whole vector with
/// `TopsisError::InvalidCriterionType`, carrying its position.
pub fn parse_criterion_types<S: AsRef<str>>(
    values: &[S],
) -> Result<Vec<CriterionType>, TopsisError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .as_ref()
                .parse()
                .map_err(|value| TopsisError::InvalidCriterionType { index, value })
        })
        .collect()
}
