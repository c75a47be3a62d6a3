//! Request size limits

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bounds on the size of ranking problems and imports
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum alternatives (matrix rows) per calculation
    pub max_alternatives: usize,

    /// Maximum criteria (matrix columns) per calculation
    pub max_criteria: usize,

    /// Maximum rows accepted by a tabular import
    pub max_import_rows: usize,

    /// Rows returned by a tabular preview
    pub preview_rows: usize,
}

impl LimitsConfig {
    /// Validate limits configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let limits = [
            ("max_alternatives", self.max_alternatives),
            ("max_criteria", self.max_criteria),
            ("max_import_rows", self.max_import_rows),
            ("preview_rows", self.preview_rows),
        ];
        match limits.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(ValidationError::ZeroLimit(*name)),
            None => Ok(()),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_alternatives: 1000,
            max_criteria: 100,
            max_import_rows: 10_000,
            preview_rows: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_defaults() {
        let limits = LimitsConfig::default();
        assert_eq!(limits.max_alternatives, 1000);
        assert_eq!(limits.max_criteria, 100);
        assert_eq!(limits.max_import_rows, 10_000);
        assert_eq!(limits.preview_rows, 10);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let limits = LimitsConfig {
            max_criteria: 0,
            ..Default::default()
        };
        assert_eq!(
            limits.validate(),
            Err(ValidationError::ZeroLimit("max_criteria"))
        );
    }
}
