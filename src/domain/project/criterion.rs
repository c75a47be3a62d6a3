//! Criterion entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, ValidationError};
use crate::domain::topsis::CriterionType;

/// A weighted evaluation dimension of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    id: CriterionId,
    name: String,
    criterion_type: CriterionType,
    weight: f64,
}

impl Criterion {
    /// Creates a criterion with a fresh identifier.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the trimmed name is empty
    /// - `NotFinite` / `Negative` if the weight is not a finite, non-negative number
    pub fn new(
        name: impl Into<String>,
        criterion_type: CriterionType,
        weight: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !weight.is_finite() {
            return Err(ValidationError::not_finite("weight"));
        }
        if weight < 0.0 {
            return Err(ValidationError::negative("weight", weight));
        }

        Ok(Self {
            id: CriterionId::new(),
            name,
            criterion_type,
            weight,
        })
    }

    pub fn id(&self) -> CriterionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn criterion_type(&self) -> CriterionType {
        self.criterion_type
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}
