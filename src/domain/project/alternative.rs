//! Alternative entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, CriterionId, ValidationError};

/// The value an alternative scores on one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionValue {
    pub criterion_id: CriterionId,
    pub value: f64,
}

impl CriterionValue {
    pub fn new(criterion_id: CriterionId, value: f64) -> Self {
        Self {
            criterion_id,
            value,
        }
    }
}

/// A candidate option being ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    id: AlternativeId,
    name: String,
    values: Vec<CriterionValue>,
}

impl Alternative {
    /// Creates an alternative with a fresh identifier.
    ///
    /// Values need not cover every criterion.
    pub fn new(
        name: impl Into<String>,
        values: Vec<CriterionValue>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if values.iter().any(|v| !v.value.is_finite()) {
            return Err(ValidationError::not_finite("values"));
        }

        Ok(Self {
            id: AlternativeId::new(),
            name,
            values,
        })
    }

    pub fn id(&self) -> AlternativeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[CriterionValue] {
        &self.values
    }

    /// The value recorded for a criterion. The first entry wins on duplicates.
    pub fn value_for(&self, criterion_id: &CriterionId) -> Option<f64> {
        self.values
            .iter()
            .find(|v| &v.criterion_id == criterion_id)
            .map(|v| v.value)
    }

    /// Drops every value recorded for a criterion.
    pub(crate) fn remove_values_for(&mut self, criterion_id: &CriterionId) {
        self.values.retain(|v| &v.criterion_id != criterion_id);
    }
}
