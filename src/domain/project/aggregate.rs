//! Project aggregate - Owns criteria and alternatives of one decision.

use serde::{Deserialize, Serialize};

use super::{Alternative, Criterion, CriterionValue, ProjectError};
use crate::domain::foundation::{AlternativeId, CriterionId, ProjectId, Timestamp, ValidationError};
use crate::domain::topsis::{CriterionType, TopsisEngine, TopsisInput, TopsisResult};

/// Value used for an alternative that has no value recorded for a criterion.
///
/// Missing data is treated as zero, the worst case for benefit criteria and
/// the best case for cost criteria.
pub const MISSING_VALUE_DEFAULT: f64 = 0.0;

/// A named decision problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
    created_at: Timestamp,
    last_modified: Timestamp,
    #[serde(default)]
    version: u64,
}

impl Project {
    /// Creates an empty project.
    pub fn new(name: impl Into<String>) -> Result<Self, ProjectError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }

        let now = Timestamp::now();
        Ok(Self {
            id: ProjectId::new(),
            name,
            criteria: Vec::new(),
            alternatives: Vec::new(),
            created_at: now,
            last_modified: now,
            version: 0,
        })
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Criteria in insertion order; this is the column order of the matrix.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Alternatives in insertion order; this is the row order of the matrix.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_modified(&self) -> Timestamp {
        self.last_modified
    }

    /// Number of times this project has been written back to storage.
    ///
    /// Repositories compare it on update for optimistic locking.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Advances the stored version. Called by repositories on a successful update.
    pub fn increment_version(&mut self) {
        self.version += 1;
    }

    pub fn criterion(&self, id: &CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| &c.id() == id)
    }

    pub fn alternative(&self, id: &AlternativeId) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| &a.id() == id)
    }

    /// Adds a criterion and returns its identifier.
    pub fn add_criterion(
        &mut self,
        name: impl Into<String>,
        criterion_type: CriterionType,
        weight: f64,
    ) -> Result<CriterionId, ProjectError> {
        let criterion = Criterion::new(name, criterion_type, weight)?;
        let id = criterion.id();
        self.criteria.push(criterion);
        self.touch();
        Ok(id)
    }

    /// Removes a criterion together with every value recorded for it.
    pub fn remove_criterion(&mut self, id: &CriterionId) -> Result<Criterion, ProjectError> {
        let position = self
            .criteria
            .iter()
            .position(|c| &c.id() == id)
            .ok_or(ProjectError::CriterionNotFound(*id))?;

        let removed = self.criteria.remove(position);
        for alternative in &mut self.alternatives {
            alternative.remove_values_for(id);
        }
        self.touch();
        Ok(removed)
    }

    /// Adds an alternative and returns its identifier.
    ///
    /// # Errors
    ///
    /// - `CriterionNotFound` if a value references a criterion not in this project
    /// - `ValidationFailed` for a blank name or non-finite value
    pub fn add_alternative(
        &mut self,
        name: impl Into<String>,
        values: Vec<CriterionValue>,
    ) -> Result<AlternativeId, ProjectError> {
        if let Some(unknown) = values.iter().find(|v| self.criterion(&v.criterion_id).is_none()) {
            return Err(ProjectError::CriterionNotFound(unknown.criterion_id));
        }

        let alternative = Alternative::new(name, values)?;
        let id = alternative.id();
        self.alternatives.push(alternative);
        self.touch();
        Ok(id)
    }

    pub fn remove_alternative(&mut self, id: &AlternativeId) -> Result<Alternative, ProjectError> {
        let position = self
            .alternatives
            .iter()
            .position(|a| &a.id() == id)
            .ok_or(ProjectError::AlternativeNotFound(*id))?;

        let removed = self.alternatives.remove(position);
        self.touch();
        Ok(removed)
    }

    /// Assembles engine input: one row per alternative, one column per criterion.
    ///
    /// Absent pairs are filled with `MISSING_VALUE_DEFAULT`.
    pub fn decision_input(&self) -> Result<TopsisInput, ProjectError> {
        if self.criteria.is_empty() || self.alternatives.is_empty() {
            return Err(ProjectError::Incomplete);
        }

        let matrix = self
            .alternatives
            .iter()
            .map(|alternative| {
                self.criteria
                    .iter()
                    .map(|criterion| {
                        alternative
                            .value_for(&criterion.id())
                            .unwrap_or(MISSING_VALUE_DEFAULT)
                    })
                    .collect()
            })
            .collect();

        Ok(TopsisInput {
            matrix,
            weights: self.criteria.iter().map(Criterion::weight).collect(),
            criterion_types: self.criteria.iter().map(Criterion::criterion_type).collect(),
            alternative_names: self.alternatives.iter().map(|a| a.name().to_string()).collect(),
            criterion_names: self.criteria.iter().map(|c| c.name().to_string()).collect(),
        })
    }

    /// Runs the TOPSIS engine on this project.
    pub fn calculate(&self) -> Result<TopsisResult, ProjectError> {
        let input = self.decision_input()?;
        Ok(TopsisEngine::run(&input)?)
    }

    fn touch(&mut self) {
        self.last_modified = Timestamp::now();
    }
}
