//! CalculateProjectHandler - Query handler that ranks a stored project.

use std::sync::Arc;

use tracing::{debug, warn};

use super::load_project;
use crate::config::LimitsConfig;
use crate::domain::foundation::{LimitExceeded, ProjectId};
use crate::domain::project::ProjectError;
use crate::domain::topsis::TopsisResult;
use crate::ports::ProjectRepository;

/// Query to run TOPSIS over a project's current criteria and alternatives.
#[derive(Debug, Clone)]
pub struct CalculateProjectQuery {
    pub project_id: ProjectId,
}

/// Handler for project calculations. Results are not stored.
pub struct CalculateProjectHandler {
    repository: Arc<dyn ProjectRepository>,
    limits: LimitsConfig,
}

impl CalculateProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>, limits: LimitsConfig) -> Self {
        Self { repository, limits }
    }

    pub async fn handle(&self, query: CalculateProjectQuery) -> Result<TopsisResult, ProjectError> {
        let project = load_project(self.repository.as_ref(), query.project_id).await?;

        LimitExceeded::check(
            "alternatives",
            self.limits.max_alternatives,
            project.alternatives().len(),
        )?;
        LimitExceeded::check("criteria", self.limits.max_criteria, project.criteria().len())?;

        let result = project.calculate().map_err(|err| {
            warn!(project_id = %query.project_id, error = %err, "Project calculation rejected");
            err
        })?;

        debug!(
            project_id = %query.project_id,
            alternatives = result.alternative_names.len(),
            criteria = result.criterion_names.len(),
            "Calculated project ranking"
        );
        Ok(result)
    }
}
