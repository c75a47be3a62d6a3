//! AddCriterionHandler - Command handler for adding a criterion to a project.

use std::sync::Arc;

use tracing::{debug, warn};

use super::edit_project;
use crate::config::LimitsConfig;
use crate::domain::foundation::{LimitExceeded, ProjectId};
use crate::domain::project::{Criterion, ProjectError};
use crate::domain::topsis::CriterionType;
use crate::ports::ProjectRepository;

/// Command to add a criterion.
///
/// `criterion_type` is textual and must be `benefit` or `cost`.
#[derive(Debug, Clone)]
pub struct AddCriterionCommand {
    pub project_id: ProjectId,
    pub name: String,
    pub criterion_type: String,
    pub weight: f64,
}

/// Handler for adding criteria.
pub struct AddCriterionHandler {
    repository: Arc<dyn ProjectRepository>,
    limits: LimitsConfig,
}

impl AddCriterionHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>, limits: LimitsConfig) -> Self {
        Self { repository, limits }
    }

    pub async fn handle(&self, cmd: AddCriterionCommand) -> Result<Criterion, ProjectError> {
        let criterion_type: CriterionType = cmd.criterion_type.parse().map_err(|value| {
            warn!(project_id = %cmd.project_id, criterion_type = %value, "Rejected criterion type");
            ProjectError::validation(
                "criterion_type",
                format!("'{}' must be 'benefit' or 'cost'", value),
            )
        })?;

        let max_criteria = self.limits.max_criteria;
        let (project, criterion_id) =
            edit_project(self.repository.as_ref(), cmd.project_id, |project| {
                LimitExceeded::check("criteria", max_criteria, project.criteria().len() + 1)?;
                project.add_criterion(cmd.name.clone(), criterion_type, cmd.weight)
            })
            .await?;

        debug!(project_id = %cmd.project_id, criterion_id = %criterion_id, "Added criterion");

        project
            .criterion(&criterion_id)
            .cloned()
            .ok_or(ProjectError::CriterionNotFound(criterion_id))
    }
}
