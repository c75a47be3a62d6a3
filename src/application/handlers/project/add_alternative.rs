//! AddAlternativeHandler - Command handler for adding an alternative to a project.

use std::sync::Arc;

use tracing::debug;

use super::edit_project;
use crate::config::LimitsConfig;
use crate::domain::foundation::{LimitExceeded, ProjectId};
use crate::domain::project::{Alternative, CriterionValue, ProjectError};
use crate::ports::ProjectRepository;

/// Command to add an alternative with its per-criterion values.
#[derive(Debug, Clone)]
pub struct AddAlternativeCommand {
    pub project_id: ProjectId,
    pub name: String,
    pub values: Vec<CriterionValue>,
}

/// Handler for adding alternatives.
pub struct AddAlternativeHandler {
    repository: Arc<dyn ProjectRepository>,
    limits: LimitsConfig,
}

impl AddAlternativeHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>, limits: LimitsConfig) -> Self {
        Self { repository, limits }
    }

    pub async fn handle(&self, cmd: AddAlternativeCommand) -> Result<Alternative, ProjectError> {
        let max_alternatives = self.limits.max_alternatives;
        let (project, alternative_id) =
            edit_project(self.repository.as_ref(), cmd.project_id, |project| {
                LimitExceeded::check(
                    "alternatives",
                    max_alternatives,
                    project.alternatives().len() + 1,
                )?;
                project.add_alternative(cmd.name.clone(), cmd.values.clone())
            })
            .await?;

        debug!(project_id = %cmd.project_id, alternative_id = %alternative_id, "Added alternative");

        project
            .alternative(&alternative_id)
            .cloned()
            .ok_or(ProjectError::AlternativeNotFound(alternative_id))
    }
}
