//! RemoveCriterionHandler - Command handler for removing a criterion.

use std::sync::Arc;

use tracing::debug;

use super::edit_project;
use crate::domain::foundation::{CriterionId, ProjectId};
use crate::domain::project::ProjectError;
use crate::ports::ProjectRepository;

/// Command to remove a criterion and its recorded values.
#[derive(Debug, Clone)]
pub struct RemoveCriterionCommand {
    pub project_id: ProjectId,
    pub criterion_id: CriterionId,
}

/// Handler for removing criteria.
pub struct RemoveCriterionHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl RemoveCriterionHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RemoveCriterionCommand) -> Result<(), ProjectError> {
        edit_project(self.repository.as_ref(), cmd.project_id, |project| {
            project.remove_criterion(&cmd.criterion_id)
        })
        .await?;

        debug!(project_id = %cmd.project_id, criterion_id = %cmd.criterion_id, "Removed criterion");
        Ok(())
    }
}
