//! RemoveAlternativeHandler - Command handler for removing an alternative.

use std::sync::Arc;

use tracing::debug;

use super::edit_project;
use crate::domain::foundation::{AlternativeId, ProjectId};
use crate::domain::project::ProjectError;
use crate::ports::ProjectRepository;

/// Command to remove an alternative.
#[derive(Debug, Clone)]
pub struct RemoveAlternativeCommand {
    pub project_id: ProjectId,
    pub alternative_id: AlternativeId,
}

/// Handler for removing alternatives.
pub struct RemoveAlternativeHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl RemoveAlternativeHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RemoveAlternativeCommand) -> Result<(), ProjectError> {
        edit_project(self.repository.as_ref(), cmd.project_id, |project| {
            project.remove_alternative(&cmd.alternative_id)
        })
        .await?;

        debug!(
            project_id = %cmd.project_id,
            alternative_id = %cmd.alternative_id,
            "Removed alternative"
        );
        Ok(())
    }
}
