//! DeleteProjectHandler - Command handler for deleting projects.

use std::sync::Arc;

use tracing::debug;

use super::load_project;
use crate::domain::foundation::ProjectId;
use crate::domain::project::ProjectError;
use crate::ports::ProjectRepository;

/// Command to delete a project with all of its criteria and alternatives.
#[derive(Debug, Clone)]
pub struct DeleteProjectCommand {
    pub project_id: ProjectId,
}

/// Handler for deleting projects.
pub struct DeleteProjectHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl DeleteProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteProjectCommand) -> Result<(), ProjectError> {
        load_project(self.repository.as_ref(), cmd.project_id).await?;
        self.repository.delete(&cmd.project_id).await?;

        debug!(project_id = %cmd.project_id, "Deleted project");
        Ok(())
    }
}
