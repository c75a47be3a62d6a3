//! CreateProjectHandler - Command handler for creating new projects.

use std::sync::Arc;

use tracing::debug;

use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

/// Command to create a new project.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub name: String,
}

/// Handler for creating projects.
pub struct CreateProjectHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl CreateProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateProjectCommand) -> Result<Project, ProjectError> {
        let project = Project::new(cmd.name)?;
        self.repository.save(&project).await?;

        debug!(project_id = %project.id(), "Created project");
        Ok(project)
    }
}
