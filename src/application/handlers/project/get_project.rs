//! GetProjectHandler - Query handler for a single project.

use std::sync::Arc;

use super::load_project;
use crate::domain::foundation::ProjectId;
use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

/// Query for a project by ID.
#[derive(Debug, Clone)]
pub struct GetProjectQuery {
    pub project_id: ProjectId,
}

/// Handler for retrieving projects.
pub struct GetProjectHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl GetProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProjectQuery) -> Result<Project, ProjectError> {
        load_project(self.repository.as_ref(), query.project_id).await
    }
}
