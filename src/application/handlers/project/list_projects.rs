//! ListProjectsHandler - Query handler listing every project.

use std::sync::Arc;

use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

/// Handler for listing projects.
pub struct ListProjectsHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl ListProjectsHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Project>, ProjectError> {
        Ok(self.repository.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProjectRepository;

    #[tokio::test]
    async fn lists_all_projects() {
        let repo = Arc::new(InMemoryProjectRepository::new());
        repo.save(&Project::new("One").unwrap()).await.unwrap();
        repo.save(&Project::new("Two").unwrap()).await.unwrap();

        let handler = ListProjectsHandler::new(repo);
        assert_eq!(handler.handle().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_repository_lists_nothing() {
        let handler = ListProjectsHandler::new(Arc::new(InMemoryProjectRepository::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
