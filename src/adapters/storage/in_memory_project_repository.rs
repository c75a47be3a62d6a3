//! In-Memory Project Repository Adapter
//!
//! Stores projects in memory. Useful for testing, development and
//! single-server deployments that do not need persistence across restarts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

/// In-memory storage for projects
#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored projects
    pub async fn project_count(&self) -> usize {
        self.projects.read().await.len()
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &ProjectId) -> DomainError {
    DomainError::new(ErrorCode::ProjectNotFound, "Project not found")
        .with_detail("project_id", id.to_string())
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        let stored = projects
            .get_mut(&project.id())
            .ok_or_else(|| not_found(&project.id()))?;

        // Optimistic locking check
        if stored.version() != project.version() {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "Project version mismatch: expected {}, found {}",
                    project.version(),
                    stored.version()
                ),
            )
            .with_detail("project_id", project.id().to_string()));
        }

        *stored = project.clone();
        stored.increment_version();
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().await;
        let mut all: Vec<Project> = projects.values().cloned().collect();
        all.sort_by_key(|p| (p.created_at(), p.id()));
        Ok(all)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        projects.remove(id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::CriterionType;

    #[tokio::test]
    async fn save_and_find_project() {
        let repo = InMemoryProjectRepository::new();
        let project = Project::new("Cars").unwrap();

        repo.save(&project).await.unwrap();

        let found = repo.find_by_id(&project.id()).await.unwrap();
        assert_eq!(found, Some(project));
        assert_eq!(repo.project_count().await, 1);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemoryProjectRepository::new();
        assert!(repo.find_by_id(&ProjectId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_stored_project() {
        let repo = InMemoryProjectRepository::new();
        let mut project = Project::new("Cars").unwrap();
        repo.save(&project).await.unwrap();

        project
            .add_criterion("Price", CriterionType::Cost, 1.0)
            .unwrap();
        repo.update(&project).await.unwrap();

        let found = repo.find_by_id(&project.id()).await.unwrap().unwrap();
        assert_eq!(found.criteria().len(), 1);
        assert_eq!(found.version(), 1);
    }

    #[tokio::test]
    async fn stale_update_is_rejected() {
        let repo = InMemoryProjectRepository::new();
        let project = Project::new("Cars").unwrap();
        repo.save(&project).await.unwrap();

        let mut first = repo.find_by_id(&project.id()).await.unwrap().unwrap();
        let mut second = first.clone();
        first.add_criterion("Price", CriterionType::Cost, 1.0).unwrap();
        second.add_criterion("Speed", CriterionType::Benefit, 1.0).unwrap();

        repo.update(&first).await.unwrap();
        let err = repo.update(&second).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
        let found = repo.find_by_id(&project.id()).await.unwrap().unwrap();
        assert_eq!(found.criteria()[0].name(), "Price");
    }

    #[tokio::test]
    async fn update_unknown_project_fails() {
        let repo = InMemoryProjectRepository::new();
        let project = Project::new("Ghost").unwrap();

        let err = repo.update(&project).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProjectNotFound);
    }

    #[tokio::test]
    async fn list_returns_oldest_first() {
        let repo = InMemoryProjectRepository::new();
        let first = Project::new("First").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = Project::new("Second").unwrap();

        repo.save(&second).await.unwrap();
        repo.save(&first).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn delete_removes_project() {
        let repo = InMemoryProjectRepository::new();
        let project = Project::new("Cars").unwrap();
        repo.save(&project).await.unwrap();

        repo.delete(&project.id()).await.unwrap();

        assert_eq!(repo.project_count().await, 0);
        assert_eq!(
            repo.delete(&project.id()).await.unwrap_err().code,
            ErrorCode::ProjectNotFound
        );
    }
}
