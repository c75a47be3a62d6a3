//! Project repository port.
//!
//! Defines the contract for persisting and retrieving Project aggregates.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::project::Project;

/// Repository port for Project aggregate persistence.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Save a new project.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, project: &Project) -> Result<(), DomainError>;

    /// Replace an existing project and advance its stored version.
    ///
    /// The write only succeeds if `project.version()` still matches the
    /// stored version, i.e. nobody else updated it since it was loaded.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    /// - `ConcurrencyConflict` if the stored version has moved on
    /// - `StorageError` on persistence failure
    async fn update(&self, project: &Project) -> Result<(), DomainError>;

    /// Find a project by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// All projects, oldest first.
    async fn list(&self) -> Result<Vec<Project>, DomainError>;

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError>;
}
