//! Project command and query handlers.

mod add_alternative;
mod add_criterion;
mod calculate_project;
mod create_project;
mod delete_project;
mod get_project;
mod import_project;
mod list_projects;
mod preview_table;
mod remove_alternative;
mod remove_criterion;

pub use add_alternative::{AddAlternativeCommand, AddAlternativeHandler};
pub use add_criterion::{AddCriterionCommand, AddCriterionHandler};
pub use calculate_project::{CalculateProjectHandler, CalculateProjectQuery};
pub use create_project::{CreateProjectCommand, CreateProjectHandler};
pub use delete_project::{DeleteProjectCommand, DeleteProjectHandler};
pub use get_project::{GetProjectHandler, GetProjectQuery};
pub use import_project::{ImportProjectCommand, ImportProjectHandler};
pub use list_projects::ListProjectsHandler;
pub use preview_table::PreviewTableHandler;
pub use remove_alternative::{RemoveAlternativeCommand, RemoveAlternativeHandler};
pub use remove_criterion::{RemoveCriterionCommand, RemoveCriterionHandler};

use tracing::debug;

use crate::domain::foundation::{ErrorCode, ProjectId};
use crate::domain::project::{Project, ProjectError};
use crate::ports::ProjectRepository;

/// Attempts made by `edit_project` before a version conflict is returned.
const MAX_EDIT_ATTEMPTS: usize = 3;

/// Loads a project or fails with `ProjectError::NotFound`.
async fn load_project(
    repository: &dyn ProjectRepository,
    project_id: ProjectId,
) -> Result<Project, ProjectError> {
    repository
        .find_by_id(&project_id)
        .await?
        .ok_or(ProjectError::NotFound(project_id))
}

/// Loads a project, applies `edit` and writes the result back.
///
/// When another writer updates the project in between, the repository rejects
/// the write with `CONCURRENCY_CONFLICT` and the edit is replayed on a fresh
/// copy, up to `MAX_EDIT_ATTEMPTS` times.
async fn edit_project<T, F>(
    repository: &dyn ProjectRepository,
    project_id: ProjectId,
    mut edit: F,
) -> Result<(Project, T), ProjectError>
where
    F: FnMut(&mut Project) -> Result<T, ProjectError>,
{
    let mut attempt = 1;
    loop {
        let mut project = load_project(repository, project_id).await?;
        let output = edit(&mut project)?;

        match repository.update(&project).await {
            Ok(()) => return Ok((project, output)),
            Err(err)
                if err.code == ErrorCode::ConcurrencyConflict && attempt < MAX_EDIT_ATTEMPTS =>
            {
                debug!(project_id = %project_id, attempt, "Version conflict, retrying edit");
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
