//! ImportProjectHandler - Command handler that creates a project from a table.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::LimitsConfig;
use crate::domain::foundation::LimitExceeded;
use crate::domain::project::{Project, ProjectError, ProjectImport};
use crate::ports::ProjectRepository;

/// Command to import a table as a new project.
#[derive(Debug, Clone)]
pub struct ImportProjectCommand {
    pub import: ProjectImport,
}

/// Handler for tabular imports.
pub struct ImportProjectHandler {
    repository: Arc<dyn ProjectRepository>,
    limits: LimitsConfig,
}

impl ImportProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>, limits: LimitsConfig) -> Self {
        Self { repository, limits }
    }

    pub async fn handle(&self, cmd: ImportProjectCommand) -> Result<Project, ProjectError> {
        let import = &cmd.import;
        LimitExceeded::check("import rows", self.limits.max_import_rows, import.data.row_count())?;
        LimitExceeded::check("criteria", self.limits.max_criteria, import.criteria.len())?;

        let project = import.build().map_err(|err| {
            warn!(project_name = %import.project_name, error = %err, "Import rejected");
            err
        })?;
        self.repository.save(&project).await?;

        debug!(
            project_id = %project.id(),
            alternatives = project.alternatives().len(),
            criteria = project.criteria().len(),
            "Imported project"
        );
        Ok(project)
    }
}
