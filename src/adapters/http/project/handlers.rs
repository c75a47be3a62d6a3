//! HTTP handlers for project and import endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error_response::{error_response, invalid_id};
use crate::application::{
    AddAlternativeCommand, AddAlternativeHandler, AddCriterionCommand, AddCriterionHandler,
    CalculateProjectHandler, CalculateProjectQuery, CreateProjectCommand, CreateProjectHandler,
    DeleteProjectCommand, DeleteProjectHandler, GetProjectHandler, GetProjectQuery,
    ImportProjectCommand, ImportProjectHandler, ListProjectsHandler, PreviewTableHandler,
    RemoveAlternativeCommand, RemoveAlternativeHandler, RemoveCriterionCommand,
    RemoveCriterionHandler,
};
use crate::config::LimitsConfig;
use crate::domain::foundation::{AlternativeId, CriterionId, ProjectId};
use crate::domain::project::{CriterionValue, ProjectError, ProjectImport, TabularData};
use crate::ports::ProjectRepository;

use super::dto::{
    AddAlternativeRequest, AddCriterionRequest, AlternativeResponse, CreateProjectRequest,
    CriterionResponse, ImportRequest, MessageResponse, ProjectListResponse, ProjectResponse,
    TableRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProjectHandlers {
    create_handler: Arc<CreateProjectHandler>,
    get_handler: Arc<GetProjectHandler>,
    list_handler: Arc<ListProjectsHandler>,
    delete_handler: Arc<DeleteProjectHandler>,
    add_criterion_handler: Arc<AddCriterionHandler>,
    remove_criterion_handler: Arc<RemoveCriterionHandler>,
    add_alternative_handler: Arc<AddAlternativeHandler>,
    remove_alternative_handler: Arc<RemoveAlternativeHandler>,
    calculate_handler: Arc<CalculateProjectHandler>,
    preview_handler: Arc<PreviewTableHandler>,
    import_handler: Arc<ImportProjectHandler>,
}

impl ProjectHandlers {
    /// Wires every project handler to one repository and one set of limits.
    pub fn new(repository: Arc<dyn ProjectRepository>, limits: LimitsConfig) -> Self {
        Self {
            create_handler: Arc::new(CreateProjectHandler::new(repository.clone())),
            get_handler: Arc::new(GetProjectHandler::new(repository.clone())),
            list_handler: Arc::new(ListProjectsHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteProjectHandler::new(repository.clone())),
            add_criterion_handler: Arc::new(AddCriterionHandler::new(
                repository.clone(),
                limits.clone(),
            )),
            remove_criterion_handler: Arc::new(RemoveCriterionHandler::new(repository.clone())),
            add_alternative_handler: Arc::new(AddAlternativeHandler::new(
                repository.clone(),
                limits.clone(),
            )),
            remove_alternative_handler: Arc::new(RemoveAlternativeHandler::new(
                repository.clone(),
            )),
            calculate_handler: Arc::new(CalculateProjectHandler::new(
                repository.clone(),
                limits.clone(),
            )),
            preview_handler: Arc::new(PreviewTableHandler::new(limits.clone())),
            import_handler: Arc::new(ImportProjectHandler::new(repository, limits)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Project endpoints
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/projects - Create an empty project
pub async fn create_project(
    State(handlers): State<ProjectHandlers>,
    Json(req): Json<CreateProjectRequest>,
) -> Response {
    let cmd = CreateProjectCommand { name: req.name };

    match handlers.create_handler.handle(cmd).await {
        Ok(project) => (StatusCode::CREATED, Json(ProjectResponse::from(&project))).into_response(),
        Err(e) => handle_project_error(e),
    }
}

/// GET /api/projects - List all projects
pub async fn list_projects(State(handlers): State<ProjectHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(projects) => (StatusCode::OK, Json(ProjectListResponse::from(projects))).into_response(),
        Err(e) => handle_project_error(e),
    }
}

/// GET /api/projects/:id - Get a project with its criteria and alternatives
pub async fn get_project(
    State(handlers): State<ProjectHandlers>,
    Path(project_id): Path<String>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };

    match handlers.get_handler.handle(GetProjectQuery { project_id }).await {
        Ok(project) => (StatusCode::OK, Json(ProjectResponse::from(&project))).into_response(),
        Err(e) => handle_project_error(e),
    }
}

/// DELETE /api/projects/:id - Delete a project
pub async fn delete_project(
    State(handlers): State<ProjectHandlers>,
    Path(project_id): Path<String>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };

    match handlers
        .delete_handler
        .handle(DeleteProjectCommand { project_id })
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("Project deleted successfully")),
        )
            .into_response(),
        Err(e) => handle_project_error(e),
    }
}

/// POST /api/projects/:id/criteria - Add a criterion
pub async fn add_criterion(
    State(handlers): State<ProjectHandlers>,
    Path(project_id): Path<String>,
    Json(req): Json<AddCriterionRequest>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };

    let cmd = AddCriterionCommand {
        project_id,
        name: req.name,
        criterion_type: req.criterion_type,
        weight: req.weight,
    };

    match handlers.add_criterion_handler.handle(cmd).await {
        Ok(criterion) => {
            (StatusCode::CREATED, Json(CriterionResponse::from(&criterion))).into_response()
        }
        Err(e) => handle_project_error(e),
    }
}

/// DELETE /api/projects/:id/criteria/:criterion_id - Remove a criterion and its values
pub async fn remove_criterion(
    State(handlers): State<ProjectHandlers>,
    Path((project_id, criterion_id)): Path<(String, String)>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };
    let Ok(criterion_id) = criterion_id.parse::<CriterionId>() else {
        return invalid_id("criterion");
    };

    let cmd = RemoveCriterionCommand {
        project_id,
        criterion_id,
    };

    match handlers.remove_criterion_handler.handle(cmd).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("Criterion deleted successfully")),
        )
            .into_response(),
        Err(e) => handle_project_error(e),
    }
}

/// POST /api/projects/:id/alternatives - Add an alternative with its values
pub async fn add_alternative(
    State(handlers): State<ProjectHandlers>,
    Path(project_id): Path<String>,
    Json(req): Json<AddAlternativeRequest>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };

    let mut values = Vec::with_capacity(req.values.len());
    for value in req.values {
        let Ok(criterion_id) = value.criterion_id.parse::<CriterionId>() else {
            return invalid_id("criterion");
        };
        values.push(CriterionValue::new(criterion_id, value.value));
    }

    let cmd = AddAlternativeCommand {
        project_id,
        name: req.name,
        values,
    };

    match handlers.add_alternative_handler.handle(cmd).await {
        Ok(alternative) => {
            (StatusCode::CREATED, Json(AlternativeResponse::from(&alternative))).into_response()
        }
        Err(e) => handle_project_error(e),
    }
}

/// DELETE /api/projects/:id/alternatives/:alternative_id - Remove an alternative
pub async fn remove_alternative(
    State(handlers): State<ProjectHandlers>,
    Path((project_id, alternative_id)): Path<(String, String)>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };
    let Ok(alternative_id) = alternative_id.parse::<AlternativeId>() else {
        return invalid_id("alternative");
    };

    let cmd = RemoveAlternativeCommand {
        project_id,
        alternative_id,
    };

    match handlers.remove_alternative_handler.handle(cmd).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("Alternative deleted successfully")),
        )
            .into_response(),
        Err(e) => handle_project_error(e),
    }
}

/// POST /api/projects/:id/calculate - Rank the project's alternatives
pub async fn calculate_project(
    State(handlers): State<ProjectHandlers>,
    Path(project_id): Path<String>,
) -> Response {
    let Ok(project_id) = project_id.parse::<ProjectId>() else {
        return invalid_id("project");
    };

    match handlers
        .calculate_handler
        .handle(CalculateProjectQuery { project_id })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => handle_project_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Import endpoints
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/import/preview - Show the head of a table
pub async fn preview_table(
    State(handlers): State<ProjectHandlers>,
    Json(req): Json<TableRequest>,
) -> Response {
    match TabularData::new(req.columns, req.rows) {
        Ok(data) => (StatusCode::OK, Json(handlers.preview_handler.handle(&data))).into_response(),
        Err(e) => handle_project_error(e.into()),
    }
}

/// POST /api/import - Create a project from a table
pub async fn import_project(
    State(handlers): State<ProjectHandlers>,
    Json(req): Json<ImportRequest>,
) -> Response {
    let data = match TabularData::new(req.columns, req.rows) {
        Ok(data) => data,
        Err(e) => return handle_project_error(e.into()),
    };

    let cmd = ImportProjectCommand {
        import: ProjectImport {
            project_name: req.project_name,
            data,
            column_mapping: req.column_mapping,
            criteria: req.criteria,
        },
    };

    match handlers.import_handler.handle(cmd).await {
        Ok(project) => (StatusCode::CREATED, Json(ProjectResponse::from(&project))).into_response(),
        Err(e) => handle_project_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_project_error(error: ProjectError) -> Response {
    error_response(error.code(), error.to_string())
}
