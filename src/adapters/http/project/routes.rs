//! HTTP routes for project and import endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    add_alternative, add_criterion, calculate_project, create_project, delete_project,
    get_project, import_project, list_projects, preview_table, remove_alternative,
    remove_criterion, ProjectHandlers,
};

/// Creates the project router, to be nested under `/api/projects`.
pub fn project_routes(handlers: ProjectHandlers) -> Router {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/:id", get(get_project).delete(delete_project))
        .route("/:id/criteria", post(add_criterion))
        .route("/:id/criteria/:criterion_id", delete(remove_criterion))
        .route("/:id/alternatives", post(add_alternative))
        .route("/:id/alternatives/:alternative_id", delete(remove_alternative))
        .route("/:id/calculate", post(calculate_project))
        .with_state(handlers)
}

/// Creates the import router, to be nested under `/api/import`.
pub fn import_routes(handlers: ProjectHandlers) -> Router {
    Router::new()
        .route("/", post(import_project))
        .route("/preview", post(preview_table))
        .with_state(handlers)
}
