//! HTTP adapter for project workspace and tabular import endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddAlternativeRequest, AddCriterionRequest, AlternativeResponse, AlternativeValueRequest,
    CreateProjectRequest, CriterionResponse, ImportRequest, MessageResponse, ProjectListResponse,
    ProjectResponse, ProjectSummaryResponse, TableRequest,
};
pub use handlers::ProjectHandlers;
pub use routes::{import_routes, project_routes};
