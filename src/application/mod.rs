//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::project::{
    AddAlternativeCommand, AddAlternativeHandler, AddCriterionCommand, AddCriterionHandler,
    CalculateProjectHandler, CalculateProjectQuery, CreateProjectCommand, CreateProjectHandler,
    DeleteProjectCommand, DeleteProjectHandler, GetProjectHandler, GetProjectQuery,
    ImportProjectCommand, ImportProjectHandler, ListProjectsHandler, PreviewTableHandler,
    RemoveAlternativeCommand, RemoveAlternativeHandler, RemoveCriterionCommand,
    RemoveCriterionHandler,
};
pub use handlers::topsis::{CalculateTopsisCommand, CalculateTopsisError, CalculateTopsisHandler};
