//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProjectRepository` - Persistence of `Project` aggregates

mod project_repository;

pub use project_repository::ProjectRepository;
