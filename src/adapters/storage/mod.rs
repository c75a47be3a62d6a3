//! Storage Adapters
//!
//! Implementations of the ProjectRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryProjectRepository** - Stores projects in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryProjectRepository;
//!
//! let repository = Arc::new(InMemoryProjectRepository::new());
//! ```

mod in_memory_project_repository;

pub use in_memory_project_repository::InMemoryProjectRepository;
