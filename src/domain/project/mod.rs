//! Project Module - Decision projects that feed the TOPSIS engine.
//!
//! A project owns named criteria (type and weight) and named alternatives
//! with per-criterion values. It assembles these into engine input, filling
//! absent alternative/criterion pairs with `MISSING_VALUE_DEFAULT`.
//!
//! # Components
//!
//! - `Project` - Aggregate root, owns criteria and alternatives
//! - `Criterion` / `Alternative` - Entities inside a project
//! - `TabularData` / `ProjectImport` - Project creation from already-parsed rows

mod aggregate;
mod alternative;
mod criterion;
mod errors;
mod import;

pub use aggregate::{Project, MISSING_VALUE_DEFAULT};
pub use alternative::{Alternative, CriterionValue};
pub use criterion::Criterion;
pub use errors::ProjectError;
pub use import::{
    CriterionConfig, ImportError, ProjectImport, TabularData, TabularPreview,
    ALTERNATIVE_NAME_COLUMN,
};
