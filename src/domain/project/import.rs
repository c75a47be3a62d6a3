//! Tabular import - Builds projects from already-parsed table rows.
//!
//! Parsing file formats is the caller's job. This module receives a header
//! row and string cells, and maps named columns onto alternatives and
//! criteria.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::{CriterionValue, Project, ProjectError};
use crate::domain::topsis::CriterionType;

/// Mapping key whose column holds alternative names.
pub const ALTERNATIVE_NAME_COLUMN: &str = "alternative_name";

/// Why a table could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Missing required data: {0}")]
    MissingData(&'static str),

    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Column '{0}' does not exist in the table")]
    UnknownColumn(String),

    #[error("Row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Criterion '{criterion}' has type '{value}', expected 'benefit' or 'cost'")]
    InvalidCriterionType { criterion: String, value: String },
}

/// A header plus rows of string cells.
///
/// Deserialization goes through `TabularData::new`, so a decoded table is
/// never ragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct TabularData {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TryFrom<RawTable> for TabularData {
    type Error = ImportError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Self::new(raw.columns, raw.rows)
    }
}

/// The first rows of a table, for display before import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

impl TabularData {
    /// Wraps a header and rows, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ImportError> {
        if columns.is_empty() {
            return Err(ImportError::MissingData("columns"));
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(ImportError::RaggedRow {
                row,
                expected: columns.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Result<usize, ImportError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ImportError::UnknownColumn(name.to_string()))
    }

    /// Returns the header, the first `limit` rows and the total row count.
    pub fn preview(&self, limit: usize) -> TabularPreview {
        TabularPreview {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(limit).cloned().collect(),
            total_rows: self.rows.len(),
        }
    }
}

/// Criterion definition supplied alongside a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionConfig {
    pub name: String,
    pub criterion_type: String,
    pub weight: f64,
}

/// A request to turn a table into a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectImport {
    pub project_name: String,
    pub data: TabularData,
    /// `ALTERNATIVE_NAME_COLUMN` or a criterion name → table column name.
    pub column_mapping: HashMap<String, String>,
    pub criteria: Vec<CriterionConfig>,
}

impl ProjectImport {
    /// Builds the project. Any bad cell fails the whole import.
    ///
    /// Criteria without a column mapping receive no values, so they fall back
    /// to `MISSING_VALUE_DEFAULT` at calculation time.
    pub fn build(&self) -> Result<Project, ProjectError> {
        if self.criteria.is_empty() {
            return Err(ImportError::MissingData("criteria").into());
        }
        if self.data.row_count() == 0 {
            return Err(ImportError::MissingData("rows").into());
        }

        let name_column = self
            .column_mapping
            .get(ALTERNATIVE_NAME_COLUMN)
            .ok_or(ImportError::MissingData("alternative_name column mapping"))?;
        let name_index = self.data.column_index(name_column)?;

        let mut project = Project::new(self.project_name.clone())?;

        // (criterion id, column index, column name) for every mapped criterion
        let mut mapped = Vec::new();
        for config in &self.criteria {
            let criterion_type: CriterionType =
                config
                    .criterion_type
                    .parse()
                    .map_err(|value| ImportError::InvalidCriterionType {
                        criterion: config.name.clone(),
                        value,
                    })?;
            let id = project.add_criterion(config.name.clone(), criterion_type, config.weight)?;

            if let Some(column) = self.column_mapping.get(&config.name) {
                mapped.push((id, self.data.column_index(column)?, column.as_str()));
            }
        }

        for (row, cells) in self.data.rows().iter().enumerate() {
            let values = mapped
                .iter()
                .map(|(id, index, column)| {
                    parse_cell(&cells[*index], row, column).map(|v| CriterionValue::new(*id, v))
                })
                .collect::<Result<Vec<_>, _>>()?;

            project.add_alternative(cells[name_index].clone(), values)?;
        }

        Ok(project)
    }
}

fn parse_cell(cell: &str, row: usize, column: &str) -> Result<f64, ImportError> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ImportError::InvalidNumber {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })
}
