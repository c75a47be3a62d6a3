//! HTTP DTOs for project endpoints.
//!
//! Identifiers travel as strings; handlers parse them and answer 400 when
//! they are malformed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::project::{Alternative, Criterion, CriterionConfig, Project};
use crate::domain::topsis::CriterionType;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddCriterionRequest {
    pub name: String,
    /// "benefit" or "cost"
    pub criterion_type: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlternativeValueRequest {
    pub criterion_id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddAlternativeRequest {
    pub name: String,
    #[serde(default)]
    pub values: Vec<AlternativeValueRequest>,
}

/// An already-parsed table.
#[derive(Debug, Clone, Deserialize)]
pub struct TableRequest {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportRequest {
    pub project_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub column_mapping: HashMap<String, String>,
    pub criteria: Vec<CriterionConfig>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionResponse {
    pub id: String,
    pub name: String,
    pub criterion_type: CriterionType,
    pub weight: f64,
}

impl From<&Criterion> for CriterionResponse {
    fn from(criterion: &Criterion) -> Self {
        Self {
            id: criterion.id().to_string(),
            name: criterion.name().to_string(),
            criterion_type: criterion.criterion_type(),
            weight: criterion.weight(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeResponse {
    pub id: String,
    pub name: String,
    /// Criterion id → value. Criteria without a recorded value are absent.
    pub values: HashMap<String, f64>,
}

impl From<&Alternative> for AlternativeResponse {
    fn from(alternative: &Alternative) -> Self {
        Self {
            id: alternative.id().to_string(),
            name: alternative.name().to_string(),
            values: alternative
                .values()
                .iter()
                .map(|v| (v.criterion_id.to_string(), v.value))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    pub criteria: Vec<CriterionResponse>,
    pub alternatives: Vec<AlternativeResponse>,
    pub created_at: String,
    pub last_modified: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            name: project.name().to_string(),
            criteria: project.criteria().iter().map(CriterionResponse::from).collect(),
            alternatives: project
                .alternatives()
                .iter()
                .map(AlternativeResponse::from)
                .collect(),
            created_at: project.created_at().to_rfc3339(),
            last_modified: project.last_modified().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummaryResponse {
    pub id: String,
    pub name: String,
    pub criterion_count: usize,
    pub alternative_count: usize,
    pub created_at: String,
    pub last_modified: String,
}

impl From<&Project> for ProjectSummaryResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            name: project.name().to_string(),
            criterion_count: project.criteria().len(),
            alternative_count: project.alternatives().len(),
            created_at: project.created_at().to_rfc3339(),
            last_modified: project.last_modified().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummaryResponse>,
    pub total: usize,
}

impl From<Vec<Project>> for ProjectListResponse {
    fn from(projects: Vec<Project>) -> Self {
        let projects: Vec<ProjectSummaryResponse> =
            projects.iter().map(ProjectSummaryResponse::from).collect();
        Self {
            total: projects.len(),
            projects,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::CriterionValue;

    #[test]
    fn add_alternative_request_defaults_values() {
        let req: AddAlternativeRequest = serde_json::from_str(r#"{"name": "Sedan"}"#).unwrap();
        assert!(req.values.is_empty());
    }

    #[test]
    fn import_request_deserializes() {
        let json = r#"{
            "project_name": "Phones",
            "columns": ["Model", "Price"],
            "rows": [["Alpha", "699"]],
            "column_mapping": {"alternative_name": "Model", "Price": "Price"},
            "criteria": [{"name": "Price", "criterion_type": "cost", "weight": 1.0}]
        }"#;
        let req: ImportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.criteria[0].criterion_type, "cost");
        assert_eq!(req.column_mapping["alternative_name"], "Model");
    }

    #[test]
    fn project_response_lists_values_by_criterion_id() {
        let mut project = Project::new("Cars").unwrap();
        let price = project.add_criterion("Price", CriterionType::Cost, 1.0).unwrap();
        project
            .add_alternative("Sedan", vec![CriterionValue::new(price, 20_000.0)])
            .unwrap();

        let response = ProjectResponse::from(&project);

        assert_eq!(response.criteria[0].criterion_type, CriterionType::Cost);
        assert_eq!(response.alternatives[0].values[&price.to_string()], 20_000.0);
    }

    #[test]
    fn list_response_counts_projects() {
        let projects = vec![Project::new("A").unwrap(), Project::new("B").unwrap()];
        let response = ProjectListResponse::from(projects);
        assert_eq!(response.total, 2);
        assert_eq!(response.projects[1].name, "B");
    }
}
