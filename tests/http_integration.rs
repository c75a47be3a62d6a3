//! Integration tests for the HTTP API.
//!
//! Requests go through the full router with `tower::ServiceExt::oneshot`
//! against an in-memory repository.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use topsis_ranker::adapters::http::{api_router, ProjectHandlers, TopsisHandlers};
use topsis_ranker::adapters::storage::InMemoryProjectRepository;
use topsis_ranker::application::CalculateTopsisHandler;
use topsis_ranker::config::LimitsConfig;
use topsis_ranker::domain::foundation::{DomainError, ErrorCode, ProjectId};
use topsis_ranker::domain::project::Project;
use topsis_ranker::ports::ProjectRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(repository: Arc<dyn ProjectRepository>, limits: LimitsConfig) -> Router {
    let topsis = TopsisHandlers::new(Arc::new(CalculateTopsisHandler::new(limits.clone())));
    let projects = ProjectHandlers::new(repository, limits);
    api_router(topsis, projects)
}

fn app() -> Router {
    app_with(
        Arc::new(InMemoryProjectRepository::new()),
        LimitsConfig::default(),
    )
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn laptop_request() -> Value {
    json!({
        "matrix": [[250, 16, 12, 5], [200, 16, 8, 3], [300, 32, 16, 4]],
        "weights": [0.25, 0.25, 0.25, 0.25],
        "criterion_types": ["cost", "benefit", "benefit", "benefit"],
        "alternative_names": ["Laptop 1", "Laptop 2", "Laptop 3"],
        "criterion_names": ["Price", "Storage", "Camera", "Looks"]
    })
}

/// Repository whose every call fails.
struct FailingRepository;

#[async_trait]
impl ProjectRepository for FailingRepository {
    async fn save(&self, _project: &Project) -> Result<(), DomainError> {
        Err(DomainError::new(ErrorCode::StorageError, "unavailable"))
    }

    async fn update(&self, _project: &Project) -> Result<(), DomainError> {
        Err(DomainError::new(ErrorCode::StorageError, "unavailable"))
    }

    async fn find_by_id(&self, _id: &ProjectId) -> Result<Option<Project>, DomainError> {
        Err(DomainError::new(ErrorCode::StorageError, "unavailable"))
    }

    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        Err(DomainError::new(ErrorCode::StorageError, "unavailable"))
    }

    async fn delete(&self, _id: &ProjectId) -> Result<(), DomainError> {
        Err(DomainError::new(ErrorCode::StorageError, "unavailable"))
    }
}

// =============================================================================
// Direct calculation
// =============================================================================

#[tokio::test]
async fn calculate_returns_ranking_and_intermediates() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/topsis/calculate", Some(laptop_request())).await;

    assert_eq!(status, StatusCode::OK);
    let order: Vec<u64> = body["ranking"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["alternative_index"].as_u64().unwrap())
        .collect();
    assert_eq!(order, vec![2, 0, 1]);
    assert_eq!(body["ranking"][0]["alternative_name"], "Laptop 3");
    assert_eq!(body["ranking"][0]["rank"], 1);

    let score = body["preference_scores"][0].as_f64().unwrap();
    assert!((score - 0.435519304880295).abs() < 1e-9);
    let normalized = body["normalized_matrix"][0][0].as_f64().unwrap();
    assert!((normalized - 0.569802882298190).abs() < 1e-9);
    assert_eq!(body["positive_ideal"].as_array().unwrap().len(), 4);
    assert_eq!(body["negative_distances"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn calculate_generates_missing_names() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/topsis/calculate",
        Some(json!({
            "matrix": [[5.0]],
            "weights": [1.0],
            "criterion_types": ["benefit"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranking"][0]["alternative_name"], "Alternative 1");
    assert_eq!(body["ranking"][0]["score"], 0.0);
    assert_eq!(body["criterion_names"][0], "Criterion 1");
}

#[tokio::test]
async fn calculate_rejects_extra_weight() {
    let app = app();
    let mut request = laptop_request();
    request["weights"] = json!([0.2, 0.2, 0.2, 0.2, 0.2]);

    let (status, body) = send(&app, Method::POST, "/api/topsis/calculate", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SHAPE");
}

#[tokio::test]
async fn calculate_rejects_unknown_criterion_type() {
    let app = app();
    let mut request = laptop_request();
    request["criterion_types"][1] = json!("neutral");

    let (status, body) = send(&app, Method::POST, "/api/topsis/calculate", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CRITERION_TYPE");
}

#[tokio::test]
async fn calculate_rejects_ragged_matrix() {
    let app = app();
    let mut request = laptop_request();
    request["matrix"][1] = json!([200, 16, 8]);

    let (status, body) = send(&app, Method::POST, "/api/topsis/calculate", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SHAPE");
}

#[tokio::test]
async fn calculate_enforces_alternative_limit() {
    let app = app_with(
        Arc::new(InMemoryProjectRepository::new()),
        LimitsConfig {
            max_alternatives: 2,
            ..Default::default()
        },
    );

    let (status, body) = send(&app, Method::POST, "/api/topsis/calculate", Some(laptop_request())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "LIMIT_EXCEEDED");
}

// =============================================================================
// Project workspace
// =============================================================================

#[tokio::test]
async fn project_lifecycle() {
    let app = app();

    let (status, project) = send(&app, Method::POST, "/api/projects", Some(json!({"name": "Cars"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let project_id = project["id"].as_str().unwrap().to_string();
    let base = format!("/api/projects/{}", project_id);

    let (status, price) = send(
        &app,
        Method::POST,
        &format!("{}/criteria", base),
        Some(json!({"name": "Price", "criterion_type": "cost", "weight": 0.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(price["criterion_type"], "cost");
    let price_id = price["id"].as_str().unwrap().to_string();

    let (_, speed) = send(
        &app,
        Method::POST,
        &format!("{}/criteria", base),
        Some(json!({"name": "Speed", "criterion_type": "benefit", "weight": 0.5})),
    )
    .await;
    let speed_id = speed["id"].as_str().unwrap().to_string();

    for (name, cost, velocity) in [("Slow", 10.0, 100.0), ("Fast", 10.0, 200.0)] {
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("{}/alternatives", base),
            Some(json!({
                "name": name,
                "values": [
                    {"criterion_id": price_id, "value": cost},
                    {"criterion_id": speed_id, "value": velocity}
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, result) = send(&app, Method::POST, &format!("{}/calculate", base), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["ranking"][0]["alternative_name"], "Fast");

    let (status, fetched) = send(&app, Method::GET, &base, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["criteria"].as_array().unwrap().len(), 2);
    assert_eq!(fetched["alternatives"].as_array().unwrap().len(), 2);

    let (status, list) = send(&app, Method::GET, "/api/projects", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
    assert_eq!(list["projects"][0]["alternative_count"], 2);

    let (status, _) = send(&app, Method::DELETE, &format!("{}/criteria/{}", base, speed_id), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, fetched) = send(&app, Method::GET, &base, None).await;
    assert_eq!(fetched["criteria"].as_array().unwrap().len(), 1);
    assert!(fetched["alternatives"][0]["values"].get(&speed_id).is_none());

    let (status, _) = send(&app, Method::DELETE, &base, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, Method::GET, &base, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROJECT_NOT_FOUND");
}

#[tokio::test]
async fn remove_alternative_then_missing_alternative_is_404() {
    let app = app();
    let (_, project) = send(&app, Method::POST, "/api/projects", Some(json!({"name": "Cars"}))).await;
    let base = format!("/api/projects/{}", project["id"].as_str().unwrap());

    let (_, alternative) = send(
        &app,
        Method::POST,
        &format!("{}/alternatives", base),
        Some(json!({"name": "Sedan"})),
    )
    .await;
    let uri = format!("{}/alternatives/{}", base, alternative["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn calculating_empty_project_is_400() {
    let app = app();
    let (_, project) = send(&app, Method::POST, "/api/projects", Some(json!({"name": "Empty"}))).await;
    let uri = format!("/api/projects/{}/calculate", project["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::POST, &uri, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "PROJECT_INCOMPLETE");
}

#[tokio::test]
async fn blank_project_name_is_400() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/projects", Some(json!({"name": "  "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn malformed_project_id_is_400() {
    let app = app();

    let (status, _) = send(&app, Method::GET, "/api/projects/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_project_is_404() {
    let app = app();
    let uri = format!("/api/projects/{}", ProjectId::new());

    let (status, _) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn storage_failure_is_500() {
    let app = app_with(Arc::new(FailingRepository), LimitsConfig::default());

    let (status, body) = send(&app, Method::GET, "/api/projects", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORAGE_ERROR");
}

// =============================================================================
// Tabular import
// =============================================================================

fn phone_table() -> Value {
    json!({
        "columns": ["Model", "Price", "Battery"],
        "rows": [["Alpha", "699", "4000"], ["Beta", "499", "3500"], ["Gamma", "899", "5000"]]
    })
}

#[tokio::test]
async fn preview_caps_rows() {
    let app = app_with(
        Arc::new(InMemoryProjectRepository::new()),
        LimitsConfig {
            preview_rows: 2,
            ..Default::default()
        },
    );

    let (status, body) = send(&app, Method::POST, "/api/import/preview", Some(phone_table())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_rows"], 3);
    assert_eq!(body["columns"][2], "Battery");
}

#[tokio::test]
async fn import_creates_calculable_project() {
    let app = app();
    let mut request = phone_table();
    request["project_name"] = json!("Phones");
    request["column_mapping"] = json!({
        "alternative_name": "Model",
        "Cost": "Price",
        "Battery life": "Battery"
    });
    request["criteria"] = json!([
        {"name": "Cost", "criterion_type": "cost", "weight": 0.5},
        {"name": "Battery life", "criterion_type": "benefit", "weight": 0.5}
    ]);

    let (status, project) = send(&app, Method::POST, "/api/import", Some(request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(project["alternatives"].as_array().unwrap().len(), 3);

    let uri = format!("/api/projects/{}/calculate", project["id"].as_str().unwrap());
    let (status, result) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["ranking"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn import_with_bad_number_is_400() {
    let app = app();
    let request = json!({
        "project_name": "Phones",
        "columns": ["Model", "Price"],
        "rows": [["Alpha", "cheap"]],
        "column_mapping": {"alternative_name": "Model", "Price": "Price"},
        "criteria": [{"name": "Price", "criterion_type": "cost", "weight": 1.0}]
    });

    let (status, body) = send(&app, Method::POST, "/api/import", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (_, list) = send(&app, Method::GET, "/api/projects", None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn ragged_table_is_400() {
    let app = app();
    let table = json!({"columns": ["Model", "Price"], "rows": [["Alpha"]]});

    let (status, _) = send(&app, Method::POST, "/api/import/preview", Some(table)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
