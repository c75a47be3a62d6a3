//! HTTP DTOs for the direct calculation endpoint.

use serde::Deserialize;

use crate::application::CalculateTopsisCommand;
use crate::domain::topsis::Matrix;

/// Request body for `POST /api/topsis/calculate`.
///
/// Names are optional; omitted names are generated as "Alternative 1",
/// "Criterion 1" and so on, sized from the matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateTopsisRequest {
    pub matrix: Matrix,
    pub weights: Vec<f64>,
    pub criterion_types: Vec<String>,
    #[serde(default)]
    pub alternative_names: Option<Vec<String>>,
    #[serde(default)]
    pub criterion_names: Option<Vec<String>>,
}

impl From<CalculateTopsisRequest> for CalculateTopsisCommand {
    fn from(req: CalculateTopsisRequest) -> Self {
        let rows = req.matrix.len();
        let columns = req.matrix.first().map_or(0, Vec::len);
        Self {
            alternative_names: req
                .alternative_names
                .unwrap_or_else(|| numbered("Alternative", rows)),
            criterion_names: req
                .criterion_names
                .unwrap_or_else(|| numbered("Criterion", columns)),
            matrix: req.matrix,
            weights: req.weights,
            criterion_types: req.criterion_types,
        }
    }
}

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{} {}", prefix, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_without_names() {
        let json = r#"{
            "matrix": [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]],
            "weights": [0.5, 0.5],
            "criterion_types": ["benefit", "cost"]
        }"#;
        let req: CalculateTopsisRequest = serde_json::from_str(json).unwrap();
        let cmd = CalculateTopsisCommand::from(req);

        assert_eq!(cmd.alternative_names, vec!["Alternative 1", "Alternative 2", "Alternative 3"]);
        assert_eq!(cmd.criterion_names, vec!["Criterion 1", "Criterion 2"]);
    }

    #[test]
    fn supplied_names_are_kept() {
        let json = r#"{
            "matrix": [[1.0]],
            "weights": [1.0],
            "criterion_types": ["benefit"],
            "alternative_names": ["Only"],
            "criterion_names": ["Speed"]
        }"#;
        let req: CalculateTopsisRequest = serde_json::from_str(json).unwrap();
        let cmd = CalculateTopsisCommand::from(req);

        assert_eq!(cmd.alternative_names, vec!["Only"]);
        assert_eq!(cmd.criterion_names, vec!["Speed"]);
    }
}
