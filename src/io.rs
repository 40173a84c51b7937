//! Loading recorded predictions and evaluation results from JSON.
//!
//! Prediction files are either a bare object of model name to price
//!
//! ```json
//! { "linear": 91468.2, "random_forest": 66085.2, "ensemble_average": 80000.0 }
//! ```
//!
//! or the same object wrapped with a timestamp:
//!
//! ```json
//! { "recorded_at": "2025-03-01T12:00:00Z", "predictions": { "svr": 95101.7 } }
//! ```
//!
//! Entries that are not one of the six models, or whose value is not a
//! number, are skipped. When several keys name the same model only one is
//! kept, and the collision is logged.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::core::{ModelKind, ModelPrediction, PredictionSet};
use crate::error::{LhpError, Result};
use crate::evaluation::EvaluationMetrics;

/// Key the prediction pipeline writes its own average under.
const ENSEMBLE_KEY: &str = "ensemble_average";

/// Parse a prediction document.
pub fn parse_predictions(json: &str) -> Result<PredictionSet> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(root) = value else {
        return Err(LhpError::Parse(
            "prediction document must be a JSON object".to_string(),
        ));
    };

    match root.get("predictions") {
        Some(Value::Object(entries)) => {
            let set = collect_predictions(entries);
            match root.get("recorded_at") {
                None | Some(Value::Null) => Ok(set),
                Some(Value::String(ts)) => {
                    let at = DateTime::parse_from_rfc3339(ts)
                        .map_err(|e| LhpError::Parse(format!("recorded_at: {e}")))?;
                    Ok(set.with_recorded_at(at.with_timezone(&Utc)))
                }
                Some(other) => Err(LhpError::Parse(format!(
                    "recorded_at must be a string, got {other}"
                ))),
            }
        }
        Some(other) => Err(LhpError::Parse(format!(
            "predictions must be an object, got {other}"
        ))),
        None => Ok(collect_predictions(&root)),
    }
}

/// Read and parse a prediction file.
pub fn load_predictions(path: impl AsRef<Path>) -> Result<PredictionSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let set = parse_predictions(&text)?;
    debug!(path = %path.display(), predictions = set.len(), "loaded predictions");
    Ok(set)
}

/// Parse a JSON array of evaluation results.
pub fn parse_evaluations(json: &str) -> Result<Vec<EvaluationMetrics>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an evaluation results file.
pub fn load_evaluations(path: impl AsRef<Path>) -> Result<Vec<EvaluationMetrics>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let results = parse_evaluations(&text)?;
    debug!(path = %path.display(), models = results.len(), "loaded evaluations");
    Ok(results)
}

fn collect_predictions(entries: &Map<String, Value>) -> PredictionSet {
    let mut set = PredictionSet::new();

    for (name, value) in entries {
        if name == ENSEMBLE_KEY {
            continue;
        }
        let model = match name.parse::<ModelKind>() {
            Ok(model) => model,
            Err(_) => {
                warn!(entry = %name, "skipping unknown model");
                continue;
            }
        };
        match value.as_f64() {
            Some(price) => {
                if let Some(previous) = set.insert(ModelPrediction::new(model, price)) {
                    warn!(
                        model = model.key(),
                        entry = %name,
                        dropped = previous.price,
                        kept = price,
                        "duplicate prediction for model"
                    );
                }
            }
            None => warn!(model = model.key(), value = %value, "skipping non-numeric prediction"),
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;

    #[test]
    fn parses_bare_object() {
        let set = parse_predictions(
            r#"{"linear": 91468.0, "Random Forest": 66085.0, "ensemble_average": 1.0}"#,
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(ModelKind::Linear).map(|p| p.price), Some(91_468.0));
        assert_eq!(
            set.get(ModelKind::RandomForest).map(|p| p.price),
            Some(66_085.0)
        );
        assert!(set.recorded_at().is_none());
    }

    #[test]
    fn parses_wrapped_object_with_timestamp() {
        let set = parse_predictions(
            r#"{"recorded_at": "2025-03-01T12:00:00Z", "predictions": {"svr": 95101.7}}"#,
        )
        .unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(
            set.recorded_at(),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn skips_unknown_models_and_non_numbers() {
        let set = parse_predictions(
            r#"{"knn": 1.0, "ridge": "n/a", "lasso": null, "decision_tree": 96199}"#,
        )
        .unwrap();

        assert_eq!(set.len(), 1);
        assert!(set.get(ModelKind::DecisionTree).is_some());
    }

    #[test]
    fn duplicate_spellings_keep_one_prediction() {
        let set = parse_predictions(r#"{"Linear": 300000, "linear": 310000, "ridge": 1}"#).unwrap();

        assert_eq!(set.len(), 2);
        let price = set.get(ModelKind::Linear).map(|p| p.price);
        assert!(price == Some(300_000.0) || price == Some(310_000.0));
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(matches!(parse_predictions("[1, 2]"), Err(LhpError::Parse(_))));
        assert!(matches!(parse_predictions("{oops"), Err(LhpError::Parse(_))));
        assert!(matches!(
            parse_predictions(r#"{"predictions": [1]}"#),
            Err(LhpError::Parse(_))
        ));
        assert!(matches!(
            parse_predictions(r#"{"recorded_at": "yesterday", "predictions": {}}"#),
            Err(LhpError::Parse(_))
        ));
    }

    #[test]
    fn loads_files_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"lasso": 86767.0, "ridge": 89590.0}}"#).unwrap();

        let set = load_predictions(file.path()).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_predictions(dir.path().join("absent.json"));
        assert!(matches!(result, Err(LhpError::Io(_))));
    }

    #[test]
    fn parses_evaluation_arrays() {
        let results = parse_evaluations(
            r#"[
                {"model": "random_forest", "rmse": 66085.0, "mae": 38728.0, "mape": 10.99, "r2": 0.9224},
                {"model": "linear", "rmse": 91468.0, "mae": 69957.0, "r2": 0.8513}
            ]"#,
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].model, ModelKind::RandomForest);
        assert!(results[1].mape.is_none());
    }
}
