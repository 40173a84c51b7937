//! Accuracy metrics for a model's test-set predictions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cross_validation::CvSummary;
use crate::core::ModelKind;
use crate::error::{LhpError, Result};

/// Evaluation results for one trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub model: ModelKind,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Absolute Percentage Error (None if zeros in actual)
    #[serde(default)]
    pub mape: Option<f64>,
    /// R-squared (coefficient of determination)
    #[serde(rename = "r2", alias = "r_squared")]
    pub r_squared: f64,
    /// Cross-validation summary, when fold scores were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<CvSummary>,
}

impl EvaluationMetrics {
    /// Attach a cross-validation summary.
    pub fn with_cv(mut self, cv: CvSummary) -> Self {
        self.cv = Some(cv);
        self
    }

    /// Look up a metric value, `None` when it was not computed.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Rmse => Some(self.rmse),
            Metric::Mae => Some(self.mae),
            Metric::Mape => self.mape,
            Metric::R2 => Some(self.r_squared),
            Metric::CvRmse => self.cv.as_ref().map(|cv| cv.rmse_mean),
            Metric::CvMae => self.cv.as_ref().map(|cv| cv.mae_mean),
            Metric::CvR2 => self.cv.as_ref().map(|cv| cv.r2_mean),
        }
    }
}

/// A metric models can be compared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Rmse,
    Mae,
    Mape,
    R2,
    /// Mean RMSE across cross-validation folds.
    CvRmse,
    /// Mean MAE across cross-validation folds.
    CvMae,
    /// Mean R² across cross-validation folds.
    CvR2,
}

impl Metric {
    /// Test-set metrics, in report order.
    pub const TEST_SET: [Metric; 4] = [Metric::Rmse, Metric::Mae, Metric::Mape, Metric::R2];

    /// Cross-validated metrics, in report order.
    pub const CROSS_VALIDATED: [Metric; 3] = [Metric::CvRmse, Metric::CvMae, Metric::CvR2];

    /// Whether larger values mean a better model.
    pub fn higher_is_better(&self) -> bool {
        matches!(self, Metric::R2 | Metric::CvR2)
    }

    /// Short column label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Rmse => "RMSE",
            Metric::Mae => "MAE",
            Metric::Mape => "MAPE",
            Metric::R2 => "R² Score",
            Metric::CvRmse => "CV RMSE",
            Metric::CvMae => "CV MAE",
            Metric::CvR2 => "CV R² Score",
        }
    }

    /// Whether values are euro amounts (as opposed to ratios or percentages).
    pub fn is_currency(&self) -> bool {
        matches!(
            self,
            Metric::Rmse | Metric::Mae | Metric::CvRmse | Metric::CvMae
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = LhpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "rmse" => Ok(Metric::Rmse),
            "mae" => Ok(Metric::Mae),
            "mape" => Ok(Metric::Mape),
            "r2" | "r_squared" | "r²" => Ok(Metric::R2),
            "cv_rmse" | "cv_rmse_mean" => Ok(Metric::CvRmse),
            "cv_mae" | "cv_mae_mean" => Ok(Metric::CvMae),
            "cv_r2" | "cv_r2_mean" => Ok(Metric::CvR2),
            other => Err(LhpError::InvalidParameter(format!(
                "unknown metric: {other}"
            ))),
        }
    }
}

/// Evaluate a model's predictions against the observed prices.
///
/// # Arguments
/// * `model` - Model that produced `predicted`
/// * `actual` - Observed prices
/// * `predicted` - Predicted prices, paired with `actual` by position
pub fn evaluate(model: ModelKind, actual: &[f64], predicted: &[f64]) -> Result<EvaluationMetrics> {
    check_pair(actual, predicted)?;

    Ok(EvaluationMetrics {
        model,
        rmse: rmse(actual, predicted),
        mae: mae(actual, predicted),
        mape: mape(actual, predicted),
        r_squared: r_squared(actual, predicted),
        cv: None,
    })
}

pub(crate) fn check_pair(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(LhpError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(LhpError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    Ok(())
}

/// Calculate MAE between two slices.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate MSE between two slices.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate RMSE between two slices.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// Calculate MAPE (percent) between two slices.
///
/// Returns `None` if the slices are unusable or any actual value is zero.
pub fn mape(actual: &[f64], predicted: &[f64]) -> Option<f64> {
    if actual.len() != predicted.len() || actual.is_empty() || actual.contains(&0.0) {
        return None;
    }
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| ((a - p) / a).abs())
        .sum();
    Some(100.0 * sum / actual.len() as f64)
}

/// Calculate the coefficient of determination.
///
/// A constant `actual` series yields 1.0.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    let n = actual.len() as f64;
    let mean_actual = actual.iter().sum::<f64>() / n;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    }
}
