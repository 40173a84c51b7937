//! Ensemble averaging with outlier exclusion.
//!
//! Combines the per-model price predictions of one inference request into a
//! single estimate. Predictions above [`OUTLIER_THRESHOLD`] are treated as
//! implausible and reported as excluded; the estimate is the arithmetic mean
//! of the remaining ones.

use tracing::{debug, warn};

use crate::core::{ModelKind, ModelPrediction, PredictionSet};

/// Predictions strictly above this price (euros) are excluded from the ensemble.
pub const OUTLIER_THRESHOLD: f64 = 1_000_000.0;

/// Outcome of combining one set of model predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleResult {
    /// Predictions at or below the threshold, in canonical model order.
    included: Vec<ModelPrediction>,
    /// Predictions above the threshold, in canonical model order.
    excluded: Vec<ModelPrediction>,
    /// Mean of `included`, `None` when nothing qualified.
    aggregate: Option<f64>,
}

impl EnsembleResult {
    /// The ensemble estimate, or `None` if no prediction qualified.
    pub fn aggregate(&self) -> Option<f64> {
        self.aggregate
    }

    /// Whether an estimate can be shown.
    pub fn is_available(&self) -> bool {
        self.aggregate.is_some()
    }

    pub fn included(&self) -> &[ModelPrediction] {
        &self.included
    }

    pub fn excluded(&self) -> &[ModelPrediction] {
        &self.excluded
    }

    pub fn included_models(&self) -> Vec<ModelKind> {
        self.included.iter().map(|p| p.model).collect()
    }

    pub fn excluded_models(&self) -> Vec<ModelKind> {
        self.excluded.iter().map(|p| p.model).collect()
    }

    /// Check if `model` was dropped as an outlier.
    pub fn is_excluded(&self, model: ModelKind) -> bool {
        self.excluded.iter().any(|p| p.model == model)
    }

    /// Models with no usable prediction, missing or malformed, in canonical order.
    pub fn uncovered_models(&self) -> Vec<ModelKind> {
        ModelKind::ALL
            .into_iter()
            .filter(|kind| {
                !self
                    .included
                    .iter()
                    .chain(&self.excluded)
                    .any(|p| p.model == *kind)
            })
            .collect()
    }

    /// Number of predictions that took part in the computation.
    pub fn considered_count(&self) -> usize {
        self.included.len() + self.excluded.len()
    }

    /// Share of considered predictions that were excluded, in percent.
    pub fn exclusion_percentage(&self) -> f64 {
        let total = self.considered_count();
        if total == 0 {
            0.0
        } else {
            100.0 * self.excluded.len() as f64 / total as f64
        }
    }
}

/// Whether a single price would be dropped from the ensemble.
pub fn is_outlier(price: f64) -> bool {
    price > OUTLIER_THRESHOLD
}

/// Combine per-model predictions into an ensemble estimate.
///
/// Accepts anything that yields predictions: a [`PredictionSet`], a slice of
/// [`ModelPrediction`], or `(ModelKind, f64)` pairs such as a
/// `HashMap<ModelKind, f64>`. A later prediction for the same model replaces
/// an earlier one. Malformed prices (non-finite or not positive) are treated
/// as absent.
///
/// # Example
/// ```
/// use lhp_ensemble::core::ModelKind;
/// use lhp_ensemble::ensemble::aggregate;
///
/// let result = aggregate([
///     (ModelKind::Linear, 500_000.0),
///     (ModelKind::Ridge, 520_000.0),
///     (ModelKind::Lasso, 1_500_000.0),
/// ]);
/// assert_eq!(result.aggregate(), Some(510_000.0));
/// assert_eq!(result.excluded_models(), vec![ModelKind::Lasso]);
/// ```
pub fn aggregate<I>(predictions: I) -> EnsembleResult
where
    I: IntoIterator,
    I::Item: Into<ModelPrediction>,
{
    let set: PredictionSet = predictions.into_iter().map(Into::into).collect();

    let mut included = Vec::with_capacity(set.len());
    let mut excluded = Vec::new();

    for prediction in set.iter() {
        if !prediction.is_well_formed() {
            warn!(
                model = prediction.model.key(),
                price = prediction.price,
                "skipping malformed prediction"
            );
            continue;
        }
        if is_outlier(prediction.price) {
            excluded.push(*prediction);
        } else {
            included.push(*prediction);
        }
    }

    included.sort_by_key(|p| p.model);
    excluded.sort_by_key(|p| p.model);

    let aggregate = if included.is_empty() {
        None
    } else {
        let sum: f64 = included.iter().map(|p| p.price).sum();
        Some(sum / included.len() as f64)
    };

    match aggregate {
        Some(value) => debug!(
            included = included.len(),
            excluded = excluded.len(),
            aggregate = value,
            "ensemble computed"
        ),
        None => warn!(
            excluded = excluded.len(),
            "no prediction at or below the outlier threshold"
        ),
    }

    EnsembleResult {
        included,
        excluded,
        aggregate,
    }
}
