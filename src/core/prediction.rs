//! Recorded per-model price predictions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ModelKind;

/// A single model's predicted price in euros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    pub model: ModelKind,
    pub price: f64,
}

impl ModelPrediction {
    /// Create a prediction for `model`.
    pub fn new(model: ModelKind, price: f64) -> Self {
        Self { model, price }
    }

    /// Whether the price is a finite, strictly positive amount.
    pub fn is_well_formed(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

impl From<(ModelKind, f64)> for ModelPrediction {
    fn from((model, price): (ModelKind, f64)) -> Self {
        ModelPrediction::new(model, price)
    }
}

impl From<&ModelPrediction> for ModelPrediction {
    fn from(prediction: &ModelPrediction) -> Self {
        *prediction
    }
}

/// Predictions from one inference request, at most one per model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionSet {
    predictions: Vec<ModelPrediction>,
    recorded_at: Option<DateTime<Utc>>,
}

impl PredictionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the time the predictions were produced.
    pub fn with_recorded_at(mut self, at: DateTime<Utc>) -> Self {
        self.recorded_at = Some(at);
        self
    }

    /// Insert a prediction, returning the one it replaces for the same model.
    pub fn insert(&mut self, prediction: ModelPrediction) -> Option<ModelPrediction> {
        match self
            .predictions
            .iter_mut()
            .find(|p| p.model == prediction.model)
        {
            Some(existing) => Some(std::mem::replace(existing, prediction)),
            None => {
                self.predictions.push(prediction);
                None
            }
        }
    }

    /// Get the prediction recorded for `model`.
    pub fn get(&self, model: ModelKind) -> Option<&ModelPrediction> {
        self.predictions.iter().find(|p| p.model == model)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelPrediction> {
        self.predictions.iter()
    }

    pub fn as_slice(&self) -> &[ModelPrediction] {
        &self.predictions
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        self.recorded_at
    }

    /// Models missing from this set, in canonical order.
    pub fn missing_models(&self) -> Vec<ModelKind> {
        ModelKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_none())
            .collect()
    }
}

impl FromIterator<ModelPrediction> for PredictionSet {
    fn from_iter<I: IntoIterator<Item = ModelPrediction>>(iter: I) -> Self {
        let mut set = PredictionSet::new();
        for prediction in iter {
            set.insert(prediction);
        }
        set
    }
}

impl FromIterator<(ModelKind, f64)> for PredictionSet {
    fn from_iter<I: IntoIterator<Item = (ModelKind, f64)>>(iter: I) -> Self {
        iter.into_iter().map(ModelPrediction::from).collect()
    }
}

impl<'a> IntoIterator for &'a PredictionSet {
    type Item = &'a ModelPrediction;
    type IntoIter = std::slice::Iter<'a, ModelPrediction>;

    fn into_iter(self) -> Self::IntoIter {
        self.predictions.iter()
    }
}
