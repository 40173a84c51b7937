//! Core data structures: model identifiers and recorded predictions.

mod model;
mod prediction;

pub use model::ModelKind;
pub use prediction::{ModelPrediction, PredictionSet};
