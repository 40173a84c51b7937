//! # lhp-ensemble
//!
//! Price estimation support for the Lisbon house-price regressors.
//!
//! Combines the predictions of six trained models (Linear, Decision Tree,
//! Random Forest, SVR, Ridge, Lasso) into one ensemble estimate while
//! leaving out implausible outliers, encodes house descriptions into model
//! inputs, and evaluates and ranks the models on accuracy metrics.

pub mod core;
pub mod encoding;
pub mod ensemble;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod report;
pub mod utils;

pub use error::{LhpError, Result};

pub mod prelude {
    pub use crate::core::{ModelKind, ModelPrediction, PredictionSet};
    pub use crate::encoding::{FeatureEncoder, HouseFeatures};
    pub use crate::ensemble::{aggregate, EnsembleResult, OUTLIER_THRESHOLD};
    pub use crate::error::{LhpError, Result};
    pub use crate::evaluation::{evaluate, rank_models, EvaluationMetrics, Metric, RankingConfig};
}
