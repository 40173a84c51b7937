//! Ensemble estimation.
//!
//! Combines the six models' predictions into one display value,
//! leaving out implausible outliers.

mod aggregator;

pub use aggregator::{aggregate, is_outlier, EnsembleResult, OUTLIER_THRESHOLD};
