//! Model evaluation: accuracy metrics, cross-validation summaries and ranking.

mod cross_validation;
pub mod metrics;
mod ranking;

pub use cross_validation::CvSummary;
pub use metrics::{evaluate, EvaluationMetrics, Metric};
pub use ranking::{rank_models, MetricLeader, ModelRanking, RankedModel, RankingConfig};
