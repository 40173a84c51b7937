//! Cross-metric model comparison.
//!
//! Every metric ranks the models independently (best = 1, ties share the
//! mean of their positions). A model's overall standing is the average of
//! its per-metric ranks, lower being better.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use super::metrics::{EvaluationMetrics, Metric};
use crate::core::ModelKind;
use crate::error::{LhpError, Result};
use crate::utils::stats::fractional_ranks;

/// Configuration for model ranking.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Metrics to rank on.
    pub metrics: Vec<Metric>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self::test_set()
    }
}

impl RankingConfig {
    /// Rank on RMSE, MAE, MAPE and R².
    pub fn test_set() -> Self {
        Self {
            metrics: Metric::TEST_SET.to_vec(),
        }
    }

    /// Rank on the cross-validated RMSE, MAE and R² means.
    pub fn cross_validated() -> Self {
        Self {
            metrics: Metric::CROSS_VALIDATED.to_vec(),
        }
    }

    /// Rank on an explicit metric list.
    pub fn with_metrics(metrics: Vec<Metric>) -> Self {
        Self { metrics }
    }
}

/// One model's place in the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedModel {
    pub model: ModelKind,
    /// Rank per configured metric; metrics the model lacks are absent.
    pub ranks: HashMap<Metric, f64>,
    /// Mean of the available ranks, `None` if none are available.
    pub average_rank: Option<f64>,
}

/// Best model on a single metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricLeader {
    pub metric: Metric,
    pub model: ModelKind,
    pub value: f64,
}

/// Full comparison of a set of models.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRanking {
    metrics: Vec<Metric>,
    /// Sorted by average rank, best first.
    ranked: Vec<RankedModel>,
    leaders: Vec<MetricLeader>,
}

impl ModelRanking {
    /// Metrics the ranking was computed on.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Models ordered from best to worst average rank.
    pub fn ranked(&self) -> &[RankedModel] {
        &self.ranked
    }

    /// Model with the lowest average rank.
    pub fn best_overall(&self) -> Option<ModelKind> {
        self.ranked
            .first()
            .filter(|r| r.average_rank.is_some())
            .map(|r| r.model)
    }

    /// Best model for each metric that at least one model reports.
    pub fn leaders(&self) -> &[MetricLeader] {
        &self.leaders
    }

    /// Best model for one metric.
    pub fn leader(&self, metric: Metric) -> Option<&MetricLeader> {
        self.leaders.iter().find(|l| l.metric == metric)
    }

    /// Look up a model's entry.
    pub fn get(&self, model: ModelKind) -> Option<&RankedModel> {
        self.ranked.iter().find(|r| r.model == model)
    }
}

/// Rank models across the configured metrics.
///
/// # Errors
/// `EmptyData` when `results` is empty, `InvalidParameter` when the config
/// names no metric.
pub fn rank_models(results: &[EvaluationMetrics], config: &RankingConfig) -> Result<ModelRanking> {
    if results.is_empty() {
        return Err(LhpError::EmptyData);
    }
    if config.metrics.is_empty() {
        return Err(LhpError::InvalidParameter(
            "ranking needs at least one metric".to_string(),
        ));
    }

    let mut ranked: Vec<RankedModel> = results
        .iter()
        .map(|r| RankedModel {
            model: r.model,
            ranks: HashMap::new(),
            average_rank: None,
        })
        .collect();
    let mut leaders = Vec::with_capacity(config.metrics.len());

    for &metric in &config.metrics {
        let values: Vec<Option<f64>> = results.iter().map(|r| r.value(metric)).collect();
        let ranks = fractional_ranks(&values, metric.higher_is_better());

        for (entry, rank) in ranked.iter_mut().zip(ranks) {
            if let Some(rank) = rank {
                entry.ranks.insert(metric, rank);
            }
        }

        if let Some(leader) = find_leader(results, &values, metric) {
            leaders.push(leader);
        }
    }

    for entry in &mut ranked {
        if !entry.ranks.is_empty() {
            let sum: f64 = entry.ranks.values().sum();
            entry.average_rank = Some(sum / entry.ranks.len() as f64);
        }
    }

    // stable: equal averages keep input order; unranked models go last
    ranked.sort_by(|a, b| match (a.average_rank, b.average_rank) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    debug!(
        models = ranked.len(),
        metrics = config.metrics.len(),
        best = ranked.first().map(|r| r.model.key()),
        "models ranked"
    );

    Ok(ModelRanking {
        metrics: config.metrics.clone(),
        ranked,
        leaders,
    })
}

/// First model holding the best value for `metric`.
fn find_leader(
    results: &[EvaluationMetrics],
    values: &[Option<f64>],
    metric: Metric,
) -> Option<MetricLeader> {
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.iter().enumerate() {
        let Some(v) = value.filter(|v| !v.is_nan()) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((_, current)) if metric.higher_is_better() => v > current,
            Some((_, current)) => v < current,
        };
        if better {
            best = Some((i, v));
        }
    }

    best.map(|(i, value)| MetricLeader {
        metric,
        model: results[i].model,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::CvSummary;
    use approx::assert_relative_eq;

    fn metrics(model: ModelKind, rmse: f64, mae: f64, mape: Option<f64>, r2: f64) -> EvaluationMetrics {
        EvaluationMetrics {
            model,
            rmse,
            mae,
            mape,
            r_squared: r2,
            cv: None,
        }
    }

    #[test]
    fn single_metric_orders_by_value() {
        let results = vec![
            metrics(ModelKind::Linear, 300.0, 1.0, None, 0.5),
            metrics(ModelKind::Ridge, 100.0, 1.0, None, 0.5),
            metrics(ModelKind::Lasso, 200.0, 1.0, None, 0.5),
        ];

        let ranking =
            rank_models(&results, &RankingConfig::with_metrics(vec![Metric::Rmse])).unwrap();

        let order: Vec<_> = ranking.ranked().iter().map(|r| r.model).collect();
        assert_eq!(order, vec![ModelKind::Ridge, ModelKind::Lasso, ModelKind::Linear]);
        assert_eq!(ranking.best_overall(), Some(ModelKind::Ridge));
        assert_eq!(ranking.leader(Metric::Rmse).unwrap().value, 100.0);
    }

    #[test]
    fn r2_ranks_descending() {
        let results = vec![
            metrics(ModelKind::Linear, 1.0, 1.0, None, 0.70),
            metrics(ModelKind::RandomForest, 1.0, 1.0, None, 0.92),
        ];

        let ranking =
            rank_models(&results, &RankingConfig::with_metrics(vec![Metric::R2])).unwrap();

        assert_eq!(ranking.best_overall(), Some(ModelKind::RandomForest));
        let leader = ranking.leader(Metric::R2).unwrap();
        assert_eq!(leader.model, ModelKind::RandomForest);
        assert_relative_eq!(leader.value, 0.92);
    }

    #[test]
    fn ties_share_rank_and_keep_input_order() {
        let results = vec![
            metrics(ModelKind::Svr, 100.0, 1.0, None, 0.5),
            metrics(ModelKind::Ridge, 100.0, 1.0, None, 0.5),
        ];

        let ranking =
            rank_models(&results, &RankingConfig::with_metrics(vec![Metric::Rmse])).unwrap();

        assert_eq!(ranking.ranked()[0].model, ModelKind::Svr);
        assert_eq!(ranking.ranked()[0].average_rank, Some(1.5));
        assert_eq!(ranking.ranked()[1].average_rank, Some(1.5));
        assert_eq!(ranking.leader(Metric::Rmse).unwrap().model, ModelKind::Svr);
    }

    #[test]
    fn missing_mape_averages_over_available_metrics() {
        let results = vec![
            metrics(ModelKind::Linear, 100.0, 100.0, None, 0.9),
            metrics(ModelKind::Ridge, 200.0, 200.0, Some(10.0), 0.8),
        ];

        let ranking = rank_models(&results, &RankingConfig::default()).unwrap();

        let linear = ranking.get(ModelKind::Linear).unwrap();
        assert!(!linear.ranks.contains_key(&Metric::Mape));
        assert_eq!(linear.average_rank, Some(1.0));

        let ridge = ranking.get(ModelKind::Ridge).unwrap();
        // ranks 2, 2, 1, 2
        assert_relative_eq!(ridge.average_rank.unwrap(), 1.75);
        assert_eq!(ranking.leader(Metric::Mape).unwrap().model, ModelKind::Ridge);
    }

    #[test]
    fn cv_metrics_without_summaries_leave_models_unranked() {
        let mut with_cv = metrics(ModelKind::Lasso, 1.0, 1.0, None, 0.5);
        with_cv.cv = Some(CvSummary::from_folds(&[0.8, 0.9], &[10.0, 12.0], &[5.0, 6.0]).unwrap());
        let results = vec![metrics(ModelKind::Linear, 1.0, 1.0, None, 0.5), with_cv];

        let ranking = rank_models(&results, &RankingConfig::cross_validated()).unwrap();

        assert_eq!(ranking.ranked()[0].model, ModelKind::Lasso);
        assert_eq!(ranking.ranked()[1].average_rank, None);
        assert_eq!(ranking.best_overall(), Some(ModelKind::Lasso));
        assert_eq!(ranking.leaders().len(), 3);
    }

    #[test]
    fn rejects_empty_input_and_config() {
        assert_eq!(
            rank_models(&[], &RankingConfig::default()).unwrap_err(),
            LhpError::EmptyData
        );

        let results = vec![metrics(ModelKind::Linear, 1.0, 1.0, None, 0.5)];
        assert!(matches!(
            rank_models(&results, &RankingConfig::with_metrics(Vec::new())),
            Err(LhpError::InvalidParameter(_))
        ));
    }
}
