//! Display strings for ensemble results and model rankings.

use std::fmt::Write;

use crate::ensemble::{EnsembleResult, OUTLIER_THRESHOLD};
use crate::evaluation::{EvaluationMetrics, Metric, ModelRanking};

/// Shown in place of an ensemble figure when no prediction qualified.
pub const NO_ESTIMATE: &str = "no ensemble estimate available";

/// Format a euro amount with thousands separators and cents: `€87,688.80`.
pub fn format_eur(value: f64) -> String {
    format_amount(value, 2)
}

/// Format a euro amount rounded to whole euros: `€66,085`.
pub fn format_eur_whole(value: f64) -> String {
    format_amount(value, 0)
}

fn format_amount(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let digits = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if value < 0.0 && digits.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push('€');
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a metric value the way it is shown in comparison tables.
pub fn format_metric(metric: Metric, value: f64) -> String {
    if metric.is_currency() {
        format_eur_whole(value)
    } else if metric == Metric::Mape {
        format!("{value:.2}%")
    } else {
        format!("{value:.4}")
    }
}

/// The single figure to display: the estimate, or [`NO_ESTIMATE`].
pub fn ensemble_headline(result: &EnsembleResult) -> String {
    match result.aggregate() {
        Some(value) => format_eur(value),
        None => NO_ESTIMATE.to_string(),
    }
}

/// Multi-line description of an ensemble: each model's prediction, the
/// estimate, and which models were left out.
pub fn ensemble_summary(result: &EnsembleResult) -> String {
    let threshold = format_eur_whole(OUTLIER_THRESHOLD);
    let mut out = String::new();

    let mut all: Vec<_> = result
        .included()
        .iter()
        .chain(result.excluded())
        .collect();
    all.sort_by_key(|p| p.model);

    for prediction in all {
        let _ = write!(
            out,
            "{:<14} {}",
            prediction.model.display_name(),
            format_eur(prediction.price)
        );
        if result.is_excluded(prediction.model) {
            let _ = write!(out, " (excluded, above {threshold})");
        }
        out.push('\n');
    }

    match result.aggregate() {
        Some(value) => {
            let _ = writeln!(
                out,
                "Ensemble average: {} ({} of {} models)",
                format_eur(value),
                result.included().len(),
                result.considered_count()
            );
        }
        None => {
            let _ = writeln!(out, "Ensemble average: {NO_ESTIMATE}");
        }
    }

    if !result.excluded().is_empty() {
        let names: Vec<&str> = result
            .excluded()
            .iter()
            .map(|p| p.model.display_name())
            .collect();
        let _ = writeln!(out, "Excluded models: {}", names.join(", "));
        let _ = writeln!(
            out,
            "Note: outlier predictions (above {threshold}) are excluded from the ensemble"
        );
    }

    out
}

/// Comparison table: one row per model in rank order, metric values and
/// the average rank, followed by the best model per metric.
pub fn ranking_table(ranking: &ModelRanking, results: &[EvaluationMetrics]) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:<4} {:<14}", "#", "Model");
    for metric in ranking.metrics() {
        let _ = write!(out, " {:>12}", metric.label());
    }
    let _ = writeln!(out, " {:>9}", "Avg Rank");

    for (position, entry) in ranking.ranked().iter().enumerate() {
        let _ = write!(
            out,
            "{:<4} {:<14}",
            position + 1,
            entry.model.display_name()
        );
        let metrics = results.iter().find(|r| r.model == entry.model);
        for &metric in ranking.metrics() {
            let cell = metrics
                .and_then(|m| m.value(metric))
                .map(|v| format_metric(metric, v))
                .unwrap_or_else(|| "-".to_string());
            let _ = write!(out, " {cell:>12}");
        }
        let avg = entry
            .average_rank
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, " {avg:>9}");
    }

    if let Some(best) = ranking.best_overall() {
        let _ = writeln!(out, "\nBest overall model: {}", best.display_name());
    }
    for leader in ranking.leaders() {
        let _ = writeln!(
            out,
            "Best for {}: {} ({})",
            leader.metric.label(),
            leader.model.display_name(),
            format_metric(leader.metric, leader.value)
        );
    }

    out
}
