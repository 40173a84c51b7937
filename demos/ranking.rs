//! Model ranking example: evaluate test-set predictions and rank the models
//! across RMSE, MAE, MAPE and R².
//!
//! Run with: cargo run --example ranking

use lhp_ensemble::evaluation::{evaluate, rank_models, CvSummary, RankingConfig};
use lhp_ensemble::prelude::ModelKind;
use lhp_ensemble::report::ranking_table;

fn main() {
    println!("=== Model Ranking Example ===\n");

    let actual = vec![285_000.0, 410_000.0, 520_000.0, 365_000.0, 690_000.0, 240_000.0];
    let predictions = [
        (
            ModelKind::Linear,
            vec![301_000.0, 388_000.0, 560_000.0, 342_000.0, 640_000.0, 275_000.0],
        ),
        (
            ModelKind::RandomForest,
            vec![290_000.0, 402_000.0, 531_000.0, 371_000.0, 668_000.0, 249_000.0],
        ),
        (
            ModelKind::Ridge,
            vec![297_000.0, 395_000.0, 548_000.0, 350_000.0, 651_000.0, 262_000.0],
        ),
    ];

    let mut results = Vec::new();
    for (model, predicted) in &predictions {
        match evaluate(*model, &actual, predicted) {
            Ok(metrics) => results.push(metrics),
            Err(e) => println!("Error evaluating {model}: {e}"),
        }
    }

    match rank_models(&results, &RankingConfig::default()) {
        Ok(ranking) => print!("{}", ranking_table(&ranking, &results)),
        Err(e) => println!("Error ranking models: {e}"),
    }

    // Cross-validation summary over five folds
    println!("\n--- Cross-Validation Summary ---\n");
    match CvSummary::from_folds(
        &[0.91, 0.93, 0.90, 0.92, 0.94],
        &[64_000.0, 61_500.0, 70_200.0, 66_900.0, 59_800.0],
        &[38_100.0, 36_900.0, 41_000.0, 39_700.0, 35_600.0],
    ) {
        Ok(cv) => {
            println!("Cross-validated R²: {:.4} ± {:.4}", cv.r2_mean, cv.r2_std);
            println!("Cross-validated RMSE: {:.2} ± {:.2}", cv.rmse_mean, cv.rmse_std);
            println!("Cross-validated MAE: {:.2} ± {:.2}", cv.mae_mean, cv.mae_std);
        }
        Err(e) => println!("Error summarizing folds: {e}"),
    }
}
