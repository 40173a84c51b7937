//! Lisbon house-price ensemble CLI
//!
//! Commands:
//! - ensemble: Combine a file of per-model predictions into one estimate
//! - rank: Rank models from a file of evaluation results

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lhp_ensemble::ensemble::aggregate;
use lhp_ensemble::evaluation::{rank_models, Metric, RankingConfig};
use lhp_ensemble::{io, report, Result};

#[derive(Parser)]
#[command(name = "lhp")]
#[command(about = "Ensemble estimates and model rankings for Lisbon house-price models")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine per-model predictions into an ensemble estimate
    Ensemble {
        /// JSON file mapping model names to predicted prices
        file: PathBuf,
    },
    /// Rank models across evaluation metrics
    Rank {
        /// JSON array of evaluation results
        file: PathBuf,
        /// Comma-separated metrics (rmse, mae, mape, r2, cv_rmse, cv_mae, cv_r2)
        #[arg(short, long, value_delimiter = ',', conflicts_with = "cv")]
        metrics: Option<Vec<Metric>>,
        /// Rank on cross-validated means instead of test-set metrics
        #[arg(long)]
        cv: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Ensemble { file } => {
            let predictions = io::load_predictions(&file)?;
            let result = aggregate(&predictions);
            let uncovered = result.uncovered_models();
            if !uncovered.is_empty() {
                let names: Vec<&str> = uncovered.iter().map(|m| m.key()).collect();
                info!(
                    uncovered = %names.join(","),
                    "prediction file does not cover every model"
                );
            }
            print!("{}", report::ensemble_summary(&result));
        }
        Commands::Rank { file, metrics, cv } => {
            let results = io::load_evaluations(&file)?;
            let config = match (metrics, cv) {
                (Some(metrics), _) => RankingConfig::with_metrics(metrics),
                (None, true) => RankingConfig::cross_validated(),
                (None, false) => RankingConfig::test_set(),
            };
            let ranking = rank_models(&results, &config)?;
            print!("{}", report::ranking_table(&ranking, &results));
        }
    }
    Ok(())
}
