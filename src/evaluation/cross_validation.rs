//! Summaries of k-fold cross-validation scores.

use serde::{Deserialize, Serialize};

use super::metrics::{check_pair, mae, r_squared, rmse};
use crate::error::{LhpError, Result};
use crate::utils::stats::{mean, population_std_dev};

/// Mean and standard deviation of per-fold scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvSummary {
    /// Number of folds evaluated.
    pub folds: usize,
    pub r2_mean: f64,
    pub r2_std: f64,
    pub rmse_mean: f64,
    pub rmse_std: f64,
    pub mae_mean: f64,
    pub mae_std: f64,
}

impl CvSummary {
    /// Summarize per-fold R², RMSE and MAE scores.
    ///
    /// All three slices must hold one score per fold.
    pub fn from_folds(r2: &[f64], rmse: &[f64], mae: &[f64]) -> Result<Self> {
        if r2.is_empty() {
            return Err(LhpError::EmptyData);
        }
        for other in [rmse, mae] {
            if other.len() != r2.len() {
                return Err(LhpError::DimensionMismatch {
                    expected: r2.len(),
                    got: other.len(),
                });
            }
        }

        Ok(Self {
            folds: r2.len(),
            r2_mean: mean(r2),
            r2_std: population_std_dev(r2),
            rmse_mean: mean(rmse),
            rmse_std: population_std_dev(rmse),
            mae_mean: mean(mae),
            mae_std: population_std_dev(mae),
        })
    }

    /// Score each fold's held-out `(actual, predicted)` pair and summarize.
    pub fn from_fold_predictions(folds: &[(Vec<f64>, Vec<f64>)]) -> Result<Self> {
        if folds.is_empty() {
            return Err(LhpError::EmptyData);
        }

        let mut r2_scores = Vec::with_capacity(folds.len());
        let mut rmse_scores = Vec::with_capacity(folds.len());
        let mut mae_scores = Vec::with_capacity(folds.len());

        for (actual, predicted) in folds {
            check_pair(actual, predicted)?;
            r2_scores.push(r_squared(actual, predicted));
            rmse_scores.push(rmse(actual, predicted));
            mae_scores.push(mae(actual, predicted));
        }

        Self::from_folds(&r2_scores, &rmse_scores, &mae_scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_folds_mean_and_std() {
        let summary = CvSummary::from_folds(
            &[0.90, 0.92, 0.88, 0.91, 0.89],
            &[60_000.0, 70_000.0, 65_000.0, 62_000.0, 68_000.0],
            &[40_000.0, 40_000.0, 40_000.0, 40_000.0, 40_000.0],
        )
        .unwrap();

        assert_eq!(summary.folds, 5);
        assert_relative_eq!(summary.r2_mean, 0.90, epsilon = 1e-12);
        assert_relative_eq!(summary.r2_std, 0.0002_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(summary.rmse_mean, 65_000.0, epsilon = 1e-9);
        assert_relative_eq!(summary.mae_std, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn from_folds_rejects_uneven_lists() {
        let err = CvSummary::from_folds(&[0.9, 0.8], &[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, LhpError::DimensionMismatch { expected: 2, got: 1 });
        assert_eq!(
            CvSummary::from_folds(&[], &[], &[]).unwrap_err(),
            LhpError::EmptyData
        );
    }

    #[test]
    fn from_fold_predictions_scores_each_fold() {
        let folds = vec![
            (vec![100.0, 200.0], vec![110.0, 190.0]),
            (vec![300.0, 400.0], vec![330.0, 370.0]),
        ];

        let summary = CvSummary::from_fold_predictions(&folds).unwrap();

        assert_eq!(summary.folds, 2);
        assert_relative_eq!(summary.mae_mean, 20.0, epsilon = 1e-10);
        assert_relative_eq!(summary.mae_std, 10.0, epsilon = 1e-10);
        assert_relative_eq!(summary.rmse_mean, 20.0, epsilon = 1e-10);
    }

    #[test]
    fn from_fold_predictions_propagates_fold_errors() {
        let folds = vec![(vec![1.0, 2.0], vec![1.0])];
        assert!(matches!(
            CvSummary::from_fold_predictions(&folds),
            Err(LhpError::DimensionMismatch { .. })
        ));
    }
}
