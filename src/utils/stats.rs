//! Statistical utility functions.

use std::cmp::Ordering;

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the population variance of a slice (n denominator).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / values.len() as f64
}

/// Calculate the population standard deviation of a slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Rank values 1..n, giving tied values the mean of the positions they span.
///
/// `None` entries (and NaN) are left unranked and do not occupy a position.
/// With `descending` the largest value receives rank 1.
pub fn fractional_ranks(values: &[Option<f64>], descending: bool) -> Vec<Option<f64>> {
    let mut order: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.filter(|x| !x.is_nan()).map(|x| (i, x)))
        .collect();

    order.sort_by(|a, b| {
        let ord = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });

    let mut ranks = vec![None; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && order[end].1 == order[start].1 {
            end += 1;
        }
        // positions start..end are 0-based; ranks are 1-based
        let rank = (start + 1 + end) as f64 / 2.0;
        for &(index, _) in &order[start..end] {
            ranks[index] = Some(rank);
        }
        start = end;
    }

    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0]), 10.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn population_variance_uses_n_denominator() {
        assert_relative_eq!(
            population_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            2.0,
            epsilon = 1e-10
        );
        assert_relative_eq!(population_variance(&[7.0]), 0.0, epsilon = 1e-10);
        assert!(population_variance(&[]).is_nan());
    }

    #[test]
    fn population_std_dev_calculates_correctly() {
        assert_relative_eq!(
            population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]),
            2.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn ranks_ascending_without_ties() {
        let ranks = fractional_ranks(&[Some(30.0), Some(10.0), Some(20.0)], false);
        assert_eq!(ranks, vec![Some(3.0), Some(1.0), Some(2.0)]);
    }

    #[test]
    fn ranks_descending() {
        let ranks = fractional_ranks(&[Some(0.85), Some(0.92), Some(0.80)], true);
        assert_eq!(ranks, vec![Some(2.0), Some(1.0), Some(3.0)]);
    }

    #[test]
    fn ties_share_average_position() {
        let ranks = fractional_ranks(&[Some(5.0), Some(1.0), Some(5.0), Some(9.0)], false);
        assert_eq!(ranks, vec![Some(2.5), Some(1.0), Some(2.5), Some(4.0)]);
    }

    #[test]
    fn missing_values_stay_unranked() {
        let ranks = fractional_ranks(&[Some(3.0), None, Some(f64::NAN), Some(1.0)], false);
        assert_eq!(ranks, vec![Some(2.0), None, None, Some(1.0)]);
    }
}
