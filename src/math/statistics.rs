//! Descriptive statistics over coordinate samples
//!
//! All variances are population variances (divided by `n`), matching how
//! the validator and analyzer measure spread.

use num_traits::ToPrimitive;

/// Arithmetic mean, or `None` for an empty sample
pub fn mean<T: ToPrimitive + Copy>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let sum: f64 = values.iter().filter_map(ToPrimitive::to_f64).sum();
    Some(sum / values.len() as f64)
}

/// Population variance; zero for an empty sample
pub fn variance<T: ToPrimitive + Copy>(values: &[T]) -> f64 {
    let Some(average) = mean(values) else {
        return 0.0;
    };

    let squared: f64 = values
        .iter()
        .filter_map(ToPrimitive::to_f64)
        .map(|value| (value - average).powi(2))
        .sum();
    squared / values.len() as f64
}

/// Differences between consecutive values of an already sorted sample
pub fn consecutive_gaps(sorted: &[f64]) -> Vec<f64> {
    sorted
        .windows(2)
        .map(|pair| match pair {
            [a, b] => b - a,
            _ => 0.0,
        })
        .collect()
}

/// Summary statistics for one coordinate axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Population variance
    pub variance: f64,
    /// Square root of the variance
    pub std_dev: f64,
}

impl AxisStatistics {
    /// Summarise a sample, returning `None` when it is empty
    pub fn from_values<T: ToPrimitive + Copy>(values: &[T]) -> Option<Self> {
        let average = mean(values)?;
        let (min, max) = values
            .iter()
            .filter_map(ToPrimitive::to_f64)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let spread = variance(values);

        Some(Self {
            mean: average,
            min,
            max,
            variance: spread,
            std_dev: spread.sqrt(),
        })
    }
}
