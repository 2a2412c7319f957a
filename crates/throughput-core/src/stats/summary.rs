//! Summary statistics for measurement values.

use serde::{Deserialize, Serialize};

/// Min, max, mean and population standard deviation of a value set.
///
/// The standard deviation divides by `n`, not `n - 1`: the input is treated
/// as the whole population of interest, not a sample from one, and the
/// reported numbers must match the measurement tooling this replaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

impl StatsSummary {
    /// Compute summary statistics from values.
    ///
    /// # Returns
    ///
    /// * `Some(summary)` - Statistical summary
    /// * `None` - If values is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use throughput_core::stats::StatsSummary;
    ///
    /// let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    /// let summary = StatsSummary::from_values(&data).unwrap();
    /// assert_eq!(summary.mean, 5.0);
    /// assert_eq!(summary.std_dev, 2.0);
    /// ```
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        let mean = sum / count as f64;

        let squared_diffs: f64 = values.iter().map(|&x| (x - mean).powi(2)).sum();
        let std_dev = (squared_diffs / count as f64).sqrt();

        Some(StatsSummary {
            min,
            max,
            mean,
            std_dev,
            count,
        })
    }
}
