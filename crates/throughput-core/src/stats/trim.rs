//! Central-slice trimming and threshold counting.
//!
//! Trimming discards the tails of the sorted distribution so that the mean
//! and standard deviation of what remains are robust against outliers; those
//! robust estimates are then used as an adaptive threshold against the full
//! distribution.

use crate::error::AnalysisError;

/// Return the central fraction `f` of the sorted distribution.
///
/// The values are sorted ascending, `m = floor(n * (1 - f))` elements are
/// dropped from the lower tail and `m + 1` from the upper, so the result has
/// length `n - 2m - 1`. The extra dropped element at the upper tail is a
/// compatibility requirement: the numbers this tool reports must match its
/// predecessor, which always discards at least the single largest value.
///
/// # Errors
///
/// Returns [`AnalysisError::DegenerateTrim`] when the trim leaves nothing,
/// i.e. `n - 2m - 1 <= 0`. This covers `n <= 1` as well as fractions small
/// enough that the tails meet in the middle.
///
/// # Examples
///
/// ```
/// use throughput_core::stats::middle_slice;
///
/// let values = vec![10.0, 20.0, 30.0, 1000.0, 40.0];
/// let central = middle_slice(&values, 0.99).unwrap();
/// assert_eq!(central, vec![10.0, 20.0, 30.0, 40.0]);
/// ```
pub fn middle_slice(values: &[f64], f: f64) -> Result<Vec<f64>, AnalysisError> {
    let n = values.len();
    let m = (n as f64 * (1.0 - f)) as usize;

    if n < 2 * m + 2 {
        return Err(AnalysisError::DegenerateTrim {
            percent: f * 100.0,
            len: n,
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(sorted[m..n - m - 1].to_vec())
}

/// Count the values strictly greater than `threshold`.
///
/// # Examples
///
/// ```
/// use throughput_core::stats::count_above;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(count_above(&values, 2.0), 2);
/// ```
pub fn count_above(values: &[f64], threshold: f64) -> usize {
    values.iter().filter(|&&v| v > threshold).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_slice_drops_top_outlier() {
        let values = vec![10.0, 20.0, 30.0, 1000.0, 40.0];
        let central = middle_slice(&values, 0.99).unwrap();

        // m = floor(5 * 0.01) = 0, slice = sorted[0..4]
        assert_eq!(central, vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_middle_slice_length_law() {
        // len = n - 2m - 1 with m = floor(n * (1 - f))
        for n in 2..200usize {
            let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
            for f in [0.99, 0.9, 0.68] {
                let m = (n as f64 * (1.0 - f)) as usize;
                match middle_slice(&values, f) {
                    Ok(slice) => assert_eq!(slice.len(), n - 2 * m - 1, "n={} f={}", n, f),
                    Err(_) => assert!(n < 2 * m + 2, "n={} f={}", n, f),
                }
            }
        }
    }

    #[test]
    fn test_middle_slice_symmetric_trim_plus_one() {
        // 1.0 - 0.9 is 0.09999... in binary, so 100 * (1 - 0.9) truncates to
        // m = 9, not 10. The original tool truncates the same way.
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let slice = middle_slice(&values, 0.9).unwrap();

        assert_eq!(slice.len(), 81);
        assert_eq!(slice[0], 9.0);
        assert_eq!(*slice.last().unwrap(), 89.0);
    }

    #[test]
    fn test_middle_slice_exact_binary_fraction() {
        // f = 0.75 is exact in binary: n = 100 -> m = 25, slice = sorted[25..74]
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let slice = middle_slice(&values, 0.75).unwrap();

        assert_eq!(slice.len(), 49);
        assert_eq!(slice[0], 25.0);
        assert_eq!(*slice.last().unwrap(), 73.0);
    }

    #[test]
    fn test_middle_slice_sorts_input() {
        let values = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        let slice = middle_slice(&values, 0.99).unwrap();

        assert_eq!(slice, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_middle_slice_output_non_decreasing() {
        let values = vec![9.0, 3.0, 7.0, 1.0, 5.0, 8.0, 2.0, 6.0, 4.0, 10.0];
        let slice = middle_slice(&values, 0.68).unwrap();

        for pair in slice.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_middle_slice_empty_input() {
        let err = middle_slice(&[], 0.99).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateTrim { len: 0, .. }));
    }

    #[test]
    fn test_middle_slice_single_value() {
        // Even with m = 0 the upper trim drops the only element
        assert!(middle_slice(&[42.0], 0.99).is_err());
    }

    #[test]
    fn test_middle_slice_tails_meet() {
        // n = 4, f = 0.2 -> m = 3, tails overlap
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let err = middle_slice(&values, 0.2).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateTrim { len: 4, .. }));
    }

    #[test]
    fn test_middle_slice_two_values() {
        // m = 0, slice = sorted[0..1]
        let slice = middle_slice(&[7.0, 3.0], 0.99).unwrap();
        assert_eq!(slice, vec![3.0]);
    }

    #[test]
    fn test_count_above_basic() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(count_above(&values, 3.0), 2);
    }

    #[test]
    fn test_count_above_strictly_greater() {
        let values = vec![2.0, 2.0, 2.0];
        assert_eq!(count_above(&values, 2.0), 0);
    }

    #[test]
    fn test_count_above_all_and_none() {
        let values = vec![1.0, 2.0, 3.0];
        assert_eq!(count_above(&values, 0.0), 3);
        assert_eq!(count_above(&values, 10.0), 0);
    }

    #[test]
    fn test_count_above_empty() {
        assert_eq!(count_above(&[], 1.0), 0);
    }

    #[test]
    fn test_count_above_monotone_in_threshold() {
        let values = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        assert!(count_above(&values, 1.0) >= count_above(&values, 4.0));
        assert!(count_above(&values, 4.0) >= count_above(&values, 9.0));
    }
}
