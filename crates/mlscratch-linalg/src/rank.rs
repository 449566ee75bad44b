//! Rank-based lookups over sorted data.
//!
//! The median and quantile statistics on [`crate::Vector`] sort a copy of their
//! input and then defer to the helpers here.

/// Returns the value at quantile `p` using the nearest-rank method.
///
/// For `n` values the result is the element at index `floor(n * p)`, clamped
/// to the last valid index so that `p == 1.0` yields the maximum.
///
/// Returns `None` if `sorted_values` is empty. `p` is expected to lie in
/// `[0, 1]`; callers validate it.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use mlscratch_linalg::rank::nearest_rank;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// assert_eq!(nearest_rank(&values, 0.5), Some(5.0));
/// assert_eq!(nearest_rank(&values, 1.0), Some(8.0));
/// assert_eq!(nearest_rank(&[], 0.5), None);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn nearest_rank(sorted_values: &[f64], p: f64) -> Option<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );
    let last = sorted_values.len().checked_sub(1)?;
    let idx = (sorted_values.len() as f64 * p) as usize;
    Some(sorted_values[idx.min(last)])
}

/// Returns the median of sorted data: the middle element for odd lengths and
/// the mean of the two middle elements for even lengths.
///
/// Returns `None` if `sorted_values` is empty.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
#[must_use]
pub fn median(sorted_values: &[f64]) -> Option<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );
    let len = sorted_values.len();
    if len == 0 {
        return None;
    }
    let high = len / 2;
    if len % 2 == 1 {
        Some(sorted_values[high])
    } else {
        Some(f64::midpoint(sorted_values[high - 1], sorted_values[high]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_rank_interior() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        assert_eq!(nearest_rank(&values, 0.0), Some(1.0));
        assert_eq!(nearest_rank(&values, 0.25), Some(3.0));
        assert_eq!(nearest_rank(&values, 0.5), Some(6.0));
        assert_eq!(nearest_rank(&values, 0.75), Some(8.0));
    }

    #[test]
    fn test_nearest_rank_clamps_upper_boundary() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(nearest_rank(&values, 1.0), Some(3.0));
    }

    #[test]
    fn test_nearest_rank_single_value() {
        assert_eq!(nearest_rank(&[42.0], 0.0), Some(42.0));
        assert_eq!(nearest_rank(&[42.0], 1.0), Some(42.0));
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[7.0]), Some(7.0));
        assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 10.0]), Some(2.5));
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_unsorted_input_panics() {
        let _ = nearest_rank(&[3.0, 1.0], 0.5);
    }
}
