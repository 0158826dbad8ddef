//! Utility functions for working with data slices

use crate::{Error, Result};

/// Sort data and return a new vector
///
/// Uses IEEE total ordering, so the result is well defined for every input.
/// Callers that need finite data validate before sorting.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Allocate an empty vector with room for `capacity` elements
///
/// Reports allocation failure as [`Error::Memory`] instead of aborting.
pub fn try_with_capacity<T>(capacity: usize, what: &str) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|e| Error::Memory(format!("{what} ({capacity} elements): {e}")))?;
    Ok(buffer)
}

/// Sorted working copy of a sample
///
/// The input is never modified. When `assume_sorted` is set the copy is taken
/// as-is.
pub fn sorted_copy(data: &[f64], assume_sorted: bool, what: &str) -> Result<Vec<f64>> {
    let mut copy = try_with_capacity(data.len(), what)?;
    copy.extend_from_slice(data);
    if !assume_sorted {
        copy.sort_by(f64::total_cmp);
    }
    Ok(copy)
}

/// Check that a sample is non-empty and contains only finite values
pub fn validate_sample(data: &[f64], name: &str) -> Result<()> {
    if data.is_empty() {
        return Err(Error::empty_input(name));
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite(name));
    }
    Ok(())
}

/// Check that every probability lies in [0, 1]
///
/// NaN is rejected as well.
pub fn validate_probabilities(probabilities: &[f64]) -> Result<()> {
    match probabilities.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        Some(&p) => Err(Error::invalid_probability(p)),
        None => Ok(()),
    }
}

/// True when the slice is in ascending order
pub fn is_sorted(data: &[f64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
