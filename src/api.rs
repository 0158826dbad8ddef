//! Host-facing operations
//!
//! Thin entry points over the member crates with one uniform contract:
//! slices in, `Result` out, inputs never modified. Any host binding wraps
//! these functions and maps [`ErrorKind`](crate::ErrorKind) to its own
//! exception types.

use crate::Result;
use robust_confidence::{BootstrapConfig, ConfidenceInterval};
use tracing::instrument;

/// Hodges-Lehmann center of a non-empty, finite sample
///
/// ```rust
/// assert_eq!(robust_pairwise::api::center(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// ```
pub fn center(values: &[f64]) -> Result<f64> {
    robust_center::center(values)
}

/// Shamos spread of a non-empty, finite sample
///
/// ```rust
/// assert_eq!(robust_pairwise::api::spread(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 1.5);
/// ```
pub fn spread(values: &[f64]) -> Result<f64> {
    robust_spread::spread(values)
}

/// Type-7 quantiles of all differences `xᵢ − yⱼ`, one per probability
///
/// With `assume_sorted` both samples must already be ascending.
///
/// ```rust
/// let q = robust_pairwise::api::shift(&[5.0], &[1.0, 2.0, 3.0], &[0.0, 1.0], false).unwrap();
/// assert_eq!(q, vec![2.0, 4.0]);
/// ```
#[instrument(
    level = "debug",
    skip(x, y, probabilities),
    fields(m = x.len(), n = y.len(), quantiles = probabilities.len())
)]
pub fn shift(x: &[f64], y: &[f64], probabilities: &[f64], assume_sorted: bool) -> Result<Vec<f64>> {
    robust_shift::shift_quantiles(x, y, probabilities, assume_sorted)
}

/// Sorted Hodges-Lehmann centers of seeded resamples of an ascending sample
pub fn bootstrap_center(
    sorted_values: &[f64],
    resample_size: usize,
    iterations: usize,
    seed: &str,
) -> Result<Vec<f64>> {
    robust_confidence::bootstrap_center(sorted_values, resample_size, iterations, seed)
}

/// Spread relative to the magnitude of the center
pub fn rel_spread(values: &[f64]) -> Result<f64> {
    robust_spread::rel_spread(values)
}

/// Size-weighted spread of two samples
pub fn avg_spread(x: &[f64], y: &[f64]) -> Result<f64> {
    robust_spread::avg_spread(x, y)
}

/// Median of all pairwise differences `xᵢ − yⱼ`
pub fn shift_median(x: &[f64], y: &[f64]) -> Result<f64> {
    robust_shift::shift_median(x, y)
}

/// Multiplicative shift of two strictly positive samples
pub fn ratio(x: &[f64], y: &[f64]) -> Result<f64> {
    robust_shift::ratio(x, y)
}

/// Shift expressed in units of [`avg_spread`]
pub fn disparity(x: &[f64], y: &[f64]) -> Result<f64> {
    robust_shift::disparity(x, y)
}

/// Percentile-bootstrap interval around the center
pub fn center_bounds_approx(values: &[f64], config: &BootstrapConfig) -> Result<ConfidenceInterval> {
    robust_confidence::center_bounds_approx(values, config)
}

/// Signed-rank bounds on the center, missing the true center with probability `misrate`
pub fn center_bounds(values: &[f64], misrate: f64) -> Result<ConfidenceInterval> {
    robust_confidence::center_bounds(values, misrate)
}

/// Mann-Whitney bounds on the shift between `x` and `y`
///
/// ```rust
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let y = [3.0, 5.0, 6.0, 8.0, 9.0, 11.0, 12.0, 13.0];
/// let ci = robust_pairwise::api::shift_bounds(&x, &y, 0.05).unwrap();
/// assert_eq!((ci.lower, ci.upper), (-6.0, 1.0));
/// ```
pub fn shift_bounds(x: &[f64], y: &[f64], misrate: f64) -> Result<ConfidenceInterval> {
    robust_confidence::shift_bounds(x, y, misrate)
}

/// Bounds on the ratio of two strictly positive samples
pub fn ratio_bounds(x: &[f64], y: &[f64], misrate: f64) -> Result<ConfidenceInterval> {
    robust_confidence::ratio_bounds(x, y, misrate)
}
