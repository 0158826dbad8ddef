//! Distribution-free bounds from rank margins
//!
//! Each bound drops `margin / 2` pairwise values from both ends of the
//! pairwise population and reports the extreme survivors. No resampling is
//! involved, so the result depends only on the data and the misrate.

use robust_center::{center_sorted, pairwise_average_rank};
use robust_core::utils::{sorted_copy, validate_sample};
use robust_core::{Error, Result};
use robust_shift::select::select_kth;
use robust_shift::{log_scale, shift_quantiles};
use tracing::{debug, instrument};

use crate::margins::{
    min_achievable_misrate_one_sample, min_achievable_misrate_two_sample, pairwise_margin,
    signed_rank_margin,
};
use crate::types::ConfidenceInterval;

fn check_misrate(misrate: f64, min_misrate: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&misrate) {
        return Err(Error::InvalidParameter(format!(
            "misrate {misrate} must be in [0, 1]"
        )));
    }
    if misrate < min_misrate {
        return Err(Error::InvalidParameter(format!(
            "misrate {misrate} is below the smallest achievable {min_misrate:e} for this sample size"
        )));
    }
    Ok(())
}

/// Ranks `(half + 1, total − half)` of the surviving extremes
fn trimmed_ranks(margin: usize, total: u64) -> (u64, u64) {
    let half = (margin as u64 / 2).min((total - 1) / 2);
    (half + 1, total - half)
}

/// Bounds on the Hodges-Lehmann center of `values`
///
/// Built from the signed-rank margin over the `n(n+1)/2` pairwise averages.
/// Needs at least two values, and `misrate` must not be below `2^(1−n)`.
///
/// # Example
///
/// ```rust
/// use robust_confidence::center_bounds;
///
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let ci = center_bounds(&x, 0.05).unwrap();
/// assert_eq!((ci.lower, ci.upper), (3.5, 7.5));
/// ```
#[instrument(level = "debug", skip(values), fields(n = values.len()))]
pub fn center_bounds(values: &[f64], misrate: f64) -> Result<ConfidenceInterval> {
    validate_sample(values, "center bounds input")?;
    let n = values.len();
    if n < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        });
    }
    check_misrate(misrate, min_achievable_misrate_one_sample(n)?)?;

    let sorted = sorted_copy(values, false, "center bounds working copy")?;
    let total = (n as u64) * (n as u64 + 1) / 2;
    let margin = signed_rank_margin(n, misrate)?;
    let (k_lower, k_upper) = trimmed_ranks(margin, total);
    debug!(margin, k_lower, k_upper, total, "center bounds ranks");

    Ok(ConfidenceInterval::new(
        pairwise_average_rank(&sorted, k_lower)?,
        pairwise_average_rank(&sorted, k_upper)?,
        center_sorted(&sorted)?,
        1.0 - misrate,
    ))
}

/// Bounds on the shift between `x` and `y`
///
/// Built from the Mann-Whitney margin over the `m·n` pairwise differences.
/// `misrate` must not be below `2 / C(m + n, m)`.
///
/// # Example
///
/// ```rust
/// use robust_confidence::shift_bounds;
///
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let y = [3.0, 5.0, 6.0, 8.0, 9.0, 11.0, 12.0, 13.0];
/// let ci = shift_bounds(&x, &y, 0.05).unwrap();
/// assert_eq!((ci.lower, ci.upper), (-6.0, 1.0));
/// ```
#[instrument(level = "debug", skip(x, y), fields(m = x.len(), n = y.len()))]
pub fn shift_bounds(x: &[f64], y: &[f64], misrate: f64) -> Result<ConfidenceInterval> {
    validate_sample(x, "x")?;
    validate_sample(y, "y")?;
    let xs = sorted_copy(x, false, "shift bounds x working copy")?;
    let ys = sorted_copy(y, false, "shift bounds y working copy")?;
    sorted_shift_bounds(&xs, &ys, misrate)
}

/// Bounds on the ratio between positive samples `x` and `y`
///
/// [`shift_bounds`] on the log scale, mapped back with `exp`.
#[instrument(level = "debug", skip(x, y), fields(m = x.len(), n = y.len()))]
pub fn ratio_bounds(x: &[f64], y: &[f64], misrate: f64) -> Result<ConfidenceInterval> {
    let mut log_x = log_scale(x, "x")?;
    let mut log_y = log_scale(y, "y")?;
    log_x.sort_by(f64::total_cmp);
    log_y.sort_by(f64::total_cmp);

    let log_bounds = sorted_shift_bounds(&log_x, &log_y, misrate)?;
    Ok(ConfidenceInterval::new(
        log_bounds.lower.exp(),
        log_bounds.upper.exp(),
        log_bounds.estimate.exp(),
        log_bounds.confidence_level,
    ))
}

fn sorted_shift_bounds(xs: &[f64], ys: &[f64], misrate: f64) -> Result<ConfidenceInterval> {
    let (m, n) = (xs.len(), ys.len());
    check_misrate(misrate, min_achievable_misrate_two_sample(m, n)?)?;

    let total = (m as u64)
        .checked_mul(n as u64)
        .ok_or_else(|| Error::InvalidInput("pairwise population does not fit in 64 bits".into()))?;
    let margin = pairwise_margin(m, n, misrate)?;
    let (k_lower, k_upper) = trimmed_ranks(margin, total);
    debug!(margin, k_lower, k_upper, total, "shift bounds ranks");

    let estimate = shift_quantiles(xs, ys, &[0.5], true)?
        .first()
        .copied()
        .ok_or_else(|| Error::empty_input("shift bounds estimate"))?;

    Ok(ConfidenceInterval::new(
        select_kth(xs, ys, k_lower)?,
        select_kth(xs, ys, k_upper)?,
        estimate,
        1.0 - misrate,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn one_to_ten() -> Vec<f64> {
        (1..=10).map(f64::from).collect()
    }

    const Y: [f64; 8] = [3.0, 5.0, 6.0, 8.0, 9.0, 11.0, 12.0, 13.0];

    #[test]
    fn test_shift_bounds_known_values() {
        let x = one_to_ten();
        let ci = shift_bounds(&x, &Y, 0.05).unwrap();
        assert_eq!((ci.lower, ci.upper), (-6.0, 1.0));
        assert!(ci.contains(ci.estimate));
        assert_relative_eq!(ci.confidence_level, 0.95, epsilon = 1e-12);

        let narrower = shift_bounds(&x, &Y, 0.2).unwrap();
        assert_eq!((narrower.lower, narrower.upper), (-5.0, -1.0));
    }

    #[test]
    fn test_shift_bounds_ignores_input_order() {
        let mut x = one_to_ten();
        x.reverse();
        let y = [13.0, 3.0, 11.0, 5.0, 9.0, 6.0, 12.0, 8.0];
        assert_eq!(shift_bounds(&x, &y, 0.05).unwrap(), shift_bounds(&one_to_ten(), &Y, 0.05).unwrap());
    }

    #[test]
    fn test_shift_bounds_full_misrate_collapses_to_median() {
        let ci = shift_bounds(&[1.0, 2.0, 3.0], &[0.0], 1.0).unwrap();
        assert_eq!((ci.lower, ci.upper, ci.estimate), (2.0, 2.0, 2.0));
    }

    #[test]
    fn test_shift_bounds_rejects_unreachable_misrate() {
        // Two values per side can reach 1/3 at best
        assert!(matches!(
            shift_bounds(&[1.0, 2.0], &[3.0, 4.0], 0.05),
            Err(Error::InvalidParameter(_))
        ));
        assert!(shift_bounds(&[1.0, 2.0], &[3.0, 4.0], 0.5).is_ok());
        assert!(shift_bounds(&[1.0, 2.0], &[3.0, 4.0], f64::NAN).is_err());
        assert!(shift_bounds(&[1.0, 2.0], &[3.0, 4.0], 1.5).is_err());
        assert!(shift_bounds(&[], &[3.0, 4.0], 0.5).is_err());
    }

    #[test]
    fn test_center_bounds_known_values() {
        let ci = center_bounds(&one_to_ten(), 0.05).unwrap();
        assert_eq!((ci.lower, ci.upper, ci.estimate), (3.5, 7.5, 5.5));

        let skewed = [1.0, 2.0, 4.0, 7.0, 11.0, 16.0, 22.0, 29.0];
        let ci = center_bounds(&skewed, 0.1).unwrap();
        assert_eq!((ci.lower, ci.upper), (4.0, 18.0));
        assert!(ci.contains(ci.estimate));
    }

    #[test]
    fn test_center_bounds_rejects_bad_input() {
        assert!(matches!(
            center_bounds(&[1.0], 0.05),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            center_bounds(&[1.0, 2.0, 3.0, 4.0, 5.0], 1e-20),
            Err(Error::InvalidParameter(_))
        ));
        assert!(center_bounds(&[1.0, f64::INFINITY], 0.5).is_err());
    }

    #[test]
    fn test_ratio_bounds_known_values() {
        let ci = ratio_bounds(&one_to_ten(), &Y, 0.05).unwrap();
        assert_relative_eq!(ci.lower, 1.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(ci.upper, 10.0 / 9.0, max_relative = 1e-12);
        assert!(ci.contains(ci.estimate));
    }

    #[test]
    fn test_ratio_bounds_requires_positive_values() {
        assert!(matches!(
            ratio_bounds(&[1.0, -1.0, 2.0], &Y, 0.5),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bounds_widen_as_misrate_shrinks() {
        let x: Vec<f64> = (0..40).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
        let y: Vec<f64> = (0..30).map(|i| (i as f64 * 0.51).cos() * 8.0 + 1.0).collect();
        let wide = shift_bounds(&x, &y, 0.01).unwrap();
        let narrow = shift_bounds(&x, &y, 0.2).unwrap();
        assert!(wide.lower <= narrow.lower && narrow.upper <= wide.upper);

        let wide = center_bounds(&x, 0.01).unwrap();
        let narrow = center_bounds(&x, 0.2).unwrap();
        assert!(wide.lower <= narrow.lower && narrow.upper <= wide.upper);
    }
}
