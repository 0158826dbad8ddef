//! Standardized effect size between two samples

use robust_core::Result;
use robust_spread::avg_spread;

use crate::quantiles::shift_median;

/// Shift expressed in units of the pooled spread
///
/// `shift(x, y) / avg_spread(x, y)`, a robust alternative to Cohen's d.
/// Returns `+inf` when both samples have zero spread.
pub fn disparity(x: &[f64], y: &[f64]) -> Result<f64> {
    let shift = shift_median(x, y)?;
    let pooled = avg_spread(x, y)?;
    if pooled == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(shift / pooled)
}
