//! Spread measures derived from the Shamos estimator

use robust_center::center;
use robust_core::utils::validate_sample;
use robust_core::{Error, Result};

use crate::shamos::spread;

/// Spread relative to the magnitude of the Hodges-Lehmann center
///
/// A robust alternative to the coefficient of variation. Undefined, and an
/// error, when the center is exactly zero.
pub fn rel_spread(values: &[f64]) -> Result<f64> {
    let center = center(values)?;
    if center == 0.0 {
        return Err(Error::InvalidInput(
            "relative spread is undefined when the center is zero".to_string(),
        ));
    }
    Ok(spread(values)? / center.abs())
}

/// Size-weighted average of the spreads of two samples
///
/// `(n·spread(x) + m·spread(y)) / (n + m)` with `n = |x|`, `m = |y|`.
pub fn avg_spread(x: &[f64], y: &[f64]) -> Result<f64> {
    validate_sample(x, "x")?;
    validate_sample(y, "y")?;
    let n = x.len() as f64;
    let m = y.len() as f64;
    Ok((n * spread(x)? + m * spread(y)?) / (n + m))
}
