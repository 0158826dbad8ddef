//! Multiplicative shift between two positive samples

use robust_core::utils::{try_with_capacity, validate_sample};
use robust_core::{Error, Result, TwoSampleEstimator};

use crate::quantiles::shift_median;

/// How many times larger `x` typically is than `y`
///
/// `exp(shift(ln x, ln y))`: the shift estimator on the log scale. Every
/// value of both samples must be strictly positive.
pub fn ratio(x: &[f64], y: &[f64]) -> Result<f64> {
    let log_x = log_scale(x, "x")?;
    let log_y = log_scale(y, "y")?;
    Ok(shift_median(&log_x, &log_y)?.exp())
}

/// Natural logarithms of a validated, strictly positive sample
pub fn log_scale(values: &[f64], name: &str) -> Result<Vec<f64>> {
    validate_sample(values, name)?;
    if values.iter().any(|&v| v <= 0.0) {
        return Err(Error::InvalidInput(format!(
            "all values in {name} must be strictly positive"
        )));
    }
    let mut logs = try_with_capacity(values.len(), "log-scale working copy")?;
    logs.extend(values.iter().map(|v| v.ln()));
    Ok(logs)
}

/// Two-sample ratio estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatioEstimator;

impl TwoSampleEstimator for RatioEstimator {
    type Output = f64;

    fn estimate_two_sample(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        ratio(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ratio_of_scaled_sample() {
        let y = [1.0, 2.0, 4.0, 8.0];
        let x: Vec<f64> = y.iter().map(|v| v * 3.0).collect();
        assert_relative_eq!(ratio(&x, &y).unwrap(), 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_ratio_single_values() {
        assert_relative_eq!(ratio(&[10.0], &[4.0]).unwrap(), 2.5, max_relative = 1e-12);
        assert_relative_eq!(
            RatioEstimator.estimate_two_sample(&[2.0], &[8.0]).unwrap(),
            0.25,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_log_scale() {
        let logs = log_scale(&[1.0, std::f64::consts::E, 0.5], "x").unwrap();
        assert_eq!(logs[0], 0.0);
        assert_relative_eq!(logs[1], 1.0, epsilon = 1e-15);
        assert_relative_eq!(logs[2], -std::f64::consts::LN_2, epsilon = 1e-15);
        assert!(matches!(log_scale(&[2.0, 0.0], "x"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_ratio_requires_positive_values() {
        assert!(matches!(ratio(&[1.0, 0.0], &[1.0]), Err(Error::InvalidInput(_))));
        assert!(matches!(ratio(&[1.0], &[-2.0]), Err(Error::InvalidInput(_))));
        assert!(ratio(&[], &[1.0]).is_err());
    }
}
