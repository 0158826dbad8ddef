//! Core traits for spread estimation

use robust_core::{Error, OneSampleEstimator, Result};

/// Robust scale estimators that can be used for standardization
pub trait RobustScale: OneSampleEstimator {
    /// Express `value` in units of the sample's scale
    fn standardize(&self, sample: &[f64], value: f64) -> Result<f64> {
        let scale = self.estimate(sample)?;
        divide_by_scale(value, scale)
    }

    /// Standardize a value using pre-sorted data
    fn standardize_sorted(&self, sorted_sample: &[f64], value: f64) -> Result<f64> {
        let scale = self.estimate_sorted(sorted_sample)?;
        divide_by_scale(value, scale)
    }
}

fn divide_by_scale(value: f64, scale: f64) -> Result<f64> {
    if scale == 0.0 {
        return Err(Error::InvalidInput("Scale estimate is zero".to_string()));
    }
    Ok(value / scale)
}
