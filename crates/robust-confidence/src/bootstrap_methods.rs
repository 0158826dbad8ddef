//! Bootstrap method implementations
//!
//! A method turns a bootstrap distribution into a confidence interval.

use crate::{ConfidenceInterval, ConfidenceLevel};
use robust_core::utils::is_sorted;
use robust_core::{Error, Result};

/// Bootstrap method for calculating confidence intervals
pub trait BootstrapMethod: Clone + Send + Sync {
    /// Calculate confidence interval from ascending bootstrap estimates
    fn calculate_interval(
        &self,
        sorted_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval>;

    /// Method name for documentation
    fn name(&self) -> &'static str;
}

/// Percentile bootstrap method
///
/// The simplest bootstrap method. Uses the empirical percentiles of the
/// bootstrap distribution: positions `⌊α/2 · B⌋` and `⌊(1 − α/2) · B⌋` of the
/// `B` sorted estimates, clamped to the last one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl BootstrapMethod for PercentileBootstrap {
    fn calculate_interval(
        &self,
        sorted_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        if sorted_estimates.is_empty() {
            return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
        }
        if !is_sorted(sorted_estimates) {
            return Err(Error::InvalidInput(
                "bootstrap estimates must be sorted ascending".to_string(),
            ));
        }

        let tail = ConfidenceLevel::new(confidence_level)?.tail();
        let len = sorted_estimates.len();
        let lower_idx = (tail * len as f64) as usize;
        let upper_idx = ((1.0 - tail) * len as f64) as usize;

        Ok(ConfidenceInterval::new(
            sorted_estimates[lower_idx.min(len - 1)],
            sorted_estimates[upper_idx.min(len - 1)],
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_positions() {
        let estimates: Vec<f64> = (0..100).map(f64::from).collect();
        let ci = PercentileBootstrap
            .calculate_interval(&estimates, 50.0, 0.5)
            .unwrap();
        assert_eq!(ci.lower, 25.0);
        assert_eq!(ci.upper, 75.0);
        assert_eq!(ci.estimate, 50.0);
        assert_eq!(ci.confidence_level, 0.5);
    }

    #[test]
    fn test_high_level_takes_extremes() {
        let estimates = [1.0, 2.0, 3.0];
        let ci = PercentileBootstrap
            .calculate_interval(&estimates, 2.0, 0.999)
            .unwrap();
        assert_eq!(ci.lower, 1.0);
        assert_eq!(ci.upper, 3.0);
    }

    #[test]
    fn test_rejects_out_of_range_level() {
        let estimates = [1.0, 2.0, 3.0];
        for level in [0.0, 1.0, 1.5] {
            assert!(PercentileBootstrap
                .calculate_interval(&estimates, 2.0, level)
                .is_err());
        }
    }

    #[test]
    fn test_rejects_empty_or_unsorted() {
        assert!(PercentileBootstrap.calculate_interval(&[], 0.0, 0.95).is_err());
        assert!(PercentileBootstrap
            .calculate_interval(&[2.0, 1.0], 0.0, 0.95)
            .is_err());
        assert_eq!(PercentileBootstrap.name(), "Percentile Bootstrap");
    }
}
