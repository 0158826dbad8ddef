//! Core traits for robust pairwise estimation
//!
//! This module provides the traits that every estimator in the workspace builds
//! upon. Concrete estimators (Hodges-Lehmann, Shamos, shift) live in their own
//! crates and implement these.

use crate::utils::sorted_copy;
use crate::Result;

/// Static properties of an estimator
pub trait EstimatorProperties {
    /// Human-readable name of the estimator
    fn name(&self) -> &'static str;

    /// The asymptotic breakdown point (fraction of contamination the estimator
    /// can handle)
    fn breakdown_point(&self) -> f64;

    /// Asymptotic efficiency relative to the optimal estimator under a normal
    /// distribution
    fn gaussian_efficiency(&self) -> f64;
}

/// Estimator computing a single statistic from one sample
///
/// Implementations only have to provide [`estimate_sorted`]; the default
/// [`estimate`] makes a sorted working copy and never touches the caller's
/// slice.
///
/// [`estimate`]: OneSampleEstimator::estimate
/// [`estimate_sorted`]: OneSampleEstimator::estimate_sorted
pub trait OneSampleEstimator: Send + Sync {
    /// Estimate the statistic from the given sample
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        crate::utils::validate_sample(sample, "sample")?;
        let sorted = sorted_copy(sample, false, "sorted sample")?;
        self.estimate_sorted(&sorted)
    }

    /// Estimate from pre-sorted data
    ///
    /// The caller guarantees ascending order and finite values.
    fn estimate_sorted(&self, sorted_sample: &[f64]) -> Result<f64>;
}

/// Trait for two-sample estimators
///
/// The specific comparison operation is defined by the implementation.
pub trait TwoSampleEstimator: Send + Sync {
    /// Output type of the comparison
    type Output;

    /// Estimate the comparison between two samples
    fn estimate_two_sample(&self, x: &[f64], y: &[f64]) -> Result<Self::Output>;
}

impl<E: OneSampleEstimator + ?Sized> OneSampleEstimator for &E {
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        (**self).estimate(sample)
    }

    fn estimate_sorted(&self, sorted_sample: &[f64]) -> Result<f64> {
        (**self).estimate_sorted(sorted_sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    /// Midpoint of the extremes, enough to exercise the default methods
    struct MidRange;

    impl OneSampleEstimator for MidRange {
        fn estimate_sorted(&self, sorted_sample: &[f64]) -> Result<f64> {
            match (sorted_sample.first(), sorted_sample.last()) {
                (Some(lo), Some(hi)) => Ok((lo + hi) / 2.0),
                _ => Err(Error::empty_input("midrange")),
            }
        }
    }

    #[test]
    fn test_default_estimate_sorts_a_copy() {
        let data = vec![9.0, 1.0, 5.0];
        assert_eq!(MidRange.estimate(&data).unwrap(), 5.0);
        assert_eq!(data, vec![9.0, 1.0, 5.0]);
    }

    #[test]
    fn test_default_estimate_validates() {
        assert!(MidRange.estimate(&[]).is_err());
        assert!(MidRange.estimate(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_reference_forwarding() {
        let estimator = &MidRange;
        assert_eq!(estimator.estimate(&[2.0, 4.0]).unwrap(), 3.0);
    }
}
