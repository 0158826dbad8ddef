//! Reproducible bootstrap of one-sample estimators
//!
//! Resampling is driven by [`DeterministicRng`], so a seed string fully
//! determines the bootstrap distribution on every platform. One resample
//! buffer is allocated per run and reused across iterations.

use robust_center::HodgesLehmann;
use robust_core::utils::{is_sorted, try_with_capacity, validate_sample};
use robust_core::{DeterministicRng, Error, OneSampleEstimator, Result};
use tracing::{debug, instrument};

/// Bootstrap sampler for a one-sample estimator
///
/// Defaults to the Hodges-Lehmann center.
#[derive(Debug, Clone)]
pub struct CenterBootstrap<E = HodgesLehmann> {
    estimator: E,
    resample_size: usize,
    iterations: usize,
}

impl CenterBootstrap<HodgesLehmann> {
    /// Create a sampler drawing `iterations` resamples of `resample_size` values
    pub fn new(resample_size: usize, iterations: usize) -> Self {
        Self {
            estimator: HodgesLehmann,
            resample_size,
            iterations,
        }
    }
}

impl<E: OneSampleEstimator> CenterBootstrap<E> {
    /// Swap in another estimator
    pub fn with_estimator<F: OneSampleEstimator>(self, estimator: F) -> CenterBootstrap<F> {
        CenterBootstrap {
            estimator,
            resample_size: self.resample_size,
            iterations: self.iterations,
        }
    }

    pub fn resample_size(&self) -> usize {
        self.resample_size
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Sorted bootstrap estimates over `sorted_values`
    ///
    /// The sample must be non-empty, ascending and finite. Resample sizes
    /// larger than the sample are allowed. Draws `iterations × resample_size`
    /// bounded indices from `rng`, in order.
    #[instrument(
        level = "debug",
        skip(self, sorted_values, rng),
        fields(n = sorted_values.len(), m = self.resample_size, iterations = self.iterations)
    )]
    pub fn run(&self, sorted_values: &[f64], rng: &mut DeterministicRng) -> Result<Vec<f64>> {
        validate_sample(sorted_values, "bootstrap input")?;
        if !is_sorted(sorted_values) {
            return Err(Error::InvalidInput(
                "bootstrap input must be sorted ascending".to_string(),
            ));
        }
        if self.resample_size == 0 {
            return Err(Error::InvalidParameter(
                "resample size must be positive".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidParameter(
                "iterations must be positive".to_string(),
            ));
        }

        let mut estimates = try_with_capacity(self.iterations, "bootstrap estimates")?;
        let mut resample = try_with_capacity(self.resample_size, "resample buffer")?;

        debug!("Running {} bootstrap resamples", self.iterations);
        for _ in 0..self.iterations {
            rng.resample_into(sorted_values, self.resample_size, &mut resample)?;
            resample.sort_by(f64::total_cmp);
            estimates.push(self.estimator.estimate_sorted(&resample)?);
        }

        estimates.sort_by(f64::total_cmp);
        debug!(
            lowest = estimates.first().copied(),
            highest = estimates.last().copied(),
            "bootstrap finished"
        );
        Ok(estimates)
    }
}

/// Sorted Hodges-Lehmann centers of `iterations` resamples of size
/// `resample_size`, seeded from `seed`
///
/// # Example
///
/// ```rust
/// use robust_confidence::bootstrap_center;
///
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let centers = bootstrap_center(&x, 5, 8, "bootstrap-demo").unwrap();
/// assert_eq!(centers, vec![2.5, 3.0, 3.0, 3.5, 4.0, 4.0, 4.0, 5.0]);
/// ```
pub fn bootstrap_center(
    sorted_values: &[f64],
    resample_size: usize,
    iterations: usize,
    seed: &str,
) -> Result<Vec<f64>> {
    let mut rng = DeterministicRng::from_string(seed);
    CenterBootstrap::new(resample_size, iterations).run(sorted_values, &mut rng)
}
