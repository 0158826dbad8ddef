//! Bootstrap configuration

use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of bootstrap iterations
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Default cap on the resample size
pub const DEFAULT_MAX_SUBSAMPLE: usize = 5_000;

/// Default two-sided misrate (1 − confidence level)
pub const DEFAULT_MISRATE: f64 = 1e-3;

/// Configuration for approximate center bounds
///
/// Without an explicit seed the generator is seeded from the data, so the same
/// sample always yields the same bounds.
///
/// # Example
///
/// ```rust
/// use robust_confidence::BootstrapConfig;
///
/// let config = BootstrapConfig::default()
///     .with_iterations(2_000)
///     .with_misrate(0.05)
///     .with_seed("experiment-42");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of resamples
    pub iterations: usize,
    /// Resample size is `min(n, max_subsample)`
    pub max_subsample: usize,
    /// Seed string for the deterministic generator
    pub seed: Option<String>,
    /// Probability that the interval misses the true center
    pub misrate: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            max_subsample: DEFAULT_MAX_SUBSAMPLE,
            seed: None,
            misrate: DEFAULT_MISRATE,
        }
    }
}

impl BootstrapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_max_subsample(mut self, max_subsample: usize) -> Self {
        self.max_subsample = max_subsample;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_misrate(mut self, misrate: f64) -> Self {
        self.misrate = misrate;
        self
    }

    /// Resample size for a sample of `n` values
    pub fn resample_size(&self, n: usize) -> usize {
        n.min(self.max_subsample)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidParameter(
                "iterations must be positive".to_string(),
            ));
        }
        if self.max_subsample == 0 {
            return Err(Error::InvalidParameter(
                "max_subsample must be positive".to_string(),
            ));
        }
        if !(self.misrate > 0.0 && self.misrate < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "misrate {} must be in (0, 1)",
                self.misrate
            )));
        }
        Ok(())
    }
}
