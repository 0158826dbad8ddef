//! Approximate confidence bounds for the Hodges-Lehmann center

use robust_center::center_sorted;
use robust_core::utils::{sorted_copy, validate_sample};
use robust_core::{DeterministicRng, Result};
use tracing::{debug, instrument};

use crate::bootstrap::CenterBootstrap;
use crate::bootstrap_methods::{BootstrapMethod, PercentileBootstrap};
use crate::config::BootstrapConfig;
use crate::types::{ConfidenceInterval, ConfidenceLevel};

/// Percentile-bootstrap interval around the center of `values`
///
/// Resamples `min(n, max_subsample)` values per iteration. The generator is
/// seeded from `config.seed`, or from the FNV-1a hash of the sorted sample
/// when no seed is given, so results are reproducible either way.
///
/// # Example
///
/// ```rust
/// use robust_confidence::{center_bounds_approx, BootstrapConfig};
///
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let config = BootstrapConfig::default()
///     .with_iterations(200)
///     .with_misrate(0.05)
///     .with_seed("bounds");
/// let ci = center_bounds_approx(&x, &config).unwrap();
/// assert_eq!((ci.lower, ci.upper, ci.estimate), (3.5, 7.5, 5.5));
/// ```
#[instrument(level = "debug", skip(values, config), fields(n = values.len(), iterations = config.iterations))]
pub fn center_bounds_approx(values: &[f64], config: &BootstrapConfig) -> Result<ConfidenceInterval> {
    config.validate()?;
    let level = ConfidenceLevel::from_misrate(config.misrate)?;
    validate_sample(values, "center bounds input")?;

    let sorted = sorted_copy(values, false, "center bounds working copy")?;
    let mut rng = match &config.seed {
        Some(seed) => DeterministicRng::from_string(seed),
        None => DeterministicRng::from_data(&sorted),
    };

    let resample_size = config.resample_size(sorted.len());
    debug!(resample_size, seeded = config.seed.is_some(), "center bounds bootstrap");
    let estimates = CenterBootstrap::new(resample_size, config.iterations).run(&sorted, &mut rng)?;

    let estimate = center_sorted(&sorted)?;
    PercentileBootstrap.calculate_interval(&estimates, estimate, level.value())
}
