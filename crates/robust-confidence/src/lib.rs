//! Robust confidence interval estimation
//!
//! Exact, distribution-free bounds built from rank margins:
//!
//! - [`center_bounds`]: Wilcoxon signed-rank bounds on the Hodges-Lehmann center
//! - [`shift_bounds`]: Mann-Whitney bounds on the two-sample shift
//! - [`ratio_bounds`]: the shift bounds on the log scale
//! - [`margins`]: the rank margins and smallest achievable misrates behind them
//!
//! and a reproducible percentile bootstrap for the center:
//!
//! - [`bootstrap_center`]: sorted centers of seeded resamples
//! - [`CenterBootstrap`]: the same sampler, generic over the estimator
//! - [`center_bounds_approx`]: percentile-bootstrap interval around the center
//!
//! Resampling uses [`robust_core::DeterministicRng`], so identical inputs and
//! seeds give identical results on every platform.
//!
//! # Example
//!
//! ```rust
//! use robust_confidence::{center_bounds_approx, BootstrapConfig};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let config = BootstrapConfig::default().with_iterations(500).with_misrate(0.05);
//! let ci = center_bounds_approx(&sample, &config).unwrap();
//! assert!(ci.contains(ci.estimate));
//! println!("{ci}");
//! ```

mod bootstrap;
mod bootstrap_methods;
mod bounds;
mod config;
mod exact_bounds;
pub mod margins;
mod types;

pub use bootstrap::{bootstrap_center, CenterBootstrap};
pub use bootstrap_methods::{BootstrapMethod, PercentileBootstrap};
pub use bounds::center_bounds_approx;
pub use exact_bounds::{center_bounds, ratio_bounds, shift_bounds};
pub use margins::{
    min_achievable_misrate_one_sample, min_achievable_misrate_two_sample, pairwise_margin,
    signed_rank_margin,
};
pub use config::{BootstrapConfig, DEFAULT_ITERATIONS, DEFAULT_MAX_SUBSAMPLE, DEFAULT_MISRATE};
pub use types::{ConfidenceInterval, ConfidenceLevel};
