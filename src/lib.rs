//! Fast pairwise robust estimators
//!
//! This crate re-exports the workspace members and offers the four
//! host-facing operations in [`api`]:
//!
//! - **center**: Hodges-Lehmann, median of pairwise averages
//! - **spread**: Shamos, median of pairwise absolute differences
//! - **shift**: quantiles of all differences between two samples
//! - **bootstrap_center**: reproducible bootstrap distribution of the center
//!
//! plus exact rank-based bounds for center, shift and ratio.
//!
//! Every estimator selects an exact order statistic of an implicit pairwise
//! matrix in O(n log n) time and O(n) memory.
//!
//! # Quick Start
//!
//! ```rust
//! use robust_pairwise::prelude::*;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 100.0];
//! let y = [0.0, 1.0, 2.0, 3.0];
//!
//! let location = center(&x).unwrap();
//! let scale = spread(&x).unwrap();
//! let delta = shift(&x, &y, &[0.5], false).unwrap();
//! assert_eq!(delta.len(), 1);
//! assert!(location < 10.0 && scale < 10.0);
//! ```
//!
//! # Crates
//!
//! - [`robust_core`]: errors, estimator traits, the selection engine and the
//!   deterministic RNG
//! - [`robust_center`], [`robust_spread`], [`robust_shift`]: the estimators
//! - [`robust_confidence`]: exact rank-margin bounds, the bootstrap sampler
//!   and percentile bounds

pub mod api;

pub use robust_center;
pub use robust_confidence;
pub use robust_core;
pub use robust_shift;
pub use robust_spread;

pub use robust_core::{DeterministicRng, Error, ErrorKind, Result};

/// Commonly used items
pub mod prelude {
    pub use crate::api::{
        avg_spread, bootstrap_center, center, center_bounds, center_bounds_approx, disparity,
        ratio, ratio_bounds, rel_spread, shift, shift_bounds, shift_median, spread,
    };
    pub use robust_center::HodgesLehmann;
    pub use robust_confidence::{BootstrapConfig, CenterBootstrap, ConfidenceInterval};
    pub use robust_core::{
        DeterministicRng, Error, ErrorKind, EstimatorProperties, OneSampleEstimator, Result,
        TwoSampleEstimator,
    };
    pub use robust_shift::{RatioEstimator, ShiftEstimator, ShiftQuantiles};
    pub use robust_spread::{RobustScale, Shamos};
}
