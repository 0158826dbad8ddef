//! Two-sample comparison through pairwise differences
//!
//! The shift estimator summarizes all `m·n` differences `xᵢ − yⱼ` between two
//! samples. Quantiles of that population are found by bisection on the value
//! line with an O(m + n) counting pass, never materializing the differences.
//!
//! - [`shift_quantiles`] / [`ShiftQuantiles`]: Type-7 quantiles of the differences
//! - [`shift_median`]: the shift estimate itself
//! - [`ratio`]: the same on the log scale, for positive data
//! - [`disparity`]: shift in units of the pooled Shamos spread
//!
//! # Example
//!
//! ```rust
//! use robust_shift::shift_quantiles;
//!
//! let x = [1.0, 2.0, 3.0];
//! assert_eq!(shift_quantiles(&x, &x, &[0.5], false).unwrap(), vec![0.0]);
//! ```

mod disparity;
mod quantiles;
mod ratio;
pub mod select;

pub use disparity::disparity;
pub use quantiles::{shift_median, shift_quantiles, QuantileRequest, ShiftEstimator, ShiftQuantiles};
pub use ratio::{log_scale, ratio, RatioEstimator};
