//! Core traits and types for robust pairwise estimation
//!
//! This crate provides the foundation the estimator crates build on:
//!
//! - [`error`]: the shared [`Error`] type and its failure classes
//! - [`selection`]: median selection over implicit pairwise matrices
//! - [`rng`]: a deterministic, portable random number generator
//! - [`traits`]: estimator traits used at crate boundaries
//! - [`utils`]: input validation and sorted working copies
//!
//! # Example
//!
//! ```rust
//! use robust_core::rng::DeterministicRng;
//! use robust_core::utils::sorted;
//!
//! let mut rng = DeterministicRng::from_string("demo");
//! let data: Vec<f64> = (0..5).map(|_| rng.uniform()).collect();
//! let ordered = sorted(&data);
//! assert!(ordered.windows(2).all(|w| w[0] <= w[1]));
//! ```

pub mod error;
pub mod rng;
pub mod selection;
pub mod traits;
pub mod utils;

// Re-export core types
pub use error::{Error, ErrorKind, Result};
pub use rng::DeterministicRng;
pub use selection::{select_median, select_rank, ActiveWindows, PairwiseMatrix, Partition, RankTarget};
pub use traits::{EstimatorProperties, OneSampleEstimator, TwoSampleEstimator};
