//! Error types for robust pairwise estimation
//!
//! Provides a unified error type for all robust-pairwise crates. Every variant
//! maps onto one of three failure classes (see [`ErrorKind`]) so callers can tell
//! "my input was bad" apart from "the library has a bug".

use thiserror::Error;

/// Core error type for robust statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Working buffer could not be acquired
    #[error("Memory error: {0}")]
    Memory(String),

    /// A selection algorithm exceeded its iteration bound
    #[error("Convergence failure in {algorithm} after {iterations} iterations")]
    Convergence {
        algorithm: &'static str,
        iterations: u64,
    },

    /// Errors raised by caller-supplied estimators
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failure class of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input detected at entry; no work was performed
    InvalidArgument,
    /// A working buffer could not be allocated
    AllocationFailure,
    /// An internal algorithm failed to terminate; indicates a defect
    ConvergenceFailure,
    /// Raised outside this library
    External,
}

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for an invalid probability
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a selector that ran past its iteration bound
    pub fn convergence(algorithm: &'static str, iterations: u64) -> Self {
        Self::Convergence {
            algorithm,
            iterations,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter(_) | Self::InvalidInput(_) | Self::InsufficientData { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::Memory(_) => ErrorKind::AllocationFailure,
            Self::Convergence { .. } => ErrorKind::ConvergenceFailure,
            Self::Other(_) => ErrorKind::External,
        }
    }
}
