//! Interval and level types

use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-sided interval around a point estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    /// Estimate on the full sample, not on any resample
    pub estimate: f64,
    /// Nominal coverage, `1 − misrate`
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Closed-interval membership
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    /// Nominal probability of missing the true value
    pub fn misrate(&self) -> f64 {
        1.0 - self.confidence_level
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}, {:.4}] around {:.4} ({:.1}% level)",
            self.lower,
            self.upper,
            self.estimate,
            self.confidence_level * 100.0
        )
    }
}

/// Validated confidence level in the open interval (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    pub fn new(level: f64) -> Result<Self> {
        if level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::InvalidParameter(format!(
                "confidence level must lie in (0, 1), got {level}"
            )))
        }
    }

    /// Level whose two-sided miss probability is `misrate`
    pub fn from_misrate(misrate: f64) -> Result<Self> {
        if !(misrate > 0.0 && misrate < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "misrate must lie in (0, 1), got {misrate}"
            )));
        }
        Self::new(1.0 - misrate)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn misrate(self) -> f64 {
        1.0 - self.0
    }

    /// Probability mass cut from each tail
    pub fn tail(self) -> f64 {
        self.misrate() / 2.0
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
