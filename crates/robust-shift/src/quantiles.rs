//! Type-7 quantiles of the pairwise differences between two samples

use std::collections::{BTreeMap, BTreeSet};

use robust_core::utils::{sorted_copy, validate_probabilities, validate_sample};
use robust_core::{Error, Result, TwoSampleEstimator};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::select::select_kth;

/// A probability resolved against a population of `total` values
///
/// Follows the Type-7 (linear interpolation) definition:
/// `h = 1 + (total − 1)·p`, interpolating between ranks `⌊h⌋` and `⌈h⌉`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileRequest {
    pub probability: f64,
    /// 1-based lower rank
    pub lower_rank: u64,
    /// 1-based upper rank
    pub upper_rank: u64,
    /// Interpolation weight of the upper rank, in `[0, 1)`
    pub weight: f64,
}

impl QuantileRequest {
    pub fn new(probability: f64, total: u64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::invalid_probability(probability));
        }
        if total == 0 {
            return Err(Error::empty_input("quantile population"));
        }
        let h = 1.0 + (total - 1) as f64 * probability;
        let floor = h.floor();
        let lower_rank = (floor as u64).clamp(1, total);
        let upper_rank = (h.ceil() as u64).clamp(1, total);
        Ok(Self {
            probability,
            lower_rank,
            upper_rank,
            weight: h - floor,
        })
    }

    /// Interpolate between the values at the two ranks
    pub fn interpolate(&self, lower: f64, upper: f64) -> f64 {
        if self.weight == 0.0 || self.lower_rank == self.upper_rank {
            lower
        } else {
            (1.0 - self.weight) * lower + self.weight * upper
        }
    }
}

/// Request for several shift quantiles at once
///
/// # Example
///
/// ```rust
/// use robust_shift::ShiftQuantiles;
///
/// let q = ShiftQuantiles::new(vec![0.0, 1.0])
///     .compute(&[5.0], &[1.0, 2.0, 3.0])
///     .unwrap();
/// assert_eq!(q, vec![2.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftQuantiles {
    pub probabilities: Vec<f64>,
    /// Skip sorting because both samples are already ascending
    #[serde(default)]
    pub assume_sorted: bool,
}

impl ShiftQuantiles {
    pub fn new(probabilities: Vec<f64>) -> Self {
        Self {
            probabilities,
            assume_sorted: false,
        }
    }

    /// Median only
    pub fn median() -> Self {
        Self::new(vec![0.5])
    }

    pub fn assume_sorted(mut self, assume_sorted: bool) -> Self {
        self.assume_sorted = assume_sorted;
        self
    }

    pub fn compute(&self, x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
        shift_quantiles(x, y, &self.probabilities, self.assume_sorted)
    }
}

impl Default for ShiftQuantiles {
    fn default() -> Self {
        Self::median()
    }
}

/// Type-7 quantiles of `{xᵢ − yⱼ}` for each probability, in request order
///
/// Each distinct rank is selected once, however many probabilities need it.
/// With `assume_sorted` the caller guarantees both samples are ascending and
/// no working copies are sorted.
#[instrument(
    level = "debug",
    skip(x, y, probabilities),
    fields(m = x.len(), n = y.len(), requests = probabilities.len())
)]
pub fn shift_quantiles(
    x: &[f64],
    y: &[f64],
    probabilities: &[f64],
    assume_sorted: bool,
) -> Result<Vec<f64>> {
    validate_sample(x, "x")?;
    validate_sample(y, "y")?;
    validate_probabilities(probabilities)?;

    let total = (x.len() as u64)
        .checked_mul(y.len() as u64)
        .ok_or_else(|| Error::InvalidInput("pairwise population does not fit in 64 bits".into()))?;
    let requests = probabilities
        .iter()
        .map(|&p| QuantileRequest::new(p, total))
        .collect::<Result<Vec<_>>>()?;

    let xs = sorted_copy(x, assume_sorted, "shift x working copy")?;
    let ys = sorted_copy(y, assume_sorted, "shift y working copy")?;

    let ranks: BTreeSet<u64> = requests
        .iter()
        .flat_map(|r| [r.lower_rank, r.upper_rank])
        .collect();
    debug!(distinct_ranks = ranks.len(), total, "selecting shift ranks");

    let mut values = BTreeMap::new();
    for rank in ranks {
        values.insert(rank, select_kth(&xs, &ys, rank)?);
    }

    Ok(requests
        .iter()
        .map(|r| r.interpolate(values[&r.lower_rank], values[&r.upper_rank]))
        .collect())
}

/// Median of `{xᵢ − yⱼ}`
pub fn shift_median(x: &[f64], y: &[f64]) -> Result<f64> {
    let quantiles = shift_quantiles(x, y, &[0.5], false)?;
    quantiles
        .first()
        .copied()
        .ok_or_else(|| Error::empty_input("shift median"))
}

/// Two-sample shift estimator: the median pairwise difference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftEstimator;

impl TwoSampleEstimator for ShiftEstimator {
    type Output = f64;

    fn estimate_two_sample(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        shift_median(x, y)
    }
}
