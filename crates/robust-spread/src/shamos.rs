//! Shamos estimator

use robust_core::utils::{sorted_copy, validate_sample};
use robust_core::{
    select_median, Error, EstimatorProperties, OneSampleEstimator, PairwiseMatrix, Partition,
    Result,
};
use tracing::instrument;

use crate::traits::RobustScale;

/// Implicit upper-triangular matrix of gaps `a[j] − a[i]`, `j > i`, over a
/// sorted sample
///
/// Row `i` spans columns `[i + 1, n)` for `i < n − 1`.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseGaps<'a> {
    sorted: &'a [f64],
}

impl<'a> PairwiseGaps<'a> {
    /// Wrap an ascending sample
    pub fn new(sorted: &'a [f64]) -> Self {
        Self { sorted }
    }
}

impl PairwiseMatrix for PairwiseGaps<'_> {
    const ALGORITHM: &'static str = "pairwise-gap median";

    fn rows(&self) -> usize {
        self.sorted.len().saturating_sub(1)
    }

    fn row_window(&self, row: usize) -> (usize, usize) {
        (row + 1, self.sorted.len())
    }

    #[inline]
    fn value(&self, row: usize, col: usize) -> f64 {
        self.sorted[col] - self.sorted[row]
    }

    fn total(&self) -> u64 {
        let n = self.sorted.len() as u64;
        n * n.saturating_sub(1) / 2
    }

    fn initial_pivot(&self) -> f64 {
        let n = self.sorted.len();
        self.sorted[n / 2] - self.sorted[(n - 1) / 2]
    }

    fn partition(&self, pivot: f64, cuts: &mut [usize]) -> Partition {
        let a = self.sorted;
        let n = a.len();
        let mut partition = Partition::new();

        // Gaps to a fixed column shrink as the row advances, so the cut only moves right
        let mut col = 1;
        for row in 0..self.rows() {
            col = col.max(row + 1);
            while col < n && a[col] - a[row] < pivot {
                col += 1;
            }
            cuts[row] = col;
            partition.record(
                col - (row + 1),
                (col > row + 1).then(|| a[col - 1] - a[row]),
                (col < n).then(|| a[col] - a[row]),
            );
        }
        partition
    }
}

/// Shamos scale estimator
///
/// Median of all pairwise absolute differences `|xᵢ − xⱼ|`, `i < j`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shamos;

impl Shamos {
    pub fn new() -> Self {
        Self
    }
}

impl EstimatorProperties for Shamos {
    fn name(&self) -> &'static str {
        "Shamos"
    }

    fn breakdown_point(&self) -> f64 {
        1.0 - std::f64::consts::FRAC_1_SQRT_2
    }

    fn gaussian_efficiency(&self) -> f64 {
        0.864
    }
}

impl OneSampleEstimator for Shamos {
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        spread(sample)
    }

    fn estimate_sorted(&self, sorted_sample: &[f64]) -> Result<f64> {
        spread_sorted(sorted_sample)
    }
}

impl RobustScale for Shamos {}

/// Shamos estimate of a sample
///
/// Zero for a single value. The input is validated and never modified.
#[instrument(level = "debug", skip(values), fields(n = values.len()))]
pub fn spread(values: &[f64]) -> Result<f64> {
    validate_sample(values, "spread input")?;
    match values.len() {
        1 => Ok(0.0),
        2 => Ok((values[1] - values[0]).abs()),
        _ => {
            let sorted = sorted_copy(values, false, "spread working copy")?;
            spread_sorted(&sorted)
        }
    }
}

/// Shamos estimate of an ascending, finite sample
pub fn spread_sorted(sorted: &[f64]) -> Result<f64> {
    match sorted.len() {
        0 => Err(Error::empty_input("spread")),
        1 => Ok(0.0),
        2 => Ok((sorted[1] - sorted[0]).abs()),
        _ => select_median(&PairwiseGaps::new(sorted)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_concrete_values() {
        assert_eq!(spread(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 1.5);
        assert_eq!(spread(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 1.5);
        assert_eq!(spread(&[1.0, 2.0, 4.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_trivial_sizes() {
        assert_eq!(spread(&[3.0]).unwrap(), 0.0);
        assert_eq!(spread(&[5.0, 2.0]).unwrap(), 3.0);
        assert_eq!(spread_sorted(&[2.0, 5.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_zero_iff_constant() {
        assert_eq!(spread(&[2.0; 10]).unwrap(), 0.0);
        assert!(spread(&[2.0, 2.0, 2.0, 2.1]).unwrap() >= 0.0);
        assert!(spread(&[1.0, 2.0, 2.0]).unwrap() > 0.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(spread(&[]), Err(Error::InsufficientData { .. })));
        assert!(matches!(spread(&[1.0, f64::INFINITY]), Err(Error::InvalidInput(_))));
        assert!(spread_sorted(&[]).is_err());
    }

    #[test]
    fn test_partition_counts() {
        let a = [1.0, 2.0, 4.0, 8.0];
        let gaps = PairwiseGaps::new(&a);
        // Gaps: row 0 = [1, 3, 7], row 1 = [2, 6], row 2 = [4]
        let mut cuts = [0usize; 3];
        let p = gaps.partition(3.5, &mut cuts);
        assert_eq!(p.below, 3);
        assert_eq!(cuts, [3, 3, 3]);
        assert_eq!(p.largest_below, 3.0);
        assert_eq!(p.smallest_at_or_above, 4.0);
        assert_eq!(gaps.total(), 6);
        assert_eq!(gaps.rows(), 3);
    }

    #[test]
    fn test_estimator_traits() {
        let shamos = Shamos::new();
        assert_eq!(shamos.name(), "Shamos");
        assert_relative_eq!(shamos.breakdown_point(), 0.2929, epsilon = 1e-4);
        assert_eq!(shamos.estimate(&[4.0, 3.0, 2.0, 1.0]).unwrap(), 1.5);
        assert_eq!(shamos.standardize(&[1.0, 2.0, 3.0, 4.0], 3.0).unwrap(), 2.0);
        assert!(shamos.standardize(&[1.0, 1.0], 3.0).is_err());
        assert_eq!(shamos.standardize_sorted(&[1.0, 2.0, 3.0, 4.0], 0.75).unwrap(), 0.5);
    }
}
