//! Hodges-Lehmann estimator

use robust_core::utils::{sorted_copy, validate_sample};
use robust_core::{
    select_median, select_rank, Error, EstimatorProperties, OneSampleEstimator, PairwiseMatrix,
    Partition, Result,
};
use tracing::instrument;

/// Implicit matrix of pairwise sums `a[i] + a[j]`, `i ≤ j`, over a sorted sample
///
/// Row `i` spans columns `[i, n)`.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseSums<'a> {
    sorted: &'a [f64],
}

impl<'a> PairwiseSums<'a> {
    /// Wrap an ascending sample
    pub fn new(sorted: &'a [f64]) -> Self {
        Self { sorted }
    }
}

impl PairwiseMatrix for PairwiseSums<'_> {
    const ALGORITHM: &'static str = "pairwise-sum median";

    fn rows(&self) -> usize {
        self.sorted.len()
    }

    fn row_window(&self, row: usize) -> (usize, usize) {
        (row, self.sorted.len())
    }

    #[inline]
    fn value(&self, row: usize, col: usize) -> f64 {
        self.sorted[row] + self.sorted[col]
    }

    fn total(&self) -> u64 {
        let n = self.sorted.len() as u64;
        n * (n + 1) / 2
    }

    fn initial_pivot(&self) -> f64 {
        let n = self.sorted.len();
        self.sorted[(n - 1) / 2] + self.sorted[n / 2]
    }

    fn partition(&self, pivot: f64, cuts: &mut [usize]) -> Partition {
        let a = self.sorted;
        let n = a.len();
        let mut partition = Partition::new();

        // Row values grow with the row index, so the cut column only moves left
        let mut col = n;
        for row in 0..n {
            col = col.max(row);
            while col > row && a[row] + a[col - 1] >= pivot {
                col -= 1;
            }
            cuts[row] = col;
            partition.record(
                col - row,
                (col > row).then(|| a[row] + a[col - 1]),
                (col < n).then(|| a[row] + a[col]),
            );
        }
        partition
    }
}

/// Hodges-Lehmann location estimator
///
/// Median of all pairwise averages `(xᵢ + xⱼ) / 2`, `i ≤ j`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HodgesLehmann;

impl HodgesLehmann {
    pub fn new() -> Self {
        Self
    }
}

impl EstimatorProperties for HodgesLehmann {
    fn name(&self) -> &'static str {
        "Hodges-Lehmann"
    }

    fn breakdown_point(&self) -> f64 {
        1.0 - std::f64::consts::FRAC_1_SQRT_2
    }

    fn gaussian_efficiency(&self) -> f64 {
        3.0 / std::f64::consts::PI
    }
}

impl OneSampleEstimator for HodgesLehmann {
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        center(sample)
    }

    fn estimate_sorted(&self, sorted_sample: &[f64]) -> Result<f64> {
        center_sorted(sorted_sample)
    }
}

/// Hodges-Lehmann estimate of a sample
///
/// The input is validated (non-empty, finite) and never modified; a sorted
/// working copy is made. From three values on, pairwise sums are formed
/// before halving, so samples whose values exceed `f64::MAX / 2` in magnitude
/// may overflow to an infinite center.
#[instrument(level = "debug", skip(values), fields(n = values.len()))]
pub fn center(values: &[f64]) -> Result<f64> {
    validate_sample(values, "center input")?;
    match values.len() {
        1 => Ok(values[0]),
        2 => Ok(values[0] / 2.0 + values[1] / 2.0),
        _ => {
            let sorted = sorted_copy(values, false, "center working copy")?;
            center_sorted(&sorted)
        }
    }
}

/// Hodges-Lehmann estimate of an ascending, finite sample
///
/// Validation is left to the caller; only emptiness is checked.
pub fn center_sorted(sorted: &[f64]) -> Result<f64> {
    match sorted.len() {
        0 => Err(Error::empty_input("center")),
        1 => Ok(sorted[0]),
        2 => Ok(sorted[0] / 2.0 + sorted[1] / 2.0),
        _ => Ok(select_median(&PairwiseSums::new(sorted))? / 2.0),
    }
}

/// k-th smallest (1-based) pairwise average `(a[i] + a[j]) / 2`, `i ≤ j`
///
/// `sorted` must be ascending and finite; `k` ranges over `[1, n(n+1)/2]`.
pub fn pairwise_average_rank(sorted: &[f64], k: u64) -> Result<f64> {
    match sorted.len() {
        0 => Err(Error::empty_input("pairwise average rank")),
        1 if k == 1 => Ok(sorted[0]),
        _ => Ok(select_rank(&PairwiseSums::new(sorted), k)? / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_concrete_values() {
        assert_eq!(center(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
        assert_eq!(center(&[1.0, 2.0, 4.0]).unwrap(), 2.25);
        assert_eq!(center(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_trivial_sizes() {
        assert_eq!(center(&[42.0]).unwrap(), 42.0);
        assert_eq!(center(&[1.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_two_values_near_max() {
        let big = f64::MAX;
        assert_eq!(center(&[big, big]).unwrap(), big);
        assert_eq!(center(&[-big, -big]).unwrap(), -big);
        assert_eq!(center_sorted(&[-big, big]).unwrap(), 0.0);
        assert_eq!(center_sorted(&[0.0, big]).unwrap(), big / 2.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(center(&[]), Err(Error::InsufficientData { .. })));
        assert!(matches!(center(&[1.0, f64::NAN, 2.0]), Err(Error::InvalidInput(_))));
        assert!(matches!(center(&[f64::NEG_INFINITY]), Err(Error::InvalidInput(_))));
        assert!(center_sorted(&[]).is_err());
    }

    #[test]
    fn test_constant_sample() {
        assert_eq!(center(&[7.5; 9]).unwrap(), 7.5);
    }

    #[test]
    fn test_outlier_resistance() {
        let clean = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let mut dirty = clean;
        dirty[6] = 1e9;
        let a = center(&clean).unwrap();
        let b = center(&dirty).unwrap();
        assert_eq!(a, 4.0);
        assert!((b - a).abs() <= 1.0);
    }

    #[test]
    fn test_pairwise_average_rank() {
        let a = [1.0, 2.0, 4.0];
        // Averages: 1, 1.5, 2, 2.5, 3, 4
        let expected = [1.0, 1.5, 2.0, 2.5, 3.0, 4.0];
        for (k, &want) in (1..=6).zip(expected.iter()) {
            assert_eq!(pairwise_average_rank(&a, k).unwrap(), want, "k = {k}");
        }
        assert_eq!(pairwise_average_rank(&[5.0], 1).unwrap(), 5.0);
        assert!(matches!(pairwise_average_rank(&a, 0), Err(Error::InvalidParameter(_))));
        assert!(matches!(pairwise_average_rank(&a, 7), Err(Error::InvalidParameter(_))));
        assert!(pairwise_average_rank(&[], 1).is_err());
    }

    #[test]
    fn test_partition_counts() {
        let a = [1.0, 2.0, 4.0];
        let sums = PairwiseSums::new(&a);
        // Sums: row 0 = [2, 3, 5], row 1 = [4, 6], row 2 = [8]
        let mut cuts = [0usize; 3];
        let p = sums.partition(4.5, &mut cuts);
        assert_eq!(p.below, 3);
        assert_eq!(cuts, [2, 2, 2]);
        assert_eq!(p.largest_below, 4.0);
        assert_eq!(p.smallest_at_or_above, 5.0);
        assert_eq!(sums.total(), 6);
    }

    #[test]
    fn test_estimator_traits() {
        let hl = HodgesLehmann::new();
        assert_eq!(hl.name(), "Hodges-Lehmann");
        assert_relative_eq!(hl.breakdown_point(), 0.2929, epsilon = 1e-4);
        assert_relative_eq!(hl.gaussian_efficiency(), 0.9549, epsilon = 1e-4);
        assert_eq!(hl.estimate(&[4.0, 1.0, 2.0]).unwrap(), 2.25);
        assert_eq!(hl.estimate_sorted(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
    }
}
