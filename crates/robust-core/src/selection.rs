//! Median selection over implicit pairwise matrices
//!
//! Both the Hodges-Lehmann center and the Shamos spread are medians of an
//! O(n²) set of pairwise values that is never materialized. Over a sorted
//! sample each row of that set is ascending in its column, so the values below
//! any pivot form a prefix of every row and can be counted with a single
//! monotone sweep. [`select_median`] repeatedly partitions around a pivot and
//! shrinks per-row [`ActiveWindows`] until the median ranks are pinned down
//! (Monahan's selection scheme with a deterministic pivot).
//!
//! The concrete matrices live in their estimator crates; they only have to
//! describe their row layout and implement the partition sweep.

use crate::utils::try_with_capacity;
use crate::{Error, Result};
use tracing::{debug, instrument, trace};

/// Outcome of one partition sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    /// Number of matrix values strictly below the pivot
    pub below: u64,
    /// Largest value strictly below the pivot, `-inf` when there is none
    pub largest_below: f64,
    /// Smallest value at or above the pivot, `+inf` when there is none
    pub smallest_at_or_above: f64,
}

impl Partition {
    /// Empty partition to accumulate into
    pub fn new() -> Self {
        Self {
            below: 0,
            largest_below: f64::NEG_INFINITY,
            smallest_at_or_above: f64::INFINITY,
        }
    }

    /// Record a row contribution: `count` values below the pivot and the row's
    /// values on either side of the cut
    #[inline]
    pub fn record(&mut self, count: usize, below: Option<f64>, at_or_above: Option<f64>) {
        self.below += count as u64;
        if let Some(v) = below {
            if v > self.largest_below {
                self.largest_below = v;
            }
        }
        if let Some(v) = at_or_above {
            if v < self.smallest_at_or_above {
                self.smallest_at_or_above = v;
            }
        }
    }
}

impl Default for Partition {
    fn default() -> Self {
        Self::new()
    }
}

/// An implicit matrix of pairwise values with ascending rows
///
/// Row `i` covers columns `row_window(i)`, a half-open range. Within a row,
/// values are non-decreasing in the column index.
pub trait PairwiseMatrix {
    /// Algorithm name used in diagnostics and convergence errors
    const ALGORITHM: &'static str;

    /// Number of rows
    fn rows(&self) -> usize;

    /// Initial half-open column window of a row
    fn row_window(&self, row: usize) -> (usize, usize);

    /// Value at `(row, col)`
    fn value(&self, row: usize, col: usize) -> f64;

    /// Total number of values in the matrix
    fn total(&self) -> u64;

    /// Pivot for the first partition
    fn initial_pivot(&self) -> f64;

    /// Count values strictly below `pivot`
    ///
    /// For each row writes into `cuts[row]` the first column whose value is at
    /// or above the pivot (the row's window end when there is none). The sweep
    /// must also report the global neighbours of the pivot.
    fn partition(&self, pivot: f64, cuts: &mut [usize]) -> Partition;
}

/// 1-based ranks of the selected order statistic
///
/// For a median `low == high` exactly when `total` is odd; a single rank has
/// `low == high` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankTarget {
    pub low: u64,
    pub high: u64,
}

impl RankTarget {
    pub fn median(total: u64) -> Self {
        Self {
            low: total.div_ceil(2),
            high: total / 2 + 1,
        }
    }

    /// A single rank `k`
    pub fn rank(k: u64) -> Self {
        Self { low: k, high: k }
    }

    pub fn is_odd(&self) -> bool {
        self.low == self.high
    }

    /// Median value when `below` values sit strictly under the pivot, if the
    /// partition pins it down
    pub fn resolve(&self, partition: &Partition) -> Option<f64> {
        let Partition {
            below,
            largest_below,
            smallest_at_or_above,
        } = *partition;
        if below == self.low {
            Some(if self.is_odd() {
                largest_below
            } else {
                (largest_below + smallest_at_or_above) / 2.0
            })
        } else if below + 1 == self.high {
            Some(smallest_at_or_above)
        } else {
            None
        }
    }
}

/// Per-row half-open column ranges still holding candidate values
///
/// A row is empty when `start >= end`. Windows only ever shrink, and their
/// union always contains the target ranks.
#[derive(Debug, Clone)]
pub struct ActiveWindows {
    start: Vec<usize>,
    end: Vec<usize>,
}

impl ActiveWindows {
    /// Windows covering the whole matrix
    pub fn full<M: PairwiseMatrix + ?Sized>(matrix: &M) -> Result<Self> {
        let rows = matrix.rows();
        let mut start = try_with_capacity(rows, "active window starts")?;
        let mut end = try_with_capacity(rows, "active window ends")?;
        for row in 0..rows {
            let (s, e) = matrix.row_window(row);
            start.push(s);
            end.push(e);
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn row(&self, row: usize) -> (usize, usize) {
        (self.start[row], self.end[row])
    }

    #[inline]
    fn row_len(&self, row: usize) -> usize {
        self.end[row].saturating_sub(self.start[row])
    }

    /// Number of values still active
    pub fn active(&self) -> u64 {
        (0..self.start.len()).map(|row| self.row_len(row) as u64).sum()
    }

    /// Drop every value below the cut in each row
    pub fn keep_at_or_above(&mut self, cuts: &[usize]) {
        for (start, &cut) in self.start.iter_mut().zip(cuts) {
            *start = (*start).max(cut);
        }
    }

    /// Drop every value at or above the cut in each row
    pub fn keep_below(&mut self, cuts: &[usize]) {
        for (end, &cut) in self.end.iter_mut().zip(cuts) {
            *end = (*end).min(cut);
        }
    }

    /// Smallest and largest active value, skipping empty rows
    pub fn bounds<M: PairwiseMatrix + ?Sized>(&self, matrix: &M) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for row in 0..self.start.len() {
            let (start, end) = self.row(row);
            if start >= end {
                continue;
            }
            let lo = matrix.value(row, start);
            let hi = matrix.value(row, end - 1);
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(lo), max.max(hi)),
                None => (lo, hi),
            });
        }
        bounds
    }

    /// Median column of the row holding the middle active value
    pub fn middle_cell(&self) -> Option<(usize, usize)> {
        let mut remaining = self.active() / 2;
        for row in 0..self.start.len() {
            let len = self.row_len(row) as u64;
            if remaining < len {
                let (start, end) = self.row(row);
                return Some((row, start + (end - 1 - start) / 2));
            }
            remaining -= len;
        }
        None
    }
}

/// Midpoint of `(min, max]`, falling back to `max` when rounding leaves the
/// interval
fn midrange(min: f64, max: f64) -> f64 {
    let mid = min / 2.0 + max / 2.0;
    if mid > min && mid <= max {
        mid
    } else {
        max
    }
}

/// Median of all values of an implicit pairwise matrix
///
/// Requires `matrix.total() >= 1` and rows ascending in their columns. Runs in
/// O(rows) memory. Exceeding `3 * total + 16` partition passes is reported as
/// [`Error::Convergence`], which indicates a defect rather than bad input.
pub fn select_median<M: PairwiseMatrix + ?Sized>(matrix: &M) -> Result<f64> {
    let total = matrix.total();
    if total == 0 {
        return Err(Error::empty_input(M::ALGORITHM));
    }
    select(matrix, RankTarget::median(total))
}

/// `k`-th smallest (1-based) value of an implicit pairwise matrix
///
/// Same contract and iteration bound as [`select_median`].
pub fn select_rank<M: PairwiseMatrix + ?Sized>(matrix: &M, k: u64) -> Result<f64> {
    let total = matrix.total();
    if total == 0 {
        return Err(Error::empty_input(M::ALGORITHM));
    }
    if k == 0 || k > total {
        return Err(Error::InvalidParameter(format!(
            "rank {k} outside [1, {total}]"
        )));
    }
    select(matrix, RankTarget::rank(k))
}

#[instrument(level = "debug", skip(matrix), fields(rows = matrix.rows(), total = matrix.total()))]
fn select<M: PairwiseMatrix + ?Sized>(matrix: &M, target: RankTarget) -> Result<f64> {
    let max_iterations = matrix.total().saturating_mul(3).saturating_add(16);

    let mut windows = ActiveWindows::full(matrix)?;
    let mut cuts = try_with_capacity(matrix.rows(), "partition cuts")?;
    cuts.resize(matrix.rows(), 0);

    let mut pivot = matrix.initial_pivot();
    let mut previous_below: Option<u64> = None;
    let mut iterations = 0u64;

    loop {
        iterations += 1;
        if iterations > max_iterations {
            return Err(Error::convergence(M::ALGORITHM, iterations - 1));
        }

        let partition = matrix.partition(pivot, &mut cuts);
        trace!(iterations, pivot, below = partition.below, "partition pass");

        if let Some(value) = target.resolve(&partition) {
            debug!(algorithm = M::ALGORITHM, iterations, "order statistic selected");
            return Ok(value);
        }

        if previous_below == Some(partition.below) {
            // Same count means the same down-set; cuts were already applied
            let (min, max) = windows
                .bounds(matrix)
                .ok_or_else(|| Error::convergence(M::ALGORITHM, iterations))?;
            if min == max {
                return Ok(min);
            }
            pivot = midrange(min, max);
            debug!(algorithm = M::ALGORITHM, iterations, min, max, pivot, "stall, midrange pivot");
            continue;
        }

        if partition.below < target.low {
            windows.keep_at_or_above(&cuts);
        } else {
            windows.keep_below(&cuts);
        }
        previous_below = Some(partition.below);

        let active = windows.active();
        if active > 2 {
            let (row, col) = windows
                .middle_cell()
                .ok_or_else(|| Error::convergence(M::ALGORITHM, iterations))?;
            pivot = matrix.value(row, col);
        } else {
            let (min, max) = windows
                .bounds(matrix)
                .ok_or_else(|| Error::convergence(M::ALGORITHM, iterations))?;
            if min == max {
                return Ok(min);
            }
            pivot = midrange(min, max);
            debug!(algorithm = M::ALGORITHM, active, pivot, "few values left, midrange pivot");
        }
    }
}
