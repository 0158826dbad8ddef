//! k-th smallest pairwise difference `x[i] − y[j]` without materializing pairs
//!
//! Binary search on the value line between the smallest and largest
//! difference. Every bound is snapped to an actual difference after each
//! counting pass, so the search finishes on an exact order statistic.

use robust_core::{Error, Result};
use tracing::trace;

/// Upper bound on counting passes per selection
pub const MAX_ITERATIONS: u32 = 128;

/// Passes after which bisection switches from value midpoints to
/// representation midpoints, which halve the number of candidate doubles
const VALUE_BISECTION_PASSES: u32 = 60;

/// Result of one counting pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors {
    /// Number of differences `≤ threshold`
    pub count_le: u64,
    /// Largest difference `≤ threshold`, `-inf` if there is none
    pub below: f64,
    /// Smallest difference `> threshold`, `+inf` if there is none
    pub above: f64,
}

/// Count differences at or below `threshold` over sorted `x` and `y`
///
/// Two-pointer sweep in O(m + n).
pub fn count_and_neighbors(x: &[f64], y: &[f64], threshold: f64) -> Neighbors {
    let n = y.len();
    let mut neighbors = Neighbors {
        count_le: 0,
        below: f64::NEG_INFINITY,
        above: f64::INFINITY,
    };

    // For ascending x the first y index with x - y <= threshold only moves right
    let mut j = 0;
    for &xi in x {
        while j < n && xi - y[j] > threshold {
            j += 1;
        }
        neighbors.count_le += (n - j) as u64;
        if j < n {
            neighbors.below = neighbors.below.max(xi - y[j]);
        }
        if j > 0 {
            neighbors.above = neighbors.above.min(xi - y[j - 1]);
        }
    }
    neighbors
}

/// k-th smallest (1-based) of all `m·n` differences `x[i] − y[j]`
///
/// Both slices must be non-empty, ascending and finite. Fails with
/// [`Error::Convergence`] if the search needs more than [`MAX_ITERATIONS`]
/// passes.
pub fn select_kth(x: &[f64], y: &[f64], k: u64) -> Result<f64> {
    let (m, n) = (x.len(), y.len());
    if m == 0 || n == 0 {
        return Err(Error::empty_input("shift selection"));
    }
    let total = (m as u64) * (n as u64);
    if k < 1 || k > total {
        return Err(Error::InvalidParameter(format!(
            "rank {k} outside [1, {total}]"
        )));
    }

    // The k-th difference always lies in [lo, hi], both actual differences
    let lo = x[0] - y[n - 1];
    let hi = x[m - 1] - y[0];
    if k == 1 {
        return Ok(lo);
    }
    if k == total {
        return Ok(hi);
    }
    bisect(lo, hi, k, |threshold| count_and_neighbors(x, y, threshold))
}

/// Narrow `[lo, hi]` onto the k-th value reported by `count`
///
/// `count` must report counts that grow with the threshold and neighbours
/// that are actual values.
fn bisect(
    mut lo: f64,
    mut hi: f64,
    k: u64,
    mut count: impl FnMut(f64) -> Neighbors,
) -> Result<f64> {
    for iteration in 0..MAX_ITERATIONS {
        if lo == hi {
            return Ok(lo);
        }
        // A midpoint that rounds onto `hi` (or overflows) would never shrink the interval
        let value_mid = lo + (hi - lo) * 0.5;
        let mid = if iteration < VALUE_BISECTION_PASSES && value_mid >= lo && value_mid < hi {
            value_mid
        } else {
            representation_midpoint(lo, hi)
        };

        let neighbors = count(mid);
        trace!(iteration, lo, hi, mid, count_le = neighbors.count_le, "shift bisection");

        if neighbors.count_le >= k {
            hi = neighbors.below;
        } else {
            lo = neighbors.above;
        }
    }

    if lo == hi {
        return Ok(lo);
    }
    Err(Error::convergence("shift selection", u64::from(MAX_ITERATIONS)))
}

/// Map a double onto an integer key that preserves numeric order
#[inline]
fn ordered_key(v: f64) -> u64 {
    let bits = v.to_bits();
    if bits >> 63 == 1 {
        !bits
    } else {
        bits | (1 << 63)
    }
}

#[inline]
fn from_ordered_key(key: u64) -> f64 {
    let bits = if key >> 63 == 1 { key & !(1 << 63) } else { !key };
    f64::from_bits(bits)
}

/// Double halfway between `lo` and `hi` in representation order
///
/// Lies in `[lo, hi)` whenever `lo < hi`.
fn representation_midpoint(lo: f64, hi: f64) -> f64 {
    let (a, b) = (ordered_key(lo), ordered_key(hi));
    from_ordered_key(a + (b - a) / 2)
}
