//! Naive reference implementation of shift quantiles
//!
//! Materializes all `m·n` differences and sorts them. Only used to verify the
//! bisection selector.
//!
//! DO NOT USE IN PRODUCTION - this is for testing and debugging only!

/// Type-7 quantile of `{xᵢ − yⱼ}`
pub fn naive_shift_quantile(x: &[f64], y: &[f64], p: f64) -> f64 {
    assert!(!x.is_empty() && !y.is_empty(), "Cannot compute shift of empty data");
    assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

    let mut diffs = Vec::with_capacity(x.len() * y.len());
    for &a in x {
        for &b in y {
            diffs.push(a - b);
        }
    }
    diffs.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let h = 1.0 + (diffs.len() - 1) as f64 * p;
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    let weight = h - h.floor();
    if weight == 0.0 {
        diffs[lower - 1]
    } else {
        (1.0 - weight) * diffs[lower - 1] + weight * diffs[upper - 1]
    }
}
