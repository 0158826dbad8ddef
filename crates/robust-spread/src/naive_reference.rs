//! Naive reference implementation of the Shamos estimator
//!
//! Enumerates every pairwise absolute difference and sorts them. Only used to
//! verify the fast selector.
//!
//! DO NOT USE IN PRODUCTION - this is for testing and debugging only!

/// Median of all pairwise absolute differences `|xᵢ − xⱼ|`, `i < j`
pub fn naive_spread(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute spread of empty data");
    if data.len() == 1 {
        return 0.0;
    }

    let mut gaps = Vec::with_capacity(data.len() * (data.len() - 1) / 2);
    for i in 0..data.len() {
        for j in (i + 1)..data.len() {
            gaps.push((data[i] - data[j]).abs());
        }
    }
    gaps.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let m = gaps.len();
    if m % 2 == 1 {
        gaps[m / 2]
    } else {
        (gaps[m / 2 - 1] + gaps[m / 2]) / 2.0
    }
}
