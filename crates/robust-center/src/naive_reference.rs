//! Naive reference implementation of the Hodges-Lehmann estimator
//!
//! Enumerates every pairwise average and sorts them. O(n²) memory and
//! O(n² log n) time; only used to verify the fast selector.
//!
//! DO NOT USE IN PRODUCTION - this is for testing and debugging only!

/// Median of all pairwise averages `(xᵢ + xⱼ) / 2`, `i ≤ j`
pub fn naive_center(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute center of empty data");

    let mut averages = Vec::with_capacity(data.len() * (data.len() + 1) / 2);
    for i in 0..data.len() {
        for j in i..data.len() {
            averages.push((data[i] + data[j]) / 2.0);
        }
    }
    averages.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let m = averages.len();
    if m % 2 == 1 {
        averages[m / 2]
    } else {
        (averages[m / 2 - 1] + averages[m / 2]) / 2.0
    }
}
