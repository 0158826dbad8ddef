//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const EPSILON: f64 = 1e-10;

/// Ascending rows of random values, some of them empty
pub fn random_rows(rows: usize, max_len: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            let len = rng.gen_range(0..=max_len);
            let mut row: Vec<f64> = (0..len).map(|_| rng.gen_range(-5..=5) as f64).collect();
            row.sort_by(f64::total_cmp);
            row
        })
        .collect()
}

/// Median of every value, computed by sorting
pub fn brute_median(rows: &[Vec<f64>]) -> f64 {
    let mut all: Vec<f64> = rows.iter().flatten().copied().collect();
    all.sort_by(f64::total_cmp);
    let n = all.len();
    if n % 2 == 1 {
        all[n / 2]
    } else {
        (all[n / 2 - 1] + all[n / 2]) / 2.0
    }
}
