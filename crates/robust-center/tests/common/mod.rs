//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};

pub const EPSILON: f64 = 1e-10;

pub fn generate_normal(n: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

pub fn generate_uniform(n: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let uniform = Uniform::new(low, high);
    (0..n).map(|_| uniform.sample(&mut rng)).collect()
}

/// Small integers, so ties are frequent
pub fn generate_ties(n: usize, seed: u64) -> Vec<f64> {
    generate_uniform(n, 0.0, 4.0, seed)
        .into_iter()
        .map(f64::floor)
        .collect()
}
