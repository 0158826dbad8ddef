//! Integration tests for the shared selection engine and the deterministic RNG

mod common;

use common::{brute_median, random_rows};
use proptest::prelude::*;
use robust_core::{select_median, DeterministicRng, PairwiseMatrix, Partition};

/// Jagged matrix of explicit ascending rows
struct Jagged(Vec<Vec<f64>>);

impl PairwiseMatrix for Jagged {
    const ALGORITHM: &'static str = "jagged";

    fn rows(&self) -> usize {
        self.0.len()
    }

    fn row_window(&self, row: usize) -> (usize, usize) {
        (0, self.0[row].len())
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    fn total(&self) -> u64 {
        self.0.iter().map(|r| r.len() as u64).sum()
    }

    fn initial_pivot(&self) -> f64 {
        self.0.iter().find_map(|r| r.first().copied()).unwrap_or(0.0)
    }

    fn partition(&self, pivot: f64, cuts: &mut [usize]) -> Partition {
        let mut partition = Partition::new();
        for (row, values) in self.0.iter().enumerate() {
            let cut = values.partition_point(|&v| v < pivot);
            cuts[row] = cut;
            partition.record(cut, cut.checked_sub(1).map(|c| values[c]), values.get(cut).copied());
        }
        partition
    }
}

#[test]
fn test_random_jagged_matrices() {
    for seed in 0..200 {
        let rows = random_rows(6, 7, seed);
        if rows.iter().all(Vec::is_empty) {
            continue;
        }
        let expected = brute_median(&rows);
        let actual = select_median(&Jagged(rows.clone())).unwrap();
        assert_eq!(actual, expected, "seed {seed}: {rows:?}");
    }
}

#[test]
fn test_constant_matrix() {
    let rows = vec![vec![2.5; 4], vec![2.5; 3], vec![2.5]];
    assert_eq!(select_median(&Jagged(rows)).unwrap(), 2.5);
}

#[test]
fn test_rng_streams_are_reproducible_across_clones() {
    let mut rng = DeterministicRng::from_string("integration");
    for _ in 0..17 {
        rng.next_u64();
    }
    let mut fork = rng.clone();
    let a: Vec<usize> = (0..32).map(|_| rng.uniform_index(1000)).collect();
    let b: Vec<usize> = (0..32).map(|_| fork.uniform_index(1000)).collect();
    assert_eq!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_select_median_matches_sorting(
        mut rows in prop::collection::vec(prop::collection::vec(-1000.0f64..1000.0, 0..8), 1..8)
    ) {
        prop_assume!(rows.iter().any(|r| !r.is_empty()));
        for row in rows.iter_mut() {
            row.sort_by(f64::total_cmp);
        }
        let expected = brute_median(&rows);
        let actual = select_median(&Jagged(rows)).unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_uniform_index_in_range(seed in any::<u64>(), n in 1usize..10_000) {
        let mut rng = DeterministicRng::from_seed(seed);
        for _ in 0..16 {
            prop_assert!(rng.uniform_index(n) < n);
        }
    }
}
