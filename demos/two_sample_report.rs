//! Compare two latency samples with point estimates and exact bounds
//!
//! Run with `RUST_LOG=robust_confidence=debug` to see the selected ranks.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal};
use robust_pairwise::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn latencies(median_ms: f64, n: usize, seed: u64) -> Result<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = LogNormal::new(median_ms.ln(), 0.25).context("latency distribution")?;
    Ok((0..n).map(|_| dist.sample(&mut rng)).collect())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let baseline = latencies(20.0, 80, 1)?;
    let candidate = latencies(23.0, 60, 2)?;
    let misrate = 0.01;
    info!(baseline = baseline.len(), candidate = candidate.len(), misrate, "comparing samples");

    println!("baseline center:  {:.3} ms", center(&baseline)?);
    println!("candidate center: {:.3} ms", center(&candidate)?);
    println!("baseline spread:  {:.3} ms", spread(&baseline)?);

    let shift_ci = shift_bounds(&candidate, &baseline, misrate)?;
    println!("shift:     {shift_ci}");
    let ratio_ci = ratio_bounds(&candidate, &baseline, misrate)?;
    println!("ratio:     {ratio_ci}");
    let candidate_center = center_bounds(&candidate, misrate)?;
    println!("candidate: {candidate_center}");

    if shift_ci.lower > 0.0 {
        info!(lower = shift_ci.lower, "candidate is slower");
    }
    Ok(())
}
