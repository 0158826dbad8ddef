//! Reproducible center bounds on a contaminated sample
//!
//! Run with `RUST_LOG=debug` to see the estimator spans.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use robust_center::center;
use robust_confidence::{bootstrap_center, center_bounds_approx, BootstrapConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let normal = Normal::new(100.0, 15.0)?;
    let mut sample: Vec<f64> = (0..500).map(|_| normal.sample(&mut rng)).collect();
    // A handful of gross outliers
    sample.extend([1e4, 2e4, -5e3]);

    let mean = sample.iter().sum::<f64>() / sample.len() as f64;
    println!("mean:   {mean:.3}");
    println!("center: {:.3}", center(&sample)?);

    let config = BootstrapConfig::default()
        .with_iterations(2_000)
        .with_misrate(0.01)
        .with_seed("bootstrap-demo");
    let ci = center_bounds_approx(&sample, &config)?;
    println!("{ci}");
    println!("config: {}", serde_json::to_string(&config)?);

    let mut sorted = sample.clone();
    sorted.sort_by(f64::total_cmp);
    let centers = bootstrap_center(&sorted, 50, 5, "bootstrap-demo")?;
    println!("first bootstrap centers: {centers:?}");

    Ok(())
}
