//! Rank margins for distribution-free bounds
//!
//! The exact bounds exclude a number of extreme pairwise values from each
//! side. How many depends on the null distribution of a rank statistic:
//! Mann-Whitney `U` for two samples, Wilcoxon `W` for one sample. Small
//! samples use the exact distribution, larger ones an Edgeworth expansion.

use robust_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::factorial::binomial;
use std::f64::consts::PI;

/// Largest `n + m` for the exact Mann-Whitney distribution
pub const MAX_EXACT_PAIRWISE: usize = 400;

/// Largest `n` for the exact signed-rank distribution (`2^n` must fit in `u64`)
pub const MAX_EXACT_SIGNED_RANK: usize = 63;

fn validate_misrate(misrate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&misrate) {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "misrate {misrate} must be in [0, 1]"
        )))
    }
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0)
        .map_err(|e| Error::Other(anyhow::anyhow!("standard normal distribution: {e}")))
}

fn density(z: f64) -> f64 {
    (-z * z / 2.0).exp() / (2.0 * PI).sqrt()
}

/// Smallest misrate a one-sample bound over `n` values can reach, `2^(1−n)`
pub fn min_achievable_misrate_one_sample(n: usize) -> Result<f64> {
    if n == 0 {
        return Err(Error::empty_input("signed-rank margin"));
    }
    Ok(2f64.powf(1.0 - n as f64))
}

/// Smallest misrate a two-sample bound can reach, `2 / C(n + m, n)`
pub fn min_achievable_misrate_two_sample(n: usize, m: usize) -> Result<f64> {
    if n == 0 || m == 0 {
        return Err(Error::empty_input("pairwise margin"));
    }
    Ok(2.0 / binomial((n + m) as u64, n as u64))
}

/// Number of extreme pairwise differences to exclude, split over both tails
///
/// Uses Löffler's recurrence for the exact Mann-Whitney distribution when
/// `n + m <= 400` and an Edgeworth expansion otherwise. Always even.
pub fn pairwise_margin(n: usize, m: usize, misrate: f64) -> Result<usize> {
    if n == 0 || m == 0 {
        return Err(Error::empty_input("pairwise margin"));
    }
    validate_misrate(misrate)?;

    let one_tail = if n + m <= MAX_EXACT_PAIRWISE {
        mann_whitney_exact_quantile(n, m, misrate / 2.0)
    } else {
        let normal = standard_normal()?;
        largest_below(n * m, misrate / 2.0, |u| mann_whitney_edgeworth_cdf(&normal, n, m, u))
    };
    Ok(one_tail * 2)
}

/// Number of extreme pairwise averages to exclude, split over both tails
///
/// Exact Wilcoxon signed-rank distribution for `n <= 63`, Edgeworth
/// expansion above. Always even.
pub fn signed_rank_margin(n: usize, misrate: f64) -> Result<usize> {
    if n == 0 {
        return Err(Error::empty_input("signed-rank margin"));
    }
    validate_misrate(misrate)?;

    let max_w = n * (n + 1) / 2;
    let one_tail = if n <= MAX_EXACT_SIGNED_RANK {
        signed_rank_exact_quantile(n, misrate / 2.0)
    } else {
        let normal = standard_normal()?;
        largest_below(max_w, misrate / 2.0, |w| signed_rank_edgeworth_cdf(&normal, n, w))
    };
    Ok(one_tail * 2)
}

/// Smallest `u` with `P(U <= u) >= p` under the null
///
/// `pmf` follows Löffler (1982): `u·p(u) = Σ p(i)·σ(u − i)`, where `σ(k)` sums
/// the divisors of `k` up to `n` and subtracts those in `(m, m + n]`.
fn mann_whitney_exact_quantile(n: usize, m: usize, p: f64) -> usize {
    let total = binomial((n + m) as u64, m as u64);
    let mut cdf = 1.0 / total;
    if cdf >= p {
        return 0;
    }

    let mut pmf = vec![1.0];
    let mut sigma = vec![0.0];
    let mut u = 0usize;
    loop {
        u += 1;
        let divisors = |range: std::ops::RangeInclusive<usize>| -> i64 {
            range.filter(|d| u % d == 0).map(|d| d as i64).sum()
        };
        sigma.push((divisors(1..=n) - divisors(m + 1..=m + n)) as f64);

        let next = (0..u).map(|i| pmf[i] * sigma[u - i]).sum::<f64>() / u as f64;
        pmf.push(next);
        cdf += next / total;
        if cdf >= p {
            return u;
        }
        if next == 0.0 {
            return pmf.len() - 1;
        }
    }
}

/// Smallest `w` with `P(W <= w) >= p` under the null, by subset-sum counting
fn signed_rank_exact_quantile(n: usize, p: f64) -> usize {
    let max_w = n * (n + 1) / 2;
    let total = (1u64 << n) as f64;
    let mut counts = vec![0u64; max_w + 1];
    counts[0] = 1;
    for rank in 1..=n {
        for w in (rank..=(rank * (rank + 1) / 2)).rev() {
            counts[w] += counts[w - rank];
        }
    }

    let mut cumulative = 0u64;
    for (w, &count) in counts.iter().enumerate() {
        cumulative += count;
        if cumulative as f64 / total >= p {
            return w;
        }
    }
    max_w
}

/// Largest point of `[0, upper]` where `cdf` stays below `p`, by bisection
fn largest_below(upper: usize, p: f64, cdf: impl Fn(usize) -> f64) -> usize {
    let (mut a, mut b) = (0usize, upper);
    while a + 1 < b {
        let c = (a + b) / 2;
        if cdf(c) < p {
            a = c;
        } else {
            b = c;
        }
    }
    if cdf(b) < p {
        b
    } else {
        a
    }
}

fn mann_whitney_edgeworth_cdf(normal: &Normal, n: usize, m: usize, u: usize) -> f64 {
    let (n, m, u) = (n as f64, m as f64, u as f64);
    let (n2, m2) = (n * n, m * m);
    let (n3, m3) = (n2 * n, m2 * m);
    let (n4, m4) = (n2 * n2, m2 * m2);

    let mu2 = n * m * (n + m + 1.0) / 12.0;
    let mu4 = n
        * m
        * (n + m + 1.0)
        * (5.0 * m * n * (m + n) - 2.0 * (m2 + n2) + 3.0 * m * n - 2.0 * (n + m))
        / 240.0;
    let mu6 = n
        * m
        * (n + m + 1.0)
        * (35.0 * m2 * n2 * (m2 + n2) + 70.0 * m3 * n3
            - 42.0 * m * n * (m3 + n3)
            - 14.0 * m2 * n2 * (n + m)
            + 16.0 * (n4 + m4)
            - 52.0 * n * m * (n2 + m2)
            - 43.0 * n2 * m2
            + 32.0 * (m3 + n3)
            + 14.0 * m * n * (n + m)
            + 8.0 * (n2 + m2)
            + 16.0 * n * m
            - 8.0 * (n + m))
        / 4032.0;

    // Continuity correction for the discrete lower tail
    let z = (u - n * m / 2.0 - 0.5) / mu2.sqrt();
    let phi = density(z);

    let kurtosis = mu4 / (mu2 * mu2);
    let e3 = (kurtosis - 3.0) / 24.0;
    let e5 = (mu6 / (mu2 * mu2 * mu2) - 15.0 * kurtosis + 30.0) / 720.0;
    let e7 = 35.0 * (kurtosis - 3.0) * (kurtosis - 3.0) / 40320.0;

    let (z2, z3) = (z * z, z * z * z);
    let (z5, z7) = (z3 * z2, z3 * z2 * z2);
    let f3 = -phi * (z3 - 3.0 * z);
    let f5 = -phi * (z5 - 10.0 * z3 + 15.0 * z);
    let f7 = -phi * (z7 - 21.0 * z5 + 105.0 * z3 - 105.0 * z);

    (normal.cdf(z) + e3 * f3 + e5 * f5 + e7 * f7).clamp(0.0, 1.0)
}

fn signed_rank_edgeworth_cdf(normal: &Normal, n: usize, w: usize) -> f64 {
    let n = n as f64;
    let mu = n * (n + 1.0) / 4.0;
    let variance = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0;
    let z = (w as f64 - mu + 0.5) / variance.sqrt();

    let kappa4 = -n * (n + 1.0) * (2.0 * n + 1.0) * (3.0 * n * n + 3.0 * n - 1.0) / 240.0;
    let e3 = kappa4 / (24.0 * variance * variance);
    let f3 = -density(z) * (z * z * z - 3.0 * z);

    (normal.cdf(z) + e3 * f3).clamp(0.0, 1.0)
}
