//! Gamma and Beta variate generation from a uniform source.
//!
//! Everything here is generic over [`rand::Rng`], so callers inject the
//! randomness source explicitly — the Monte Carlo estimator seeds a
//! `Xoshiro256PlusPlus`, and tests pin a seed for reproducibility.
//!
//! ## Algorithms
//!
//! - Standard normal: Box–Muller transform from two independent uniforms.
//! - `Gamma(k)` for `k >= 1`: Marsaglia–Tsang squeeze method
//!   (`d = k - 1/3`, `c = 1/sqrt(9d)`, cube-of-normal proposal with a fast
//!   acceptance test and an exact log fallback).
//! - `Gamma(k)` for `0 < k < 1`: the boost identity
//!   `Gamma(k) = Gamma(k+1) * U^(1/k)`, which recurses exactly once into the
//!   `k >= 1` branch.
//! - `Beta(a, b)`: ratio `X / (X + Y)` of two independent Gamma draws.
//!
//! The Marsaglia–Tsang rejection loop has no structural iteration cap; its
//! acceptance rate is above 95% for all shapes, so termination is almost
//! sure but not bounded. Callers needing hard latency guarantees must cap
//! retries themselves.
//!
//! # Reference
//!
//! Marsaglia, G. & Tsang, W. W. (2000). "A simple method for generating
//! gamma variables." ACM TOMS 26(3):363–372.

use rand::Rng;

/// Sample a standard normal variate using the Box–Muller transform.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // Box-Muller transform
    let u1 = positive_uniform(rng);
    let u2: f64 = rng.random();

    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Sample from `Gamma(shape, 1)`.
///
/// Returns a strictly positive value for any finite `shape > 0`.
///
/// # Panics
///
/// Debug-asserts that `shape` is positive and finite.
pub fn gamma<R: Rng + ?Sized>(rng: &mut R, shape: f64) -> f64 {
    debug_assert!(
        shape > 0.0 && shape.is_finite(),
        "gamma shape must be positive and finite"
    );

    if shape < 1.0 {
        // Boost step: Gamma(k) = Gamma(k+1) * U^(1/k). Recurses once.
        let u = positive_uniform(rng);
        return gamma(rng, shape + 1.0) * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    loop {
        let z = standard_normal(rng);
        let v = (1.0 + c * z).powi(3);
        if v <= 0.0 {
            continue;
        }

        let u = positive_uniform(rng);
        // Fast squeeze acceptance, then the exact log test.
        if u < 1.0 - 0.0331 * z.powi(4) {
            return d * v;
        }
        if u.ln() < 0.5 * z * z + d * (1.0 - v + v.ln()) {
            return d * v;
        }
    }
}

/// Sample from `Beta(alpha, beta)` as a ratio of two Gamma draws.
///
/// The result lies strictly inside `(0, 1)`.
pub fn beta<R: Rng + ?Sized>(rng: &mut R, alpha: f64, beta: f64) -> f64 {
    let x = gamma(rng, alpha);
    let y = gamma(rng, beta);
    x / (x + y)
}

/// Uniform draw over `(0, 1]`.
///
/// `Rng::random` yields `[0, 1)`; flipping the interval keeps `ln` finite.
fn positive_uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 - rng.random::<f64>()
}
