//! Scalar special functions: error function and standard normal CDF.
//!
//! The error function uses the Abramowitz & Stegun 7.1.26 rational
//! approximation, accurate to about 1.5e-7 absolute error over the whole
//! real line. That is far tighter than anything the z-test downstream needs,
//! and it keeps the module dependency-free.
//!
//! # Reference
//!
//! Abramowitz, M. & Stegun, I. A. (1964). "Handbook of Mathematical
//! Functions", formula 7.1.26.

/// Error function via the Abramowitz–Stegun rational approximation.
///
/// Odd symmetry (`erf(-x) = -erf(x)`) is enforced by applying the sign of
/// the input separately, so the polynomial only ever sees `|x|`.
#[inline]
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    // The polynomial does not vanish exactly at 0 (the coefficient sum is
    // 0.999999999), so pin the symmetry point by hand.
    if x == 0.0 {
        return 0.0;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t) * (-x * x).exp();

    sign * y
}

/// Standard normal cumulative distribution function.
///
/// `Phi(x) = 0.5 * (1 + erf(x / sqrt(2)))`, in `[0, 1]` for all finite `x`.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tabulated erf values, 10 significant digits.
    const TABLE: &[(f64, f64)] = &[
        (0.5, 0.5204998778),
        (1.0, 0.8427007929),
        (1.5, 0.9661051465),
        (2.0, 0.9953222650),
        (3.0, 0.9999779095),
    ];

    #[test]
    fn erf_matches_table() {
        for &(x, expected) in TABLE {
            let got = erf(x);
            assert!(
                (got - expected).abs() < 3e-7,
                "erf({x}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn erf_is_odd() {
        for &(x, _) in TABLE {
            assert!((erf(-x) + erf(x)).abs() < 1e-12);
        }
        assert_eq!(erf(0.0), 0.0);
    }

    #[test]
    fn cdf_at_zero_is_half() {
        assert_eq!(normal_cdf(0.0), 0.5);
    }

    #[test]
    fn cdf_symmetry() {
        for i in 0..100 {
            let x = -5.0 + 0.1 * i as f64;
            let sum = normal_cdf(-x) + normal_cdf(x);
            assert!((sum - 1.0).abs() < 1e-7, "symmetry broken at x = {x}");
        }
    }

    #[test]
    fn cdf_tails() {
        assert!(normal_cdf(-8.0) < 1e-7);
        assert!(normal_cdf(8.0) > 1.0 - 1e-7);
        assert!((normal_cdf(1.96) - 0.975).abs() < 1e-3);
    }
}
