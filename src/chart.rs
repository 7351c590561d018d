//! Chart-ready numeric series derived from estimator output.
//!
//! Pure functions only: no randomness beyond what the Bayesian estimator
//! already produced, no side effects, and strictly no markup — a rendering
//! collaborator turns these series into whatever visual form it likes.

use crate::result::{Histogram, QuantileBox};

/// Abscissa count for [`density_curve`].
pub const DENSITY_POINTS: usize = 90;

/// Bin count for [`histogram`] over Monte Carlo uplift samples.
pub const HISTOGRAM_BINS: usize = 24;

/// Floor applied to standard deviations before dividing, so near-degenerate
/// posteriors still produce a finite curve.
const MIN_SD: f64 = 1e-6;

/// z-value of the standard normal 75th percentile.
const QUARTILE_Z: f64 = 0.6745;

/// z-value of the standard normal 97.5th percentile.
const WHISKER_Z: f64 = 1.96;

/// Gaussian density at `x` for a `N(mean, sd²)` distribution.
///
/// `sd` is floored at `1e-6`; the result is finite and non-negative for all
/// finite arguments.
pub fn gaussian_density(x: f64, mean: f64, sd: f64) -> f64 {
    let sd = sd.max(MIN_SD);
    let z = (x - mean) / sd;
    (-0.5 * z * z).exp() / (sd * (2.0 * std::f64::consts::PI).sqrt())
}

/// Sample a Gaussian density curve as `(x, density)` pairs.
///
/// Produces `points` evenly spaced abscissas covering `[x_min, x_max]`
/// inclusive. Deterministic given its inputs; `points` is raised to 2 when
/// a smaller value is requested so both endpoints always appear.
pub fn density_curve(
    mean: f64,
    sd: f64,
    x_min: f64,
    x_max: f64,
    points: usize,
) -> Vec<(f64, f64)> {
    let points = points.max(2);
    let step = (x_max - x_min) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let x = x_min + step * i as f64;
            (x, gaussian_density(x, mean, sd))
        })
        .collect()
}

/// Approximate box-plot summary of a binomial proportion.
///
/// Uses the normal approximation `sd = sqrt(p (1 - p) / n)`: quartiles sit
/// at `±0.6745 sd`, whiskers at `±1.96 sd`, and every field is clamped into
/// `[0, 1]` so extreme rates never produce out-of-range boxes.
pub fn quantile_box(p: f64, n: u64) -> QuantileBox {
    let sd = (p * (1.0 - p) / n as f64).sqrt();
    QuantileBox {
        whisker_low: (p - WHISKER_Z * sd).clamp(0.0, 1.0),
        q1: (p - QUARTILE_Z * sd).clamp(0.0, 1.0),
        median: p.clamp(0.0, 1.0),
        q3: (p + QUARTILE_Z * sd).clamp(0.0, 1.0),
        whisker_high: (p + WHISKER_Z * sd).clamp(0.0, 1.0),
    }
}

/// Bin samples into an equal-width histogram.
///
/// Bins span `[min, max]` of the input, with the span floored at 1.0 so a
/// constant sample sequence still gets a non-zero bin width. The value
/// exactly at `max` is absorbed by the last bin. Every sample lands in
/// exactly one bin, so the counts always sum to `samples.len()`.
///
/// An empty input produces an empty histogram.
pub fn histogram(samples: &[f64], bins: usize) -> Histogram {
    if samples.is_empty() || bins == 0 {
        return Histogram {
            edges: Vec::new(),
            counts: Vec::new(),
        };
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max - min > 0.0 { max - min } else { 1.0 };
    let width = span / bins as f64;

    let edges: Vec<f64> = (0..=bins).map(|i| min + width * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for &value in samples {
        let idx = (((value - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Histogram { edges, counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_peaks_at_mean() {
        let at_mean = gaussian_density(0.1, 0.1, 0.02);
        let off_mean = gaussian_density(0.15, 0.1, 0.02);
        assert!(at_mean > off_mean);
        assert!(off_mean > 0.0);
    }

    #[test]
    fn density_survives_zero_sd() {
        let d = gaussian_density(0.5, 0.5, 0.0);
        assert!(d.is_finite());
        assert!(d > 0.0);
    }

    #[test]
    fn curve_spacing_and_endpoints() {
        let curve = density_curve(0.0, 1.0, -4.0, 4.0, DENSITY_POINTS);
        assert_eq!(curve.len(), DENSITY_POINTS);
        assert_eq!(curve[0].0, -4.0);
        assert!((curve.last().unwrap().0 - 4.0).abs() < 1e-9);

        let step = curve[1].0 - curve[0].0;
        for pair in curve.windows(2) {
            assert!((pair[1].0 - pair[0].0 - step).abs() < 1e-9);
        }
        assert!(curve.iter().all(|&(_, y)| y >= 0.0));
    }

    #[test]
    fn box_fields_are_ordered() {
        let qb = quantile_box(0.13, 1000);
        assert!(qb.whisker_low <= qb.q1);
        assert!(qb.q1 <= qb.median);
        assert!(qb.median <= qb.q3);
        assert!(qb.q3 <= qb.whisker_high);
    }

    #[test]
    fn box_clamps_near_boundaries() {
        let low = quantile_box(0.01, 10);
        assert_eq!(low.whisker_low, 0.0);

        let high = quantile_box(0.99, 10);
        assert_eq!(high.whisker_high, 1.0);
    }

    #[test]
    fn histogram_conserves_counts() {
        let samples: Vec<f64> = (0..1000).map(|i| (i as f64) * 0.37 - 120.0).collect();
        let hist = histogram(&samples, HISTOGRAM_BINS);
        assert_eq!(hist.counts.len(), HISTOGRAM_BINS);
        assert_eq!(hist.edges.len(), HISTOGRAM_BINS + 1);
        assert_eq!(hist.counts.iter().sum::<usize>(), samples.len());
    }

    #[test]
    fn histogram_max_value_lands_in_last_bin() {
        let samples = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let hist = histogram(&samples, 4);
        assert_eq!(*hist.counts.last().unwrap(), 2); // 3.0 and 4.0
        assert_eq!(hist.counts.iter().sum::<usize>(), 5);
    }

    #[test]
    fn histogram_constant_samples_use_span_floor() {
        let samples = vec![7.5; 32];
        let hist = histogram(&samples, 8);
        assert_eq!(hist.counts[0], 32);
        assert_eq!(hist.counts.iter().sum::<usize>(), 32);
        // Span floored at 1.0, so each edge advances by 1/8.
        assert!((hist.edges[1] - hist.edges[0] - 0.125).abs() < 1e-12);
    }

    #[test]
    fn histogram_empty_input() {
        let hist = histogram(&[], HISTOGRAM_BINS);
        assert!(hist.edges.is_empty());
        assert!(hist.counts.is_empty());
    }
}
