//! Result types for A/B analysis.
//!
//! All records are immutable value objects produced once per computation
//! and never mutated afterwards. Fields that can be "undefined" (relative
//! uplift when arm A converted nobody) carry NaN; see the crate docs.

use serde::{Deserialize, Serialize};

// ============================================================================
// Verdict - The top-level result type
// ============================================================================

/// Outcome of a single A/B analysis, tagged by the method that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Verdict {
    /// Result of the pooled two-proportion z-test.
    Frequentist(FrequentistResult),
    /// Result of the Beta-Binomial Monte Carlo simulation.
    Bayesian(BayesianResult),
}

impl Verdict {
    /// Whether the analysis declared variant B the winner.
    pub fn is_winner(&self) -> bool {
        match self {
            Verdict::Frequentist(r) => r.is_winner,
            Verdict::Bayesian(r) => r.is_winner,
        }
    }

    /// Observed conversion rates `(rate_a, rate_b)`.
    pub fn rates(&self) -> (f64, f64) {
        match self {
            Verdict::Frequentist(r) => (r.rate_a, r.rate_b),
            Verdict::Bayesian(r) => (r.rate_a, r.rate_b),
        }
    }
}

// ============================================================================
// Frequentist
// ============================================================================

/// Output of the pooled two-proportion z-test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequentistResult {
    /// Observed conversion rate of variant A.
    pub rate_a: f64,
    /// Observed conversion rate of variant B.
    pub rate_b: f64,
    /// Pooled conversion rate across both arms.
    pub pooled_rate: f64,
    /// Pooled standard error of the rate difference. Strictly positive;
    /// a zero SE is reported as `AnalysisError::DegenerateVariance` instead.
    pub std_error: f64,
    /// z-statistic of the rate difference.
    pub z_score: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    /// Confidence percent, `(1 - p_value) * 100`.
    pub confidence: f64,
    /// Relative uplift of B over A, in percent. NaN when `rate_a == 0`.
    pub uplift_pct: f64,
    /// First-order (delta-method) standard error of the uplift, in percent.
    /// NaN when `rate_a == 0`.
    pub uplift_se_pct: f64,
    /// True iff `confidence` reached the caller's target *and* B's observed
    /// rate exceeds A's. The second clause keeps a two-sided test from
    /// declaring a "win" when B is significantly worse.
    pub is_winner: bool,
}

// ============================================================================
// Bayesian
// ============================================================================

/// Beta posterior over one arm's true conversion rate.
///
/// Uniform `Beta(1, 1)` prior updated by a Binomial likelihood:
/// `alpha = conversions + 1`, `beta = visitors - conversions + 1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PosteriorSummary {
    /// Posterior alpha parameter.
    pub alpha: f64,
    /// Posterior beta parameter.
    pub beta: f64,
    /// Closed-form posterior mean, `alpha / (alpha + beta)`.
    pub mean: f64,
    /// Closed-form posterior standard deviation.
    pub std_dev: f64,
}

impl PosteriorSummary {
    /// Posterior for an arm observed as `conversions` out of `visitors`.
    pub fn from_counts(visitors: u64, conversions: u64) -> Self {
        debug_assert!(
            conversions <= visitors,
            "conversions cannot exceed visitors"
        );
        let alpha = conversions as f64 + 1.0;
        let beta = (visitors - conversions) as f64 + 1.0;
        let total = alpha + beta;
        let mean = alpha / total;
        let variance = alpha * beta / (total * total * (total + 1.0));
        Self {
            alpha,
            beta,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Output of the Beta-Binomial Monte Carlo simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BayesianResult {
    /// Observed conversion rate of variant A.
    pub rate_a: f64,
    /// Observed conversion rate of variant B.
    pub rate_b: f64,
    /// Observed relative uplift of B over A, in percent. NaN when
    /// `rate_a == 0`.
    pub uplift_pct: f64,
    /// Posterior over arm A's true rate.
    pub posterior_a: PosteriorSummary,
    /// Posterior over arm B's true rate.
    pub posterior_b: PosteriorSummary,
    /// Monte Carlo estimate of `P(rate_B > rate_A)`, in percent.
    pub prob_b_better: f64,
    /// Monte Carlo mean of the posterior relative uplift, in percent.
    pub expected_uplift_pct: f64,
    /// Empirical standard deviation of the posterior uplift, in percent.
    pub uplift_std_dev_pct: f64,
    /// Posterior uplift draws, in percent; one entry per Monte Carlo
    /// iteration. Feeds the histogram builder.
    pub uplift_samples: Vec<f64>,
    /// True iff `prob_b_better / 100` reached the win threshold (0.95).
    pub is_winner: bool,
}

// ============================================================================
// Chart-ready series
// ============================================================================

/// Approximate box-plot summary of a binomial proportion, clamped to [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuantileBox {
    /// Lower whisker, `p - 1.96 sd`.
    pub whisker_low: f64,
    /// First quartile, `p - 0.6745 sd`.
    pub q1: f64,
    /// Median of the normal approximation, i.e. the observed rate.
    pub median: f64,
    /// Third quartile, `p + 0.6745 sd`.
    pub q3: f64,
    /// Upper whisker, `p + 1.96 sd`.
    pub whisker_high: f64,
}

/// Equal-width histogram over a sample sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges, `counts.len() + 1` entries for a non-empty histogram.
    pub edges: Vec<f64>,
    /// Samples per bin; sums to the input length.
    pub counts: Vec<usize>,
}
