//! Bayesian layer: conjugate Beta-Binomial posterior with Monte Carlo
//! simulation.
//!
//! ## Model
//!
//! Each arm's true conversion rate gets a uniform `Beta(1, 1)` prior. A
//! Binomial likelihood over `conversions` out of `visitors` yields the
//! conjugate posterior
//!
//! ```text
//! rate | data ~ Beta(conversions + 1, visitors - conversions + 1)
//! ```
//!
//! with closed-form mean `α/(α+β)` and variance `αβ/((α+β)²(α+β+1))`.
//!
//! ## Monte Carlo
//!
//! `P(B > A)` and the posterior uplift distribution have no convenient
//! closed form, so both are estimated by simulation: draw one rate per arm
//! from its posterior, count how often B's draw exceeds A's, and accumulate
//! the relative uplift `((B - A) / A) * 100` into a running sum and sum of
//! squares. The empirical uplift standard deviation uses
//! `sqrt(max(0, E[x²] - E[x]²))`; the `max` guards against tiny negative
//! values from floating-point cancellation.
//!
//! Every positive-visitor input yields a well-defined posterior, so this
//! layer has no failure modes beyond the shared input validation.

use rand::Rng;

use crate::config::ExperimentInput;
use crate::error::AnalysisError;
use crate::result::{BayesianResult, PosteriorSummary};
use crate::sampling;

/// Default number of Monte Carlo draws.
///
/// A knob, not a contract: callers configure it through
/// [`AbTest::draws`](crate::AbTest::draws) and must not assume this value.
pub const DEFAULT_DRAWS: usize = 12_000;

/// Posterior probability `P(B > A)` that B must reach to win, as a fraction.
pub const BAYES_WIN_THRESHOLD: f64 = 0.95;

/// Run the Beta-Binomial simulation over a snapshot of counts.
///
/// `draws` is the Monte Carlo iteration count; the estimate's standard
/// error shrinks as `1/sqrt(draws)`. The random source is injected so a
/// seeded generator gives fully reproducible results.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] if the counts violate the input
/// invariants. Nothing else can fail.
pub fn analyze<R: Rng + ?Sized>(
    input: &ExperimentInput,
    draws: usize,
    rng: &mut R,
) -> Result<BayesianResult, AnalysisError> {
    input.validate()?;
    debug_assert!(draws > 0, "draw count must be positive");

    let posterior_a = PosteriorSummary::from_counts(input.visitors_a, input.conversions_a);
    let posterior_b = PosteriorSummary::from_counts(input.visitors_b, input.conversions_b);

    let mut b_better = 0usize;
    let mut uplift_sum = 0.0;
    let mut uplift_sq_sum = 0.0;
    let mut uplift_samples = Vec::with_capacity(draws);

    for _ in 0..draws {
        let sample_a = sampling::beta(rng, posterior_a.alpha, posterior_a.beta);
        let sample_b = sampling::beta(rng, posterior_b.alpha, posterior_b.beta);

        if sample_b > sample_a {
            b_better += 1;
        }

        // Beta draws are strictly positive, so the ratio is always finite.
        let uplift = (sample_b - sample_a) / sample_a * 100.0;
        uplift_sum += uplift;
        uplift_sq_sum += uplift * uplift;
        uplift_samples.push(uplift);
    }

    let n = draws as f64;
    let prob_b_better = b_better as f64 / n * 100.0;
    let expected_uplift_pct = uplift_sum / n;
    let uplift_std_dev_pct =
        (uplift_sq_sum / n - expected_uplift_pct * expected_uplift_pct).max(0.0).sqrt();

    let rate_a = input.rate_a();
    let rate_b = input.rate_b();
    let uplift_pct = if rate_a == 0.0 {
        f64::NAN
    } else {
        (rate_b - rate_a) / rate_a * 100.0
    };

    Ok(BayesianResult {
        rate_a,
        rate_b,
        uplift_pct,
        posterior_a,
        posterior_b,
        prob_b_better,
        expected_uplift_pct,
        uplift_std_dev_pct,
        uplift_samples,
        is_winner: prob_b_better / 100.0 >= BAYES_WIN_THRESHOLD,
    })
}
