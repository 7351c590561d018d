//! Frequentist layer: pooled two-proportion z-test.
//!
//! ## Model
//!
//! Under the null hypothesis both arms share one conversion rate, estimated
//! by pooling:
//!
//! ```text
//! p̄  = (cA + cB) / (vA + vB)
//! se = sqrt(p̄ (1 - p̄) (1/vA + 1/vB))
//! z  = (pB - pA) / se
//! ```
//!
//! The two-sided p-value is `2 (1 - Phi(|z|))` and is reported to callers as
//! a confidence percentage, `(1 - p) * 100`.
//!
//! The relative uplift `((pB - pA) / pA) * 100` and its first-order
//! (delta-method) standard error `(se / pA) * 100` are undefined when arm A
//! converted nobody; both are reported as NaN in that case. The delta-method
//! formula is kept as-is rather than replaced with an exact propagated
//! variance.

use crate::config::ExperimentInput;
use crate::error::AnalysisError;
use crate::result::FrequentistResult;
use crate::special::normal_cdf;

/// Run the z-test over a snapshot of counts.
///
/// This path is fully deterministic: identical inputs always produce
/// identical statistics.
///
/// # Errors
///
/// - [`AnalysisError::InvalidInput`] if the counts violate the input
///   invariants.
/// - [`AnalysisError::DegenerateVariance`] if the pooled rate is exactly 0
///   or 1, which makes the pooled standard error zero and the z-statistic
///   undefined.
pub fn analyze(input: &ExperimentInput) -> Result<FrequentistResult, AnalysisError> {
    input.validate()?;

    let v_a = input.visitors_a as f64;
    let v_b = input.visitors_b as f64;
    let c_a = input.conversions_a as f64;
    let c_b = input.conversions_b as f64;

    let rate_a = c_a / v_a;
    let rate_b = c_b / v_b;

    let pooled_rate = (c_a + c_b) / (v_a + v_b);
    let std_error = (pooled_rate * (1.0 - pooled_rate) * (1.0 / v_a + 1.0 / v_b)).sqrt();
    if std_error == 0.0 {
        return Err(AnalysisError::DegenerateVariance);
    }

    let z_score = (rate_b - rate_a) / std_error;
    let p_value = 2.0 * (1.0 - normal_cdf(z_score.abs()));
    let confidence = (1.0 - p_value) * 100.0;

    let (uplift_pct, uplift_se_pct) = if rate_a == 0.0 {
        (f64::NAN, f64::NAN)
    } else {
        (
            (rate_b - rate_a) / rate_a * 100.0,
            std_error / rate_a * 100.0,
        )
    };

    let is_winner = confidence >= input.confidence_target_percent && rate_b > rate_a;

    Ok(FrequentistResult {
        rate_a,
        rate_b,
        pooled_rate,
        std_error,
        z_score,
        p_value,
        confidence,
        uplift_pct,
        uplift_se_pct,
        is_winner,
    })
}
