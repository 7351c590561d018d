//! Experiment input record, method selector, and validation.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, InvalidInputReason};

/// Which inference paradigm to run.
///
/// Wire names are lowercase (`"frequentist"` / `"bayesian"`), matching the
/// method selector the engine's callers pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Pooled two-proportion z-test.
    Frequentist,
    /// Conjugate Beta-Binomial posterior with Monte Carlo simulation.
    Bayesian,
}

/// Raw counts for one complete A/B snapshot.
///
/// Invariants (checked by [`validate`](Self::validate)):
/// - `visitors_a > 0` and `visitors_b > 0`
/// - `conversions <= visitors` for each arm
/// - `confidence_target_percent` in `(0, 100]`
///
/// Counts are unsigned, so negative conversions are unrepresentable by
/// construction. Use [`clamped`](Self::clamped) to apply the conventional
/// caller-side clamp of conversions into `[0, visitors]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentInput {
    /// Visitors exposed to variant A.
    pub visitors_a: u64,
    /// Conversions observed for variant A.
    pub conversions_a: u64,
    /// Visitors exposed to variant B.
    pub visitors_b: u64,
    /// Conversions observed for variant B.
    pub conversions_b: u64,
    /// Confidence threshold, in percent, that the frequentist decision must
    /// clear to declare B a winner. Only the frequentist path reads it.
    pub confidence_target_percent: f64,
}

impl ExperimentInput {
    /// Build an input from raw counts, without clamping.
    pub fn new(
        visitors_a: u64,
        conversions_a: u64,
        visitors_b: u64,
        conversions_b: u64,
        confidence_target_percent: f64,
    ) -> Self {
        Self {
            visitors_a,
            conversions_a,
            visitors_b,
            conversions_b,
            confidence_target_percent,
        }
    }

    /// Build an input with each arm's conversions clamped into
    /// `[0, visitors]`.
    pub fn clamped(
        visitors_a: u64,
        conversions_a: u64,
        visitors_b: u64,
        conversions_b: u64,
        confidence_target_percent: f64,
    ) -> Self {
        Self {
            visitors_a,
            conversions_a: conversions_a.min(visitors_a),
            visitors_b,
            conversions_b: conversions_b.min(visitors_b),
            confidence_target_percent,
        }
    }

    /// Check the input invariants.
    ///
    /// Always runs before estimator dispatch; estimators re-run it so they
    /// stay total when called directly.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.visitors_a == 0 || self.visitors_b == 0 {
            return Err(AnalysisError::InvalidInput(InvalidInputReason::ZeroVisitors));
        }
        if self.conversions_a > self.visitors_a || self.conversions_b > self.visitors_b {
            return Err(AnalysisError::InvalidInput(
                InvalidInputReason::ConversionsExceedVisitors,
            ));
        }
        let target = self.confidence_target_percent;
        if !(target > 0.0 && target <= 100.0) {
            return Err(AnalysisError::InvalidInput(
                InvalidInputReason::TargetOutOfRange,
            ));
        }
        Ok(())
    }

    /// Observed conversion rate of variant A.
    pub fn rate_a(&self) -> f64 {
        self.conversions_a as f64 / self.visitors_a as f64
    }

    /// Observed conversion rate of variant B.
    pub fn rate_b(&self) -> f64 {
        self.conversions_b as f64 / self.visitors_b as f64
    }
}
