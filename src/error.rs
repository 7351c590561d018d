//! Error taxonomy for the analysis engine.
//!
//! Failures are returned as values and never unwind past the engine
//! boundary. Note that an undefined uplift (observed rate of A equal to
//! zero) is *not* an error: the affected result fields carry NaN instead.

use serde::{Deserialize, Serialize};

/// Why an [`ExperimentInput`](crate::ExperimentInput) was rejected.
///
/// Doubles as the message key surfaced to the caller's presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputReason {
    /// A variant reported zero visitors.
    #[error("visitors must be greater than zero")]
    ZeroVisitors,
    /// A variant reported more conversions than visitors.
    #[error("conversions cannot exceed visitors")]
    ConversionsExceedVisitors,
    /// The confidence target is outside the half-open interval (0, 100].
    #[error("confidence target must be in (0, 100]")]
    TargetOutOfRange,
}

/// Errors produced by input validation or by an estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The input violated a basic invariant; raised before any estimator
    /// runs. Recoverable by re-prompting the caller for new counts.
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInputReason),

    /// The pooled rate is exactly 0 or 1, so the pooled standard error is
    /// zero and the z-statistic is undefined. Only the frequentist path can
    /// fail this way.
    #[error("pooled standard error is zero; the z-test is undefined for this input")]
    DegenerateVariance,
}
