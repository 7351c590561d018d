//! # abverdict
//!
//! Decide whether variant B of an A/B experiment outperforms variant A,
//! starting from nothing but raw visitor and conversion counts.
//!
//! Two inference paradigms are provided:
//! - **Frequentist**: a pooled two-proportion z-test with a two-sided
//!   p-value, reported as a confidence percentage against a caller-chosen
//!   target.
//! - **Bayesian**: a conjugate Beta-Binomial posterior per arm, evaluated by
//!   Monte Carlo simulation to estimate `P(B > A)` and the expected relative
//!   uplift.
//!
//! The engine is pure data in, pure data out: it emits numbers and small
//! records (see [`chart`] for the chart-ready series), never markup or
//! layout. Every call is a complete, stateless computation — there is no
//! shared mutable state, and results are plain values that can cross
//! threads freely. Randomness is explicit: the Bayesian path takes a seed
//! (or draws one from entropy), so every result is reproducible.
//!
//! ## Quick Start
//!
//! ```
//! use abverdict::{AbTest, ExperimentInput, Method, Verdict};
//!
//! let input = ExperimentInput::clamped(1000, 100, 1000, 130, 95.0);
//! let verdict = AbTest::new().seed(42).run(&input, Method::Frequentist)?;
//!
//! if let Verdict::Frequentist(result) = verdict {
//!     println!("confidence: {:.2}%", result.confidence);
//!     println!("B wins: {}", result.is_winner);
//! }
//! # Ok::<(), abverdict::AnalysisError>(())
//! ```
//!
//! ## Error model
//!
//! Invalid counts and a degenerate (zero) pooled standard error are returned
//! as [`AnalysisError`] values, never panics. An observed rate of zero in
//! arm A makes the relative uplift *undefined*, which is reported as NaN in
//! the affected fields — a defined output state, not an error. Formatters
//! should render it as a placeholder, never as zero.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod oracle;
mod result;

// Functional modules
pub mod analysis;
pub mod chart;
pub mod sampling;
pub mod special;

// Re-exports for public API
pub use analysis::bayes::{BAYES_WIN_THRESHOLD, DEFAULT_DRAWS};
pub use chart::{DENSITY_POINTS, HISTOGRAM_BINS};
pub use config::{ExperimentInput, Method};
pub use error::{AnalysisError, InvalidInputReason};
pub use oracle::AbTest;
pub use result::{
    BayesianResult, FrequentistResult, Histogram, PosteriorSummary, QuantileBox, Verdict,
};
