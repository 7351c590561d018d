//! The two inference layers of the engine.
//!
//! 1. **Frequentist** ([`frequentist`]): pooled two-proportion z-test with a
//!    two-sided p-value — deterministic, closed form.
//! 2. **Bayesian** ([`bayes`]): conjugate Beta-Binomial posterior per arm,
//!    evaluated by Monte Carlo simulation over an injected random source.
//!
//! Both consume a validated [`ExperimentInput`](crate::ExperimentInput) and
//! produce an immutable result record.

pub mod bayes;
pub mod frequentist;
