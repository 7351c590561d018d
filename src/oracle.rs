//! Main `AbTest` entry point and builder.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::analysis::{bayes, frequentist};
use crate::config::{ExperimentInput, Method};
use crate::error::AnalysisError;
use crate::result::Verdict;

/// Main entry point for A/B analysis.
///
/// Use the builder pattern to configure the Monte Carlo draw count and the
/// random seed, then run either estimator over a snapshot of counts.
///
/// # Example
///
/// ```
/// use abverdict::{AbTest, ExperimentInput, Method};
///
/// let input = ExperimentInput::clamped(2000, 200, 2000, 260, 95.0);
/// let verdict = AbTest::new()
///     .draws(10_000)
///     .seed(42)
///     .run(&input, Method::Bayesian)?;
/// # Ok::<(), abverdict::AnalysisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AbTest {
    draws: usize,
    seed: Option<u64>,
}

impl Default for AbTest {
    fn default() -> Self {
        Self::new()
    }
}

impl AbTest {
    /// Create with default configuration: [`DEFAULT_DRAWS`](bayes::DEFAULT_DRAWS)
    /// Monte Carlo iterations and an entropy-derived seed.
    pub fn new() -> Self {
        Self {
            draws: bayes::DEFAULT_DRAWS,
            seed: None,
        }
    }

    /// Set the Monte Carlo draw count for the Bayesian path.
    pub fn draws(mut self, n: usize) -> Self {
        self.draws = n;
        self
    }

    /// Pin the random seed, making the Bayesian path fully deterministic.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the input and run the selected estimator.
    ///
    /// Validation always happens before dispatch, so an invalid snapshot is
    /// rejected identically by both methods.
    pub fn run(&self, input: &ExperimentInput, method: Method) -> Result<Verdict, AnalysisError> {
        input.validate()?;

        match method {
            Method::Frequentist => frequentist::analyze(input).map(Verdict::Frequentist),
            Method::Bayesian => {
                let mut rng = match self.seed {
                    Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
                    None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
                };
                bayes::analyze(input, self.draws, &mut rng).map(Verdict::Bayesian)
            }
        }
    }
}
