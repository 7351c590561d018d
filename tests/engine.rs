//! End-to-end tests: builder entry point, validation, chart pipeline, and
//! serialization of result records.

use abverdict::{
    chart, AbTest, AnalysisError, ExperimentInput, FrequentistResult, InvalidInputReason, Method,
    Verdict, HISTOGRAM_BINS,
};

// ============================================================================
// Builder dispatch
// ============================================================================

#[test]
fn builder_runs_frequentist() {
    let input = ExperimentInput::clamped(1000, 100, 1000, 130, 95.0);
    let verdict = AbTest::new().run(&input, Method::Frequentist).unwrap();

    match verdict {
        Verdict::Frequentist(result) => {
            assert!(result.is_winner);
            assert!((result.rate_b - 0.13).abs() < 1e-12);
        }
        Verdict::Bayesian(_) => panic!("wrong estimator dispatched"),
    }
}

#[test]
fn builder_runs_bayesian_with_seed() {
    let input = ExperimentInput::clamped(2000, 200, 2000, 260, 95.0);
    let oracle = AbTest::new().draws(5000).seed(42);

    let first = oracle.clone().run(&input, Method::Bayesian).unwrap();
    let second = oracle.run(&input, Method::Bayesian).unwrap();

    let (Verdict::Bayesian(a), Verdict::Bayesian(b)) = (first, second) else {
        panic!("wrong estimator dispatched");
    };
    assert_eq!(a.uplift_samples.len(), 5000);
    assert_eq!(a.prob_b_better.to_bits(), b.prob_b_better.to_bits());
}

#[test]
fn unseeded_runs_still_complete() {
    let input = ExperimentInput::clamped(500, 40, 500, 50, 95.0);
    let verdict = AbTest::new().draws(1000).run(&input, Method::Bayesian).unwrap();
    let Verdict::Bayesian(result) = verdict else {
        panic!("wrong estimator dispatched");
    };
    assert!((0.0..=100.0).contains(&result.prob_b_better));
    assert_eq!(result.uplift_samples.len(), 1000);
}

// ============================================================================
// Validation happens before dispatch, identically for both methods
// ============================================================================

#[test]
fn invalid_input_rejected_for_both_methods() {
    let input = ExperimentInput::new(0, 0, 100, 10, 95.0);

    for method in [Method::Frequentist, Method::Bayesian] {
        assert!(matches!(
            AbTest::new().run(&input, method),
            Err(AnalysisError::InvalidInput(InvalidInputReason::ZeroVisitors))
        ));
    }
}

#[test]
fn unclamped_excess_conversions_rejected() {
    let input = ExperimentInput::new(100, 150, 100, 10, 95.0);
    assert!(matches!(
        AbTest::new().run(&input, Method::Frequentist),
        Err(AnalysisError::InvalidInput(
            InvalidInputReason::ConversionsExceedVisitors
        ))
    ));
}

// ============================================================================
// Chart pipeline over real estimator output
// ============================================================================

#[test]
fn histogram_over_posterior_uplift_samples() {
    let input = ExperimentInput::clamped(1000, 100, 1000, 130, 95.0);
    let verdict = AbTest::new().seed(3).run(&input, Method::Bayesian).unwrap();
    let Verdict::Bayesian(result) = verdict else {
        panic!("wrong estimator dispatched");
    };

    let hist = chart::histogram(&result.uplift_samples, HISTOGRAM_BINS);
    assert_eq!(hist.counts.iter().sum::<usize>(), result.uplift_samples.len());
    assert_eq!(hist.edges.len(), HISTOGRAM_BINS + 1);
}

#[test]
fn quantile_boxes_over_observed_rates() {
    let input = ExperimentInput::clamped(1000, 100, 1000, 130, 95.0);
    let box_a = chart::quantile_box(input.rate_a(), input.visitors_a);
    let box_b = chart::quantile_box(input.rate_b(), input.visitors_b);

    assert!(box_a.median < box_b.median);
    assert!(box_a.whisker_low >= 0.0 && box_b.whisker_high <= 1.0);
}

#[test]
fn density_curve_over_posterior() {
    let input = ExperimentInput::clamped(2000, 200, 2000, 260, 95.0);
    let Verdict::Bayesian(result) =
        AbTest::new().seed(5).run(&input, Method::Bayesian).unwrap()
    else {
        panic!("wrong estimator dispatched");
    };

    let posterior = result.posterior_b;
    let curve = chart::density_curve(
        posterior.mean,
        posterior.std_dev,
        posterior.mean - 4.0 * posterior.std_dev,
        posterior.mean + 4.0 * posterior.std_dev,
        abverdict::DENSITY_POINTS,
    );
    assert_eq!(curve.len(), abverdict::DENSITY_POINTS);

    // Highest ordinate should sit near the posterior mean.
    let peak = curve
        .iter()
        .cloned()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert!((peak.0 - posterior.mean).abs() < 2.0 * posterior.std_dev);
}

// ============================================================================
// Serialization round-trips
// ============================================================================

#[test]
fn frequentist_result_round_trips_through_json() {
    let input = ExperimentInput::new(1000, 100, 1000, 130, 95.0);
    let Verdict::Frequentist(result) =
        AbTest::new().run(&input, Method::Frequentist).unwrap()
    else {
        panic!("wrong estimator dispatched");
    };

    let json = serde_json::to_string(&result).unwrap();
    let back: FrequentistResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.z_score.to_bits(), result.z_score.to_bits());
    assert_eq!(back.is_winner, result.is_winner);
}

#[test]
fn input_round_trips_through_json() {
    let input = ExperimentInput::new(123, 45, 678, 90, 97.5);
    let json = serde_json::to_string(&input).unwrap();
    let back: ExperimentInput = serde_json::from_str(&json).unwrap();
    assert_eq!(back, input);
}
