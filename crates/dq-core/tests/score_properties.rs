//! Property-based tests for the scorer.
//!
//! The score must stay in range for any penalty inputs and must never rise
//! when a rule reports more failures.

use std::collections::BTreeMap;

use proptest::prelude::*;

use dq_core::{score, score_breakdown};
use dq_model::{ProfileMetrics, RuleResult};

fn profile(duplicate_rate: f64, null_rates: Vec<f64>) -> ProfileMetrics {
    ProfileMetrics {
        row_count: 100,
        duplicate_rate,
        null_rate: null_rates
            .into_iter()
            .enumerate()
            .map(|(idx, rate)| (format!("col_{idx}"), rate))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn results(counts: &[u64]) -> Vec<RuleResult> {
    counts
        .iter()
        .enumerate()
        .map(|(idx, count)| RuleResult::new(format!("rule {idx}"), *count))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn score_is_always_bounded(
        duplicate_rate in 0.0f64..=1.0,
        null_rates in prop::collection::vec(0.0f64..=1.0, 0..40),
        counts in prop::collection::vec(any::<u64>(), 0..10),
    ) {
        let value = score(&profile(duplicate_rate, null_rates), &results(&counts)).value();
        prop_assert!((0.0..=100.0).contains(&value), "score {} out of range", value);
    }

    #[test]
    fn score_has_one_decimal(
        duplicate_rate in 0.0f64..=1.0,
        null_rates in prop::collection::vec(0.0f64..=1.0, 0..5),
        counts in prop::collection::vec(0u64..100_000, 0..5),
    ) {
        let value = score(&profile(duplicate_rate, null_rates), &results(&counts)).value();
        let scaled = value * 10.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn more_failures_never_raise_the_score(
        duplicate_rate in 0.0f64..=1.0,
        null_rates in prop::collection::vec(0.0f64..=1.0, 0..5),
        counts in prop::collection::vec(0u64..1_000_000, 1..6),
        bump in 0u64..1_000_000,
        which in any::<prop::sample::Index>(),
    ) {
        let metrics = profile(duplicate_rate, null_rates);
        let before = score(&metrics, &results(&counts));

        let mut raised = counts.clone();
        let idx = which.index(raised.len());
        raised[idx] += bump;
        let after = score(&metrics, &results(&raised));

        prop_assert!(after <= before, "{} > {}", after, before);
    }

    #[test]
    fn scoring_is_pure(
        duplicate_rate in 0.0f64..=1.0,
        null_rates in prop::collection::vec(0.0f64..=1.0, 0..5),
        counts in prop::collection::vec(0u64..1_000, 0..5),
    ) {
        let metrics = profile(duplicate_rate, null_rates);
        let rule_results = results(&counts);
        prop_assert_eq!(
            score_breakdown(&metrics, &rule_results),
            score_breakdown(&metrics, &rule_results)
        );
    }
}

#[test]
fn empty_results_depend_on_profile_only() {
    let metrics = profile(0.1, vec![0.2]);
    assert_eq!(score(&metrics, &[]).value(), 93.0);
}
