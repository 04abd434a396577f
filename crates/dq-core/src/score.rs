//! Weighted penalty scoring.
//!
//! The weights are fixed. Duplicates and nulls damage aggregate analytics
//! more than isolated bad rows, so they weigh far more than a single rule
//! violation.

use dq_model::{ProfileMetrics, QualityScore, RuleResult, ScoreBreakdown};

/// Penalty per unit of duplicate-row rate.
pub const DUPLICATE_WEIGHT: f64 = 30.0;
/// Penalty per unit of summed per-column null rate.
pub const NULL_WEIGHT: f64 = 20.0;
/// Penalty per failed row, summed over all rule results.
pub const RULE_VIOLATION_WEIGHT: f64 = 0.01;

/// Compute the quality score from profiling and rule results.
pub fn score(profile: &ProfileMetrics, results: &[RuleResult]) -> QualityScore {
    score_breakdown(profile, results).score
}

/// Compute the score along with the penalty each signal contributed.
pub fn score_breakdown(profile: &ProfileMetrics, results: &[RuleResult]) -> ScoreBreakdown {
    let failed = results
        .iter()
        .fold(0u64, |acc, result| acc.saturating_add(result.failed_count));

    ScoreBreakdown::from_penalties(
        profile.duplicate_rate * DUPLICATE_WEIGHT,
        profile.total_null_rate() * NULL_WEIGHT,
        failed as f64 * RULE_VIOLATION_WEIGHT,
    )
}
