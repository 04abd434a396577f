use serde::{Deserialize, Serialize};

use crate::{ProfileMetrics, QualityScore, RuleResult, RuleWarning, ScoreBreakdown};

/// Everything a run produces, handed to reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub profile: ProfileMetrics,
    pub rule_results: Vec<RuleResult>,
    pub warnings: Vec<RuleWarning>,
    pub breakdown: ScoreBreakdown,
}

impl Assessment {
    pub fn score(&self) -> QualityScore {
        self.breakdown.score
    }

    pub fn total_failed(&self) -> u64 {
        self.rule_results
            .iter()
            .fold(0u64, |acc, result| acc.saturating_add(result.failed_count))
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
