use serde::{Deserialize, Serialize};

/// Outcome of one applicable rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Human-readable rule identifier, unique within a run.
    pub rule_name: String,
    /// Number of rows violating the rule.
    pub failed_count: u64,
}

impl RuleResult {
    pub fn new(rule_name: impl Into<String>, failed_count: u64) -> Self {
        Self {
            rule_name: rule_name.into(),
            failed_count,
        }
    }

    pub fn passed(&self) -> bool {
        self.failed_count == 0
    }
}

/// A rule that could not be evaluated. Non-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleWarning {
    pub rule_name: String,
    pub column: String,
    pub message: String,
}
