//! Rule engine: runs an ordered rule set against a dataset.

use std::collections::HashSet;
use std::time::Instant;

use polars::prelude::DataFrame;
use rayon::prelude::*;
use tracing::{debug, warn};

use dq_model::{RuleResult, RuleWarning};

use crate::config::RuleConfig;
use crate::error::{ConfigurationError, RuleEvaluationError};
use crate::rules::Rule;

/// Results of every applicable rule plus warnings for rules that failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// One entry per rule whose column was present, in rule-set order.
    pub results: Vec<RuleResult>,
    /// Rules that could not be evaluated, in rule-set order.
    pub warnings: Vec<RuleWarning>,
}

/// A validated, ordered rule set.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    /// Build an engine, rejecting invalid rules and repeated rule names.
    pub fn new(rules: Vec<Rule>) -> Result<Self, ConfigurationError> {
        let mut names = HashSet::with_capacity(rules.len());
        for rule in &rules {
            rule.validate()?;
            let name = rule.name();
            if !names.insert(name.clone()) {
                return Err(ConfigurationError::DuplicateRuleName { name });
            }
        }
        Ok(Self { rules })
    }

    pub fn from_config(config: &RuleConfig) -> Result<Self, ConfigurationError> {
        Self::new(config.build_rules())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Reject rules whose column exists but holds values the rule cannot check.
    ///
    /// Absent columns are fine here; the rule is skipped during evaluation.
    pub fn validate_columns(&self, df: &DataFrame) -> Result<(), ConfigurationError> {
        for rule in self.rules.iter().filter(|rule| rule.requires_scalar()) {
            let Ok(column) = df.column(rule.column()) else {
                continue;
            };
            if !dq_ingest::is_scalar_dtype(column.dtype()) {
                return Err(ConfigurationError::UnsupportedColumnType {
                    rule: rule.name(),
                    column: rule.column().to_string(),
                    dtype: column.dtype().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn evaluate(&self, df: &DataFrame) -> Evaluation {
        evaluate(df, &self.rules)
    }
}

enum Outcome {
    Skipped,
    Counted(RuleResult),
    Failed(RuleWarning),
}

/// Apply each rule whose column is present and count its failing rows.
///
/// Rules run in parallel; output order follows `rules`. A rule that errors
/// is logged and reported as a warning without affecting the others.
pub fn evaluate(df: &DataFrame, rules: &[Rule]) -> Evaluation {
    let start = Instant::now();
    let outcomes: Vec<Outcome> = rules.par_iter().map(|rule| apply(df, rule)).collect();

    let mut evaluation = Evaluation::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Skipped => {}
            Outcome::Counted(result) => evaluation.results.push(result),
            Outcome::Failed(warning) => evaluation.warnings.push(warning),
        }
    }

    debug!(
        rules = rules.len(),
        applied = evaluation.results.len(),
        warnings = evaluation.warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "rules evaluated"
    );
    evaluation
}

fn apply(df: &DataFrame, rule: &Rule) -> Outcome {
    let name = rule.name();
    let Ok(column) = df.column(rule.column()) else {
        debug!(rule = %name, column = rule.column(), "column absent, rule skipped");
        return Outcome::Skipped;
    };

    match rule.count_failures(column) {
        Ok(failed_count) => Outcome::Counted(RuleResult::new(name, failed_count)),
        Err(error) => {
            warn!(rule = %name, column = rule.column(), error = %error, "rule evaluation failed");
            Outcome::Failed(warning_for(name, rule.column(), &error))
        }
    }
}

fn warning_for(rule_name: String, column: &str, error: &RuleEvaluationError) -> RuleWarning {
    RuleWarning {
        rule_name,
        column: column.to_string(),
        message: error.to_string(),
    }
}
