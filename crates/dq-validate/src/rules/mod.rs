//! Rule kinds.
//!
//! Each kind lives in its own module and carries its own configuration.
//! [`Rule`] is the tagged union the engine dispatches on; adding a kind means
//! adding a variant here and a module beside this one.

mod allowed;
mod format;
mod length;
mod not_null;
mod unique;

use std::fmt;

use polars::prelude::{AnyValue, Column};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, RuleEvaluationError};

pub use allowed::AllowedValuesRule;
pub use format::FormatRule;
pub use length::MaxLengthRule;
pub use not_null::NotNullRule;
pub use unique::UniqueKeyRule;

/// A validation rule over one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    UniqueKey(UniqueKeyRule),
    Format(FormatRule),
    NotNull(NotNullRule),
    AllowedValues(AllowedValuesRule),
    MaxLength(MaxLengthRule),
}

impl Rule {
    /// Name reported in results; unique within a rule set.
    pub fn name(&self) -> String {
        match self {
            Rule::UniqueKey(rule) => rule.name(),
            Rule::Format(rule) => rule.name(),
            Rule::NotNull(rule) => rule.name(),
            Rule::AllowedValues(rule) => rule.name(),
            Rule::MaxLength(rule) => rule.name(),
        }
    }

    /// Column the rule targets.
    pub fn column(&self) -> &str {
        match self {
            Rule::UniqueKey(rule) => &rule.column,
            Rule::Format(rule) => &rule.column,
            Rule::NotNull(rule) => &rule.column,
            Rule::AllowedValues(rule) => &rule.column,
            Rule::MaxLength(rule) => &rule.column,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Rule::UniqueKey(_) => "unique_key",
            Rule::Format(_) => "format",
            Rule::NotNull(_) => "not_null",
            Rule::AllowedValues(_) => "allowed_values",
            Rule::MaxLength(_) => "max_length",
        }
    }

    /// Short description of what the rule checks.
    pub fn describe(&self) -> String {
        match self {
            Rule::UniqueKey(_) => "values must not repeat".to_string(),
            Rule::Format(rule) => format!("must match {}", rule.pattern),
            Rule::NotNull(_) => "values must be present".to_string(),
            Rule::AllowedValues(rule) => format!("one of {}", rule.values.join(", ")),
            Rule::MaxLength(rule) => format!("at most {} characters", rule.max),
        }
    }

    /// Whether the target column must hold scalar cells.
    pub fn requires_scalar(&self) -> bool {
        !matches!(self, Rule::NotNull(_))
    }

    /// Check rule settings that do not depend on data.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.column().trim().is_empty() {
            return Err(ConfigurationError::EmptyColumn { rule: self.name() });
        }
        if let Rule::AllowedValues(rule) = self
            && rule.values.is_empty()
        {
            return Err(ConfigurationError::EmptyAllowedValues { rule: self.name() });
        }
        Ok(())
    }

    /// Count the rows of `column` that violate the rule.
    pub fn count_failures(&self, column: &Column) -> Result<u64, RuleEvaluationError> {
        match self {
            Rule::UniqueKey(rule) => rule.count_failures(column),
            Rule::Format(rule) => rule.count_failures(column),
            Rule::NotNull(rule) => Ok(rule.count_failures(column)),
            Rule::AllowedValues(rule) => rule.count_failures(column),
            Rule::MaxLength(rule) => rule.count_failures(column),
        }
    }
}

impl From<UniqueKeyRule> for Rule {
    fn from(rule: UniqueKeyRule) -> Self {
        Rule::UniqueKey(rule)
    }
}

impl From<FormatRule> for Rule {
    fn from(rule: FormatRule) -> Self {
        Rule::Format(rule)
    }
}

impl From<NotNullRule> for Rule {
    fn from(rule: NotNullRule) -> Self {
        Rule::NotNull(rule)
    }
}

impl From<AllowedValuesRule> for Rule {
    fn from(rule: AllowedValuesRule) -> Self {
        Rule::AllowedValues(rule)
    }
}

impl From<MaxLengthRule> for Rule {
    fn from(rule: MaxLengthRule) -> Self {
        Rule::MaxLength(rule)
    }
}

/// A compiled regular expression that serializes as its source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl TryFrom<String> for Pattern {
    type Error = regex::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Pattern> for String {
    fn from(value: Pattern) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reject columns whose cells cannot be compared or rendered as text.
fn ensure_scalar(column: &Column) -> Result<(), RuleEvaluationError> {
    if dq_ingest::is_scalar_dtype(column.dtype()) {
        Ok(())
    } else {
        Err(RuleEvaluationError::UnsupportedType {
            column: column.name().to_string(),
            dtype: column.dtype().to_string(),
        })
    }
}

/// Read the cell at `idx`.
fn cell(column: &Column, idx: usize) -> Result<AnyValue<'_>, RuleEvaluationError> {
    column.get(idx).map_err(|source| RuleEvaluationError::Column {
        column: column.name().to_string(),
        source,
    })
}

/// Count rows whose cell fails `passes`, skipping nulls when `skip_nulls`.
fn count_rows<F>(column: &Column, skip_nulls: bool, passes: F) -> Result<u64, RuleEvaluationError>
where
    F: Fn(AnyValue<'_>) -> bool,
{
    ensure_scalar(column)?;
    let mut failed = 0u64;
    for idx in 0..column.len() {
        let value = cell(column, idx)?;
        if skip_nulls && matches!(value, AnyValue::Null) {
            continue;
        }
        if !passes(value) {
            failed += 1;
        }
    }
    Ok(failed)
}
