//! Text format checks.

use polars::prelude::Column;
use serde::{Deserialize, Serialize};

use dq_ingest::cell_text;

use super::{Pattern, count_rows};
use crate::error::{ConfigurationError, RuleEvaluationError};

/// A row fails when the cell's text form does not match `pattern`.
///
/// Nulls are not exempt: they are checked as the text `nan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub column: String,
    pub pattern: Pattern,
}

impl FormatRule {
    /// Build a rule from pattern source text.
    pub fn new(column: impl Into<String>, pattern: &str) -> Result<Self, ConfigurationError> {
        let column = column.into();
        let pattern = Pattern::new(pattern).map_err(|source| ConfigurationError::InvalidPattern {
            rule: format!("format {column}"),
            source,
        })?;
        Ok(Self::with_pattern(column, pattern))
    }

    pub fn with_pattern(column: impl Into<String>, pattern: Pattern) -> Self {
        Self {
            name: None,
            column: column.into(),
            pattern,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("format {}", self.column))
    }

    pub(crate) fn count_failures(&self, column: &Column) -> Result<u64, RuleEvaluationError> {
        count_rows(column, false, |value| {
            self.pattern.is_match(&cell_text(value))
        })
    }
}
