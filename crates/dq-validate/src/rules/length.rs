use polars::prelude::Column;
use serde::{Deserialize, Serialize};

use dq_ingest::cell_text;

use super::count_rows;
use crate::error::RuleEvaluationError;

/// A non-null cell fails when its text form is longer than `max` characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxLengthRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub column: String,
    pub max: usize,
}

impl MaxLengthRule {
    pub fn new(column: impl Into<String>, max: usize) -> Self {
        Self {
            name: None,
            column: column.into(),
            max,
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
            .unwrap_or_else(|| format!("max length {}", self.column))
    }

    pub(crate) fn count_failures(&self, column: &Column) -> Result<u64, RuleEvaluationError> {
        count_rows(column, true, |value| {
            cell_text(value).chars().count() <= self.max
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_counts_characters_not_bytes() {
        let column = Column::new("city".into(), [Some("Köln"), Some("Hamburg"), None]);
        let rule = MaxLengthRule::new("city", 4);
        assert_eq!(rule.count_failures(&column).unwrap(), 1);
    }
}
