use polars::prelude::Column;
use serde::{Deserialize, Serialize};

/// A row fails when the cell is null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotNullRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub column: String,
}

impl NotNullRule {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            name: None,
            column: column.into(),
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
            .unwrap_or_else(|| format!("not null {}", self.column))
    }

    pub(crate) fn count_failures(&self, column: &Column) -> u64 {
        column.null_count() as u64
    }
}
