//! Key uniqueness.

use std::collections::HashSet;

use polars::prelude::Column;
use serde::{Deserialize, Serialize};

use dq_ingest::cell_key;

use super::{cell, ensure_scalar};
use crate::error::RuleEvaluationError;

/// A row fails when its value already appeared in an earlier row.
///
/// Nulls count as equal to each other, so a second null key is a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueKeyRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub column: String,
}

impl UniqueKeyRule {
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
            .unwrap_or_else(|| format!("unique {}", self.column))
    }

    pub(crate) fn count_failures(&self, column: &Column) -> Result<u64, RuleEvaluationError> {
        ensure_scalar(column)?;
        let mut seen = HashSet::with_capacity(column.len());
        let mut duplicates = 0u64;
        for idx in 0..column.len() {
            if !seen.insert(cell_key(cell(column, idx)?)) {
                duplicates += 1;
            }
        }
        Ok(duplicates)
    }
}
