//! Controlled value lists.

use std::collections::HashSet;

use polars::prelude::Column;
use serde::{Deserialize, Serialize};

use dq_ingest::cell_text;

use super::count_rows;
use crate::error::RuleEvaluationError;

/// A non-null cell fails when its text form is not one of `values`.
///
/// Matching ignores case and surrounding whitespace unless `case_sensitive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedValuesRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub column: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl AllowedValuesRule {
    pub fn new<I, S>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            case_sensitive: false,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn case_sensitive(mut self, enable: bool) -> Self {
        self.case_sensitive = enable;
        self
    }

    pub fn name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("allowed values {}", self.column))
    }

    fn normalize(&self, value: &str) -> String {
        if self.case_sensitive {
            value.to_string()
        } else {
            value.trim().to_uppercase()
        }
    }

    pub(crate) fn count_failures(&self, column: &Column) -> Result<u64, RuleEvaluationError> {
        let allowed: HashSet<String> = self.values.iter().map(|v| self.normalize(v)).collect();
        count_rows(column, true, |value| {
            allowed.contains(&self.normalize(&cell_text(value)))
        })
    }
}
