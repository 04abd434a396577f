//! Dataset-level profiling metrics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Descriptive statistics computed once per dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    /// Number of rows at the time of profiling.
    pub row_count: usize,
    /// Fraction of rows that repeat an earlier row across all columns.
    pub duplicate_rate: f64,
    /// Fraction of null cells, keyed by column name. One entry per column.
    pub null_rate: BTreeMap<String, f64>,
}

impl ProfileMetrics {
    /// Metrics for a dataset with the given columns and no rows.
    pub fn empty<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            row_count: 0,
            duplicate_rate: 0.0,
            null_rate: columns.into_iter().map(|c| (c.into(), 0.0)).collect(),
        }
    }

    /// Sum of the per-column null rates.
    pub fn total_null_rate(&self) -> f64 {
        self.null_rate.values().sum()
    }

    /// Number of duplicate rows implied by `duplicate_rate`.
    pub fn duplicate_rows(&self) -> usize {
        (self.duplicate_rate * self.row_count as f64).round() as usize
    }
}
