//! Dataset profiling.

use std::collections::{BTreeMap, HashSet};

use polars::prelude::{AnyValue, Column, DataFrame};
use rayon::prelude::*;

use dq_ingest::{CellKey, cell_key};
use dq_model::ProfileMetrics;

/// Compute row count, duplicate-row rate and per-column null rates.
///
/// A row is a duplicate when every cell equals the same cell of some earlier
/// row; nulls compare equal. Rates are 0.0 for an empty frame.
pub fn profile(df: &DataFrame) -> ProfileMetrics {
    let row_count = df.height();
    let columns = df.get_columns();
    if row_count == 0 {
        return ProfileMetrics::empty(columns.iter().map(|column| column.name().to_string()));
    }

    let null_rate: BTreeMap<String, f64> = columns
        .iter()
        .map(|column| (column.name().to_string(), rate(column.null_count(), row_count)))
        .collect();

    let duplicates = count_duplicate_rows(columns, row_count);
    let duplicate_rate = rate(duplicates, row_count);

    tracing::debug!(
        rows = row_count,
        columns = columns.len(),
        duplicates,
        "profiled dataset"
    );

    ProfileMetrics {
        row_count,
        duplicate_rate,
        null_rate,
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Count rows that repeat an earlier row, in a single pass over row keys.
fn count_duplicate_rows(columns: &[Column], row_count: usize) -> usize {
    let keys: Vec<Vec<CellKey>> = (0..row_count)
        .into_par_iter()
        .map(|idx| row_key(columns, idx))
        .collect();

    let mut seen: HashSet<&[CellKey]> = HashSet::with_capacity(row_count);
    keys.iter().filter(|key| !seen.insert(key.as_slice())).count()
}

fn row_key(columns: &[Column], idx: usize) -> Vec<CellKey> {
    columns
        .iter()
        .map(|column| cell_key(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_rate_handles_zero_total() {
        assert_eq!(rate(0, 0), 0.0);
        assert_eq!(rate(1, 4), 0.25);
    }

    #[test]
    fn test_nulls_count_as_equal_for_duplicates() {
        let df = df! {
            "a" => &[Some("x"), None, None],
            "b" => &[Some(1i64), None, None],
        }
        .unwrap();

        let metrics = profile(&df);
        assert!((metrics.duplicate_rate - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_needs_all_columns_equal() {
        let df = df! {
            "a" => &["x", "x", "x"],
            "b" => &[1i64, 2, 1],
        }
        .unwrap();

        let metrics = profile(&df);
        assert!((metrics.duplicate_rate - 1.0 / 3.0).abs() < 1e-12);
    }
}
