use polars::prelude::PolarsError;
use thiserror::Error;

/// Rule set problems found before any data is processed. Fatal.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule '{rule}' has an empty target column")]
    EmptyColumn { rule: String },

    #[error("rule '{rule}' needs at least one allowed value")]
    EmptyAllowedValues { rule: String },

    #[error("duplicate rule name '{name}'")]
    DuplicateRuleName { name: String },

    #[error("rule '{rule}' cannot check column '{column}' of type {dtype}")]
    UnsupportedColumnType {
        rule: String,
        column: String,
        dtype: String,
    },

    #[error("failed to read rule config {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule config {origin}: {message}")]
    Parse { origin: String, message: String },
}

/// A single rule failed at evaluation time. Recovered as a warning.
#[derive(Debug, Error)]
pub enum RuleEvaluationError {
    #[error("column '{column}' has type {dtype}, which this rule cannot check")]
    UnsupportedType { column: String, dtype: String },

    #[error("failed to read column '{column}': {source}")]
    Column {
        column: String,
        #[source]
        source: PolarsError,
    },
}
