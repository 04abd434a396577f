//! Validation rules for data quality assessment.
//!
//! A [`Rule`] is a named predicate over the rows of one column. The
//! [`RuleEngine`] runs an ordered rule set against a `DataFrame` and reports
//! how many rows each rule rejects. Rules whose column is missing are skipped;
//! rules that fail to evaluate become [`RuleWarning`](dq_model::RuleWarning)s
//! and never stop the others.

pub mod config;
pub mod engine;
pub mod error;
pub mod rules;

pub use config::{COUNTRY_CODE_PATTERN, EMAIL_PATTERN, RuleConfig};
pub use engine::{Evaluation, RuleEngine, evaluate};
pub use error::{ConfigurationError, RuleEvaluationError};
pub use rules::{
    AllowedValuesRule, FormatRule, MaxLengthRule, NotNullRule, Pattern, Rule, UniqueKeyRule,
};
