//! Rule set configuration.
//!
//! The default configuration checks `customer_id` for uniqueness, `email` for
//! a basic address shape and `country_code` for ISO-2 codes. A TOML file
//! states the rule set exactly: a column key it leaves out disables that
//! default rule.
//!
//! ```toml
//! identifier_column = "customer_id"
//! email_column = "email"
//!
//! [[additional_rules]]
//! kind = "allowed_values"
//! column = "status"
//! values = ["active", "closed"]
//! ```

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::rules::{FormatRule, Pattern, Rule, UniqueKeyRule};

/// Basic `name@domain.tld` shape.
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Two upper-case letters (ISO 3166-1 alpha-2 shape).
pub const COUNTRY_CODE_PATTERN: &str = r"^[A-Z]{2}$";

static EMAIL_REGEX: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(EMAIL_PATTERN).expect("email pattern compiles"));

static COUNTRY_CODE_REGEX: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(COUNTRY_CODE_PATTERN).expect("country code pattern compiles"));

pub const DEFAULT_IDENTIFIER_COLUMN: &str = "customer_id";
pub const DEFAULT_EMAIL_COLUMN: &str = "email";
pub const DEFAULT_COUNTRY_COLUMN: &str = "country_code";

/// Which columns the built-in rules target, plus any extra rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Column checked for unique keys. `None` disables the check.
    #[serde(default)]
    pub identifier_column: Option<String>,
    /// Column checked for email format. `None` disables the check.
    #[serde(default)]
    pub email_column: Option<String>,
    /// Column checked for ISO-2 country codes. `None` disables the check.
    #[serde(default)]
    pub country_column: Option<String>,
    /// Rules evaluated after the built-in ones, in order.
    #[serde(default)]
    pub additional_rules: Vec<Rule>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            identifier_column: Some(DEFAULT_IDENTIFIER_COLUMN.to_string()),
            email_column: Some(DEFAULT_EMAIL_COLUMN.to_string()),
            country_column: Some(DEFAULT_COUNTRY_COLUMN.to_string()),
            additional_rules: Vec::new(),
        }
    }
}

impl RuleConfig {
    /// Parse a TOML rule configuration.
    pub fn from_toml(text: &str) -> Result<Self, ConfigurationError> {
        Self::parse(text, "<inline>")
    }

    /// Load a TOML rule configuration from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(text).map_err(|e| ConfigurationError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })
    }

    #[must_use]
    pub fn with_identifier_column(mut self, column: Option<String>) -> Self {
        self.identifier_column = column;
        self
    }

    #[must_use]
    pub fn with_email_column(mut self, column: Option<String>) -> Self {
        self.email_column = column;
        self
    }

    #[must_use]
    pub fn with_country_column(mut self, column: Option<String>) -> Self {
        self.country_column = column;
        self
    }

    /// The ordered rule set: built-in rules first, then `additional_rules`.
    pub fn build_rules(&self) -> Vec<Rule> {
        let mut rules = Vec::with_capacity(3 + self.additional_rules.len());
        if let Some(column) = &self.identifier_column {
            rules.push(UniqueKeyRule::new(column.clone()).into());
        }
        if let Some(column) = &self.email_column {
            rules.push(
                FormatRule::with_pattern(column.clone(), EMAIL_REGEX.clone())
                    .named("valid email")
                    .into(),
            );
        }
        if let Some(column) = &self.country_column {
            rules.push(
                FormatRule::with_pattern(column.clone(), COUNTRY_CODE_REGEX.clone())
                    .named("country ISO-2")
                    .into(),
            );
        }
        rules.extend(self.additional_rules.iter().cloned());
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_set() {
        let rules = RuleConfig::default().build_rules();
        let names: Vec<String> = rules.iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec!["unique customer_id", "valid email", "country ISO-2"]
        );
        assert_eq!(rules[1].column(), "email");
        assert_eq!(rules[2].column(), "country_code");
    }

    #[test]
    fn test_unset_columns_disable_rules() {
        let config = RuleConfig::default()
            .with_email_column(None)
            .with_country_column(None);
        let rules = config.build_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].kind(), "unique_key");
    }

    #[test]
    fn test_file_states_rule_set_exactly() {
        let config = RuleConfig::from_toml(
            r#"
            email_column = "contact_email"

            [[additional_rules]]
            kind = "format"
            name = "valid zip"
            column = "zip"
            pattern = "^[0-9]{5}$"

            [[additional_rules]]
            kind = "not_null"
            column = "signup_date"
            "#,
        )
        .unwrap();

        let rules = config.build_rules();
        let names: Vec<String> = rules.iter().map(Rule::name).collect();
        assert_eq!(names, vec!["valid email", "valid zip", "not null signup_date"]);
        assert_eq!(rules[0].column(), "contact_email");
    }

    #[test]
    fn test_bad_pattern_in_file_is_parse_error() {
        let result = RuleConfig::from_toml(
            r#"
            [[additional_rules]]
            kind = "format"
            column = "zip"
            pattern = "([0-9]"
            "#,
        );
        assert!(matches!(result, Err(ConfigurationError::Parse { .. })));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let result = RuleConfig::from_toml("id_column = \"id\"");
        assert!(matches!(result, Err(ConfigurationError::Parse { .. })));
    }

    #[test]
    fn test_default_patterns() {
        assert!(EMAIL_REGEX.is_match("a@b.com"));
        assert!(!EMAIL_REGEX.is_match("bad"));
        assert!(!EMAIL_REGEX.is_match("a b@c.com"));
        assert!(COUNTRY_CODE_REGEX.is_match("DE"));
        assert!(!COUNTRY_CODE_REGEX.is_match("de"));
        assert!(!COUNTRY_CODE_REGEX.is_match("DEU"));
    }
}
