//! Integration tests for rule evaluation.

use std::io::Write;

use polars::prelude::*;

use dq_model::RuleResult;
use dq_validate::{
    AllowedValuesRule, ConfigurationError, FormatRule, MaxLengthRule, NotNullRule, Rule,
    RuleConfig, RuleEngine, UniqueKeyRule, evaluate,
};

fn customers() -> DataFrame {
    df! {
        "id" => &[1i64, 1, 2],
        "email" => &["a@b.com", "bad", "c@d.com"],
    }
    .unwrap()
}

fn tags_frame() -> DataFrame {
    let tags = Series::new(
        "tags".into(),
        &[
            Series::new("".into(), &[1i64]),
            Series::new("".into(), &[2i64]),
        ],
    );
    DataFrame::new(vec![
        Series::new("id".into(), &[1i64, 1]).into_column(),
        tags.into_column(),
    ])
    .unwrap()
}

#[test]
fn unique_and_format_failures_are_counted() {
    let rules = vec![
        Rule::from(UniqueKeyRule::new("id")),
        Rule::from(FormatRule::new("email", dq_validate::EMAIL_PATTERN).unwrap()),
    ];

    let evaluation = evaluate(&customers(), &rules);

    assert_eq!(
        evaluation.results,
        vec![
            RuleResult::new("unique id", 1),
            RuleResult::new("format email", 1),
        ]
    );
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn rule_on_absent_column_is_skipped() {
    let rules = vec![
        Rule::from(UniqueKeyRule::new("id")),
        Rule::from(FormatRule::new("country_code", dq_validate::COUNTRY_CODE_PATTERN).unwrap()),
        Rule::from(NotNullRule::new("email")),
    ];

    let evaluation = evaluate(&customers(), &rules);

    let names: Vec<&str> = evaluation
        .results
        .iter()
        .map(|result| result.rule_name.as_str())
        .collect();
    assert_eq!(names, vec!["unique id", "not null email"]);
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn empty_dataset_has_no_failures() {
    let df = DataFrame::new(vec![
        Series::new("id".into(), Vec::<i64>::new()).into_column(),
        Series::new("email".into(), Vec::<String>::new()).into_column(),
    ])
    .unwrap();
    let engine = RuleEngine::from_config(&RuleConfig::default().with_identifier_column(
        Some("id".to_string()),
    ))
    .unwrap();

    let evaluation = engine.evaluate(&df);

    assert_eq!(evaluation.results.len(), 2);
    assert!(evaluation.results.iter().all(RuleResult::passed));
}

#[test]
fn format_rule_treats_nulls_as_failures() {
    let df = df! {
        "email" => &[Some("a@b.com"), None, Some("x@y.org")],
    }
    .unwrap();
    let engine = RuleEngine::from_config(&RuleConfig::default()).unwrap();

    let evaluation = engine.evaluate(&df);

    assert_eq!(evaluation.results, vec![RuleResult::new("valid email", 1)]);
}

#[test]
fn supplementary_rules_skip_nulls() {
    let df = df! {
        "status" => &[Some("active"), Some(" Closed "), None, Some("pending")],
        "zip" => &[Some("12345"), Some("123456"), None, Some("1234")],
    }
    .unwrap();
    let rules = vec![
        Rule::from(AllowedValuesRule::new("status", ["active", "closed"])),
        Rule::from(MaxLengthRule::new("zip", 5)),
        Rule::from(NotNullRule::new("zip")),
    ];

    let evaluation = evaluate(&df, &rules);

    assert_eq!(
        evaluation.results,
        vec![
            RuleResult::new("allowed values status", 1),
            RuleResult::new("max length zip", 1),
            RuleResult::new("not null zip", 1),
        ]
    );
}

#[test]
fn failing_rule_becomes_warning_and_others_continue() {
    let rules = vec![
        Rule::from(UniqueKeyRule::new("tags")),
        Rule::from(UniqueKeyRule::new("id")),
        Rule::from(NotNullRule::new("tags")),
    ];

    let evaluation = evaluate(&tags_frame(), &rules);

    assert_eq!(
        evaluation.results,
        vec![
            RuleResult::new("unique id", 1),
            RuleResult::new("not null tags", 0),
        ]
    );
    assert_eq!(evaluation.warnings.len(), 1);
    assert_eq!(evaluation.warnings[0].rule_name, "unique tags");
    assert_eq!(evaluation.warnings[0].column, "tags");
}

#[test]
fn validate_columns_rejects_nested_types() {
    let engine = RuleEngine::new(vec![Rule::from(UniqueKeyRule::new("tags"))]).unwrap();

    let error = engine.validate_columns(&tags_frame()).unwrap_err();

    assert!(matches!(
        error,
        ConfigurationError::UnsupportedColumnType { ref column, .. } if column == "tags"
    ));
}

#[test]
fn validate_columns_ignores_absent_and_not_null() {
    let engine = RuleEngine::new(vec![
        Rule::from(NotNullRule::new("tags")),
        Rule::from(UniqueKeyRule::new("missing")),
    ])
    .unwrap();

    assert!(engine.validate_columns(&tags_frame()).is_ok());
}

#[test]
fn evaluation_is_idempotent() {
    let engine = RuleEngine::from_config(
        &RuleConfig::default().with_identifier_column(Some("id".to_string())),
    )
    .unwrap();
    let df = customers();

    assert_eq!(engine.evaluate(&df), engine.evaluate(&df));
}

#[test]
fn config_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"identifier_column = "id"

[[additional_rules]]
kind = "allowed_values"
column = "email"
values = ["a@b.com"]
case_sensitive = true
"#
    )
    .unwrap();

    let config = RuleConfig::load(file.path()).unwrap();
    let engine = RuleEngine::from_config(&config).unwrap();
    let evaluation = engine.evaluate(&customers());

    assert_eq!(
        evaluation.results,
        vec![
            RuleResult::new("unique id", 1),
            RuleResult::new("allowed values email", 2),
        ]
    );
}

#[test]
fn missing_config_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = RuleConfig::load(&dir.path().join("rules.toml"));

    assert!(matches!(result, Err(ConfigurationError::Read { .. })));
}
