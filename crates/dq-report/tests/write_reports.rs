//! File output tests.

use std::collections::BTreeMap;

use dq_model::{Assessment, ProfileMetrics, RuleResult, ScoreBreakdown};
use dq_report::{JSON_FILE, MARKDOWN_FILE, write_reports};

fn scored_assessment() -> Assessment {
    Assessment {
        profile: ProfileMetrics {
            row_count: 10,
            duplicate_rate: 0.1,
            null_rate: BTreeMap::from([("x".to_string(), 0.2)]),
        },
        rule_results: vec![RuleResult::new("unique id", 0)],
        warnings: Vec::new(),
        breakdown: ScoreBreakdown::from_penalties(3.0, 4.0, 0.0),
    }
}

#[test]
fn writes_markdown_and_json_into_new_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("reports");

    let paths = write_reports(&out, &scored_assessment()).unwrap();

    assert_eq!(paths.markdown, out.join(MARKDOWN_FILE));
    assert_eq!(paths.json, out.join(JSON_FILE));

    let markdown = std::fs::read_to_string(&paths.markdown).unwrap();
    assert!(markdown.starts_with("# Data Quality Summary\n"));
    assert!(markdown.contains("**93.0/100**"));
    assert!(markdown.contains("- Duplicate rate: 10.00%"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.json).unwrap()).unwrap();
    assert_eq!(json["score"], 93.0);
    assert_eq!(json["profile"]["row_count"], 10);
    assert_eq!(json["rule_results"][0]["rule_name"], "unique id");
}

#[test]
fn rewriting_replaces_previous_reports() {
    let dir = tempfile::tempdir().unwrap();
    let first = scored_assessment();
    let mut second = scored_assessment();
    second.profile.row_count = 42;

    write_reports(dir.path(), &first).unwrap();
    let paths = write_reports(dir.path(), &second).unwrap();

    let markdown = std::fs::read_to_string(paths.markdown).unwrap();
    assert!(markdown.contains("- Rows: 42"));
    assert!(!markdown.contains("- Rows: 10"));
}
