use std::fmt::Write;

use dq_model::Assessment;

/// Render the Markdown summary.
///
/// Sections appear in a fixed order; "Warnings" only when a rule could not
/// be evaluated.
pub fn render_markdown(assessment: &Assessment) -> String {
    let profile = &assessment.profile;
    let breakdown = &assessment.breakdown;
    let mut out = String::new();

    out.push_str("# Data Quality Summary\n\n");

    out.push_str("## Overall Score\n");
    let _ = writeln!(out, "**{}/100**\n", assessment.score());

    out.push_str("## Dataset\n");
    let _ = writeln!(out, "- Rows: {}", profile.row_count);
    let _ = writeln!(
        out,
        "- Duplicate rate: {:.2}%\n",
        profile.duplicate_rate * 100.0
    );

    out.push_str("## Null rates\n");
    out.push_str("```json\n");
    out.push_str(&null_rate_json(assessment));
    out.push_str("\n```\n\n");

    out.push_str("## Rule violations\n");
    if assessment.rule_results.is_empty() {
        out.push_str("- No rules applied\n");
    }
    for result in &assessment.rule_results {
        let _ = writeln!(out, "- {}: {} failed rows", result.rule_name, result.failed_count);
    }
    out.push('\n');

    out.push_str("## Score breakdown\n");
    let _ = writeln!(out, "- Duplicate penalty: {:.2}", breakdown.duplicate_penalty);
    let _ = writeln!(out, "- Null penalty: {:.2}", breakdown.null_penalty);
    let _ = writeln!(out, "- Rule penalty: {:.2}", breakdown.rule_penalty);

    if assessment.has_warnings() {
        out.push_str("\n## Warnings\n");
        for warning in &assessment.warnings {
            let _ = writeln!(
                out,
                "- {} ({}): {}",
                warning.rule_name, warning.column, warning.message
            );
        }
    }

    out
}

fn null_rate_json(assessment: &Assessment) -> String {
    serde_json::to_string_pretty(&assessment.profile.null_rate).unwrap_or_else(|_| "{}".into())
}
