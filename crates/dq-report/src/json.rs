use anyhow::{Context, Result};
use serde::Serialize;

use dq_model::{Assessment, QualityScore};

/// Top-level score first so the file reads well without tooling.
#[derive(Serialize)]
struct JsonSummary<'a> {
    score: QualityScore,
    #[serde(flatten)]
    assessment: &'a Assessment,
}

/// Render the assessment as pretty-printed JSON.
pub fn render_json(assessment: &Assessment) -> Result<String> {
    let summary = JsonSummary {
        score: assessment.score(),
        assessment,
    };
    let mut text = serde_json::to_string_pretty(&summary).context("serialize summary")?;
    text.push('\n');
    Ok(text)
}
