//! Report generation for data quality assessments.
//!
//! - **summary.md**: human-readable Markdown summary
//! - **summary.json**: the full assessment for downstream tooling

mod json;
mod markdown;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use dq_model::Assessment;

pub use json::render_json;
pub use markdown::render_markdown;

/// File name of the Markdown summary.
pub const MARKDOWN_FILE: &str = "summary.md";
/// File name of the JSON summary.
pub const JSON_FILE: &str = "summary.json";

/// Paths of the files written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub markdown: PathBuf,
    pub json: PathBuf,
}

/// Write both reports into `output_dir`, creating it if needed.
pub fn write_reports(output_dir: &Path, assessment: &Assessment) -> Result<ReportPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let markdown = output_dir.join(MARKDOWN_FILE);
    std::fs::write(&markdown, render_markdown(assessment))
        .with_context(|| format!("write {}", markdown.display()))?;

    let json = output_dir.join(JSON_FILE);
    std::fs::write(&json, render_json(assessment)?)
        .with_context(|| format!("write {}", json.display()))?;

    info!(
        markdown = %markdown.display(),
        json = %json.display(),
        "reports written"
    );
    Ok(ReportPaths { markdown, json })
}
