//! Assessment pipeline with explicit stages.
//!
//! 1. **Ingest**: read the CSV into a `DataFrame`
//! 2. **Check**: reject rules that cannot apply to the loaded column types
//! 3. **Assess**: profile and evaluate rules concurrently, then score
//!
//! Reporting is left to the caller.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use dq_core::score_breakdown;
use dq_ingest::read_dataset;
use dq_model::Assessment;
use dq_validate::{RuleConfig, RuleEngine};

/// Column names given on the command line; each replaces the configured one.
#[derive(Debug, Clone, Default)]
pub struct ColumnOverrides {
    pub identifier: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
}

/// Load the rule configuration and apply column overrides.
///
/// Without a file the default rule set is used.
pub fn load_rule_config(path: Option<&Path>, overrides: &ColumnOverrides) -> Result<RuleConfig> {
    let mut config = match path {
        Some(path) => RuleConfig::load(path).context("load rule config")?,
        None => RuleConfig::default(),
    };
    if let Some(column) = &overrides.identifier {
        config = config.with_identifier_column(Some(column.clone()));
    }
    if let Some(column) = &overrides.email {
        config = config.with_email_column(Some(column.clone()));
    }
    if let Some(column) = &overrides.country {
        config = config.with_country_column(Some(column.clone()));
    }
    Ok(config)
}

pub fn build_engine(config: &RuleConfig) -> Result<RuleEngine> {
    RuleEngine::from_config(config).context("build rule set")
}

/// Read the dataset, logging shape and timing.
pub fn ingest(path: &Path) -> Result<DataFrame> {
    let span = info_span!("ingest", input = %path.display());
    let start = Instant::now();
    let df = span
        .in_scope(|| read_dataset(path))
        .with_context(|| format!("read {}", path.display()))?;
    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(df)
}

/// Profile the dataset and evaluate the rules, then score both.
///
/// Pure with respect to its inputs: the same dataset and rules always give
/// the same assessment.
pub fn assess(df: &DataFrame, engine: &RuleEngine) -> Assessment {
    let (profile, evaluation) = rayon::join(|| dq_core::profile(df), || engine.evaluate(df));
    let breakdown = score_breakdown(&profile, &evaluation.results);
    Assessment {
        profile,
        rule_results: evaluation.results,
        warnings: evaluation.warnings,
        breakdown,
    }
}

/// Ingest `path`, check rule columns and assess.
pub fn run_assessment(path: &Path, engine: &RuleEngine) -> Result<Assessment> {
    let df = ingest(path)?;
    engine
        .validate_columns(&df)
        .context("check rule columns")?;

    let span = info_span!("assess", rules = engine.rules().len());
    let start = Instant::now();
    let assessment = span.in_scope(|| assess(&df, engine));
    info!(
        score = %assessment.score(),
        rule_results = assessment.rule_results.len(),
        warnings = assessment.warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "assessment complete"
    );
    Ok(assessment)
}
