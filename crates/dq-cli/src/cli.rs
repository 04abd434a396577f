//! CLI argument definitions for `dqcopilot`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dqcopilot",
    version,
    about = "Data quality checks for CSV files",
    long_about = "Profile a CSV file, run row-level quality rules and compute a 0-100 quality score.\n\n\
                  Writes a Markdown and a JSON summary to the output directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assess a CSV file and write quality reports.
    Check(CheckArgs),

    /// List the configured rules.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the CSV file to assess.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Output directory for summary.md and summary.json.
    #[arg(long = "out", value_name = "DIR", default_value = "reports")]
    pub out: PathBuf,

    /// TOML rule configuration (default rules when omitted).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Column checked for unique keys.
    #[arg(long = "id-column", value_name = "COLUMN")]
    pub id_column: Option<String>,

    /// Column checked for email format.
    #[arg(long = "email-column", value_name = "COLUMN")]
    pub email_column: Option<String>,

    /// Column checked for ISO-2 country codes.
    #[arg(long = "country-column", value_name = "COLUMN")]
    pub country_column: Option<String>,

    /// Print the summary without writing report files.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Exit with status 1 when the score is below this value.
    #[arg(long = "fail-under", value_name = "SCORE", value_parser = parse_score)]
    pub fail_under: Option<f64>,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// TOML rule configuration (default rules when omitted).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_score(value: &str) -> Result<f64, String> {
    let score: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if (0.0..=100.0).contains(&score) {
        Ok(score)
    } else {
        Err(format!("score must be between 0 and 100, got {score}"))
    }
}
