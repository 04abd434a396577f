use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use dq_report::write_reports;

use crate::cli::{CheckArgs, RulesArgs};
use crate::summary::print_rules;
use crate::types::CheckResult;
use dq_cli::pipeline::{ColumnOverrides, build_engine, load_rule_config, run_assessment};

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let check_span = info_span!("check", input = %args.csv.display());
    let _check_guard = check_span.enter();

    let overrides = ColumnOverrides {
        identifier: args.id_column.clone(),
        email: args.email_column.clone(),
        country: args.country_column.clone(),
    };
    let config = load_rule_config(args.config.as_deref(), &overrides)?;
    let engine = build_engine(&config)?;

    let assessment = run_assessment(&args.csv, &engine)?;

    let reports = if args.no_report {
        None
    } else {
        let report_span = info_span!("report", output_dir = %args.out.display());
        let report_start = Instant::now();
        let paths = report_span.in_scope(|| write_reports(&args.out, &assessment))?;
        info!(
            duration_ms = report_start.elapsed().as_millis(),
            "report complete"
        );
        Some(paths)
    };

    Ok(CheckResult {
        input: args.csv.clone(),
        assessment,
        reports,
        fail_under: args.fail_under,
    })
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let config = load_rule_config(args.config.as_deref(), &ColumnOverrides::default())?;
    let engine = build_engine(&config)?;
    print_rules(engine.rules());
    Ok(())
}
