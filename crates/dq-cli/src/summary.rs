use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dq_model::{QualityScore, RuleWarning};
use dq_validate::Rule;

use crate::types::CheckResult;

pub fn print_summary(result: &CheckResult) {
    let assessment = &result.assessment;
    let profile = &assessment.profile;
    println!("Input: {}", result.input.display());
    if let Some(reports) = &result.reports {
        println!("Report: {}", reports.markdown.display());
        println!("JSON: {}", reports.json.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        score_cell(assessment.score()),
    ]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(profile.row_count)]);
    table.add_row(vec![
        Cell::new("Duplicate rows"),
        count_cell(profile.duplicate_rows() as u64, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate rate"),
        Cell::new(percent(profile.duplicate_rate)),
    ]);
    table.add_row(vec![
        Cell::new("Failed rows (all rules)"),
        count_cell(assessment.total_failed(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Penalty"),
        dim_cell(format!("{:.2}", assessment.breakdown.total_penalty())),
    ]);
    println!("{table}");

    print_null_table(result);
    print_rule_table(result);
    if let Some(threshold) = result.fail_under
        && result.below_threshold()
    {
        eprintln!(
            "Score {} is below the required {threshold:.1}",
            assessment.score()
        );
    }
}

fn print_null_table(result: &CheckResult) {
    let null_rate = &result.assessment.profile.null_rate;
    if null_rate.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Null rate")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (column, rate) in null_rate {
        let rate_cell = if *rate > 0.0 {
            Cell::new(percent(*rate)).fg(Color::Yellow)
        } else {
            dim_cell(percent(*rate))
        };
        table.add_row(vec![Cell::new(column), rate_cell]);
    }
    println!("{table}");
}

fn print_rule_table(result: &CheckResult) {
    let assessment = &result.assessment;
    if assessment.rule_results.is_empty() && assessment.warnings.is_empty() {
        println!("No rules applied.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Failed rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for rule_result in &assessment.rule_results {
        table.add_row(vec![
            Cell::new(&rule_result.rule_name),
            count_cell(rule_result.failed_count, Color::Red),
        ]);
    }
    for warning in &assessment.warnings {
        table.add_row(vec![
            Cell::new(&warning.rule_name),
            Cell::new("skipped").fg(Color::Yellow),
        ]);
    }
    println!("{table}");
    print_warnings(&assessment.warnings);
}

fn print_warnings(warnings: &[RuleWarning]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!("Warnings:");
    for warning in warnings {
        eprintln!(
            "- {} ({}): {}",
            warning.rule_name, warning.column, warning.message
        );
    }
}

pub fn print_rules(rules: &[Rule]) {
    if rules.is_empty() {
        println!("No rules configured.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Kind"),
        header_cell("Column"),
        header_cell("Check"),
    ]);
    apply_table_style(&mut table);
    for rule in rules {
        table.add_row(vec![
            Cell::new(rule.name()).fg(Color::Blue),
            dim_cell(rule.kind()),
            Cell::new(rule.column()),
            Cell::new(rule.describe()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn score_cell(score: QualityScore) -> Cell {
    let color = match score.value() {
        value if value >= 90.0 => Color::Green,
        value if value >= 70.0 => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(format!("{score}/100"))
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: u64, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
