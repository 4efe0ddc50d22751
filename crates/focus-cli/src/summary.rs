//! Terminal summary table for a validation run.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table,
};

use crate::commands::ValidateResult;

pub fn print_summary(result: &ValidateResult) {
    println!("Input: {}", result.input.display());
    println!("Policy: {:?}", result.policy);
    if let Some(path) = &result.report_path {
        println!("Validation report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Status"),
        header_cell("Violations"),
        header_cell("First violation"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let mut total_violations = 0usize;
    for (index, verdict) in result.verdicts.iter().enumerate() {
        let violations = verdict.violations();
        total_violations += violations.len();
        let status_cell = if verdict.is_valid() {
            Cell::new("VALID").fg(Color::Green)
        } else {
            Cell::new("INVALID").fg(Color::Red)
        };
        let first = match verdict.first() {
            Some(violation) => format!("{}: {}", violation.kind, violation.message),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(index),
            status_cell,
            Cell::new(violations.len()),
            Cell::new(first),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} invalid", result.invalid_count()))
            .fg(if result.has_invalid() {
                Color::Red
            } else {
                Color::Green
            })
            .add_attribute(Attribute::Bold),
        Cell::new(total_violations).add_attribute(Attribute::Bold),
        Cell::new(format!("{} record(s)", result.verdicts.len())),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
