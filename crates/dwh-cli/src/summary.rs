//! Run summary printed after the pipeline finishes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dwh_model::WAREHOUSE_TABLES;

use crate::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Null PK"),
        header_cell("Dup PK"),
        header_cell("Status"),
    ]);
    for column in table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for (name, rows) in &result.row_counts {
        let check = result
            .validation
            .as_ref()
            .and_then(|report| report.checks.iter().find(|c| &c.table == name));
        let (null_pk, dup_pk, status) = match check {
            Some(check) if check.passed() => {
                (check.null_pk.to_string(), check.dup_pk.to_string(), pass_cell())
            }
            Some(check) => (
                check.null_pk.to_string(),
                check.dup_pk.to_string(),
                Cell::new("FAIL").fg(Color::Red).add_attribute(Attribute::Bold),
            ),
            None => ("-".to_string(), "-".to_string(), Cell::new("skipped")),
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(rows),
            Cell::new(null_pk),
            Cell::new(dup_pk),
            status,
        ]);
    }
    println!("{table}");

    match &result.validation {
        Some(report) if report.passed() => println!("Warehouse validation: PASS"),
        Some(_) => println!("Warehouse validation: FAIL"),
        None => println!("Warehouse validation: skipped"),
    }
}

/// Prints the static warehouse table registry.
pub fn print_tables() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Primary key"),
        header_cell("Staging file"),
    ]);
    for def in WAREHOUSE_TABLES {
        table.add_row(vec![def.name, def.primary_key, def.staging_file]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn pass_cell() -> Cell {
    Cell::new("PASS").fg(Color::Green)
}
