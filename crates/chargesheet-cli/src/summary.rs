//! Terminal summaries for the subcommands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chargesheet_ingest::SheetFormat;
use chargesheet_model::TierCounts;

use crate::commands::{ImportReport, StatusReport};

pub fn print_import_summary(report: &ImportReport) {
    println!("Report: {}", report.report_path.display());
    println!("Layout: {}", layout_label(report.outcome.format));
    if let Some(path) = &report.records_path {
        println!("Records: {}", path.display());
    } else {
        println!("Records: (dry run, nothing written)");
    }

    let diag = &report.outcome.diagnostics;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Office"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (office, count) in &report.offices {
        table.add_row(vec![Cell::new(office), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(diag.records_emitted).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if diag.total_skipped() > 0 {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Skipped"), header_cell("Rows")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (reason, count) in &diag.skips {
            table.add_row(vec![Cell::new(reason), Cell::new(count)]);
        }
        println!();
        println!("{table}");
    }
}

pub fn print_status_summary(report: &StatusReport) {
    println!("Today: {}", report.today);
    println!("Records: {}", report.record_count);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Class"),
        header_cell("Overdue"),
        header_cell("Critical"),
        header_cell("Warning"),
        header_cell("Caution"),
        header_cell("Safe"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(tier_row("60-day", &report.stats.days60));
    table.add_row(tier_row("90-day", &report.stats.days90));
    // The 45-day class has no tier breakdown, only a total.
    table.add_row(vec![
        Cell::new("45-day").add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(report.stats.days45_total),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.stats.overdue_count(), Color::Red).add_attribute(Attribute::Bold),
        count_cell(report.stats.critical_count(), Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(report.stats.total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn tier_row(label: &str, counts: &TierCounts) -> Vec<Cell> {
    vec![
        Cell::new(label).add_attribute(Attribute::Bold),
        count_cell(counts.overdue, Color::Red),
        count_cell(counts.critical, Color::Red),
        count_cell(counts.warning, Color::Yellow),
        count_cell(counts.caution, Color::Yellow),
        Cell::new(counts.safe).fg(Color::Green),
        Cell::new(counts.total()),
    ]
}

fn layout_label(format: SheetFormat) -> &'static str {
    match format {
        SheetFormat::Standard => "standard (station header)",
        SheetFormat::Generic => "generic",
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
