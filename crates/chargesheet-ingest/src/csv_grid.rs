//! CSV decoding into a report grid.
//!
//! Bulk report exports arrive as CSV conversions of the original workbook.
//! Decoding is the only place a hard error can originate: once a grid exists,
//! everything downstream degrades to skips instead of failing.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::grid::{Cell, RawRow};

fn decode_cell(raw: &str) -> Cell {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    // Bare numerics become number cells so the spreadsheet serial-date
    // fallback can apply to them, as it would after a workbook decode.
    if let Ok(value) = trimmed.parse::<f64>() {
        if trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '.' || ch == '-') {
            return Cell::Number(value);
        }
    }
    Cell::Text(trimmed.to_string())
}

/// Read a CSV report export into grid rows.
///
/// Rows keep their source order; lines whose cells are all empty are dropped.
pub fn read_csv_grid(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv report: {}", path.display()))?;

    let mut rows: Vec<RawRow> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: RawRow = record.iter().map(decode_cell).collect();
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Decode in-memory CSV text into grid rows. Used by tests and callers that
/// already hold the export as a string.
pub fn read_csv_grid_from_str(data: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut rows: Vec<RawRow> = Vec::new();
    for record in reader.records() {
        let record = record.context("read csv record from string")?;
        let row: RawRow = record.iter().map(decode_cell).collect();
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}
