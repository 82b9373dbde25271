//! Import pipeline: decode a report file, interpret it, and move record sets
//! to and from JSON.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use chargesheet_ingest::{
    detect_format, parse_report, read_csv_grid, InterpreterOptions, SheetFormat,
};
use chargesheet_model::{CaseRecord, ParseDiagnostics};

/// Everything one import run produces.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub format: SheetFormat,
    pub records: Vec<CaseRecord>,
    pub diagnostics: ParseDiagnostics,
}

/// Decode and interpret one report file.
pub fn import_report(
    path: &Path,
    options: &InterpreterOptions,
    today: NaiveDate,
) -> Result<ImportOutcome> {
    let rows = read_csv_grid(path)?;
    let format = detect_format(&rows);
    let outcome = parse_report(&rows, options, today);
    info!(
        report = %path.display(),
        rows = outcome.diagnostics.rows_seen,
        records = outcome.diagnostics.records_emitted,
        skipped = outcome.diagnostics.total_skipped(),
        "report interpreted"
    );
    Ok(ImportOutcome {
        format,
        records: outcome.records,
        diagnostics: outcome.diagnostics,
    })
}

/// Record counts per office, in office-name order.
pub fn office_counts(records: &[CaseRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.office_name.clone()).or_insert(0) += 1;
    }
    counts
}

/// Write records as pretty-printed JSON.
pub fn write_records_json(path: &Path, records: &[CaseRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("serialize records")?;
    fs::write(path, json).with_context(|| format!("write records: {}", path.display()))?;
    Ok(())
}

/// Load records previously written by [`write_records_json`].
pub fn read_records_json(path: &Path) -> Result<Vec<CaseRecord>> {
    let json =
        fs::read_to_string(path).with_context(|| format!("read records: {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parse records: {}", path.display()))
}
