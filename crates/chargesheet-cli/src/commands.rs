//! Subcommand entry points.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::info_span;

use chargesheet_cli::imports::{
    import_report, office_counts, read_records_json, write_records_json, ImportOutcome,
};
use chargesheet_core::deadline::severity_stats;
use chargesheet_ingest::InterpreterOptions;
use chargesheet_model::{PhraseLocale, SeverityStats};

use crate::cli::{ImportArgs, LocaleArg, StatusArgs, VariantArg};

/// Result of an `import` run, consumed by the summary printer.
pub struct ImportReport {
    pub report_path: PathBuf,
    pub outcome: ImportOutcome,
    pub offices: BTreeMap<String, usize>,
    pub records_path: Option<PathBuf>,
}

/// Result of a `status` run.
pub struct StatusReport {
    pub today: NaiveDate,
    pub record_count: usize,
    pub stats: SeverityStats,
}

pub fn run_import(args: &ImportArgs) -> Result<ImportReport> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let options = interpreter_options(args);
    let span = info_span!("import", report = %args.report.display());
    let _guard = span.enter();

    let outcome = import_report(&args.report, &options, today)?;
    let offices = office_counts(&outcome.records);

    let records_path = if args.dry_run {
        None
    } else {
        let path = args
            .out
            .clone()
            .unwrap_or_else(|| default_records_path(&args.report));
        write_records_json(&path, &outcome.records)?;
        Some(path)
    };

    Ok(ImportReport {
        report_path: args.report.clone(),
        outcome,
        offices,
        records_path,
    })
}

pub fn run_status(args: &StatusArgs) -> Result<StatusReport> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let records = read_records_json(&args.records)?;
    let stats = severity_stats(&records, today);
    Ok(StatusReport {
        today,
        record_count: records.len(),
        stats,
    })
}

fn interpreter_options(args: &ImportArgs) -> InterpreterOptions {
    let mut options = match args.variant {
        VariantArg::Strict => InterpreterOptions::bulk_csv(),
        VariantArg::Infer => InterpreterOptions::upload(),
    };
    if let Some(locale) = args.locale {
        options.locale = match locale {
            LocaleArg::Marathi => PhraseLocale::Marathi,
            LocaleArg::MarathiEnglish => PhraseLocale::MarathiEnglish,
        };
    }
    options
}

fn default_records_path(report: &Path) -> PathBuf {
    report.with_extension("records.json")
}
