//! CLI argument definitions for the chargesheet tracker.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "chargesheet",
    version,
    about = "Pending chargesheet tracker - import police case reports and review deadlines",
    long_about = "Import hierarchical pending-case reports (CSV exports of the station\n\
                  workbooks) into structured case records and review how close each\n\
                  case stands to its 45/60/90-day investigation deadline."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Interpret a report export and write case records as JSON.
    Import(ImportArgs),

    /// Compute deadline severity statistics over imported records.
    Status(StatusArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the report CSV export.
    #[arg(value_name = "REPORT_CSV")]
    pub report: PathBuf,

    /// Output path for the records JSON (default: <REPORT_CSV>.records.json).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Interpreter variant to apply.
    #[arg(long = "variant", value_enum, default_value = "infer")]
    pub variant: VariantArg,

    /// Phrase table for bucket and rank matching (overrides the variant's
    /// default).
    #[arg(long = "locale", value_enum)]
    pub locale: Option<LocaleArg>,

    /// Reference date for bucket inference (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Interpret and report without writing the records file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct StatusArgs {
    /// Path to a records JSON file produced by `import`.
    #[arg(value_name = "RECORDS_JSON")]
    pub records: PathBuf,

    /// Reference date for deadline math (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
}

/// Interpreter variant choices, mirroring the two original importers.
#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    /// Skip data rows with no time-period bucket in scope, whatever the
    /// layout; Marathi phrases and day-first dates only.
    Strict,
    /// Infer a missing bucket from the case's age on station-header sheets;
    /// bilingual phrases, ISO dates, and spreadsheet serial dates accepted.
    Infer,
}

/// Phrase-table choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    Marathi,
    MarathiEnglish,
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
