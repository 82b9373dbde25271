//! Hierarchical row interpreter.
//!
//! Report grids flatten a tree (office → officer → time bucket → case rows)
//! into consecutive rows, distinguishable only by row order, column position,
//! and marker text. A single stateful pass threads the current office,
//! officer, and bucket through the scan and emits one record per qualifying
//! data row. Rows that cannot be used are skipped silently; the optional
//! diagnostics channel records why without changing that policy.
//!
//! Row classification runs in a fixed priority order. The order is itself a
//! design decision: a row can textually satisfy more than one rule (an empty
//! bucket cell beside a numeric officer cell, say) and evaluation order
//! resolves the ambiguity deterministically.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, trace};

use chargesheet_core::dates::{parse_date_token, parse_serial_date, PatternSet};
use chargesheet_model::{
    CaseRecord, ClassTable, ParseDiagnostics, PhraseLocale, SkipReason, TimePeriod,
};

use crate::detect::{
    contains_station_marker, detect_format, SheetFormat, STATION_MARKER_EN, STATION_MARKER_MR,
};
use crate::grid::{cell_at, row_is_empty, text_at, Cell, RawRow};

/// What to do when a data row appears with no active time-period bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketPolicy {
    /// Skip the row.
    StrictSkip,
    /// Synthesize a bucket from the case's age and keep it as the running
    /// bucket.
    InferFromDate,
}

/// Interpreter knobs that vary between the two historical importers.
#[derive(Debug, Clone, Copy)]
pub struct InterpreterOptions {
    pub locale: PhraseLocale,
    pub class_table: ClassTable,
    pub patterns: PatternSet,
    /// Whether numeric date cells fall back to spreadsheet serial dates.
    pub serial_dates: bool,
    /// Bucket policy applied by [`parse_report`] to standard-layout sheets.
    /// Generic sheets always skip strictly, under either variant.
    pub bucket_policy: BucketPolicy,
    /// Whether an officer line clears the running bucket in the generic
    /// ladder. Standard-layout officer lines never clear it.
    pub officer_resets_bucket: bool,
}

impl InterpreterOptions {
    /// In-app spreadsheet upload behavior: bilingual phrases, 6–12 months is
    /// a 90-day case, ISO dates and serial numbers accepted, buckets inferred
    /// on standard-layout sheets, officer lines open with a clean bucket.
    pub fn upload() -> Self {
        Self {
            locale: PhraseLocale::MarathiEnglish,
            class_table: ClassTable::Upload,
            patterns: PatternSet::Extended,
            serial_dates: true,
            bucket_policy: BucketPolicy::InferFromDate,
            officer_resets_bucket: true,
        }
    }

    /// Bulk CSV importer behavior: Marathi phrases only, day-first date
    /// patterns only, no serial fallback, no bucket inference anywhere, the
    /// running bucket survives officer lines.
    pub fn bulk_csv() -> Self {
        Self {
            locale: PhraseLocale::Marathi,
            class_table: ClassTable::BulkCsv,
            patterns: PatternSet::Basic,
            serial_dates: false,
            bucket_policy: BucketPolicy::StrictSkip,
            officer_resets_bucket: false,
        }
    }
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self::upload()
    }
}

/// Records emitted by one parse invocation plus its skip accounting.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<CaseRecord>,
    pub diagnostics: ParseDiagnostics,
}

/// Running context threaded through the scan. One instance per parse call.
#[derive(Debug, Default)]
struct ParseContext {
    office_name: String,
    officer_name: String,
    designation: String,
    time_period: Option<TimePeriod>,
}

/// Designation abbreviations tried as literal prefixes, in fixed order.
/// First match wins, so order matters for prefixes of one another.
const DESIGNATIONS: [&str; 16] = [
    "P.I.",
    "PSI",
    "API",
    "पोउपनि",
    "मपोउपनि",
    "श्रेणी.पोउपनि",
    "सपोनि",
    "ASI",
    "स.फौ",
    "सफौ",
    "पोह",
    "मपोह",
    "पोना",
    "पोहे",
    "मपोना",
    "इतर",
];

/// English ranks recognized only by the bilingual upload locale.
const DESIGNATIONS_EN: [&str; 2] = ["Sub-Inspector", "Inspector"];

/// Numbered designations: a base rank followed by a badge numeral, e.g.
/// "पोह क्र 123" for constable #123.
static NUMBERED_DESIGNATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(पोह|मपोह|सफौ|पोना|मपोना|पोहे|मपोहे|स\.फौ)[\s/.]+(\d+)")
        .expect("valid designation regex")
});

static OFFICE_BEFORE_MARKER_MR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?)\s+पोलीस स्टेशन").expect("valid office regex"));
static OFFICE_BEFORE_MARKER_EN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?)\s+Police Station").expect("valid office regex"));

/// Column-header labels that repeat inside the grid and must be skipped.
const HEADER_LABELS: [&str; 4] = ["अधिकारी", "अमंलदार", "Officer", "कालावधी"];

/// Extra header labels seen only in the standard layout's repeated banners.
const HEADER_LABELS_STANDARD: [&str; 2] = ["गुरनं", "गुन्हा"];

const TOTAL_MARKERS: [&str; 2] = ["एकुण", "Total"];

/// Column offsets, identical across layouts.
const COL_OFFICER: usize = 1;
const COL_BUCKET: usize = 2;
const COL_SERIAL: usize = 3;
const COL_CASE_NUMBER: usize = 4;
const COL_CASE_DATE: usize = 5;

/// Detect the sheet layout and interpret it. Standard-layout sheets run under
/// the options' bucket policy; generic sheets always skip strictly, since
/// neither original importer inferred a bucket outside the standard layout.
pub fn parse_report(
    rows: &[RawRow],
    options: &InterpreterOptions,
    today: NaiveDate,
) -> ParseOutcome {
    match detect_format(rows) {
        SheetFormat::Standard => parse_standard(rows, options, options.bucket_policy, today),
        SheetFormat::Generic => parse_generic(rows, options, BucketPolicy::StrictSkip, today),
    }
}

/// Interpret a generic-layout grid: office headers are recognized inline,
/// wherever they occur, and every row runs through the full priority ladder.
pub fn parse_generic(
    rows: &[RawRow],
    options: &InterpreterOptions,
    policy: BucketPolicy,
    today: NaiveDate,
) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut context = ParseContext::default();

    for row in rows {
        outcome.diagnostics.row_seen();
        if row_is_empty(row) {
            outcome.diagnostics.skipped(SkipReason::EmptyRow);
            continue;
        }

        let officer_cell = text_at(row, COL_OFFICER);
        let bucket_cell = text_at(row, COL_BUCKET);

        if contains_station_marker(&officer_cell) {
            context.office_name = extract_office_name(&officer_cell);
            debug!(office = %context.office_name, "office header");
            outcome.diagnostics.skipped(SkipReason::ContextRow);
            continue;
        }

        if is_header_label(&officer_cell, SheetFormat::Generic) {
            outcome.diagnostics.skipped(SkipReason::HeaderLabel);
            continue;
        }

        if is_officer_line(&officer_cell, options.locale) {
            let (name, designation) = split_officer(&officer_cell, options.locale);
            context.officer_name = name;
            context.designation = designation;
            if options.officer_resets_bucket {
                context.time_period = None;
            }
            debug!(officer = %context.officer_name, designation = %context.designation, "officer line");
            outcome.diagnostics.skipped(SkipReason::ContextRow);
            continue;
        }

        if let Some(period) = TimePeriod::match_text(&officer_cell, options.locale)
            .or_else(|| TimePeriod::match_text(&bucket_cell, options.locale))
        {
            context.time_period = Some(period);
            outcome.diagnostics.skipped(SkipReason::ContextRow);
            continue;
        }

        if is_total(&officer_cell) || is_total(&bucket_cell) {
            context.time_period = None;
            outcome.diagnostics.skipped(SkipReason::ContextRow);
            continue;
        }

        emit_data_row(row, &mut context, options, policy, today, &mut outcome);
    }

    outcome
}

/// Interpret a standard-layout grid: the office name is read once from row 0,
/// the scan starts below two fixed header rows, and a data row with no active
/// bucket is skipped or age-inferred per the given policy.
pub fn parse_standard(
    rows: &[RawRow],
    options: &InterpreterOptions,
    policy: BucketPolicy,
    today: NaiveDate,
) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    if rows.len() < 3 {
        return outcome;
    }

    let mut context = ParseContext {
        office_name: extract_office_name(&text_at(&rows[0], 0)),
        ..ParseContext::default()
    };
    debug!(office = %context.office_name, "standard layout office header");

    for row in rows.iter().skip(2) {
        outcome.diagnostics.row_seen();
        if row_is_empty(row) {
            outcome.diagnostics.skipped(SkipReason::EmptyRow);
            continue;
        }

        let officer_cell = text_at(row, COL_OFFICER);
        let bucket_cell = text_at(row, COL_BUCKET);

        if is_header_label(&officer_cell, SheetFormat::Standard) {
            outcome.diagnostics.skipped(SkipReason::HeaderLabel);
            continue;
        }

        if is_officer_line(&officer_cell, options.locale) {
            let (name, designation) = split_officer(&officer_cell, options.locale);
            context.officer_name = name;
            context.designation = designation;
            outcome.diagnostics.skipped(SkipReason::ContextRow);
            continue;
        }

        if let Some(period) = TimePeriod::match_text(&bucket_cell, options.locale) {
            context.time_period = Some(period);
            outcome.diagnostics.skipped(SkipReason::ContextRow);
            continue;
        }

        if is_total(&bucket_cell) {
            context.time_period = None;
            outcome.diagnostics.skipped(SkipReason::ContextRow);
            continue;
        }

        emit_data_row(row, &mut context, options, policy, today, &mut outcome);
    }

    outcome
}

/// Final rung of the ladder: the row is data, or nothing.
fn emit_data_row(
    row: &[Cell],
    context: &mut ParseContext,
    options: &InterpreterOptions,
    policy: BucketPolicy,
    today: NaiveDate,
    outcome: &mut ParseOutcome,
) {
    let case_number = text_at(row, COL_CASE_NUMBER);
    if case_number.is_empty() {
        outcome.diagnostics.skipped(SkipReason::MissingCaseNumber);
        return;
    }

    let Some(case_date) = parse_cell_date(cell_at(row, COL_CASE_DATE), options) else {
        outcome.diagnostics.skipped(SkipReason::UnparseableDate);
        return;
    };

    if context.office_name.is_empty() {
        outcome.diagnostics.skipped(SkipReason::MissingOffice);
        return;
    }
    if context.officer_name.is_empty() {
        outcome.diagnostics.skipped(SkipReason::MissingOfficer);
        return;
    }

    let time_period = match context.time_period {
        Some(period) => period,
        None => match policy {
            BucketPolicy::StrictSkip => {
                outcome.diagnostics.skipped(SkipReason::MissingBucket);
                return;
            }
            BucketPolicy::InferFromDate => {
                let inferred = infer_bucket_from_age(case_date, today);
                // The inferred bucket becomes the running bucket, exactly as
                // a bucket line would have.
                context.time_period = Some(inferred);
                inferred
            }
        },
    };

    let record = CaseRecord {
        office_name: context.office_name.clone(),
        officer_name: context.officer_name.clone(),
        designation: context.designation.clone(),
        time_period,
        deadline_class: options.class_table.deadline_class(Some(time_period)),
        case_number,
        case_date,
        serial_number: cell_at(row, COL_SERIAL).as_serial(),
    };
    trace!(case = %record.case_number, bucket = %record.time_period, "record emitted");
    outcome.records.push(record);
    outcome.diagnostics.emitted();
}

/// Date of a data cell: text tokens go through the pattern list; numeric
/// cells use the spreadsheet serial fallback when the variant allows it.
fn parse_cell_date(cell: &Cell, options: &InterpreterOptions) -> Option<NaiveDate> {
    match cell {
        Cell::Empty => None,
        Cell::Text(text) => parse_date_token(text, options.patterns),
        Cell::Number(value) => {
            if options.serial_dates {
                parse_serial_date(*value)
            } else {
                parse_date_token(&cell.display_text(), options.patterns)
            }
        }
    }
}

/// Bucket synthesized from a case's age when the standard layout leaves the
/// bucket column blank. Months are whole 30-day blocks.
fn infer_bucket_from_age(case_date: NaiveDate, today: NaiveDate) -> TimePeriod {
    let months = (today - case_date).num_days().div_euclid(30);
    if months >= 12 {
        TimePeriod::OverOneYear
    } else if months >= 6 {
        TimePeriod::SixToTwelveMonths
    } else if months >= 3 {
        TimePeriod::ThreeToSixMonths
    } else {
        TimePeriod::OneToThreeMonths
    }
}

fn is_header_label(text: &str, format: SheetFormat) -> bool {
    if HEADER_LABELS.iter().any(|label| text.contains(label)) {
        return true;
    }
    format == SheetFormat::Standard
        && HEADER_LABELS_STANDARD
            .iter()
            .any(|label| text.contains(label))
}

fn is_total(text: &str) -> bool {
    TOTAL_MARKERS.iter().any(|marker| text.contains(marker))
}

fn is_purely_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit())
}

/// An officer-designation line: non-empty, not a bare number, not a bucket
/// label, not a total line.
fn is_officer_line(text: &str, locale: PhraseLocale) -> bool {
    !text.is_empty()
        && !is_purely_numeric(text)
        && TimePeriod::match_text(text, locale).is_none()
        && !is_total(text)
}

/// Split an officer line into name and designation.
///
/// The abbreviation list is tried first as literal prefixes in fixed order,
/// then the numbered-designation pattern, then the whole cell becomes the
/// name with an empty designation.
fn split_officer(text: &str, locale: PhraseLocale) -> (String, String) {
    for designation in DESIGNATIONS {
        if let Some(rest) = text.strip_prefix(designation) {
            return (rest.trim().to_string(), designation.to_string());
        }
    }
    if locale == PhraseLocale::MarathiEnglish {
        for designation in DESIGNATIONS_EN {
            if let Some(rest) = text.strip_prefix(designation) {
                return (rest.trim().to_string(), designation.to_string());
            }
        }
    }
    if let Some(captures) = NUMBERED_DESIGNATION.captures(text) {
        let designation = format!("{} {}", &captures[1], &captures[2]);
        let rest = text[captures.get(0).expect("whole match").end()..].trim();
        return (rest.to_string(), designation);
    }
    (text.to_string(), String::new())
}

/// Office name from a station header: the text before the marker phrase, or
/// the header with marker phrases stripped when nothing precedes it.
fn extract_office_name(text: &str) -> String {
    if let Some(captures) = OFFICE_BEFORE_MARKER_MR.captures(text) {
        return captures[1].trim().to_string();
    }
    if let Some(captures) = OFFICE_BEFORE_MARKER_EN.captures(text) {
        return captures[1].trim().to_string();
    }
    text.replace(STATION_MARKER_MR, "")
        .replace(STATION_MARKER_EN, "")
        .replace("प्रलंबित गुन्हे", "")
        .trim()
        .to_string()
}
