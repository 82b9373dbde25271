//! Import pipeline test: CSV report on disk through to records JSON and
//! severity statistics.

use std::io::Write as _;

use chrono::NaiveDate;

use chargesheet_cli::imports::{
    import_report, office_counts, read_records_json, write_records_json,
};
use chargesheet_core::deadline::severity_stats;
use chargesheet_ingest::{InterpreterOptions, SheetFormat};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

#[test]
fn report_to_records_to_stats() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        ",वानवडी पोलीस स्टेशन प्रलंबित गुन्हे,,,,\n\
         ,अधिकारी / अमंलदार,कालावधी,,,\n\
         ,PSI ए बी पाटील,,,,\n\
         ,,1 वर्षा वरील,,,\n\
         ,,,1,11/2023,15-02-2023\n\
         ,,3 ते 6 महिने,,,\n\
         ,,,1,88/2024,10-04-2024\n\
         ,,,2,89/2024,01-05-2024\n"
    )
    .expect("write csv");

    let outcome = import_report(file.path(), &InterpreterOptions::bulk_csv(), today())
        .expect("import report");

    assert_eq!(outcome.format, SheetFormat::Generic);
    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.diagnostics.records_emitted, 3);

    let offices = office_counts(&outcome.records);
    assert_eq!(offices.get("वानवडी"), Some(&3));

    let dir = tempfile::tempdir().expect("temp dir");
    let records_path = dir.path().join("records.json");
    write_records_json(&records_path, &outcome.records).expect("write records");
    let loaded = read_records_json(&records_path).expect("read records");
    assert_eq!(loaded, outcome.records);

    let stats = severity_stats(&loaded, today());
    assert_eq!(stats.total(), 3);
    // The over-one-year case (90-day class, filed 2023) is long overdue.
    assert_eq!(stats.days90.overdue, 1);
    // 10-04-2024 is 52 days before 2024-06-01: warning on the 60-day scale.
    assert_eq!(stats.days60.warning, 1);
    // 01-05-2024 is 31 days elapsed: safe.
    assert_eq!(stats.days60.safe, 1);
}

#[test]
fn missing_report_is_a_hard_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("no-such-report.csv");
    let error = import_report(&missing, &InterpreterOptions::upload(), today())
        .expect_err("missing file must fail");
    assert!(error.to_string().contains("no-such-report.csv"));
}
