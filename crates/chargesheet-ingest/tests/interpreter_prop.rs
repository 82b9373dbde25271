//! Property tests for the row interpreter's accounting and context rules.

use chrono::NaiveDate;
use proptest::prelude::*;

use chargesheet_ingest::{parse_generic, BucketPolicy, Cell, InterpreterOptions, RawRow};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

/// Cell contents that exercise every rung of the classification ladder.
fn arb_cell() -> impl Strategy<Value = Cell> {
    let marker = prop::sample::select(vec![
        "शिवाजीनगर पोलीस स्टेशन",
        "अधिकारी / अमंलदार",
        "PSI ए बी पाटील",
        "3 ते 6 महिने",
        "1 वर्षा वरील",
        "एकुण",
        "123/2024",
        "15-03-2024",
    ])
    .prop_map(Cell::text);
    prop_oneof![
        Just(Cell::Empty),
        marker,
        Just(Cell::Number(45000.0)),
        "[a-z0-9 ]{0,12}".prop_map(Cell::Text),
        any::<f64>().prop_map(Cell::Number),
    ]
}

fn arb_grid() -> impl Strategy<Value = Vec<RawRow>> {
    prop::collection::vec(prop::collection::vec(arb_cell(), 0..8), 0..40)
}

proptest! {
    /// Every scanned row is accounted for exactly once: it either emits a
    /// record or lands in exactly one skip bucket.
    #[test]
    fn every_row_emits_or_skips_once(rows in arb_grid()) {
        let outcome = parse_generic(
            &rows,
            &InterpreterOptions::upload(),
            BucketPolicy::StrictSkip,
            today(),
        );
        prop_assert_eq!(outcome.diagnostics.rows_seen, rows.len());
        prop_assert_eq!(
            outcome.diagnostics.rows_seen,
            outcome.diagnostics.records_emitted + outcome.diagnostics.total_skipped()
        );
        prop_assert_eq!(outcome.records.len(), outcome.diagnostics.records_emitted);
    }

    /// Without an officer line in scope, well-formed data rows never emit.
    #[test]
    fn no_records_before_officer_context(count in 1usize..20) {
        let mut rows: Vec<RawRow> = vec![vec![
            Cell::Empty,
            Cell::text("वानवडी पोलीस स्टेशन"),
        ]];
        for i in 0..count {
            rows.push(vec![
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Number(i as f64 + 1.0),
                Cell::text(format!("{}/2024", i + 1)),
                Cell::text("15-03-2024"),
            ]);
        }
        let outcome = parse_generic(
            &rows,
            &InterpreterOptions::bulk_csv(),
            BucketPolicy::StrictSkip,
            today(),
        );
        prop_assert!(outcome.records.is_empty());
    }

    /// Emitted records always carry the full context in scope at the row.
    #[test]
    fn emitted_records_have_complete_context(rows in arb_grid()) {
        let outcome = parse_generic(
            &rows,
            &InterpreterOptions::upload(),
            BucketPolicy::StrictSkip,
            today(),
        );
        for record in &outcome.records {
            prop_assert!(!record.office_name.is_empty());
            prop_assert!(!record.officer_name.is_empty());
            prop_assert!(!record.case_number.is_empty());
        }
    }
}
