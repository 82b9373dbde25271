//! Property tests for the date-token parser.

use chargesheet_core::dates::{parse_date_token, parse_serial_date, PatternSet};
use chrono::Datelike;
use proptest::prelude::*;

proptest! {
    #[test]
    fn never_panics_on_arbitrary_input(token in "\\PC*") {
        let _ = parse_date_token(&token, PatternSet::Basic);
        let _ = parse_date_token(&token, PatternSet::Extended);
    }

    #[test]
    fn valid_day_first_tokens_round_trip(
        day in 1u32..=28,
        month in 1u32..=12,
        year in 1950i32..=2049,
    ) {
        let token = format!("{day:02}-{month:02}-{year:04}");
        let parsed = parse_date_token(&token, PatternSet::Basic)
            .expect("well-formed token must parse");
        prop_assert_eq!(parsed.day(), day);
        prop_assert_eq!(parsed.month(), month);
        prop_assert_eq!(parsed.year(), year);
    }

    #[test]
    fn slash_and_dash_agree(day in 1u32..=28, month in 1u32..=12, year in 1950i32..=2049) {
        let dashed = format!("{day:02}-{month:02}-{year:04}");
        let slashed = format!("{day:02}/{month:02}/{year:04}");
        prop_assert_eq!(
            parse_date_token(&dashed, PatternSet::Basic),
            parse_date_token(&slashed, PatternSet::Basic)
        );
    }

    #[test]
    fn dot_and_dash_separators_agree(day in 1u32..=28, month in 1u32..=12, year in 1950i32..=2049) {
        let dashed = format!("{day:02}-{month:02}-{year:04}");
        let dotted = format!("{day:02}.{month:02}.{year:04}");
        prop_assert_eq!(
            parse_date_token(&dashed, PatternSet::Extended),
            parse_date_token(&dotted, PatternSet::Extended)
        );
    }

    #[test]
    fn serial_dates_are_ordered(a in 0u32..60000, b in 0u32..60000) {
        let da = parse_serial_date(f64::from(a)).expect("in-range serial");
        let db = parse_serial_date(f64::from(b)).expect("in-range serial");
        prop_assert_eq!(a.cmp(&b), da.cmp(&db));
    }
}

#[test]
fn two_digit_years_resolve_by_cutoff() {
    for yy in 0u32..100 {
        let token = format!("15-06-{yy:02}");
        let parsed = parse_date_token(&token, PatternSet::Basic).expect("token parses");
        let expected = if yy < 50 { 2000 + yy as i32 } else { 1900 + yy as i32 };
        assert_eq!(parsed.year(), expected, "year token {yy:02}");
    }
}
