//! Free-text date token parsing for report cells.
//!
//! Report exports carry filing dates in several conventions: `15-03-2024`,
//! `15/03/2024`, `5/3/2024`, `15-03-24`, dotted decorations (`15.03.2024`),
//! and spreadsheet serial numbers. A token that matches nothing is treated as
//! an absent date, never as an error.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;

/// Which ordered pattern list to try.
///
/// The bulk CSV importer recognized day-first patterns only; the spreadsheet
/// upload additionally accepted ISO `YYYY-MM-DD`. The lists are tried in
/// fixed order and the first match wins, so an ambiguous token like
/// `01-02-03` resolves by list position (as `DD-MM-YY`), not locale guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternSet {
    /// Day-first patterns only.
    Basic,
    /// Day-first patterns plus ISO `YYYY-MM-DD`.
    #[default]
    Extended,
}

/// Component order of a matched pattern.
#[derive(Debug, Clone, Copy)]
enum FieldOrder {
    DayMonthYear,
    YearMonthDay,
}

struct DatePattern {
    regex: &'static LazyLock<Regex>,
    order: FieldOrder,
}

// Anchored at the front only: trailing decoration is tolerated, and a
// four-digit year cannot be mistaken for a two-digit one mid-token.
static DD_MM_YYYY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-(\d{2})-(\d{4})").expect("valid date regex"));
static DD_SLASH_MM_YYYY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})").expect("valid date regex"));
static D_SLASH_M_YYYY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})").expect("valid date regex"));
static DD_MM_YY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-(\d{2})-(\d{2})").expect("valid date regex"));
static YYYY_MM_DD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("valid date regex"));

/// Pattern order is load-bearing; do not reorder.
static BASIC_PATTERNS: [DatePattern; 4] = [
    DatePattern {
        regex: &DD_MM_YYYY,
        order: FieldOrder::DayMonthYear,
    },
    DatePattern {
        regex: &DD_SLASH_MM_YYYY,
        order: FieldOrder::DayMonthYear,
    },
    DatePattern {
        regex: &D_SLASH_M_YYYY,
        order: FieldOrder::DayMonthYear,
    },
    DatePattern {
        regex: &DD_MM_YY,
        order: FieldOrder::DayMonthYear,
    },
];

static ISO_PATTERN: DatePattern = DatePattern {
    regex: &YYYY_MM_DD,
    order: FieldOrder::YearMonthDay,
};

/// Parse a free-text date token into a calendar date.
///
/// Leading/trailing whitespace is ignored and `.` separators normalize to
/// `-`, so `15.03.2024` reads as `15-03-2024` would. Two-digit years resolve
/// with a fixed cutoff: below 50 into the 2000s, otherwise the 1900s. Tokens
/// matching no pattern, and matches that name an impossible calendar day
/// (such as 31 April), yield `None`.
pub fn parse_date_token(token: &str, set: PatternSet) -> Option<NaiveDate> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    let clean = trimmed.replace('.', "-");

    for pattern in &BASIC_PATTERNS {
        if let Some(date) = try_pattern(pattern, &clean) {
            return Some(date);
        }
    }
    if set == PatternSet::Extended {
        if let Some(date) = try_pattern(&ISO_PATTERN, &clean) {
            return Some(date);
        }
    }
    None
}

fn try_pattern(pattern: &DatePattern, text: &str) -> Option<NaiveDate> {
    let captures = pattern.regex.captures(text)?;
    let first: u32 = captures[1].parse().ok()?;
    let second: u32 = captures[2].parse().ok()?;
    let third: u32 = captures[3].parse().ok()?;

    let (day, month, year) = match pattern.order {
        FieldOrder::DayMonthYear => (first, second, expand_year(third)),
        FieldOrder::YearMonthDay => (third, second, first as i32),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Fixed two-digit year policy: `yy < 50` is 20yy, otherwise 19yy.
fn expand_year(year: u32) -> i32 {
    if year < 100 {
        if year < 50 {
            2000 + year as i32
        } else {
            1900 + year as i32
        }
    } else {
        year as i32
    }
}

/// Spreadsheet date epoch: serial 0 corresponds to 1899-12-30.
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Interpret a numeric cell as a spreadsheet serial date.
///
/// The fractional time-of-day part is floored away. Values that are not
/// finite or would overflow the calendar yield `None`.
pub fn parse_serial_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.floor();
    if days < 0.0 || days > u64::MAX as f64 {
        return None;
    }
    let (year, month, day) = SERIAL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(year, month, day)?;
    epoch.checked_add_days(Days::new(days as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn parses_each_separator_convention() {
        assert_eq!(
            parse_date_token("15-03-2024", PatternSet::Basic),
            Some(date(2024, 3, 15))
        );
        assert_eq!(
            parse_date_token("15/03/2024", PatternSet::Basic),
            Some(date(2024, 3, 15))
        );
        assert_eq!(
            parse_date_token("5/3/2024", PatternSet::Basic),
            Some(date(2024, 3, 5))
        );
        assert_eq!(
            parse_date_token("15-03-24", PatternSet::Basic),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn dot_separators_read_as_dashes() {
        assert_eq!(
            parse_date_token("15.03.2024", PatternSet::Basic),
            Some(date(2024, 3, 15))
        );
        // Trailing decoration after a full match is tolerated.
        assert_eq!(
            parse_date_token("15-03-2024.", PatternSet::Basic),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn two_digit_year_cutoff_at_fifty() {
        assert_eq!(
            parse_date_token("01-02-03", PatternSet::Basic),
            Some(date(2003, 2, 1))
        );
        assert_eq!(
            parse_date_token("01-02-49", PatternSet::Basic),
            Some(date(2049, 2, 1))
        );
        assert_eq!(
            parse_date_token("01-02-50", PatternSet::Basic),
            Some(date(1950, 2, 1))
        );
        assert_eq!(
            parse_date_token("01-02-99", PatternSet::Basic),
            Some(date(1999, 2, 1))
        );
    }

    #[test]
    fn iso_pattern_is_extended_only() {
        assert_eq!(parse_date_token("2024-03-15", PatternSet::Basic), None);
        assert_eq!(
            parse_date_token("2024-03-15", PatternSet::Extended),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn empty_and_garbage_are_absent() {
        assert_eq!(parse_date_token("", PatternSet::Extended), None);
        assert_eq!(parse_date_token("   ", PatternSet::Extended), None);
        assert_eq!(parse_date_token("not a date", PatternSet::Extended), None);
        assert_eq!(parse_date_token("15-03", PatternSet::Extended), None);
    }

    #[test]
    fn impossible_calendar_day_is_rejected() {
        // Day 31 in April does not roll into May; the token reads as absent.
        assert_eq!(parse_date_token("31-04-2024", PatternSet::Extended), None);
        assert_eq!(parse_date_token("30-02-2024", PatternSet::Extended), None);
        assert_eq!(
            parse_date_token("29-02-2024", PatternSet::Extended),
            Some(date(2024, 2, 29))
        );
        assert_eq!(parse_date_token("29-02-2023", PatternSet::Extended), None);
    }

    #[test]
    fn serial_reference_pair() {
        assert_eq!(parse_serial_date(45000.0), Some(date(2023, 3, 15)));
        // Epoch itself.
        assert_eq!(parse_serial_date(0.0), Some(date(1899, 12, 30)));
        // Fractional time-of-day is floored.
        assert_eq!(parse_serial_date(45000.99), Some(date(2023, 3, 15)));
    }

    #[test]
    fn serial_rejects_unusable_values() {
        assert_eq!(parse_serial_date(f64::NAN), None);
        assert_eq!(parse_serial_date(f64::INFINITY), None);
        assert_eq!(parse_serial_date(-3.0), None);
        assert_eq!(parse_serial_date(1.0e18), None);
    }
}
