//! Time-period buckets and the investigation deadline classes derived from them.
//!
//! Pending-case reports group rows under free-text "time since filing" labels.
//! Five canonical labels occur; two of them (1–3 months and 1–4 months) overlap
//! by design in the source reports and resolve to the same deadline class.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How long a case has been pending, per the report's bucket label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePeriod {
    /// "1 वर्षा वरील" / "Above 1 year"
    OverOneYear,
    /// "6 ते 12 महिने" / "6 to 12 months"
    SixToTwelveMonths,
    /// "3 ते 6 महिने" / "3 to 6 months"
    ThreeToSixMonths,
    /// "1 ते 3 महिने" / "1 to 3 months"
    OneToThreeMonths,
    /// "1 ते 4 महिने" / "1 to 4 months"
    OneToFourMonths,
}

/// Which phrase table a parser variant matches bucket labels against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhraseLocale {
    /// Marathi phrases only (bulk CSV importer behavior).
    #[default]
    Marathi,
    /// Marathi phrases plus their English equivalents (spreadsheet upload behavior).
    MarathiEnglish,
}

/// Canonical bucket phrases in match order. Order is load-bearing: matching is
/// substring containment and the first containing phrase wins.
const MARATHI_PHRASES: [(&str, TimePeriod); 5] = [
    ("1 वर्षा वरील", TimePeriod::OverOneYear),
    ("6 ते 12 महिने", TimePeriod::SixToTwelveMonths),
    ("3 ते 6 महिने", TimePeriod::ThreeToSixMonths),
    ("1 ते 3 महिने", TimePeriod::OneToThreeMonths),
    ("1 ते 4 महिने", TimePeriod::OneToFourMonths),
];

const ENGLISH_PHRASES: [(&str, TimePeriod); 5] = [
    ("Above 1 year", TimePeriod::OverOneYear),
    ("6 to 12 months", TimePeriod::SixToTwelveMonths),
    ("3 to 6 months", TimePeriod::ThreeToSixMonths),
    ("1 to 3 months", TimePeriod::OneToThreeMonths),
    ("1 to 4 months", TimePeriod::OneToFourMonths),
];

impl TimePeriod {
    /// Classify a free-text bucket label by substring containment.
    ///
    /// The Marathi table is consulted first in canonical order; with
    /// [`PhraseLocale::MarathiEnglish`] the English table follows in the same
    /// order. Returns `None` when no phrase is contained, which does not
    /// terminate a scan.
    pub fn match_text(text: &str, locale: PhraseLocale) -> Option<TimePeriod> {
        if text.trim().is_empty() {
            return None;
        }
        for (phrase, period) in MARATHI_PHRASES {
            if text.contains(phrase) {
                return Some(period);
            }
        }
        if locale == PhraseLocale::MarathiEnglish {
            for (phrase, period) in ENGLISH_PHRASES {
                if text.contains(phrase) {
                    return Some(period);
                }
            }
        }
        None
    }

    /// The canonical Marathi label for this bucket.
    pub fn label(self) -> &'static str {
        match self {
            Self::OverOneYear => "1 वर्षा वरील",
            Self::SixToTwelveMonths => "6 ते 12 महिने",
            Self::ThreeToSixMonths => "3 ते 6 महिने",
            Self::OneToThreeMonths => "1 ते 3 महिने",
            Self::OneToFourMonths => "1 ते 4 महिने",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Investigation deadline in days, derived from a time-period bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeadlineClass {
    Days45,
    Days60,
    Days90,
}

impl DeadlineClass {
    pub fn days(self) -> i64 {
        match self {
            Self::Days45 => 45,
            Self::Days60 => 60,
            Self::Days90 => 90,
        }
    }
}

impl fmt::Display for DeadlineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days())
    }
}

/// Per-variant bucket-to-class lookup.
///
/// The two original importers disagree on 6–12 months: the spreadsheet upload
/// maps it to 90 days, while the bulk CSV importer never consumed the
/// association at all. Both behaviors are kept selectable rather than
/// reconciled, since the original intent is not recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassTable {
    /// Spreadsheet-upload table: 6–12 months is a 90-day case.
    #[default]
    Upload,
    /// Bulk CSV table: 6–12 months has no defined class and falls to the
    /// 60-day default.
    BulkCsv,
}

impl ClassTable {
    /// Derive the deadline class for a bucket. `None` (no bucket recognized)
    /// falls back to the 60-day default.
    pub fn deadline_class(self, period: Option<TimePeriod>) -> DeadlineClass {
        match period {
            Some(TimePeriod::OverOneYear) => DeadlineClass::Days90,
            Some(TimePeriod::SixToTwelveMonths) => match self {
                Self::Upload => DeadlineClass::Days90,
                Self::BulkCsv => DeadlineClass::Days60,
            },
            Some(TimePeriod::ThreeToSixMonths) => DeadlineClass::Days60,
            Some(TimePeriod::OneToThreeMonths) | Some(TimePeriod::OneToFourMonths) => {
                DeadlineClass::Days45
            }
            None => DeadlineClass::Days60,
        }
    }
}
