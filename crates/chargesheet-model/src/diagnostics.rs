//! Optional skip-reason accounting for the row interpreter.
//!
//! The interpreter's default policy is to skip unusable rows silently. These
//! types give tests and verbose imports a structured view of what was skipped
//! without changing that policy.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a row produced no case record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkipReason {
    /// All cells empty or whitespace.
    EmptyRow,
    /// Column-header repeat (officer/period/crime-number labels).
    HeaderLabel,
    /// Office header, officer line, bucket line, or total line: consumed as
    /// context, not data.
    ContextRow,
    /// Data row with no case number.
    MissingCaseNumber,
    /// Data row whose date token did not parse.
    UnparseableDate,
    /// Data row seen before any office header.
    MissingOffice,
    /// Data row seen before any officer line.
    MissingOfficer,
    /// Data row with no active time-period bucket (strict variant only).
    MissingBucket,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyRow => "empty row",
            Self::HeaderLabel => "header label",
            Self::ContextRow => "context row",
            Self::MissingCaseNumber => "no case number",
            Self::UnparseableDate => "unparseable date",
            Self::MissingOffice => "no office in scope",
            Self::MissingOfficer => "no officer in scope",
            Self::MissingBucket => "no time period in scope",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-reason skip counts plus row totals for one parse invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostics {
    pub rows_seen: usize,
    pub records_emitted: usize,
    pub skips: BTreeMap<SkipReason, usize>,
}

impl ParseDiagnostics {
    pub fn row_seen(&mut self) {
        self.rows_seen += 1;
    }

    pub fn emitted(&mut self) {
        self.records_emitted += 1;
    }

    pub fn skipped(&mut self, reason: SkipReason) {
        *self.skips.entry(reason).or_insert(0) += 1;
    }

    pub fn skip_count(&self, reason: SkipReason) -> usize {
        self.skips.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_skipped(&self) -> usize {
        self.skips.values().sum()
    }
}
