//! Sheet format detection.
//!
//! Exports come in two layouts. The "standard" one opens with the station
//! name in the very first cell and two fixed header rows before the data; the
//! generic one carries office headers inline, wherever they occur. The only
//! detection signal is the station marker phrase in row 0 — there is no
//! structural validation beyond that.

use crate::grid::{text_at, RawRow};

pub const STATION_MARKER_MR: &str = "पोलीस स्टेशन";
pub const STATION_MARKER_EN: &str = "Police Station";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Office name in row 0, data from row 2, fixed column offsets.
    Standard,
    /// Office headers detected inline by marker text.
    Generic,
}

pub fn contains_station_marker(text: &str) -> bool {
    text.contains(STATION_MARKER_MR) || text.contains(STATION_MARKER_EN)
}

/// Decide the sheet layout from the leading row.
pub fn detect_format(rows: &[RawRow]) -> SheetFormat {
    match rows.first() {
        Some(first) if contains_station_marker(&text_at(first, 0)) => SheetFormat::Standard,
        _ => SheetFormat::Generic,
    }
}
