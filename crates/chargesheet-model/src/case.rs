//! Case records emitted by the report interpreter and the workflow fields the
//! persistence layer attaches afterwards.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::timeperiod::{DeadlineClass, TimePeriod};

/// One qualifying data row of a pending-case report, enriched with the
/// office/officer/bucket context that was in scope when the row was read.
///
/// Immutable once emitted; the persistence layer owns it from there and adds
/// status, priority, and workflow fields the parser does not produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub office_name: String,
    pub officer_name: String,
    pub designation: String,
    pub time_period: TimePeriod,
    /// Denormalized from `time_period` via the variant's class table.
    pub deadline_class: DeadlineClass,
    pub case_number: String,
    pub case_date: NaiveDate,
    /// Serial number within the bucket, absent when the cell is not an integer.
    pub serial_number: Option<u32>,
}

/// Workflow status of a tracked case. The interpreter never sets this; new
/// imports start `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Open,
    InProgress,
    UnderInvestigation,
    PendingCourt,
    Closed,
    Archived,
}

impl CaseStatus {
    /// Closed and archived cases are exempt from deadline tracking.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Archived)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::UnderInvestigation => "under_investigation",
            Self::PendingCourt => "pending_court",
            Self::Closed => "closed",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for CaseStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "under_investigation" => Ok(Self::UnderInvestigation),
            "pending_court" => Ok(Self::PendingCourt),
            "closed" => Ok(Self::Closed),
            "archived" => Ok(Self::Archived),
            other => Err(ModelError::Message(format!("unknown case status: {other}"))),
        }
    }
}
