//! Severity tiers computed at display time from deadline math.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk classification of a case against its investigation deadline.
///
/// Never persisted: "today" advances, so tiers must be recomputed per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    Overdue,
    Critical,
    Warning,
    Caution,
    Safe,
    /// Closed/archived cases, regardless of date math.
    NotApplicable,
}

impl SeverityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::Safe => "safe",
            Self::NotApplicable => "n/a",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tier counts for one deadline class on an aggregate dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub overdue: usize,
    pub critical: usize,
    pub warning: usize,
    pub caution: usize,
    pub safe: usize,
}

impl TierCounts {
    pub fn record(&mut self, tier: SeverityTier) {
        match tier {
            SeverityTier::Overdue => self.overdue += 1,
            SeverityTier::Critical => self.critical += 1,
            SeverityTier::Warning => self.warning += 1,
            SeverityTier::Caution => self.caution += 1,
            SeverityTier::Safe => self.safe += 1,
            SeverityTier::NotApplicable => {}
        }
    }

    pub fn total(&self) -> usize {
        self.overdue + self.critical + self.warning + self.caution + self.safe
    }
}

/// Aggregate severity picture across the three deadline classes.
///
/// The 45-day class is tracked as a bare total only; the report format never
/// broke it into tiers and the dashboard preserved that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityStats {
    pub days60: TierCounts,
    pub days90: TierCounts,
    pub days45_total: usize,
}

impl SeverityStats {
    pub fn critical_count(&self) -> usize {
        self.days60.critical + self.days90.critical
    }

    pub fn overdue_count(&self) -> usize {
        self.days60.overdue + self.days90.overdue
    }

    pub fn total(&self) -> usize {
        self.days60.total() + self.days90.total() + self.days45_total
    }
}
