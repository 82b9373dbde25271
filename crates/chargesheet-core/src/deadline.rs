//! Deadline math and severity classification.
//!
//! Two coexisting policies, both preserved deliberately:
//!
//! - A class-specific aggregate policy with elapsed-day thresholds per
//!   deadline class, used by the station dashboards. The 45-day class has no
//!   tier breakdown there, only a total.
//! - A uniform per-case coloring policy keyed on days remaining, used when a
//!   single case is rendered. The two disagree near boundaries and must not
//!   be unified.

use chrono::NaiveDate;

use chargesheet_model::{
    CaseRecord, CaseStatus, DeadlineClass, SeverityStats, SeverityTier,
};

/// Whole days between filing and "today". Both values are calendar dates, so
/// partial days never enter the count.
pub fn days_elapsed(filing_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - filing_date).num_days()
}

/// Days left before the class deadline; negative once past it.
pub fn days_remaining(class: DeadlineClass, filing_date: NaiveDate, today: NaiveDate) -> i64 {
    class.days() - days_elapsed(filing_date, today)
}

/// Class-specific severity of a case.
///
/// Closed and archived cases classify as [`SeverityTier::NotApplicable`]
/// regardless of date math. The 45-day class carries no aggregate tier
/// breakdown, so its per-case tiers come from the uniform remaining-days
/// scale.
pub fn classify(
    class: DeadlineClass,
    filing_date: NaiveDate,
    today: NaiveDate,
    status: CaseStatus,
) -> SeverityTier {
    if status.is_terminal() {
        return SeverityTier::NotApplicable;
    }
    let elapsed = days_elapsed(filing_date, today);
    match class {
        DeadlineClass::Days60 => tier_by_elapsed(elapsed, 60, 55, 50, 45),
        DeadlineClass::Days90 => tier_by_elapsed(elapsed, 90, 85, 80, 75),
        DeadlineClass::Days45 => per_case_tier(days_remaining(class, filing_date, today)),
    }
}

fn tier_by_elapsed(
    elapsed: i64,
    deadline: i64,
    critical: i64,
    warning: i64,
    caution: i64,
) -> SeverityTier {
    if elapsed > deadline {
        SeverityTier::Overdue
    } else if elapsed >= critical {
        SeverityTier::Critical
    } else if elapsed >= warning {
        SeverityTier::Warning
    } else if elapsed >= caution {
        SeverityTier::Caution
    } else {
        SeverityTier::Safe
    }
}

/// Uniform per-case coloring scale keyed on days remaining.
pub fn per_case_tier(days_remaining: i64) -> SeverityTier {
    if days_remaining < 0 {
        SeverityTier::Overdue
    } else if days_remaining <= 5 {
        SeverityTier::Critical
    } else if days_remaining <= 10 {
        SeverityTier::Warning
    } else if days_remaining <= 20 {
        SeverityTier::Caution
    } else {
        SeverityTier::Safe
    }
}

/// Aggregate severity statistics over freshly imported records.
///
/// Imported records have no workflow status yet and count as open. The
/// 45-day class feeds the bare total only, matching the dashboard layout.
pub fn severity_stats(records: &[CaseRecord], today: NaiveDate) -> SeverityStats {
    let mut stats = SeverityStats::default();
    for record in records {
        match record.deadline_class {
            DeadlineClass::Days45 => stats.days45_total += 1,
            DeadlineClass::Days60 => stats.days60.record(classify(
                DeadlineClass::Days60,
                record.case_date,
                today,
                CaseStatus::Open,
            )),
            DeadlineClass::Days90 => stats.days90.record(classify(
                DeadlineClass::Days90,
                record.case_date,
                today,
                CaseStatus::Open,
            )),
        }
    }
    stats
}
