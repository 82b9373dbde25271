//! Reminder due-time rules.
//!
//! Scheduling and delivery belong to external collaborators; the core owns
//! only the comparison rules deciding whether a reminder is overdue, due
//! today, or upcoming. "Now" is an argument everywhere so the answers stay
//! reproducible in tests.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub case_number: String,
    pub title: String,
    pub due_at: NaiveDateTime,
    pub completed: bool,
}

impl Reminder {
    /// A reminder is overdue once its due time has passed uncompleted.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.completed && self.due_at < now
    }

    /// Due within the window `[now, now + days]`, inclusive on both ends.
    pub fn is_upcoming(&self, now: NaiveDateTime, days: u64) -> bool {
        if self.completed {
            return false;
        }
        let Some(end) = now.checked_add_days(Days::new(days)) else {
            return false;
        };
        self.due_at >= now && self.due_at <= end
    }

    /// Due on the given calendar date.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        !self.completed && self.due_at.date() == date
    }
}

/// Point-in-time reminder counts; recomputed per query, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderStats {
    pub overdue: usize,
    pub due_today: usize,
    pub upcoming_week: usize,
}

pub fn reminder_stats(reminders: &[Reminder], now: NaiveDateTime) -> ReminderStats {
    let mut stats = ReminderStats::default();
    for reminder in reminders {
        if reminder.is_overdue(now) {
            stats.overdue += 1;
        }
        if reminder.is_due_on(now.date()) {
            stats.due_today += 1;
        }
        if reminder.is_upcoming(now, 7) {
            stats.upcoming_week += 1;
        }
    }
    stats
}
