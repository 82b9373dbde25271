pub mod dates;
pub mod deadline;
pub mod reminders;

pub use dates::{parse_date_token, parse_serial_date, PatternSet};
pub use deadline::{classify, days_elapsed, days_remaining, per_case_tier, severity_stats};
pub use reminders::{reminder_stats, Reminder, ReminderStats};
