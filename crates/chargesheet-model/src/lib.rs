pub mod case;
pub mod diagnostics;
pub mod error;
pub mod severity;
pub mod timeperiod;

pub use case::{CaseRecord, CaseStatus};
pub use diagnostics::{ParseDiagnostics, SkipReason};
pub use error::{ModelError, Result};
pub use severity::{SeverityStats, SeverityTier, TierCounts};
pub use timeperiod::{ClassTable, DeadlineClass, PhraseLocale, TimePeriod};
