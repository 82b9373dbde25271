//! CLI library components for the chargesheet tracker.

pub mod imports;
pub mod logging;
