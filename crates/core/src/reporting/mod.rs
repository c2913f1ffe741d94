//! Reporting periods: validated ranges of units-of-time.

pub mod period;

pub use period::{ReportingPeriod, Units};
