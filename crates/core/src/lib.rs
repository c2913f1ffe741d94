//! Core time model for ledgertime.
//!
//! This crate contains pure value types and date arithmetic with ZERO I/O.
//! Every type is an immutable `Copy` value, safe to share across threads.
//!
//! # Modules
//!
//! - `unit_of_time` - Calendar, fiscal and generic units-of-time
//! - `codec` - Canonical and sortable text encodings, `serde` support
//! - `reporting` - Validated ranges of units-of-time
//! - `period_system` - Mapping calendar days onto fiscal periods

pub mod codec;
pub mod period_system;
pub mod reporting;
pub mod unit_of_time;

#[cfg(test)]
mod test_support;

pub use ledgertime_shared::{TimeError, TimeResult};

pub use codec::{deserialize, serialize_to_sortable_string, serialize_to_string};
pub use period_system::{
    AccountingPeriodSystem, CalendarYearAccountingPeriodSystem,
    FiftyTwoFiftyThreeWeekAccountingPeriodSystem, FiscalCalendar,
    FiscalYearAccountingPeriodSystem,
};
pub use reporting::ReportingPeriod;
pub use unit_of_time::{
    BoundedTimeUnit, CalendarDay, CalendarMonth, CalendarQuarter, CalendarUnbounded,
    CalendarUnitOfTime, CalendarYear, FiscalMonth, FiscalQuarter, FiscalUnbounded,
    FiscalUnitOfTime, FiscalYear, GenericMonth, GenericQuarter, GenericUnbounded,
    GenericUnitOfTime, GenericYear, TimeUnit, UnitOfTime,
};
