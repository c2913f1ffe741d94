//! Fiscal years that coincide with calendar years.

use std::fmt;

use chrono::NaiveDate;
use ledgertime_shared::TimeResult;
use ledgertime_shared::types::{MonthNumber, MonthOfYear};

use super::{FiscalCalendar, FiscalYearAccountingPeriodSystem};

/// Fiscal year `N` is calendar year `N`; fiscal month `k` is the `k`-th calendar month.
///
/// Equivalent to a [`FiscalYearAccountingPeriodSystem`] ending in December.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CalendarYearAccountingPeriodSystem;

impl CalendarYearAccountingPeriodSystem {
    /// Creates the calendar-year system.
    #[must_use]
    pub fn new() -> Self {
        tracing::debug!("calendar year accounting period system");
        Self
    }
}

const DECEMBER_YEAR_END: FiscalYearAccountingPeriodSystem =
    FiscalYearAccountingPeriodSystem::ending_in(MonthOfYear::December);

impl FiscalCalendar for CalendarYearAccountingPeriodSystem {
    fn fiscal_year_end(&self, year: i32) -> TimeResult<NaiveDate> {
        DECEMBER_YEAR_END.fiscal_year_end(year)
    }

    fn fiscal_month_bounds(
        &self,
        year: i32,
        month: MonthNumber,
    ) -> TimeResult<(NaiveDate, NaiveDate)> {
        DECEMBER_YEAR_END.fiscal_month_bounds(year, month)
    }
}

impl fmt::Display for CalendarYearAccountingPeriodSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("calendar year")
    }
}
