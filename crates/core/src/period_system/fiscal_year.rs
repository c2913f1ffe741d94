//! Fiscal years that close on the last day of a fixed month.

use std::fmt;

use chrono::NaiveDate;
use ledgertime_shared::TimeResult;
use ledgertime_shared::types::{MonthNumber, MonthOfYear};

use super::{FiscalCalendar, month_bounds};

/// Fiscal year `N` runs from the day after the end of `last_month_in_fiscal_year` in
/// `N - 1` through the end of that month in `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiscalYearAccountingPeriodSystem {
    last_month_in_fiscal_year: MonthOfYear,
}

impl FiscalYearAccountingPeriodSystem {
    /// Creates a system whose fiscal year ends with `last_month_in_fiscal_year`.
    #[must_use]
    pub fn new(last_month_in_fiscal_year: MonthOfYear) -> Self {
        tracing::debug!(%last_month_in_fiscal_year, "fiscal year accounting period system");
        Self::ending_in(last_month_in_fiscal_year)
    }

    pub(super) const fn ending_in(last_month_in_fiscal_year: MonthOfYear) -> Self {
        Self {
            last_month_in_fiscal_year,
        }
    }

    /// Creates a system from a month number.
    ///
    /// # Errors
    ///
    /// Returns [`ledgertime_shared::TimeError::ArgumentInvalid`] unless `month` is in
    /// `1..=12`.
    pub fn from_month_number(month: u32) -> TimeResult<Self> {
        Ok(Self::new(MonthOfYear::from_number(month)?))
    }

    /// Returns the month whose last day closes every fiscal year.
    #[must_use]
    pub const fn last_month_in_fiscal_year(&self) -> MonthOfYear {
        self.last_month_in_fiscal_year
    }

    /// Calendar year and month holding fiscal month `month` of fiscal year `year`.
    fn calendar_month_of(&self, year: i32, month: MonthNumber) -> (i32, MonthOfYear) {
        let offset = self.last_month_in_fiscal_year.number() + month.number();
        let year = if offset > 12 { year } else { year - 1 };
        (year, MonthOfYear::from_index_wrapping(offset - 1))
    }
}

impl FiscalCalendar for FiscalYearAccountingPeriodSystem {
    fn fiscal_year_end(&self, year: i32) -> TimeResult<NaiveDate> {
        Ok(month_bounds(year, self.last_month_in_fiscal_year)?.1)
    }

    fn fiscal_month_bounds(
        &self,
        year: i32,
        month: MonthNumber,
    ) -> TimeResult<(NaiveDate, NaiveDate)> {
        let (year, month) = self.calendar_month_of(year, month);
        month_bounds(year, month)
    }
}

impl fmt::Display for FiscalYearAccountingPeriodSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fiscal year ending {}", self.last_month_in_fiscal_year)
    }
}
