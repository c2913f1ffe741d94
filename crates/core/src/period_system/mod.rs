//! Accounting period systems: policies mapping calendar days onto fiscal periods.
//!
//! Every system names a fiscal year after the calendar year its anchor month falls in,
//! so `FY2018` of a system ending in November runs from 2017-12-01 to 2018-11-30.
//!
//! # Systems
//!
//! - [`CalendarYearAccountingPeriodSystem`] - fiscal year equals calendar year
//! - [`FiscalYearAccountingPeriodSystem`] - fiscal year ends with a given month
//! - [`FiftyTwoFiftyThreeWeekAccountingPeriodSystem`] - fiscal year ends on a weekday
//!   near the end of a given month

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use ledgertime_shared::PeriodSystemConfig;
use ledgertime_shared::types::{MonthNumber, MonthOfYear, UnitOfTimeGranularity};
use ledgertime_shared::{TimeError, TimeResult};

use crate::reporting::ReportingPeriod;
use crate::unit_of_time::{
    CalendarDay, CalendarUnbounded, CalendarUnitOfTime, FiscalMonth, FiscalQuarter,
    FiscalUnbounded, FiscalUnitOfTime, FiscalYear,
};

pub mod calendar_year;
pub mod fifty_two_fifty_three_week;
pub mod fiscal_year;

#[cfg(test)]
mod props;

pub use calendar_year::CalendarYearAccountingPeriodSystem;
pub use fifty_two_fifty_three_week::FiftyTwoFiftyThreeWeekAccountingPeriodSystem;
pub use fiscal_year::FiscalYearAccountingPeriodSystem;

/// Maps calendar days onto fiscal periods and back.
///
/// Implementors supply the year-end and the bounds of each fiscal month; everything
/// else follows from those two.
pub trait FiscalCalendar {
    /// Last calendar day of fiscal year `year`.
    ///
    /// Accepts any year `chrono` can represent, so neighbours of years `1` and `9999`
    /// can be computed.
    fn fiscal_year_end(&self, year: i32) -> TimeResult<NaiveDate>;

    /// First and last calendar day of fiscal month `month` of fiscal year `year`.
    fn fiscal_month_bounds(
        &self,
        year: i32,
        month: MonthNumber,
    ) -> TimeResult<(NaiveDate, NaiveDate)>;

    /// First calendar day of fiscal year `year`.
    fn fiscal_year_start(&self, year: i32) -> TimeResult<NaiveDate> {
        let previous = year
            .checked_sub(1)
            .ok_or_else(|| TimeError::out_of_range("year", format!("{year} has no predecessor")))?;
        shift_days(self.fiscal_year_end(previous)?, 1)
    }

    /// Fiscal year containing `day`.
    fn fiscal_year_for(&self, day: CalendarDay) -> TimeResult<FiscalYear> {
        let date = day.to_naive_date();
        let mut year = date.year();
        while date > self.fiscal_year_end(year)? {
            year += 1;
        }
        while date <= self.fiscal_year_end(year - 1)? {
            year -= 1;
        }
        FiscalYear::new(year)
    }

    /// Fiscal month containing `day`.
    fn fiscal_month_for(&self, day: CalendarDay) -> TimeResult<FiscalMonth> {
        let year = self.fiscal_year_for(day)?.year();
        let date = day.to_naive_date();
        for month in MonthNumber::ALL {
            let (_, last) = self.fiscal_month_bounds(year, month)?;
            if date <= last {
                return FiscalMonth::new(year, month);
            }
        }
        Err(TimeError::InvalidOperation(format!(
            "{day} lies in FY{year:04} but after its twelfth month"
        )))
    }

    /// Fiscal quarter containing `day`.
    fn fiscal_quarter_for(&self, day: CalendarDay) -> TimeResult<FiscalQuarter> {
        Ok(self.fiscal_month_for(day)?.to_fiscal_quarter())
    }

    /// Fiscal unit of the requested granularity containing `day`.
    ///
    /// There is no fiscal day, so [`UnitOfTimeGranularity::Day`] is rejected with
    /// [`TimeError::ArgumentInvalid`].
    fn fiscal_unit_for(
        &self,
        day: CalendarDay,
        granularity: UnitOfTimeGranularity,
    ) -> TimeResult<FiscalUnitOfTime> {
        Ok(match granularity {
            UnitOfTimeGranularity::Day => {
                return Err(TimeError::invalid(
                    "granularity",
                    "fiscal units-of-time have no day granularity",
                ));
            }
            UnitOfTimeGranularity::Month => self.fiscal_month_for(day)?.into(),
            UnitOfTimeGranularity::Quarter => self.fiscal_quarter_for(day)?.into(),
            UnitOfTimeGranularity::Year => self.fiscal_year_for(day)?.into(),
            UnitOfTimeGranularity::Unbounded => FiscalUnbounded.into(),
        })
    }

    /// Calendar days spanned by a fiscal year.
    fn reporting_period_for_fiscal_year(
        &self,
        year: FiscalYear,
    ) -> TimeResult<ReportingPeriod<CalendarDay>> {
        day_period(
            self.fiscal_year_start(year.year())?,
            self.fiscal_year_end(year.year())?,
        )
    }

    /// Calendar days spanned by a fiscal quarter.
    fn reporting_period_for_fiscal_quarter(
        &self,
        quarter: FiscalQuarter,
    ) -> TimeResult<ReportingPeriod<CalendarDay>> {
        let (start, _) =
            self.fiscal_month_bounds(quarter.year(), quarter.quarter().first_month())?;
        let (_, end) =
            self.fiscal_month_bounds(quarter.year(), quarter.quarter().last_month())?;
        day_period(start, end)
    }

    /// Calendar days spanned by a fiscal month.
    fn reporting_period_for_fiscal_month(
        &self,
        month: FiscalMonth,
    ) -> TimeResult<ReportingPeriod<CalendarDay>> {
        let (start, end) = self.fiscal_month_bounds(month.year(), month.month())?;
        day_period(start, end)
    }

    /// Calendar span of any fiscal unit; unbounded maps to unbounded.
    fn calendar_period_for(
        &self,
        unit: &FiscalUnitOfTime,
    ) -> TimeResult<ReportingPeriod<CalendarUnitOfTime>> {
        let days = match *unit {
            FiscalUnitOfTime::Month(month) => self.reporting_period_for_fiscal_month(month)?,
            FiscalUnitOfTime::Quarter(quarter) => {
                self.reporting_period_for_fiscal_quarter(quarter)?
            }
            FiscalUnitOfTime::Year(year) => self.reporting_period_for_fiscal_year(year)?,
            FiscalUnitOfTime::Unbounded(_) => {
                let unbounded = CalendarUnitOfTime::Unbounded(CalendarUnbounded);
                return ReportingPeriod::new(unbounded, unbounded);
            }
        };
        ReportingPeriod::new(days.start().into(), days.end().into())
    }
}

/// Builds a period of calendar days, failing if either end leaves years `1..=9999`.
fn day_period(start: NaiveDate, end: NaiveDate) -> TimeResult<ReportingPeriod<CalendarDay>> {
    ReportingPeriod::new(CalendarDay::try_from(start)?, CalendarDay::try_from(end)?)
}

/// First and last day of a calendar month, for any year `chrono` can represent.
fn month_bounds(year: i32, month: MonthOfYear) -> TimeResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month.number(), 1);
    let last = NaiveDate::from_ymd_opt(year, month.number(), month.days_in(year));
    first.zip(last).ok_or_else(|| {
        TimeError::out_of_range("year", format!("{year} cannot be represented as a date"))
    })
}

fn shift_days(date: NaiveDate, days: i64) -> TimeResult<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| TimeError::out_of_range("date", format!("{date} shifted by {days} days")))
}

/// The closed set of accounting period systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountingPeriodSystem {
    /// Fiscal year equals calendar year.
    CalendarYear(CalendarYearAccountingPeriodSystem),
    /// Fiscal year ends with a given month.
    FiscalYear(FiscalYearAccountingPeriodSystem),
    /// Fiscal year ends on a weekday near the end of a given month.
    FiftyTwoFiftyThreeWeek(FiftyTwoFiftyThreeWeekAccountingPeriodSystem),
}

impl FiscalCalendar for AccountingPeriodSystem {
    fn fiscal_year_end(&self, year: i32) -> TimeResult<NaiveDate> {
        match self {
            Self::CalendarYear(system) => system.fiscal_year_end(year),
            Self::FiscalYear(system) => system.fiscal_year_end(year),
            Self::FiftyTwoFiftyThreeWeek(system) => system.fiscal_year_end(year),
        }
    }

    fn fiscal_month_bounds(
        &self,
        year: i32,
        month: MonthNumber,
    ) -> TimeResult<(NaiveDate, NaiveDate)> {
        match self {
            Self::CalendarYear(system) => system.fiscal_month_bounds(year, month),
            Self::FiscalYear(system) => system.fiscal_month_bounds(year, month),
            Self::FiftyTwoFiftyThreeWeek(system) => system.fiscal_month_bounds(year, month),
        }
    }
}

impl fmt::Display for AccountingPeriodSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CalendarYear(system) => fmt::Display::fmt(system, f),
            Self::FiscalYear(system) => fmt::Display::fmt(system, f),
            Self::FiftyTwoFiftyThreeWeek(system) => fmt::Display::fmt(system, f),
        }
    }
}

impl Default for AccountingPeriodSystem {
    fn default() -> Self {
        Self::CalendarYear(CalendarYearAccountingPeriodSystem)
    }
}

impl From<CalendarYearAccountingPeriodSystem> for AccountingPeriodSystem {
    fn from(system: CalendarYearAccountingPeriodSystem) -> Self {
        Self::CalendarYear(system)
    }
}

impl From<FiscalYearAccountingPeriodSystem> for AccountingPeriodSystem {
    fn from(system: FiscalYearAccountingPeriodSystem) -> Self {
        Self::FiscalYear(system)
    }
}

impl From<FiftyTwoFiftyThreeWeekAccountingPeriodSystem> for AccountingPeriodSystem {
    fn from(system: FiftyTwoFiftyThreeWeekAccountingPeriodSystem) -> Self {
        Self::FiftyTwoFiftyThreeWeek(system)
    }
}

impl From<PeriodSystemConfig> for AccountingPeriodSystem {
    fn from(config: PeriodSystemConfig) -> Self {
        match config {
            PeriodSystemConfig::CalendarYear => CalendarYearAccountingPeriodSystem::new().into(),
            PeriodSystemConfig::FiscalYear {
                last_month_in_fiscal_year,
            } => FiscalYearAccountingPeriodSystem::new(last_month_in_fiscal_year).into(),
            PeriodSystemConfig::FiftyTwoFiftyThreeWeek {
                anchor_month,
                methodology,
                last_day_of_week_in_accounting_year,
            } => FiftyTwoFiftyThreeWeekAccountingPeriodSystem::new(
                anchor_month,
                methodology,
                last_day_of_week_in_accounting_year,
            )
            .into(),
        }
    }
}
