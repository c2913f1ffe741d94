//! Stepping bounded units forwards and backwards.

use chrono::Duration;
use ledgertime_shared::types::{MonthNumber, MonthOfYear, QuarterNumber};
use ledgertime_shared::{TimeError, TimeResult};

use super::{
    CalendarDay, CalendarMonth, CalendarQuarter, CalendarYear, FiscalMonth, FiscalQuarter,
    FiscalYear, GenericMonth, GenericQuarter, GenericYear, TimeUnit, validate_year,
};

/// A concrete unit with bounds, which can be stepped by whole units.
pub trait BoundedTimeUnit: TimeUnit + Ord {
    /// Returns the unit `count` steps after this one (before it when negative).
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentOutOfRange`] if the result leaves years `1..=9999`.
    fn plus(&self, count: i32) -> TimeResult<Self>;
}

/// Moves a (year, 1-based position) pair by `count` positions in a year of `per_year` positions.
fn shift(year: i32, position: u32, per_year: u32, count: i32) -> TimeResult<(i32, u32)> {
    let per_year = i64::from(per_year);
    let index = i64::from(year) * per_year + i64::from(position) - 1 + i64::from(count);
    let shifted_year = i32::try_from(index.div_euclid(per_year))
        .map_err(|_| TimeError::out_of_range("count", format!("{count} steps overflow")))?;
    let shifted_position = u32::try_from(index.rem_euclid(per_year) + 1)
        .map_err(|_| TimeError::out_of_range("count", format!("{count} steps overflow")))?;
    Ok((validate_year(shifted_year)?, shifted_position))
}

impl BoundedTimeUnit for CalendarDay {
    fn plus(&self, count: i32) -> TimeResult<Self> {
        self.to_naive_date()
            .checked_add_signed(Duration::days(i64::from(count)))
            .ok_or_else(|| TimeError::out_of_range("count", format!("{count} days overflow")))
            .and_then(Self::try_from)
    }
}

impl BoundedTimeUnit for CalendarMonth {
    fn plus(&self, count: i32) -> TimeResult<Self> {
        let (year, month) = shift(self.year(), self.month().number(), 12, count)?;
        Self::new(year, MonthOfYear::from_number(month)?)
    }
}

impl BoundedTimeUnit for CalendarQuarter {
    fn plus(&self, count: i32) -> TimeResult<Self> {
        let (year, quarter) = shift(self.year(), self.quarter().number(), 4, count)?;
        Self::new(year, QuarterNumber::from_number(quarter)?)
    }
}

impl BoundedTimeUnit for CalendarYear {
    fn plus(&self, count: i32) -> TimeResult<Self> {
        let (year, _) = shift(self.year(), 1, 1, count)?;
        Self::new(year)
    }
}

macro_rules! numbered_unit_arithmetic {
    ($month:ident, $quarter:ident, $year:ident) => {
        impl BoundedTimeUnit for $month {
            fn plus(&self, count: i32) -> TimeResult<Self> {
                let (year, month) = shift(self.year(), self.month().number(), 12, count)?;
                Self::new(year, MonthNumber::from_number(month)?)
            }
        }

        impl BoundedTimeUnit for $quarter {
            fn plus(&self, count: i32) -> TimeResult<Self> {
                let (year, quarter) = shift(self.year(), self.quarter().number(), 4, count)?;
                Self::new(year, QuarterNumber::from_number(quarter)?)
            }
        }

        impl BoundedTimeUnit for $year {
            fn plus(&self, count: i32) -> TimeResult<Self> {
                let (year, _) = shift(self.year(), 1, 1, count)?;
                Self::new(year)
            }
        }
    };
}

numbered_unit_arithmetic!(FiscalMonth, FiscalQuarter, FiscalYear);
numbered_unit_arithmetic!(GenericMonth, GenericQuarter, GenericYear);
