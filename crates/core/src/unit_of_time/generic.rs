//! Units-of-time whose granularity is known but whose calendar is deliberately unspecified.

use std::fmt;

use ledgertime_shared::TimeResult;
use ledgertime_shared::types::{MonthNumber, QuarterNumber};

use super::validate_year;

/// A month of a generic year, e.g. `1st month of 2017`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenericMonth {
    year: i32,
    month: MonthNumber,
}

impl GenericMonth {
    /// Creates a generic month.
    ///
    /// # Errors
    ///
    /// Returns [`ledgertime_shared::TimeError::ArgumentOutOfRange`] if `year` is outside
    /// `1..=9999`.
    pub fn new(year: i32, month: MonthNumber) -> TimeResult<Self> {
        Ok(Self {
            year: validate_year(year)?,
            month,
        })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the position of the month within the year.
    #[must_use]
    pub const fn month(&self) -> MonthNumber {
        self.month
    }
}

impl fmt::Display for GenericMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} month of {:04}", self.month.ordinal(), self.year)
    }
}

/// A quarter of a generic year, e.g. `1Q2017`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenericQuarter {
    year: i32,
    quarter: QuarterNumber,
}

impl GenericQuarter {
    /// Creates a generic quarter.
    ///
    /// # Errors
    ///
    /// Returns [`ledgertime_shared::TimeError::ArgumentOutOfRange`] if `year` is outside
    /// `1..=9999`.
    pub fn new(year: i32, quarter: QuarterNumber) -> TimeResult<Self> {
        Ok(Self {
            year: validate_year(year)?,
            quarter,
        })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the quarter.
    #[must_use]
    pub const fn quarter(&self) -> QuarterNumber {
        self.quarter
    }
}

impl fmt::Display for GenericQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{:04}", self.quarter.number(), self.year)
    }
}

/// A generic year, e.g. `2017`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenericYear {
    year: i32,
}

impl GenericYear {
    /// Creates a generic year.
    ///
    /// # Errors
    ///
    /// Returns [`ledgertime_shared::TimeError::ArgumentOutOfRange`] if `year` is outside
    /// `1..=9999`.
    pub fn new(year: i32) -> TimeResult<Self> {
        Ok(Self {
            year: validate_year(year)?,
        })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for GenericYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)
    }
}

/// All of generic time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenericUnbounded;

impl GenericUnbounded {
    /// Creates the unbounded generic unit.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl fmt::Display for GenericUnbounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unbounded generic unit-of-time")
    }
}

unit_of_time_family! {
    /// Any generic unit-of-time.
    GenericUnitOfTime: Generic => Generic {
        Month(GenericMonth) => Month,
        Quarter(GenericQuarter) => Quarter,
        Year(GenericYear) => Year,
        Unbounded(GenericUnbounded) => Unbounded,
    }
}
