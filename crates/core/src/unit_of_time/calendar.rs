//! Units-of-time tied to the Gregorian calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use ledgertime_shared::types::{MonthOfYear, QuarterNumber};
use ledgertime_shared::{TimeError, TimeResult};

use super::validate_year;

/// A single calendar date, e.g. `2017-11-30`.
///
/// Backed by a [`NaiveDate`], so ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    date: NaiveDate,
}

impl CalendarDay {
    /// Creates a calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentOutOfRange`] if `year` is outside `1..=9999` or `day` is
    /// not a day of `month` in `year` (February has 29 days only in leap years).
    pub fn new(year: i32, month: MonthOfYear, day: u32) -> TimeResult<Self> {
        validate_year(year)?;
        let days_in_month = month.days_in(year);
        if !(1..=days_in_month).contains(&day) {
            return Err(TimeError::out_of_range(
                "day",
                format!("{day} is not a day of {month} {year} (1..={days_in_month})"),
            ));
        }
        NaiveDate::from_ymd_opt(year, month.number(), day)
            .map(|date| Self { date })
            .ok_or_else(|| {
                TimeError::out_of_range("day", format!("{year}-{month}-{day} is not a date"))
            })
    }

    /// Returns the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the month.
    #[must_use]
    pub fn month(&self) -> MonthOfYear {
        MonthOfYear::from_index_wrapping(self.date.month0())
    }

    /// Returns the day of the month (1..=31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns the underlying date.
    #[must_use]
    pub const fn to_naive_date(self) -> NaiveDate {
        self.date
    }

    /// Returns the calendar month containing this day.
    #[must_use]
    pub fn to_calendar_month(self) -> CalendarMonth {
        CalendarMonth {
            year: self.year(),
            month: self.month(),
        }
    }

    /// Returns the calendar quarter containing this day.
    #[must_use]
    pub fn to_calendar_quarter(self) -> CalendarQuarter {
        self.to_calendar_month().to_calendar_quarter()
    }

    /// Returns the calendar year containing this day.
    #[must_use]
    pub fn to_calendar_year(self) -> CalendarYear {
        CalendarYear { year: self.year() }
    }
}

impl From<CalendarDay> for NaiveDate {
    fn from(day: CalendarDay) -> Self {
        day.date
    }
}

impl TryFrom<NaiveDate> for CalendarDay {
    type Error = TimeError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        validate_year(date.year())?;
        Ok(Self { date })
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month().number(),
            self.day()
        )
    }
}

/// Parses `YYYY-MM-DD`, falling back to the unit-of-time codec forms.
impl FromStr for CalendarDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
            Ok(date) => Self::try_from(date).map_err(|e| TimeError::parse(s, e.to_string())),
            Err(_) => crate::codec::deserialize(s),
        }
    }
}

/// A month of a specific calendar year, e.g. `2017-11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    year: i32,
    month: MonthOfYear,
}

impl CalendarMonth {
    /// Creates a calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentOutOfRange`] if `year` is outside `1..=9999`.
    pub fn new(year: i32, month: MonthOfYear) -> TimeResult<Self> {
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

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> MonthOfYear {
        self.month
    }

    /// Returns the calendar quarter containing this month.
    #[must_use]
    pub fn to_calendar_quarter(self) -> CalendarQuarter {
        CalendarQuarter {
            year: self.year,
            quarter: QuarterNumber::ALL[((self.month.number() - 1) / 3) as usize],
        }
    }

    /// Returns the first day of the month.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying date library cannot represent the date.
    pub fn first_day(&self) -> TimeResult<CalendarDay> {
        CalendarDay::new(self.year, self.month, 1)
    }

    /// Returns the last day of the month.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying date library cannot represent the date.
    pub fn last_day(&self) -> TimeResult<CalendarDay> {
        CalendarDay::new(self.year, self.month, self.month.days_in(self.year))
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}

/// A quarter of a specific calendar year, e.g. `4Q2017`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarQuarter {
    year: i32,
    quarter: QuarterNumber,
}

impl CalendarQuarter {
    /// Creates a calendar quarter.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentOutOfRange`] if `year` is outside `1..=9999`.
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

    /// Returns the first month of the quarter.
    #[must_use]
    pub fn first_month(&self) -> CalendarMonth {
        CalendarMonth {
            year: self.year,
            month: MonthOfYear::from_index_wrapping(self.quarter.first_month().number() - 1),
        }
    }

    /// Returns the last month of the quarter.
    #[must_use]
    pub fn last_month(&self) -> CalendarMonth {
        CalendarMonth {
            year: self.year,
            month: MonthOfYear::from_index_wrapping(self.quarter.last_month().number() - 1),
        }
    }

    /// Returns the first day of the quarter.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying date library cannot represent the date.
    pub fn first_day(&self) -> TimeResult<CalendarDay> {
        self.first_month().first_day()
    }

    /// Returns the last day of the quarter.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying date library cannot represent the date.
    pub fn last_day(&self) -> TimeResult<CalendarDay> {
        self.last_month().last_day()
    }
}

impl fmt::Display for CalendarQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{:04}", self.quarter.number(), self.year)
    }
}

/// A calendar year, e.g. `CY2017`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarYear {
    year: i32,
}

impl CalendarYear {
    /// Creates a calendar year.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentOutOfRange`] if `year` is outside `1..=9999`.
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

    /// Returns January 1st.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying date library cannot represent the date.
    pub fn first_day(&self) -> TimeResult<CalendarDay> {
        CalendarDay::new(self.year, MonthOfYear::January, 1)
    }

    /// Returns December 31st.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying date library cannot represent the date.
    pub fn last_day(&self) -> TimeResult<CalendarDay> {
        CalendarDay::new(self.year, MonthOfYear::December, 31)
    }
}

impl fmt::Display for CalendarYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CY{:04}", self.year)
    }
}

/// All of calendar time. Every value is equal to every other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarUnbounded;

impl CalendarUnbounded {
    /// Creates the unbounded calendar unit.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl fmt::Display for CalendarUnbounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unbounded calendar unit-of-time")
    }
}

unit_of_time_family! {
    /// Any calendar unit-of-time.
    CalendarUnitOfTime: Calendar => Calendar {
        Day(CalendarDay) => Day,
        Month(CalendarMonth) => Month,
        Quarter(CalendarQuarter) => Quarter,
        Year(CalendarYear) => Year,
        Unbounded(CalendarUnbounded) => Unbounded,
    }
}
