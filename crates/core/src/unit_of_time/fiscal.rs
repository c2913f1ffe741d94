//! Units-of-time tied to an organization's fiscal calendar.
//!
//! Fiscal units carry no calendar dates of their own; an accounting period system
//! decides which calendar days they span.

use std::fmt;

use ledgertime_shared::TimeResult;
use ledgertime_shared::types::{MonthNumber, QuarterNumber};

use super::validate_year;

/// A month of a fiscal year, e.g. `1st month of FY2017`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalMonth {
    year: i32,
    month: MonthNumber,
}

impl FiscalMonth {
    /// Creates a fiscal month.
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

    /// Returns the fiscal year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the position of the month within the fiscal year.
    #[must_use]
    pub const fn month(&self) -> MonthNumber {
        self.month
    }

    /// Returns the fiscal quarter containing this month.
    #[must_use]
    pub const fn to_fiscal_quarter(self) -> FiscalQuarter {
        FiscalQuarter {
            year: self.year,
            quarter: QuarterNumber::containing(self.month),
        }
    }

    /// Returns the fiscal year containing this month.
    #[must_use]
    pub const fn to_fiscal_year(self) -> FiscalYear {
        FiscalYear { year: self.year }
    }
}

impl fmt::Display for FiscalMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} month of FY{:04}", self.month.ordinal(), self.year)
    }
}

/// A quarter of a fiscal year, e.g. `1Q FY2017`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalQuarter {
    year: i32,
    quarter: QuarterNumber,
}

impl FiscalQuarter {
    /// Creates a fiscal quarter.
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

    /// Returns the fiscal year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the quarter.
    #[must_use]
    pub const fn quarter(&self) -> QuarterNumber {
        self.quarter
    }

    /// Returns the fiscal year containing this quarter.
    #[must_use]
    pub const fn to_fiscal_year(self) -> FiscalYear {
        FiscalYear { year: self.year }
    }
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q FY{:04}", self.quarter.number(), self.year)
    }
}

/// A fiscal year, e.g. `FY2017`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalYear {
    year: i32,
}

impl FiscalYear {
    /// Creates a fiscal year.
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

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FY{:04}", self.year)
    }
}

/// All of fiscal time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalUnbounded;

impl FiscalUnbounded {
    /// Creates the unbounded fiscal unit.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl fmt::Display for FiscalUnbounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unbounded fiscal unit-of-time")
    }
}

unit_of_time_family! {
    /// Any fiscal unit-of-time.
    FiscalUnitOfTime: Fiscal => Fiscal {
        Month(FiscalMonth) => Month,
        Quarter(FiscalQuarter) => Quarter,
        Year(FiscalYear) => Year,
        Unbounded(FiscalUnbounded) => Unbounded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_of_time::{CalendarYear, TimeUnit, UnitOfTime};
    use ledgertime_shared::TimeError;
    use std::cmp::Ordering;

    #[test]
    fn test_display_formats() {
        assert_eq!(
            FiscalMonth::new(2017, MonthNumber::One).unwrap().to_string(),
            "1st month of FY2017"
        );
        assert_eq!(
            FiscalQuarter::new(2017, QuarterNumber::Q1).unwrap().to_string(),
            "1Q FY2017"
        );
        assert_eq!(FiscalYear::new(2017).unwrap().to_string(), "FY2017");
        assert_eq!(FiscalYear::new(12).unwrap().to_string(), "FY0012");
        assert_eq!(FiscalUnbounded.to_string(), "unbounded fiscal unit-of-time");
    }

    #[test]
    fn test_year_validation() {
        assert!(FiscalMonth::new(0, MonthNumber::One).is_err());
        assert!(FiscalQuarter::new(10_000, QuarterNumber::Q1).is_err());
        assert!(matches!(
            FiscalYear::new(-5),
            Err(TimeError::ArgumentOutOfRange { name: "year", .. })
        ));
    }

    #[test]
    fn test_month_to_quarter() {
        let month = FiscalMonth::new(2018, MonthNumber::Seven).unwrap();
        assert_eq!(
            month.to_fiscal_quarter(),
            FiscalQuarter::new(2018, QuarterNumber::Q3).unwrap()
        );
        assert_eq!(month.to_fiscal_year(), FiscalYear::new(2018).unwrap());
    }

    #[test]
    fn test_ordering() {
        let a = FiscalMonth::new(2017, MonthNumber::Twelve).unwrap();
        let b = FiscalMonth::new(2018, MonthNumber::One).unwrap();
        assert!(a < b);
        assert_eq!(a.compare_to(None).unwrap(), Ordering::Greater);
        assert_eq!(a.compare_to(Some(&b)).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_erased_comparison_across_families_is_rejected() {
        let fiscal = FiscalYear::new(2017).unwrap();
        let calendar: UnitOfTime = CalendarYear::new(2017).unwrap().into();
        assert!(matches!(
            fiscal.compare_to_unit(Some(&calendar)),
            Err(TimeError::ArgumentInvalid { .. })
        ));
        assert!(matches!(
            fiscal.compare_to_unit(None),
            Err(TimeError::ArgumentInvalid { .. })
        ));
        let same: UnitOfTime = FiscalYear::new(2016).unwrap().into();
        assert_eq!(fiscal.compare_to_unit(Some(&same)).unwrap(), Ordering::Greater);
    }
}
