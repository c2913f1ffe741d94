//! Quarter vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::{TimeError, TimeResult};
use crate::types::month::MonthNumber;

/// A quarter of a calendar, fiscal or generic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuarterNumber {
    /// First quarter.
    Q1 = 1,
    /// Second quarter.
    Q2 = 2,
    /// Third quarter.
    Q3 = 3,
    /// Fourth quarter.
    Q4 = 4,
}

impl QuarterNumber {
    /// Every quarter in order.
    pub const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Returns the 1-based quarter number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Returns the quarter for a 1-based value.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] if `number` is not in `1..=4`.
    pub fn from_number(number: u32) -> TimeResult<Self> {
        match number {
            1..=4 => Ok(Self::ALL[(number - 1) as usize]),
            _ => Err(TimeError::invalid(
                "quarter",
                format!("{number} is not a quarter number (1..=4)"),
            )),
        }
    }

    /// Returns the quarter containing the given month position.
    #[must_use]
    pub const fn containing(month: MonthNumber) -> Self {
        Self::ALL[((month.number() - 1) / 3) as usize]
    }

    /// Returns the first month position of this quarter (1, 4, 7 or 10).
    #[must_use]
    pub const fn first_month(self) -> MonthNumber {
        MonthNumber::ALL[((self.number() - 1) * 3) as usize]
    }

    /// Returns the last month position of this quarter (3, 6, 9 or 12).
    #[must_use]
    pub const fn last_month(self) -> MonthNumber {
        MonthNumber::ALL[((self.number() - 1) * 3 + 2) as usize]
    }
}

impl TryFrom<u32> for QuarterNumber {
    type Error = TimeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl std::fmt::Display for QuarterNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_from_number() {
        assert_eq!(QuarterNumber::from_number(1).unwrap(), QuarterNumber::Q1);
        assert_eq!(QuarterNumber::from_number(4).unwrap(), QuarterNumber::Q4);
        assert!(matches!(
            QuarterNumber::from_number(0),
            Err(TimeError::ArgumentInvalid { name: "quarter", .. })
        ));
        assert!(QuarterNumber::try_from(5).is_err());
    }

    #[test]
    fn test_quarter_month_span() {
        assert_eq!(QuarterNumber::Q1.first_month(), MonthNumber::One);
        assert_eq!(QuarterNumber::Q1.last_month(), MonthNumber::Three);
        assert_eq!(QuarterNumber::Q4.first_month(), MonthNumber::Ten);
        assert_eq!(QuarterNumber::Q4.last_month(), MonthNumber::Twelve);
    }

    #[test]
    fn test_quarter_containing_month() {
        for month in MonthNumber::ALL {
            let quarter = QuarterNumber::containing(month);
            assert!(quarter.first_month() <= month && month <= quarter.last_month());
        }
    }

    #[test]
    fn test_quarter_display() {
        assert_eq!(QuarterNumber::Q3.to_string(), "Q3");
    }
}
