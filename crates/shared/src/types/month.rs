//! Month vocabulary: calendar months and fiscal/generic month numbers.

use serde::{Deserialize, Serialize};

use crate::error::{TimeError, TimeResult};

/// A month of the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthOfYear {
    /// January
    January = 1,
    /// February
    February = 2,
    /// March
    March = 3,
    /// April
    April = 4,
    /// May
    May = 5,
    /// June
    June = 6,
    /// July
    July = 7,
    /// August
    August = 8,
    /// September
    September = 9,
    /// October
    October = 10,
    /// November
    November = 11,
    /// December
    December = 12,
}

impl MonthOfYear {
    /// Every month, January first.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Returns the month number (1 = January).
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Returns the month for a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] if `number` is not in `1..=12`.
    pub fn from_number(number: u32) -> TimeResult<Self> {
        match number {
            1..=12 => Ok(Self::ALL[(number - 1) as usize]),
            _ => Err(TimeError::invalid(
                "month",
                format!("{number} is not a month of the year (1..=12)"),
            )),
        }
    }

    /// Returns the month for a 0-based index, wrapping modulo 12.
    #[must_use]
    pub const fn from_index_wrapping(index: u32) -> Self {
        Self::ALL[(index % 12) as usize]
    }

    /// Returns the English month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Returns the number of days in this month for `year` under Gregorian leap-year rules.
    #[must_use]
    pub const fn days_in(self, year: i32) -> u32 {
        match self {
            Self::February => {
                if is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            Self::April | Self::June | Self::September | Self::November => 30,
            _ => 31,
        }
    }
}

/// Gregorian leap-year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl TryFrom<u32> for MonthOfYear {
    type Error = TimeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl std::fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MonthOfYear {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number);
        }
        let lower = trimmed.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|month| {
                let name = month.name().to_ascii_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| TimeError::invalid("month", format!("unknown month: {s}")))
    }
}

impl From<MonthOfYear> for chrono::Month {
    fn from(month: MonthOfYear) -> Self {
        match month {
            MonthOfYear::January => Self::January,
            MonthOfYear::February => Self::February,
            MonthOfYear::March => Self::March,
            MonthOfYear::April => Self::April,
            MonthOfYear::May => Self::May,
            MonthOfYear::June => Self::June,
            MonthOfYear::July => Self::July,
            MonthOfYear::August => Self::August,
            MonthOfYear::September => Self::September,
            MonthOfYear::October => Self::October,
            MonthOfYear::November => Self::November,
            MonthOfYear::December => Self::December,
        }
    }
}

impl From<chrono::Month> for MonthOfYear {
    fn from(month: chrono::Month) -> Self {
        Self::from_index_wrapping(month.number_from_month() - 1)
    }
}

/// The position of a month within a fiscal or generic year (1st..12th).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MonthNumber {
    /// 1st month
    One = 1,
    /// 2nd month
    Two = 2,
    /// 3rd month
    Three = 3,
    /// 4th month
    Four = 4,
    /// 5th month
    Five = 5,
    /// 6th month
    Six = 6,
    /// 7th month
    Seven = 7,
    /// 8th month
    Eight = 8,
    /// 9th month
    Nine = 9,
    /// 10th month
    Ten = 10,
    /// 11th month
    Eleven = 11,
    /// 12th month
    Twelve = 12,
}

impl MonthNumber {
    /// Every month number in order.
    pub const ALL: [Self; 12] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Eleven,
        Self::Twelve,
    ];

    /// Returns the 1-based number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Returns the month number for a 1-based value.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] if `number` is not in `1..=12`.
    pub fn from_number(number: u32) -> TimeResult<Self> {
        match number {
            1..=12 => Ok(Self::ALL[(number - 1) as usize]),
            _ => Err(TimeError::invalid(
                "month number",
                format!("{number} is not a month number (1..=12)"),
            )),
        }
    }

    /// Returns the English ordinal, e.g. `"1st"`, `"12th"`.
    #[must_use]
    pub const fn ordinal(self) -> &'static str {
        match self {
            Self::One => "1st",
            Self::Two => "2nd",
            Self::Three => "3rd",
            Self::Four => "4th",
            Self::Five => "5th",
            Self::Six => "6th",
            Self::Seven => "7th",
            Self::Eight => "8th",
            Self::Nine => "9th",
            Self::Ten => "10th",
            Self::Eleven => "11th",
            Self::Twelve => "12th",
        }
    }
}

impl TryFrom<u32> for MonthNumber {
    type Error = TimeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl std::fmt::Display for MonthNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ordinal())
    }
}
