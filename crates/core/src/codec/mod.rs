//! Text encodings for units-of-time.
//!
//! Two encodings exist, both led by a kind and granularity discriminator so the concrete
//! type can be rebuilt without outside knowledge:
//!
//! | unit                 | canonical                     | sortable        |
//! |----------------------|-------------------------------|-----------------|
//! | calendar day         | `calendar.day:2017-11-30`     | `c-2017-11-30`  |
//! | calendar month       | `calendar.month:2017-11`      | `c-2017-11`     |
//! | fiscal quarter       | `fiscal.quarter:2017-4`       | `f-2017-Q4`     |
//! | generic year         | `generic.year:2017`           | `g-2017`        |
//! | any unbounded        | `calendar.unbounded`          | `c-unbounded`   |
//!
//! The sortable form zero-pads every field, so byte order equals chronological order
//! within one concrete type. [`deserialize`] accepts either form.

mod canonical;
mod serde_impl;
mod sortable;

#[cfg(test)]
mod props;

use ledgertime_shared::types::{MonthNumber, MonthOfYear, QuarterNumber, UnitOfTimeKind};
use ledgertime_shared::{TimeError, TimeResult};

use crate::unit_of_time::{
    CalendarDay, CalendarMonth, CalendarQuarter, CalendarUnbounded, CalendarUnitOfTime,
    CalendarYear, FiscalMonth, FiscalQuarter, FiscalUnbounded, FiscalUnitOfTime, FiscalYear,
    GenericMonth, GenericQuarter, GenericUnbounded, GenericUnitOfTime, GenericYear, TimeUnit,
    UnitOfTime,
};

/// The fields of a unit-of-time, without its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fields {
    Day { year: i32, month: u32, day: u32 },
    Month { year: i32, month: u32 },
    Quarter { year: i32, quarter: u32 },
    Year { year: i32 },
    Unbounded,
}

impl Fields {
    fn of(unit: &UnitOfTime) -> Self {
        match *unit {
            UnitOfTime::Calendar(unit) => match unit {
                CalendarUnitOfTime::Day(day) => Self::Day {
                    year: day.year(),
                    month: day.month().number(),
                    day: day.day(),
                },
                CalendarUnitOfTime::Month(month) => Self::Month {
                    year: month.year(),
                    month: month.month().number(),
                },
                CalendarUnitOfTime::Quarter(quarter) => Self::Quarter {
                    year: quarter.year(),
                    quarter: quarter.quarter().number(),
                },
                CalendarUnitOfTime::Year(year) => Self::Year { year: year.year() },
                CalendarUnitOfTime::Unbounded(_) => Self::Unbounded,
            },
            UnitOfTime::Fiscal(unit) => match unit {
                FiscalUnitOfTime::Month(month) => Self::Month {
                    year: month.year(),
                    month: month.month().number(),
                },
                FiscalUnitOfTime::Quarter(quarter) => Self::Quarter {
                    year: quarter.year(),
                    quarter: quarter.quarter().number(),
                },
                FiscalUnitOfTime::Year(year) => Self::Year { year: year.year() },
                FiscalUnitOfTime::Unbounded(_) => Self::Unbounded,
            },
            UnitOfTime::Generic(unit) => match unit {
                GenericUnitOfTime::Month(month) => Self::Month {
                    year: month.year(),
                    month: month.month().number(),
                },
                GenericUnitOfTime::Quarter(quarter) => Self::Quarter {
                    year: quarter.year(),
                    quarter: quarter.quarter().number(),
                },
                GenericUnitOfTime::Year(year) => Self::Year { year: year.year() },
                GenericUnitOfTime::Unbounded(_) => Self::Unbounded,
            },
        }
    }

    /// Rebuilds a unit, validating every field.
    fn build(self, kind: UnitOfTimeKind) -> TimeResult<UnitOfTime> {
        let unit = match (kind, self) {
            (UnitOfTimeKind::Calendar, Self::Day { year, month, day }) => {
                CalendarDay::new(year, MonthOfYear::from_number(month)?, day)?.into()
            }
            (UnitOfTimeKind::Calendar, Self::Month { year, month }) => {
                CalendarMonth::new(year, MonthOfYear::from_number(month)?)?.into()
            }
            (UnitOfTimeKind::Calendar, Self::Quarter { year, quarter }) => {
                CalendarQuarter::new(year, QuarterNumber::from_number(quarter)?)?.into()
            }
            (UnitOfTimeKind::Calendar, Self::Year { year }) => CalendarYear::new(year)?.into(),
            (UnitOfTimeKind::Calendar, Self::Unbounded) => CalendarUnbounded.into(),
            (UnitOfTimeKind::Fiscal, Self::Month { year, month }) => {
                FiscalMonth::new(year, MonthNumber::from_number(month)?)?.into()
            }
            (UnitOfTimeKind::Fiscal, Self::Quarter { year, quarter }) => {
                FiscalQuarter::new(year, QuarterNumber::from_number(quarter)?)?.into()
            }
            (UnitOfTimeKind::Fiscal, Self::Year { year }) => FiscalYear::new(year)?.into(),
            (UnitOfTimeKind::Fiscal, Self::Unbounded) => FiscalUnbounded.into(),
            (UnitOfTimeKind::Generic, Self::Month { year, month }) => {
                GenericMonth::new(year, MonthNumber::from_number(month)?)?.into()
            }
            (UnitOfTimeKind::Generic, Self::Quarter { year, quarter }) => {
                GenericQuarter::new(year, QuarterNumber::from_number(quarter)?)?.into()
            }
            (UnitOfTimeKind::Generic, Self::Year { year }) => GenericYear::new(year)?.into(),
            (UnitOfTimeKind::Generic, Self::Unbounded) => GenericUnbounded.into(),
            (UnitOfTimeKind::Fiscal | UnitOfTimeKind::Generic, Self::Day { .. }) => {
                return Err(TimeError::invalid(
                    "granularity",
                    format!("there is no {kind} day unit-of-time"),
                ));
            }
        };
        Ok(unit)
    }
}

/// Encodes `unit` in the canonical form.
#[must_use]
pub fn serialize_to_string<T: TimeUnit>(unit: &T) -> String {
    canonical::encode(&unit.to_unit_of_time())
}

/// Encodes `unit` in the sortable form.
#[must_use]
pub fn serialize_to_sortable_string<T: TimeUnit>(unit: &T) -> String {
    sortable::encode(&unit.to_unit_of_time())
}

/// Decodes either encoding into `T`, which may be a concrete type, a family, or
/// [`UnitOfTime`].
///
/// # Errors
///
/// Returns [`TimeError::Parse`] if `input` is malformed, holds out-of-range fields, or
/// encodes a unit that is not a `T`.
pub fn deserialize<T: TimeUnit>(input: &str) -> TimeResult<T> {
    let unit = if sortable::recognizes(input) {
        sortable::decode(input)?
    } else {
        canonical::decode(input)?
    };
    T::from_unit_of_time(unit).map_err(|err| TimeError::parse(input, err.to_string()))
}

/// Parses a field of ASCII digits, optionally of an exact width.
fn digits<N: std::str::FromStr>(input: &str, field: &str, width: Option<usize>) -> TimeResult<N> {
    let well_formed = !field.is_empty()
        && field.bytes().all(|b| b.is_ascii_digit())
        && width.is_none_or(|width| field.len() == width);
    if !well_formed {
        return Err(TimeError::parse(
            input,
            match width {
                Some(width) => format!("'{field}' is not a {width}-digit number"),
                None => format!("'{field}' is not a number"),
            },
        ));
    }
    field
        .parse()
        .map_err(|_| TimeError::parse(input, format!("'{field}' is too large")))
}

/// Rebuilds a unit, reporting any validation failure as a parse failure of `input`.
fn rebuild(input: &str, kind: UnitOfTimeKind, fields: Fields) -> TimeResult<UnitOfTime> {
    fields
        .build(kind)
        .map_err(|err| TimeError::parse(input, err.to_string()))
}
