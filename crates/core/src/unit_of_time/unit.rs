//! The erased root of the unit-of-time hierarchy.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use ledgertime_shared::types::{UnitOfTimeGranularity, UnitOfTimeKind};
use ledgertime_shared::{TimeError, TimeResult};

use super::{
    CalendarUnitOfTime, FiscalUnitOfTime, GenericUnitOfTime, TimeUnit, mismatched, sealed,
};

/// Any unit-of-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitOfTime {
    /// A calendar unit.
    Calendar(CalendarUnitOfTime),
    /// A fiscal unit.
    Fiscal(FiscalUnitOfTime),
    /// A generic unit.
    Generic(GenericUnitOfTime),
}

impl UnitOfTime {
    /// Copies this unit out as the concrete (or family) type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidOperation`] if this unit is not a `T`.
    pub fn clone_as<T: TimeUnit>(&self) -> TimeResult<T> {
        T::from_unit_of_time(*self)
    }
}

impl sealed::Sealed for UnitOfTime {}

impl TimeUnit for UnitOfTime {
    fn kind(&self) -> UnitOfTimeKind {
        match self {
            Self::Calendar(_) => UnitOfTimeKind::Calendar,
            Self::Fiscal(_) => UnitOfTimeKind::Fiscal,
            Self::Generic(_) => UnitOfTimeKind::Generic,
        }
    }

    fn granularity(&self) -> UnitOfTimeGranularity {
        match self {
            Self::Calendar(unit) => unit.granularity(),
            Self::Fiscal(unit) => unit.granularity(),
            Self::Generic(unit) => unit.granularity(),
        }
    }

    fn try_compare(&self, other: &Self) -> TimeResult<Ordering> {
        match (self, other) {
            (Self::Calendar(a), Self::Calendar(b)) => a.try_compare(b),
            (Self::Fiscal(a), Self::Fiscal(b)) => a.try_compare(b),
            (Self::Generic(a), Self::Generic(b)) => a.try_compare(b),
            _ => Err(mismatched(self, other)),
        }
    }

    fn to_unit_of_time(&self) -> UnitOfTime {
        *self
    }

    fn from_unit_of_time(unit: UnitOfTime) -> TimeResult<Self> {
        Ok(unit)
    }
}

impl PartialOrd for UnitOfTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_compare(other).ok()
    }
}

impl fmt::Display for UnitOfTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calendar(unit) => fmt::Display::fmt(unit, f),
            Self::Fiscal(unit) => fmt::Display::fmt(unit, f),
            Self::Generic(unit) => fmt::Display::fmt(unit, f),
        }
    }
}

/// Accepts both the canonical and the sortable encodings.
impl FromStr for UnitOfTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::deserialize(s)
    }
}
