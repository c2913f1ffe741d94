//! A closed range `[start, end]` over two units-of-time of one concrete type.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use ledgertime_shared::types::{UnitOfTimeGranularity, UnitOfTimeKind};
use ledgertime_shared::{TimeError, TimeResult};

use crate::unit_of_time::{BoundedTimeUnit, TimeUnit, UnitOfTime, describe};

/// Separates the two bounds in both text encodings. Never produced by the unit codecs.
const SEPARATOR: char = ',';

/// A closed range of units-of-time.
///
/// `T` may be a concrete type, in which case both bounds are statically the same type,
/// or an erased type ([`UnitOfTime`] or a family enum), in which case construction checks
/// that they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReportingPeriod<T> {
    start: T,
    end: T,
}

impl<T: TimeUnit> ReportingPeriod<T> {
    /// Creates a reporting period.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] if the bounds are of different concrete types
    /// or `end` precedes `start`.
    pub fn new(start: T, end: T) -> TimeResult<Self> {
        if start.kind() != end.kind() || start.granularity() != end.granularity() {
            return Err(TimeError::invalid(
                "end",
                format!(
                    "a reporting period cannot run from a {} to a {}",
                    describe(&start),
                    describe(&end)
                ),
            ));
        }
        if start.try_compare(&end)?.is_gt() {
            return Err(TimeError::invalid("end", format!("{end} precedes {start}")));
        }
        Ok(Self { start, end })
    }

    /// Returns the first unit in the period.
    #[must_use]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the last unit in the period.
    #[must_use]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the family shared by both bounds.
    #[must_use]
    pub fn kind(&self) -> UnitOfTimeKind {
        self.start.kind()
    }

    /// Returns the granularity shared by both bounds.
    #[must_use]
    pub fn granularity(&self) -> UnitOfTimeGranularity {
        self.start.granularity()
    }

    /// Whether `unit` falls within the period.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] if `unit` is a different concrete type.
    pub fn contains(&self, unit: &T) -> TimeResult<bool> {
        Ok(self.start.try_compare(unit)?.is_le() && unit.try_compare(&self.end)?.is_le())
    }

    /// Whether the two periods share at least one unit.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] if the periods are over different concrete
    /// types.
    pub fn overlaps(&self, other: &Self) -> TimeResult<bool> {
        Ok(self.start.try_compare(&other.end)?.is_le()
            && other.start.try_compare(&self.end)?.is_le())
    }

    /// Erases the concrete type of both bounds.
    #[must_use]
    pub fn to_unit_of_time(&self) -> ReportingPeriod<UnitOfTime> {
        ReportingPeriod {
            start: self.start.to_unit_of_time(),
            end: self.end.to_unit_of_time(),
        }
    }

    /// Encodes both bounds in the canonical form, e.g. `calendar.year:2016,calendar.year:2018`.
    #[must_use]
    pub fn serialize_to_string(&self) -> String {
        format!(
            "{}{SEPARATOR}{}",
            self.start.serialize_to_string(),
            self.end.serialize_to_string()
        )
    }

    /// Encodes both bounds in the sortable form, e.g. `c-2016,c-2018`.
    #[must_use]
    pub fn serialize_to_sortable_string(&self) -> String {
        format!(
            "{}{SEPARATOR}{}",
            self.start.serialize_to_sortable_string(),
            self.end.serialize_to_sortable_string()
        )
    }
}

impl ReportingPeriod<UnitOfTime> {
    /// Copies this period out with bounds of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidOperation`] if the bounds are not `T`s.
    pub fn clone_as<T: TimeUnit>(&self) -> TimeResult<ReportingPeriod<T>> {
        Ok(ReportingPeriod {
            start: self.start.clone_as()?,
            end: self.end.clone_as()?,
        })
    }
}

impl<T: BoundedTimeUnit> ReportingPeriod<T> {
    /// Iterates over every unit in the period, in order.
    #[must_use]
    pub const fn units(&self) -> Units<T> {
        Units {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl<T: TimeUnit> fmt::Display for ReportingPeriod<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Accepts both bounds in either encoding, separated by a comma.
impl<T: TimeUnit> FromStr for ReportingPeriod<T> {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(SEPARATOR)
            .filter(|(_, end)| !end.contains(SEPARATOR))
            .ok_or_else(|| TimeError::parse(s, "expected exactly two comma-separated bounds"))?;
        let start = crate::codec::deserialize(start)?;
        let end = crate::codec::deserialize(end)?;
        Self::new(start, end).map_err(|err| TimeError::parse(s, err.to_string()))
    }
}

/// Iterator over the units of a [`ReportingPeriod`], from [`ReportingPeriod::units`].
#[derive(Debug, Clone)]
pub struct Units<T> {
    next: Option<T>,
    end: T,
}

impl<T: BoundedTimeUnit> Iterator for Units<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        self.next = current.plus(1).ok().filter(|next| *next <= self.end);
        Some(current)
    }
}

impl<T: BoundedTimeUnit> FusedIterator for Units<T> {}
