//! Discrete, comparable units of accounting time.
//!
//! Every unit belongs to one of three families (calendar, fiscal, generic) and has one
//! granularity (day, month, quarter, year, unbounded). The thirteen concrete types are
//! small `Copy` values; the family enums and [`UnitOfTime`] erase the concrete type when
//! callers need to hold "any unit".
//!
//! Ordering is only defined between two values of the same concrete type. The concrete
//! types implement [`Ord`]; the erased enums implement [`PartialOrd`] (yielding `None`
//! across concrete types) and report [`TimeError::ArgumentInvalid`] from
//! [`TimeUnit::try_compare`]. `Option<T>` supplies the missing-value rules: `None == None`
//! and `None` precedes every value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use ledgertime_shared::types::{UnitOfTimeGranularity, UnitOfTimeKind};
use ledgertime_shared::{TimeError, TimeResult};

/// Smallest year any bounded unit may carry.
pub const MIN_YEAR: i32 = 1;
/// Largest year any bounded unit may carry.
pub const MAX_YEAR: i32 = 9999;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Behaviour shared by every unit-of-time type, concrete or erased.
pub trait TimeUnit:
    sealed::Sealed + Copy + Eq + Hash + fmt::Debug + fmt::Display
{
    /// The family this unit belongs to.
    fn kind(&self) -> UnitOfTimeKind;

    /// The span this unit covers.
    fn granularity(&self) -> UnitOfTimeGranularity;

    /// Chronological comparison.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] when `other` is a different concrete type.
    fn try_compare(&self, other: &Self) -> TimeResult<Ordering>;

    /// Erases the concrete type.
    fn to_unit_of_time(&self) -> UnitOfTime;

    /// Recovers this type from an erased unit.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidOperation`] when `unit` is not of this type.
    fn from_unit_of_time(unit: UnitOfTime) -> TimeResult<Self>;

    /// Compares against a possibly-missing value; every value follows a missing one.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] when `other` is a different concrete type.
    fn compare_to(&self, other: Option<&Self>) -> TimeResult<Ordering> {
        match other {
            None => Ok(Ordering::Greater),
            Some(other) => self.try_compare(other),
        }
    }

    /// Compares against any unit-of-time.
    ///
    /// Stricter than [`TimeUnit::compare_to`]: a missing value is an error here.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] when `other` is missing or is a different
    /// concrete type.
    fn compare_to_unit(&self, other: Option<&UnitOfTime>) -> TimeResult<Ordering> {
        let other = other.ok_or_else(|| {
            TimeError::invalid("other", "cannot compare against a missing unit-of-time")
        })?;
        self.to_unit_of_time().try_compare(other)
    }

    /// Whether this unit has bounds (anything but unbounded).
    fn is_bounded(&self) -> bool {
        self.granularity() != UnitOfTimeGranularity::Unbounded
    }

    /// Canonical, exactly invertible text form.
    fn serialize_to_string(&self) -> String {
        crate::codec::serialize_to_string(self)
    }

    /// Text form whose byte order matches chronological order within a concrete type.
    fn serialize_to_sortable_string(&self) -> String {
        crate::codec::serialize_to_sortable_string(self)
    }
}

/// Validates a year for a bounded unit.
pub(crate) fn validate_year(year: i32) -> TimeResult<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(TimeError::out_of_range(
            "year",
            format!("{year} is not in {MIN_YEAR}..={MAX_YEAR}"),
        ))
    }
}

pub(crate) fn describe(unit: &impl TimeUnit) -> String {
    format!("{} {}", unit.kind(), unit.granularity())
}

pub(crate) fn mismatched(this: &impl TimeUnit, other: &impl TimeUnit) -> TimeError {
    TimeError::invalid(
        "other",
        format!(
            "cannot compare a {} against a {}",
            describe(this),
            describe(other)
        ),
    )
}

pub(crate) fn cast_error(unit: &impl TimeUnit, target: &str) -> TimeError {
    TimeError::InvalidOperation(format!(
        "a {} unit-of-time cannot be converted to {target}",
        describe(unit)
    ))
}

/// Declares a family enum over its concrete types, wiring up the trait, conversions and
/// comparison rules for the family and every member.
macro_rules! unit_of_time_family {
    (
        $(#[$meta:meta])*
        $family:ident: $kind:ident => $root:ident {
            $($variant:ident($concrete:ident) => $granularity:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $family {
            $(
                #[doc = concat!("A [`", stringify!($concrete), "`].")]
                $variant($concrete),
            )+
        }

        impl $crate::unit_of_time::sealed::Sealed for $family {}

        impl $crate::unit_of_time::TimeUnit for $family {
            fn kind(&self) -> ::ledgertime_shared::types::UnitOfTimeKind {
                ::ledgertime_shared::types::UnitOfTimeKind::$kind
            }

            fn granularity(&self) -> ::ledgertime_shared::types::UnitOfTimeGranularity {
                match self {
                    $(Self::$variant(_) => ::ledgertime_shared::types::UnitOfTimeGranularity::$granularity,)+
                }
            }

            fn try_compare(
                &self,
                other: &Self,
            ) -> ::ledgertime_shared::TimeResult<::std::cmp::Ordering> {
                match (self, other) {
                    $((Self::$variant(a), Self::$variant(b)) => Ok(a.cmp(b)),)+
                    _ => Err($crate::unit_of_time::mismatched(self, other)),
                }
            }

            fn to_unit_of_time(&self) -> $crate::unit_of_time::UnitOfTime {
                $crate::unit_of_time::UnitOfTime::$root(*self)
            }

            fn from_unit_of_time(
                unit: $crate::unit_of_time::UnitOfTime,
            ) -> ::ledgertime_shared::TimeResult<Self> {
                match unit {
                    $crate::unit_of_time::UnitOfTime::$root(inner) => Ok(inner),
                    other => Err($crate::unit_of_time::cast_error(&other, stringify!($family))),
                }
            }
        }

        impl PartialOrd for $family {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                $crate::unit_of_time::TimeUnit::try_compare(self, other).ok()
            }
        }

        impl ::std::fmt::Display for $family {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant(inner) => ::std::fmt::Display::fmt(inner, f),)+
                }
            }
        }

        impl From<$family> for $crate::unit_of_time::UnitOfTime {
            fn from(value: $family) -> Self {
                Self::$root(value)
            }
        }

        impl TryFrom<$crate::unit_of_time::UnitOfTime> for $family {
            type Error = ::ledgertime_shared::TimeError;

            fn try_from(value: $crate::unit_of_time::UnitOfTime) -> Result<Self, Self::Error> {
                <Self as $crate::unit_of_time::TimeUnit>::from_unit_of_time(value)
            }
        }

        $(
            impl $crate::unit_of_time::sealed::Sealed for $concrete {}

            impl $concrete {
                /// Family of every value of this type.
                pub const KIND: ::ledgertime_shared::types::UnitOfTimeKind =
                    ::ledgertime_shared::types::UnitOfTimeKind::$kind;
                /// Granularity of every value of this type.
                pub const GRANULARITY: ::ledgertime_shared::types::UnitOfTimeGranularity =
                    ::ledgertime_shared::types::UnitOfTimeGranularity::$granularity;
            }

            impl $crate::unit_of_time::TimeUnit for $concrete {
                fn kind(&self) -> ::ledgertime_shared::types::UnitOfTimeKind {
                    Self::KIND
                }

                fn granularity(&self) -> ::ledgertime_shared::types::UnitOfTimeGranularity {
                    Self::GRANULARITY
                }

                fn try_compare(
                    &self,
                    other: &Self,
                ) -> ::ledgertime_shared::TimeResult<::std::cmp::Ordering> {
                    Ok(self.cmp(other))
                }

                fn to_unit_of_time(&self) -> $crate::unit_of_time::UnitOfTime {
                    $crate::unit_of_time::UnitOfTime::$root($family::$variant(*self))
                }

                fn from_unit_of_time(
                    unit: $crate::unit_of_time::UnitOfTime,
                ) -> ::ledgertime_shared::TimeResult<Self> {
                    match unit {
                        $crate::unit_of_time::UnitOfTime::$root($family::$variant(inner)) => Ok(inner),
                        other => Err($crate::unit_of_time::cast_error(&other, stringify!($concrete))),
                    }
                }
            }

            impl From<$concrete> for $family {
                fn from(value: $concrete) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$concrete> for $crate::unit_of_time::UnitOfTime {
                fn from(value: $concrete) -> Self {
                    Self::$root($family::$variant(value))
                }
            }

            impl TryFrom<$family> for $concrete {
                type Error = ::ledgertime_shared::TimeError;

                fn try_from(value: $family) -> Result<Self, Self::Error> {
                    match value {
                        $family::$variant(inner) => Ok(inner),
                        other => Err($crate::unit_of_time::cast_error(&other, stringify!($concrete))),
                    }
                }
            }

            impl TryFrom<$crate::unit_of_time::UnitOfTime> for $concrete {
                type Error = ::ledgertime_shared::TimeError;

                fn try_from(value: $crate::unit_of_time::UnitOfTime) -> Result<Self, Self::Error> {
                    <Self as $crate::unit_of_time::TimeUnit>::from_unit_of_time(value)
                }
            }
        )+
    };
}

pub mod arithmetic;
pub mod calendar;
pub mod fiscal;
pub mod generic;
pub mod unit;

#[cfg(test)]
mod props;

pub use arithmetic::BoundedTimeUnit;
pub use calendar::{
    CalendarDay, CalendarMonth, CalendarQuarter, CalendarUnbounded, CalendarUnitOfTime,
    CalendarYear,
};
pub use fiscal::{FiscalMonth, FiscalQuarter, FiscalUnbounded, FiscalUnitOfTime, FiscalYear};
pub use generic::{
    GenericMonth, GenericQuarter, GenericUnbounded, GenericUnitOfTime, GenericYear,
};
pub use unit::UnitOfTime;
