//! Classifiers shared by every unit-of-time.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Which calendar a unit-of-time is tied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfTimeKind {
    /// Tied to the Gregorian calendar.
    Calendar,
    /// Tied to an organization's fiscal calendar.
    Fiscal,
    /// Granularity known, calendar deliberately unspecified.
    Generic,
}

impl UnitOfTimeKind {
    /// Every kind.
    pub const ALL: [Self; 3] = [Self::Calendar, Self::Fiscal, Self::Generic];

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::Fiscal => "fiscal",
            Self::Generic => "generic",
        }
    }

    /// Returns the single-letter discriminator used by the sortable encoding.
    #[must_use]
    pub const fn sortable_prefix(self) -> char {
        match self {
            Self::Calendar => 'c',
            Self::Fiscal => 'f',
            Self::Generic => 'g',
        }
    }
}

impl std::fmt::Display for UnitOfTimeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnitOfTimeKind {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calendar" | "c" => Ok(Self::Calendar),
            "fiscal" | "f" => Ok(Self::Fiscal),
            "generic" | "g" => Ok(Self::Generic),
            _ => Err(TimeError::invalid("kind", format!("unknown unit-of-time kind: {s}"))),
        }
    }
}

/// The span a unit-of-time covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfTimeGranularity {
    /// A single day.
    Day,
    /// A month.
    Month,
    /// A quarter.
    Quarter,
    /// A year.
    Year,
    /// No bounds at all.
    Unbounded,
}

impl UnitOfTimeGranularity {
    /// Every granularity, finest first.
    pub const ALL: [Self; 5] = [
        Self::Day,
        Self::Month,
        Self::Quarter,
        Self::Year,
        Self::Unbounded,
    ];

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::Unbounded => "unbounded",
        }
    }
}

impl std::fmt::Display for UnitOfTimeGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnitOfTimeGranularity {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|granularity| granularity.as_str() == s)
            .ok_or_else(|| {
                TimeError::invalid("granularity", format!("unknown unit-of-time granularity: {s}"))
            })
    }
}
