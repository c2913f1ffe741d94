//! 52/53-week fiscal year methodologies.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// How the year-end weekday is located relative to the anchor month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiftyTwoFiftyThreeWeekMethodology {
    /// The last occurrence of the weekday inside the anchor month.
    LastDayOfWeekInMonth,
    /// The occurrence of the weekday nearest the last day of the anchor month,
    /// which may fall early in the following month.
    NearestDayOfWeekInMonth,
}

impl std::fmt::Display for FiftyTwoFiftyThreeWeekMethodology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastDayOfWeekInMonth => f.write_str("last"),
            Self::NearestDayOfWeekInMonth => f.write_str("nearest"),
        }
    }
}

impl std::str::FromStr for FiftyTwoFiftyThreeWeekMethodology {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" | "last_day_of_week_in_month" => Ok(Self::LastDayOfWeekInMonth),
            "nearest" | "nearest_day_of_week_in_month" => Ok(Self::NearestDayOfWeekInMonth),
            other => Err(TimeError::invalid(
                "methodology",
                format!("unknown 52/53-week methodology: {other}"),
            )),
        }
    }
}
