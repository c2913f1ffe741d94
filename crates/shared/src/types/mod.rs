//! Field vocabulary used by units-of-time and accounting period systems.

pub mod kind;
pub mod methodology;
pub mod month;
pub mod quarter;

pub use kind::{UnitOfTimeGranularity, UnitOfTimeKind};
pub use methodology::FiftyTwoFiftyThreeWeekMethodology;
pub use month::{MonthNumber, MonthOfYear, is_leap_year};
pub use quarter::QuarterNumber;
