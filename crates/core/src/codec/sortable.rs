//! The sortable encoding: `{prefix}-{YYYY}[-{MM}[-{DD}] | -Q{q}]` or `{prefix}-unbounded`.

use ledgertime_shared::types::UnitOfTimeKind;
use ledgertime_shared::{TimeError, TimeResult};

use super::{Fields, digits, rebuild};
use crate::unit_of_time::{TimeUnit, UnitOfTime};

const UNBOUNDED: &str = "unbounded";

pub(super) fn encode(unit: &UnitOfTime) -> String {
    let prefix = unit.kind().sortable_prefix();
    match Fields::of(unit) {
        Fields::Day { year, month, day } => format!("{prefix}-{year:04}-{month:02}-{day:02}"),
        Fields::Month { year, month } => format!("{prefix}-{year:04}-{month:02}"),
        Fields::Quarter { year, quarter } => format!("{prefix}-{year:04}-Q{quarter}"),
        Fields::Year { year } => format!("{prefix}-{year:04}"),
        Fields::Unbounded => format!("{prefix}-{UNBOUNDED}"),
    }
}

/// Whether `input` starts with a sortable kind prefix.
pub(super) fn recognizes(input: &str) -> bool {
    split_prefix(input).is_some()
}

fn split_prefix(input: &str) -> Option<(UnitOfTimeKind, &str)> {
    let (prefix, rest) = input.split_once('-')?;
    UnitOfTimeKind::ALL
        .into_iter()
        .find(|kind| prefix.len() == 1 && prefix.starts_with(kind.sortable_prefix()))
        .map(|kind| (kind, rest))
}

pub(super) fn decode(input: &str) -> TimeResult<UnitOfTime> {
    let (kind, body) =
        split_prefix(input).ok_or_else(|| TimeError::parse(input, "missing kind prefix"))?;

    if body == UNBOUNDED {
        return rebuild(input, kind, Fields::Unbounded);
    }

    let parts: Vec<&str> = body.split('-').collect();
    let fields = match parts.as_slice() {
        [year] => Fields::Year {
            year: digits(input, year, Some(4))?,
        },
        [year, quarter] if quarter.starts_with('Q') => Fields::Quarter {
            year: digits(input, year, Some(4))?,
            quarter: digits(input, &quarter[1..], Some(1))?,
        },
        [year, month] => Fields::Month {
            year: digits(input, year, Some(4))?,
            month: digits(input, month, Some(2))?,
        },
        [year, month, day] => Fields::Day {
            year: digits(input, year, Some(4))?,
            month: digits(input, month, Some(2))?,
            day: digits(input, day, Some(2))?,
        },
        _ => return Err(TimeError::parse(input, "too many fields")),
    };
    rebuild(input, kind, fields)
}
