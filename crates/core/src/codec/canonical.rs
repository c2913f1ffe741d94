//! The canonical encoding: `{kind}.{granularity}:{fields}` or `{kind}.unbounded`.

use ledgertime_shared::types::{UnitOfTimeGranularity, UnitOfTimeKind};
use ledgertime_shared::{TimeError, TimeResult};

use super::{Fields, digits, rebuild};
use crate::unit_of_time::{TimeUnit, UnitOfTime};

pub(super) fn encode(unit: &UnitOfTime) -> String {
    let head = format!("{}.{}", unit.kind(), unit.granularity());
    match Fields::of(unit) {
        Fields::Day { year, month, day } => format!("{head}:{year}-{month}-{day}"),
        Fields::Month { year, month } => format!("{head}:{year}-{month}"),
        Fields::Quarter { year, quarter } => format!("{head}:{year}-{quarter}"),
        Fields::Year { year } => format!("{head}:{year}"),
        Fields::Unbounded => head,
    }
}

pub(super) fn decode(input: &str) -> TimeResult<UnitOfTime> {
    let (kind, rest) = input
        .split_once('.')
        .ok_or_else(|| TimeError::parse(input, "expected '.' after the kind"))?;
    let kind = UnitOfTimeKind::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == kind)
        .ok_or_else(|| TimeError::parse(input, format!("unknown kind '{kind}'")))?;

    let (granularity, body) = match rest.split_once(':') {
        Some((granularity, body)) => (granularity, Some(body)),
        None => (rest, None),
    };
    let granularity: UnitOfTimeGranularity = granularity
        .parse()
        .map_err(|_| TimeError::parse(input, format!("unknown granularity '{granularity}'")))?;

    let parts: Vec<&str> = body.map(|body| body.split('-').collect()).unwrap_or_default();
    let fields = match (granularity, parts.as_slice()) {
        (UnitOfTimeGranularity::Unbounded, []) => Fields::Unbounded,
        (UnitOfTimeGranularity::Year, [year]) => Fields::Year {
            year: digits(input, year, None)?,
        },
        (UnitOfTimeGranularity::Quarter, [year, quarter]) => Fields::Quarter {
            year: digits(input, year, None)?,
            quarter: digits(input, quarter, None)?,
        },
        (UnitOfTimeGranularity::Month, [year, month]) => Fields::Month {
            year: digits(input, year, None)?,
            month: digits(input, month, None)?,
        },
        (UnitOfTimeGranularity::Day, [year, month, day]) => Fields::Day {
            year: digits(input, year, None)?,
            month: digits(input, month, None)?,
            day: digits(input, day, None)?,
        },
        _ => {
            return Err(TimeError::parse(
                input,
                format!("wrong number of fields for a {granularity} unit-of-time"),
            ));
        }
    };
    rebuild(input, kind, fields)
}
