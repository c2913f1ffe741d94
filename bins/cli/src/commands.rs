//! Command implementations.
//!
//! Each command returns plain rows; rendering is left to `main`.

use std::fmt::Write as _;

use ledgertime_core::{
    AccountingPeriodSystem, CalendarDay, FiscalCalendar, FiscalMonth, FiscalQuarter,
    FiscalUnitOfTime, FiscalYear, ReportingPeriod, TimeResult, TimeUnit, UnitOfTime,
};
use ledgertime_shared::types::{MonthNumber, QuarterNumber};
use serde::Serialize;

/// Fiscal units holding one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    pub date: CalendarDay,
    pub fiscal_year: FiscalYear,
    pub fiscal_quarter: FiscalQuarter,
    pub fiscal_month: FiscalMonth,
}

/// Day range covered by one fiscal unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRow {
    pub unit: FiscalUnitOfTime,
    pub days: ReportingPeriod<CalendarDay>,
    pub day_count: usize,
}

/// Every text form of a unit-of-time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoded {
    pub display: String,
    pub canonical: String,
    pub sortable: String,
}

pub fn locate(system: &AccountingPeriodSystem, dates: &[CalendarDay]) -> TimeResult<Vec<Located>> {
    dates
        .iter()
        .map(|&date| {
            tracing::debug!(%date, "locating date");
            let fiscal_month = system.fiscal_month_for(date)?;
            Ok(Located {
                date,
                fiscal_year: fiscal_month.to_fiscal_year(),
                fiscal_quarter: fiscal_month.to_fiscal_quarter(),
                fiscal_month,
            })
        })
        .collect()
}

/// Rows for the year, then each quarter, then each month.
pub fn year(system: &AccountingPeriodSystem, year: i32) -> TimeResult<Vec<PeriodRow>> {
    let fiscal_year = FiscalYear::new(year)?;
    let mut rows = Vec::with_capacity(17);
    rows.push(row(
        fiscal_year.into(),
        system.reporting_period_for_fiscal_year(fiscal_year)?,
    ));
    for quarter in QuarterNumber::ALL {
        let quarter = FiscalQuarter::new(year, quarter)?;
        rows.push(row(
            quarter.into(),
            system.reporting_period_for_fiscal_quarter(quarter)?,
        ));
    }
    for month in MonthNumber::ALL {
        let month = FiscalMonth::new(year, month)?;
        rows.push(row(
            month.into(),
            system.reporting_period_for_fiscal_month(month)?,
        ));
    }
    Ok(rows)
}

fn row(unit: FiscalUnitOfTime, days: ReportingPeriod<CalendarDay>) -> PeriodRow {
    PeriodRow {
        unit,
        days,
        day_count: days.units().count(),
    }
}

pub fn encode(input: &str) -> TimeResult<Encoded> {
    let unit: UnitOfTime = input.parse()?;
    Ok(Encoded {
        display: unit.to_string(),
        canonical: unit.serialize_to_string(),
        sortable: unit.serialize_to_sortable_string(),
    })
}

pub fn render_located(rows: &[Located]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{}  {}  {:<10}  {}",
            row.date,
            row.fiscal_year,
            row.fiscal_quarter.to_string(),
            row.fiscal_month
        );
    }
    out
}

pub fn render_periods(rows: &[PeriodRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{:<20}  {}  {}  {:>3} days",
            row.unit.to_string(),
            row.days.start(),
            row.days.end(),
            row.day_count
        );
    }
    out
}

pub fn render_encoded(encoded: &Encoded) -> String {
    format!(
        "display    {}\ncanonical  {}\nsortable   {}\n",
        encoded.display, encoded.canonical, encoded.sortable
    )
}
