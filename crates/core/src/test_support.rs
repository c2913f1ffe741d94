//! Proptest strategies for units-of-time.

use ledgertime_shared::types::{MonthNumber, MonthOfYear, QuarterNumber};
use proptest::prelude::*;

use crate::unit_of_time::{
    CalendarDay, CalendarMonth, CalendarQuarter, CalendarUnbounded, CalendarYear, FiscalMonth,
    FiscalQuarter, FiscalUnbounded, FiscalYear, GenericMonth, GenericQuarter, GenericUnbounded,
    GenericYear, UnitOfTime,
};

/// Years in `1..=9999`, biased towards the boundaries.
pub fn year() -> impl Strategy<Value = i32> {
    prop_oneof![
        1 => Just(1),
        1 => Just(9999),
        8 => 1i32..=9999,
    ]
}

pub fn month_of_year() -> impl Strategy<Value = MonthOfYear> {
    prop::sample::select(MonthOfYear::ALL.to_vec())
}

pub fn month_number() -> impl Strategy<Value = MonthNumber> {
    prop::sample::select(MonthNumber::ALL.to_vec())
}

pub fn quarter() -> impl Strategy<Value = QuarterNumber> {
    prop::sample::select(QuarterNumber::ALL.to_vec())
}

pub fn calendar_day() -> impl Strategy<Value = CalendarDay> {
    (year(), month_of_year())
        .prop_flat_map(|(y, m)| (Just(y), Just(m), 1..=m.days_in(y)))
        .prop_map(|(y, m, d)| CalendarDay::new(y, m, d).unwrap())
}

pub fn calendar_month() -> impl Strategy<Value = CalendarMonth> {
    (year(), month_of_year()).prop_map(|(y, m)| CalendarMonth::new(y, m).unwrap())
}

pub fn calendar_quarter() -> impl Strategy<Value = CalendarQuarter> {
    (year(), quarter()).prop_map(|(y, q)| CalendarQuarter::new(y, q).unwrap())
}

pub fn calendar_year() -> impl Strategy<Value = CalendarYear> {
    year().prop_map(|y| CalendarYear::new(y).unwrap())
}

pub fn fiscal_month() -> impl Strategy<Value = FiscalMonth> {
    (year(), month_number()).prop_map(|(y, m)| FiscalMonth::new(y, m).unwrap())
}

pub fn fiscal_quarter() -> impl Strategy<Value = FiscalQuarter> {
    (year(), quarter()).prop_map(|(y, q)| FiscalQuarter::new(y, q).unwrap())
}

pub fn fiscal_year() -> impl Strategy<Value = FiscalYear> {
    year().prop_map(|y| FiscalYear::new(y).unwrap())
}

pub fn generic_month() -> impl Strategy<Value = GenericMonth> {
    (year(), month_number()).prop_map(|(y, m)| GenericMonth::new(y, m).unwrap())
}

pub fn generic_quarter() -> impl Strategy<Value = GenericQuarter> {
    (year(), quarter()).prop_map(|(y, q)| GenericQuarter::new(y, q).unwrap())
}

pub fn generic_year() -> impl Strategy<Value = GenericYear> {
    year().prop_map(|y| GenericYear::new(y).unwrap())
}

/// Any of the thirteen concrete types, erased.
pub fn unit_of_time() -> impl Strategy<Value = UnitOfTime> {
    prop_oneof![
        calendar_day().prop_map(UnitOfTime::from),
        calendar_month().prop_map(UnitOfTime::from),
        calendar_quarter().prop_map(UnitOfTime::from),
        calendar_year().prop_map(UnitOfTime::from),
        Just(UnitOfTime::from(CalendarUnbounded)),
        fiscal_month().prop_map(UnitOfTime::from),
        fiscal_quarter().prop_map(UnitOfTime::from),
        fiscal_year().prop_map(UnitOfTime::from),
        Just(UnitOfTime::from(FiscalUnbounded)),
        generic_month().prop_map(UnitOfTime::from),
        generic_quarter().prop_map(UnitOfTime::from),
        generic_year().prop_map(UnitOfTime::from),
        Just(UnitOfTime::from(GenericUnbounded)),
    ]
}

/// Two values of the same concrete type, erased.
pub fn same_type_pair() -> impl Strategy<Value = (UnitOfTime, UnitOfTime)> {
    prop_oneof![
        (calendar_day(), calendar_day()).prop_map(|(a, b)| (a.into(), b.into())),
        (calendar_month(), calendar_month()).prop_map(|(a, b)| (a.into(), b.into())),
        (calendar_quarter(), calendar_quarter()).prop_map(|(a, b)| (a.into(), b.into())),
        (calendar_year(), calendar_year()).prop_map(|(a, b)| (a.into(), b.into())),
        (fiscal_month(), fiscal_month()).prop_map(|(a, b)| (a.into(), b.into())),
        (fiscal_quarter(), fiscal_quarter()).prop_map(|(a, b)| (a.into(), b.into())),
        (fiscal_year(), fiscal_year()).prop_map(|(a, b)| (a.into(), b.into())),
        (generic_month(), generic_month()).prop_map(|(a, b)| (a.into(), b.into())),
        (generic_quarter(), generic_quarter()).prop_map(|(a, b)| (a.into(), b.into())),
        (generic_year(), generic_year()).prop_map(|(a, b)| (a.into(), b.into())),
    ]
}
