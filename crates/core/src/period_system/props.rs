//! Property-based tests for accounting period systems.
//!
//! - Property 6: Year-end spacing
//! - Property 7: Months tile the fiscal year
//! - Property 8: Day lookup agrees with period bounds

use chrono::{Datelike, Weekday};
use ledgertime_shared::types::{FiftyTwoFiftyThreeWeekMethodology, MonthNumber, MonthOfYear};
use proptest::prelude::*;

use super::{
    AccountingPeriodSystem, CalendarYearAccountingPeriodSystem,
    FiftyTwoFiftyThreeWeekAccountingPeriodSystem, FiscalCalendar,
    FiscalYearAccountingPeriodSystem,
};
use crate::test_support::month_of_year;
use crate::unit_of_time::{BoundedTimeUnit, CalendarDay, TimeUnit};

fn weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| Weekday::try_from(n).unwrap())
}

fn methodology() -> impl Strategy<Value = FiftyTwoFiftyThreeWeekMethodology> {
    prop_oneof![
        Just(FiftyTwoFiftyThreeWeekMethodology::LastDayOfWeekInMonth),
        Just(FiftyTwoFiftyThreeWeekMethodology::NearestDayOfWeekInMonth),
    ]
}

fn week_system() -> impl Strategy<Value = FiftyTwoFiftyThreeWeekAccountingPeriodSystem> {
    (month_of_year(), methodology(), weekday()).prop_map(|(month, methodology, weekday)| {
        FiftyTwoFiftyThreeWeekAccountingPeriodSystem::new(month, methodology, weekday)
    })
}

fn any_system() -> impl Strategy<Value = AccountingPeriodSystem> {
    prop_oneof![
        Just(CalendarYearAccountingPeriodSystem::new().into()),
        month_of_year().prop_map(|month| FiscalYearAccountingPeriodSystem::new(month).into()),
        week_system().prop_map(AccountingPeriodSystem::from),
    ]
}

/// Days away from the first and last supported years, so neighbouring fiscal years exist.
fn inner_day() -> impl Strategy<Value = CalendarDay> {
    (2i32..9998, 0i32..365).prop_map(|(year, offset)| {
        CalendarDay::new(year, MonthOfYear::January, 1)
            .unwrap()
            .plus(offset)
            .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 6: Year-end spacing
    // =========================================================================

    /// Property 6.1: Consecutive 52/53-week year-ends are 364 or 371 days apart.
    #[test]
    fn prop_year_ends_are_whole_weeks_apart(system in week_system(), year in 2i32..9999) {
        let gap = (system.fiscal_year_end(year).unwrap()
            - system.fiscal_year_end(year - 1).unwrap())
        .num_days();
        prop_assert!(gap == 364 || gap == 371, "gap {}", gap);
        let weeks = system.weeks_in_fiscal_year(year).unwrap();
        prop_assert_eq!(i64::from(weeks) * 7, gap);
    }

    /// Property 6.2: Every 52/53-week year ends on the configured weekday.
    #[test]
    fn prop_year_ends_on_weekday(system in week_system(), year in 1i32..9999) {
        prop_assert_eq!(
            system.fiscal_year_end(year).unwrap().weekday(),
            system.last_day_of_week_in_accounting_year()
        );
    }

    // =========================================================================
    // Property 7: Months tile the fiscal year
    // =========================================================================

    /// Property 7.1: Twelve fiscal months run contiguously from year start to year end.
    #[test]
    fn prop_months_tile_the_year(system in any_system(), year in 2i32..9999) {
        let mut expected_start = system.fiscal_year_start(year).unwrap();
        for month in MonthNumber::ALL {
            let (first, last) = system.fiscal_month_bounds(year, month).unwrap();
            prop_assert_eq!(first, expected_start);
            prop_assert!(first <= last);
            expected_start = last.succ_opt().unwrap();
        }
        prop_assert_eq!(
            expected_start.pred_opt().unwrap(),
            system.fiscal_year_end(year).unwrap()
        );
    }

    // =========================================================================
    // Property 8: Day lookup agrees with period bounds
    // =========================================================================

    /// Property 8.1: The fiscal month found for a day contains that day.
    #[test]
    fn prop_fiscal_month_contains_day(system in any_system(), day in inner_day()) {
        let month = system.fiscal_month_for(day).unwrap();
        let period = system.reporting_period_for_fiscal_month(month).unwrap();
        prop_assert!(period.contains(&day).unwrap());
        let year = system.fiscal_year_for(day).unwrap();
        prop_assert_eq!(month.to_fiscal_year(), year);
        let quarter = system.fiscal_quarter_for(day).unwrap();
        let quarter_days = system.reporting_period_for_fiscal_quarter(quarter).unwrap();
        prop_assert!(quarter_days.contains(&day).unwrap());
    }

    /// Property 8.2: Fiscal years name the calendar year of their anchor month.
    #[test]
    fn prop_fiscal_year_is_within_one_of_calendar_year(
        system in any_system(),
        day in inner_day(),
    ) {
        let year = system.fiscal_year_for(day).unwrap();
        prop_assert!((year.year() - day.year()).abs() <= 1);
        prop_assert!(year.is_bounded());
    }
}
