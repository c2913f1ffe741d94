//! Fiscal years of 52 or 53 whole weeks that close on a fixed weekday.
//!
//! The year-end of fiscal year `N` is found from the last day of the anchor month in
//! calendar year `N`:
//!
//! - [`FiftyTwoFiftyThreeWeekMethodology::LastDayOfWeekInMonth`] takes the last
//!   occurrence of the weekday in the anchor month.
//! - [`FiftyTwoFiftyThreeWeekMethodology::NearestDayOfWeekInMonth`] takes the
//!   occurrence nearest to the last day of the anchor month, which may be up to three
//!   days into the following month. The candidates are `d` days before or `7 - d` days
//!   after, so they are never equidistant; were they, the earlier would be taken.
//!
//! Months follow a 4-4-5 week pattern. In a 53-week year the extra week goes to the
//! twelfth month.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use ledgertime_shared::types::{FiftyTwoFiftyThreeWeekMethodology, MonthNumber, MonthOfYear};
use ledgertime_shared::{TimeError, TimeResult};

use super::{FiscalCalendar, month_bounds, shift_days};

/// Weeks in each fiscal month of a 52-week year.
const WEEKS_PER_MONTH: [u32; 12] = [4, 4, 5, 4, 4, 5, 4, 4, 5, 4, 4, 5];

/// A 52/53-week fiscal calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiftyTwoFiftyThreeWeekAccountingPeriodSystem {
    anchor_month: MonthOfYear,
    methodology: FiftyTwoFiftyThreeWeekMethodology,
    last_day_of_week_in_accounting_year: Weekday,
}

impl FiftyTwoFiftyThreeWeekAccountingPeriodSystem {
    /// Creates a 52/53-week system.
    #[must_use]
    pub fn new(
        anchor_month: MonthOfYear,
        methodology: FiftyTwoFiftyThreeWeekMethodology,
        last_day_of_week_in_accounting_year: Weekday,
    ) -> Self {
        tracing::debug!(
            %anchor_month,
            %methodology,
            %last_day_of_week_in_accounting_year,
            "52/53-week accounting period system"
        );
        Self {
            anchor_month,
            methodology,
            last_day_of_week_in_accounting_year,
        }
    }

    /// Creates a system from raw values: a month number `1..=12`, a methodology name and a
    /// weekday number counted from Monday as `0`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ArgumentInvalid`] if any value is outside its domain.
    pub fn from_raw(
        anchor_month: u32,
        methodology: &str,
        last_day_of_week: u8,
    ) -> TimeResult<Self> {
        let anchor_month = MonthOfYear::from_number(anchor_month)?;
        let methodology = methodology.parse()?;
        let last_day_of_week = Weekday::try_from(last_day_of_week).map_err(|_| {
            TimeError::invalid(
                "last_day_of_week_in_accounting_year",
                format!("{last_day_of_week} is not a day of the week (0..=6)"),
            )
        })?;
        Ok(Self::new(anchor_month, methodology, last_day_of_week))
    }

    /// Returns the month the year-end is anchored to.
    #[must_use]
    pub const fn anchor_month(&self) -> MonthOfYear {
        self.anchor_month
    }

    /// Returns how the year-end weekday is located.
    #[must_use]
    pub const fn methodology(&self) -> FiftyTwoFiftyThreeWeekMethodology {
        self.methodology
    }

    /// Returns the weekday every fiscal year ends on.
    #[must_use]
    pub const fn last_day_of_week_in_accounting_year(&self) -> Weekday {
        self.last_day_of_week_in_accounting_year
    }

    /// Number of whole weeks in fiscal year `year`: 52, or 53 in a leap-week year.
    pub fn weeks_in_fiscal_year(&self, year: i32) -> TimeResult<u32> {
        let start = self.fiscal_year_start(year)?;
        let end = self.fiscal_year_end(year)?;
        let days = (end - start).num_days() + 1;
        u32::try_from(days / 7)
            .map_err(|_| TimeError::InvalidOperation(format!("FY{year} has {days} days")))
    }
}

impl FiscalCalendar for FiftyTwoFiftyThreeWeekAccountingPeriodSystem {
    fn fiscal_year_end(&self, year: i32) -> TimeResult<NaiveDate> {
        let (_, month_end) = month_bounds(year, self.anchor_month)?;
        let back = (7 + month_end.weekday().num_days_from_monday()
            - self.last_day_of_week_in_accounting_year.num_days_from_monday())
            % 7;
        let last_in_month = shift_days(month_end, -i64::from(back))?;
        match self.methodology {
            FiftyTwoFiftyThreeWeekMethodology::LastDayOfWeekInMonth => Ok(last_in_month),
            FiftyTwoFiftyThreeWeekMethodology::NearestDayOfWeekInMonth if back <= 3 => {
                Ok(last_in_month)
            }
            FiftyTwoFiftyThreeWeekMethodology::NearestDayOfWeekInMonth => {
                shift_days(last_in_month, 7)
            }
        }
    }

    fn fiscal_month_bounds(
        &self,
        year: i32,
        month: MonthNumber,
    ) -> TimeResult<(NaiveDate, NaiveDate)> {
        let start = self.fiscal_year_start(year)?;
        let index = month.number() as usize - 1;
        let weeks_before: u32 = WEEKS_PER_MONTH[..index].iter().sum();
        let mut weeks = WEEKS_PER_MONTH[index];
        if month == MonthNumber::Twelve && self.weeks_in_fiscal_year(year)? == 53 {
            weeks += 1;
        }
        let first = shift_days(start, i64::from(weeks_before * 7))?;
        let last = shift_days(first, i64::from(weeks * 7) - 1)?;
        Ok((first, last))
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl fmt::Display for FiftyTwoFiftyThreeWeekAccountingPeriodSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weekday = weekday_name(self.last_day_of_week_in_accounting_year);
        match self.methodology {
            FiftyTwoFiftyThreeWeekMethodology::LastDayOfWeekInMonth => write!(
                f,
                "52/53-week fiscal year ending on the last {weekday} of {}",
                self.anchor_month
            ),
            FiftyTwoFiftyThreeWeekMethodology::NearestDayOfWeekInMonth => write!(
                f,
                "52/53-week fiscal year ending on the {weekday} nearest the end of {}",
                self.anchor_month
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_of_time::{CalendarDay, FiscalMonth, FiscalQuarter, FiscalYear};
    use ledgertime_shared::types::QuarterNumber;
    use rstest::rstest;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn last_saturday_of_december() -> FiftyTwoFiftyThreeWeekAccountingPeriodSystem {
        FiftyTwoFiftyThreeWeekAccountingPeriodSystem::new(
            MonthOfYear::December,
            FiftyTwoFiftyThreeWeekMethodology::LastDayOfWeekInMonth,
            Weekday::Sat,
        )
    }

    fn saturday_nearest_december_end() -> FiftyTwoFiftyThreeWeekAccountingPeriodSystem {
        FiftyTwoFiftyThreeWeekAccountingPeriodSystem::new(
            MonthOfYear::December,
            FiftyTwoFiftyThreeWeekMethodology::NearestDayOfWeekInMonth,
            Weekday::Sat,
        )
    }

    #[rstest]
    #[case(2016, date(2016, 12, 31))]
    #[case(2017, date(2017, 12, 30))]
    #[case(2018, date(2018, 12, 29))]
    #[case(2019, date(2019, 12, 28))]
    #[case(2020, date(2020, 12, 26))]
    #[case(2021, date(2021, 12, 25))]
    #[case(2022, date(2022, 12, 31))]
    fn test_last_saturday_year_ends(#[case] year: i32, #[case] expected: NaiveDate) {
        assert_eq!(last_saturday_of_december().fiscal_year_end(year).unwrap(), expected);
    }

    #[rstest]
    #[case(2017, date(2017, 12, 30))]
    #[case(2019, date(2019, 12, 28))]
    #[case(2020, date(2021, 1, 2))]
    #[case(2021, date(2022, 1, 1))]
    #[case(2022, date(2022, 12, 31))]
    fn test_nearest_saturday_year_ends(#[case] year: i32, #[case] expected: NaiveDate) {
        assert_eq!(saturday_nearest_december_end().fiscal_year_end(year).unwrap(), expected);
    }

    #[test]
    fn test_nearest_prefers_three_days_before_over_four_after() {
        // 2019-12-31 is a Tuesday: Saturday the 28th is 3 days back, January 4th 4 ahead.
        assert_eq!(
            saturday_nearest_december_end().fiscal_year_end(2019).unwrap(),
            date(2019, 12, 28)
        );
    }

    #[test]
    fn test_nearest_stays_within_three_days_of_month_end() {
        let system = saturday_nearest_december_end();
        for year in 1990..2060 {
            let end = system.fiscal_year_end(year).unwrap();
            let distance = (end - date(year, 12, 31)).num_days();
            assert!((-3..=3).contains(&distance), "FY{year} ends {end}");
            assert_eq!(end.weekday(), Weekday::Sat);
        }
    }

    #[test]
    fn test_consecutive_year_ends_differ_by_whole_weeks() {
        let system = last_saturday_of_december();
        let mut leap_years = Vec::new();
        for year in 2000..2040 {
            let gap = (system.fiscal_year_end(year).unwrap()
                - system.fiscal_year_end(year - 1).unwrap())
            .num_days();
            assert!(gap == 364 || gap == 371, "FY{year} gap {gap}");
            if gap == 371 {
                leap_years.push(year);
            }
        }
        assert!(leap_years.contains(&2022));
        assert_eq!(system.weeks_in_fiscal_year(2022).unwrap(), 53);
        assert_eq!(system.weeks_in_fiscal_year(2021).unwrap(), 52);
    }

    #[test]
    fn test_four_four_five_months() {
        let system = last_saturday_of_december();
        // FY2017 runs 2017-01-01 (Sunday) to 2017-12-30.
        assert_eq!(
            system.fiscal_month_bounds(2017, MonthNumber::One).unwrap(),
            (date(2017, 1, 1), date(2017, 1, 28))
        );
        assert_eq!(
            system.fiscal_month_bounds(2017, MonthNumber::Three).unwrap(),
            (date(2017, 2, 26), date(2017, 4, 1))
        );
        assert_eq!(
            system.fiscal_month_bounds(2017, MonthNumber::Twelve).unwrap().1,
            date(2017, 12, 30)
        );
    }

    #[test]
    fn test_leap_week_extends_twelfth_month() {
        let system = last_saturday_of_december();
        let (first, last) = system.fiscal_month_bounds(2022, MonthNumber::Twelve).unwrap();
        assert_eq!((last - first).num_days() + 1, 42);
        assert_eq!(last, date(2022, 12, 31));
        let quarter = FiscalQuarter::new(2022, QuarterNumber::Q4).unwrap();
        let q4 = system.reporting_period_for_fiscal_quarter(quarter).unwrap();
        assert_eq!(q4.units().count(), 14 * 7);
    }

    #[test]
    fn test_days_after_month_end_belong_to_the_closing_year() {
        let system = saturday_nearest_december_end();
        let new_years_day = CalendarDay::new(2021, MonthOfYear::January, 1).unwrap();
        assert_eq!(
            system.fiscal_year_for(new_years_day).unwrap(),
            FiscalYear::new(2020).unwrap()
        );
        assert_eq!(
            system.fiscal_month_for(new_years_day).unwrap(),
            FiscalMonth::new(2020, MonthNumber::Twelve).unwrap()
        );
        let next = CalendarDay::new(2021, MonthOfYear::January, 3).unwrap();
        assert_eq!(
            system.fiscal_month_for(next).unwrap(),
            FiscalMonth::new(2021, MonthNumber::One).unwrap()
        );
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(
            FiftyTwoFiftyThreeWeekAccountingPeriodSystem::from_raw(12, "last", 5).unwrap(),
            last_saturday_of_december()
        );
        assert!(matches!(
            FiftyTwoFiftyThreeWeekAccountingPeriodSystem::from_raw(0, "last", 5),
            Err(TimeError::ArgumentInvalid { .. })
        ));
        assert!(matches!(
            FiftyTwoFiftyThreeWeekAccountingPeriodSystem::from_raw(12, "sometimes", 5),
            Err(TimeError::ArgumentInvalid { .. })
        ));
        assert!(matches!(
            FiftyTwoFiftyThreeWeekAccountingPeriodSystem::from_raw(12, "last", 7),
            Err(TimeError::ArgumentInvalid {
                name: "last_day_of_week_in_accounting_year",
                ..
            })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            last_saturday_of_december().to_string(),
            "52/53-week fiscal year ending on the last Saturday of December"
        );
        assert_eq!(
            saturday_nearest_december_end().to_string(),
            "52/53-week fiscal year ending on the Saturday nearest the end of December"
        );
    }
}
