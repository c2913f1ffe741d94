//! `serde` support through the sortable encoding.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::reporting::ReportingPeriod;
use crate::unit_of_time::{
    CalendarDay, CalendarMonth, CalendarQuarter, CalendarUnbounded, CalendarUnitOfTime,
    CalendarYear, FiscalMonth, FiscalQuarter, FiscalUnbounded, FiscalUnitOfTime, FiscalYear,
    GenericMonth, GenericQuarter, GenericUnbounded, GenericUnitOfTime, GenericYear, TimeUnit,
    UnitOfTime,
};

macro_rules! serde_via_sortable_string {
    ($($unit:ty),+ $(,)?) => {
        $(
            impl Serialize for $unit {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str(&self.serialize_to_sortable_string())
                }
            }

            impl<'de> Deserialize<'de> for $unit {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let value = String::deserialize(deserializer)?;
                    super::deserialize(&value).map_err(D::Error::custom)
                }
            }
        )+
    };
}

serde_via_sortable_string!(
    CalendarDay,
    CalendarMonth,
    CalendarQuarter,
    CalendarYear,
    CalendarUnbounded,
    FiscalMonth,
    FiscalQuarter,
    FiscalYear,
    FiscalUnbounded,
    GenericMonth,
    GenericQuarter,
    GenericYear,
    GenericUnbounded,
    CalendarUnitOfTime,
    FiscalUnitOfTime,
    GenericUnitOfTime,
    UnitOfTime,
);

impl<T: TimeUnit> Serialize for ReportingPeriod<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.serialize_to_sortable_string())
    }
}

impl<'de, T: TimeUnit> Deserialize<'de> for ReportingPeriod<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
