//! Property-based tests for the text encodings.
//!
//! - Property 4: Round-trip
//! - Property 5: Sortable-string order preservation

use proptest::prelude::*;

use super::{deserialize, serialize_to_sortable_string, serialize_to_string};
use crate::test_support::{
    calendar_day, calendar_month, calendar_quarter, fiscal_month, generic_quarter,
    same_type_pair, unit_of_time,
};
use crate::unit_of_time::{CalendarDay, CalendarMonth, FiscalMonth, TimeUnit, UnitOfTime};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 4: Round-trip
    // =========================================================================

    /// Property 4.1: Canonical encoding decodes to an equal value.
    #[test]
    fn prop_canonical_round_trip(unit in unit_of_time()) {
        let text = serialize_to_string(&unit);
        prop_assert_eq!(deserialize::<UnitOfTime>(&text).unwrap(), unit);
    }

    /// Property 4.2: Sortable encoding decodes to an equal value.
    #[test]
    fn prop_sortable_round_trip(unit in unit_of_time()) {
        let text = serialize_to_sortable_string(&unit);
        prop_assert_eq!(deserialize::<UnitOfTime>(&text).unwrap(), unit);
    }

    /// Property 4.3: Concrete types round-trip without erasure.
    #[test]
    fn prop_concrete_round_trip(day in calendar_day(), month in fiscal_month()) {
        prop_assert_eq!(deserialize::<CalendarDay>(&day.serialize_to_string()).unwrap(), day);
        prop_assert_eq!(
            deserialize::<FiscalMonth>(&month.serialize_to_sortable_string()).unwrap(),
            month
        );
    }

    // =========================================================================
    // Property 5: Sortable-string order preservation
    // =========================================================================

    /// Property 5.1: String order equals chronological order for erased pairs.
    #[test]
    fn prop_sortable_order_matches((a, b) in same_type_pair()) {
        let ordering = a.try_compare(&b).unwrap();
        prop_assert_eq!(
            serialize_to_sortable_string(&a).cmp(&serialize_to_sortable_string(&b)),
            ordering
        );
    }

    /// Property 5.2: Sorting encodings sorts the values.
    #[test]
    fn prop_sorting_strings_sorts_values(
        mut months in prop::collection::vec(calendar_month(), 2..20),
    ) {
        let mut encoded: Vec<String> =
            months.iter().map(TimeUnit::serialize_to_sortable_string).collect();
        encoded.sort();
        months.sort();
        let decoded: Vec<CalendarMonth> = encoded
            .iter()
            .map(|text| deserialize(text).unwrap())
            .collect();
        prop_assert_eq!(decoded, months);
    }

    /// Property 5.3: Quarters and other padded fields keep order at the boundaries.
    #[test]
    fn prop_quarter_order(
        a in calendar_quarter(),
        b in calendar_quarter(),
        c in generic_quarter(),
        d in generic_quarter(),
    ) {
        prop_assert_eq!(
            a.serialize_to_sortable_string().cmp(&b.serialize_to_sortable_string()),
            a.cmp(&b)
        );
        prop_assert_eq!(
            c.serialize_to_sortable_string().cmp(&d.serialize_to_sortable_string()),
            c.cmp(&d)
        );
    }
}
