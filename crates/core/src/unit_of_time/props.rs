//! Property-based tests for unit-of-time ordering and equality.
//!
//! - Property 1: Ordering totality within a concrete type
//! - Property 2: Hash consistency
//! - Property 3: Stepping

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use super::{BoundedTimeUnit, TimeUnit, UnitOfTime};
use crate::test_support::{
    calendar_day, calendar_month, fiscal_quarter, generic_year, same_type_pair, unit_of_time,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Ordering totality within a concrete type
    // =========================================================================

    /// Property 1.1: Exactly one of `<`, `==`, `>` holds for two values of one type.
    #[test]
    fn prop_exactly_one_relation_holds((a, b) in same_type_pair()) {
        let relations = [a < b, a == b, a > b];
        prop_assert_eq!(relations.iter().filter(|held| **held).count(), 1);
    }

    /// Property 1.2: `try_compare` is antisymmetric.
    #[test]
    fn prop_compare_is_antisymmetric((a, b) in same_type_pair()) {
        let forward = a.try_compare(&b).unwrap();
        let backward = b.try_compare(&a).unwrap();
        prop_assert_eq!(forward, backward.reverse());
    }

    /// Property 1.3: `try_compare` is transitive.
    #[test]
    fn prop_compare_is_transitive(
        a in calendar_day(),
        b in calendar_day(),
        c in calendar_day(),
    ) {
        let mut sorted = [a, b, c];
        sorted.sort();
        prop_assert_ne!(sorted[0].try_compare(&sorted[1]).unwrap(), Ordering::Greater);
        prop_assert_ne!(sorted[1].try_compare(&sorted[2]).unwrap(), Ordering::Greater);
        prop_assert_ne!(sorted[0].try_compare(&sorted[2]).unwrap(), Ordering::Greater);
    }

    /// Property 1.4: Erased comparison agrees with concrete comparison.
    #[test]
    fn prop_erased_compare_matches_concrete(a in fiscal_quarter(), b in fiscal_quarter()) {
        let erased_a: UnitOfTime = a.into();
        let erased_b: UnitOfTime = b.into();
        prop_assert_eq!(erased_a.try_compare(&erased_b).unwrap(), a.cmp(&b));
        prop_assert_eq!(a.compare_to_unit(Some(&erased_b)).unwrap(), a.cmp(&b));
    }

    /// Property 1.5: Every value follows a missing one.
    #[test]
    fn prop_missing_precedes_everything(x in unit_of_time()) {
        prop_assert!(None < Some(x));
        prop_assert!(!(Some(x) < None));
        prop_assert_eq!(x.compare_to(None).unwrap(), Ordering::Greater);
    }

    /// Property 1.6: Values of different concrete types never compare.
    #[test]
    fn prop_cross_type_comparison_fails(a in unit_of_time(), b in unit_of_time()) {
        let same_type = a.kind() == b.kind() && a.granularity() == b.granularity();
        prop_assert_eq!(a.try_compare(&b).is_ok(), same_type);
        prop_assert_eq!(a.partial_cmp(&b).is_some(), same_type);
    }

    // =========================================================================
    // Property 2: Hash consistency
    // =========================================================================

    /// Property 2.1: Equal values hash equally, whether concrete or erased.
    #[test]
    fn prop_equal_values_hash_equally(a in calendar_month()) {
        let copy = a;
        prop_assert_eq!(hash_of(&a), hash_of(&copy));
        let erased: UnitOfTime = a.into();
        prop_assert_eq!(hash_of(&erased), hash_of(&UnitOfTime::from(copy)));
    }

    // =========================================================================
    // Property 3: Stepping
    // =========================================================================

    /// Property 3.1: Stepping forward then back returns the starting value.
    #[test]
    fn prop_plus_is_invertible(day in calendar_day(), count in -400i32..400) {
        if let Ok(moved) = day.plus(count) {
            prop_assert_eq!(moved.plus(-count).unwrap(), day);
            prop_assert_eq!(moved.cmp(&day), count.cmp(&0));
        }
    }

    /// Property 3.2: Stepping preserves ordering.
    #[test]
    fn prop_plus_is_monotonic(year in generic_year(), count in 1i32..50) {
        if let Ok(moved) = year.plus(count) {
            prop_assert!(moved > year);
            prop_assert_eq!(moved.year() - year.year(), count);
        }
    }
}
