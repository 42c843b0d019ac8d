//! Property-based tests for iso laws.
//!
//! - **GetReverse**: `reverse_get(get(s)) == s`
//! - **ReverseGet**: `get(reverse_get(a)) == a`
//! - **Invert**: `view(invert(i), a) == reverse_get(a)`, and inverting twice
//!   gives back the original behaviour
//!
//! The raw functions are reached through `with_iso`, which also checks that
//! composed isos keep their iso payload.

use std::collections::BTreeMap;

use kaleido::compose;
use kaleido::optics::{
    OpticKind, SimpleOptic, identity, iso, map_entries, non, over, set, view, with_iso,
};
use proptest::prelude::*;

fn negated() -> SimpleOptic<i64, i64> {
    iso(|x: i64| x.wrapping_neg(), |x: i64| x.wrapping_neg())
}

fn shifted() -> SimpleOptic<i64, i64> {
    iso(|x: i64| x.wrapping_add(7), |x: i64| x.wrapping_sub(7))
}

fn reversed() -> SimpleOptic<String, Vec<char>> {
    iso(
        |text: String| text.chars().rev().collect(),
        |chars: Vec<char>| chars.into_iter().rev().collect(),
    )
}

fn round_trips<A>(optic: &SimpleOptic<A, A>, value: &A) -> bool
where
    A: Clone + PartialEq + 'static,
{
    with_iso(optic, |raw| {
        raw.get(value.clone())
            .and_then(|focus| raw.reverse_get(focus))
            .is_ok_and(|back| back == *value)
    })
    .unwrap_or(false)
}

proptest! {
    /// GetReverse and ReverseGet for a self-inverse iso
    #[test]
    fn prop_negated_round_trips(x in -1_000_000i64..1_000_000) {
        prop_assert!(round_trips(&negated(), &x));
        let back =
            with_iso(&negated(), |raw| raw.get(raw.reverse_get(x).unwrap()).unwrap()).unwrap();
        prop_assert_eq!(back, x);
    }

    /// GetReverse for a type-changing iso
    #[test]
    fn prop_reversed_round_trips(text in "\\PC{0,16}") {
        let optic = reversed();
        let chars = view(&optic, text.clone()).unwrap();
        let back = with_iso(&optic, |raw| raw.reverse_get(chars)).unwrap().unwrap();
        prop_assert_eq!(back, text);
    }

    /// Viewing through the inverse is the reverse direction
    #[test]
    fn prop_invert_views_reverse(x in any::<i64>()) {
        let inverted = shifted().invert().unwrap();
        prop_assert_eq!(view(&inverted, x).unwrap(), x.wrapping_sub(7));
        let twice = inverted.invert().unwrap();
        prop_assert_eq!(view(&twice, x).unwrap(), view(&shifted(), x).unwrap());
    }

    /// Composed isos are isos and satisfy the laws
    #[test]
    fn prop_composed_isos_round_trip(x in any::<i64>()) {
        let composed = compose!(negated(), shifted(), identity());
        prop_assert_eq!(composed.kind(), OpticKind::Iso);
        prop_assert!(round_trips(&composed, &x));
        prop_assert_eq!(view(&composed, x).unwrap(), x.wrapping_neg().wrapping_add(7));
    }

    /// Inverting a composite reverses both steps
    #[test]
    fn prop_composed_invert(x in any::<i64>()) {
        let composed = compose!(negated(), shifted());
        let inverted = composed.invert().unwrap();
        prop_assert_eq!(view(&inverted, view(&composed, x).unwrap()).unwrap(), x);
    }

    /// `over` through an iso is get, apply, reverse
    #[test]
    fn prop_over_is_conjugation(x in -1_000i64..1_000, y in -1_000i64..1_000) {
        let updated = over(&negated(), |value| value + y, x).unwrap();
        prop_assert_eq!(updated, x - y);
    }

    /// Entries of a map round trip through the entries iso
    #[test]
    fn prop_map_entries_round_trip(
        map in prop::collection::btree_map(any::<u8>(), any::<i16>(), 0..12)
    ) {
        let entries = view(&map_entries(), map.clone()).unwrap();
        prop_assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
        prop_assert_eq!(set(&map_entries(), entries, BTreeMap::new()).unwrap(), map);
    }

    /// `non` reads absence as the default and stores the default as absence
    #[test]
    fn prop_non_default_is_absent(value in any::<u8>()) {
        let optic = non(0u8);
        let stored = set(&optic, value, None).unwrap();
        prop_assert_eq!(stored, (value != 0).then_some(value));
        prop_assert_eq!(view(&optic, stored).unwrap(), value);
    }
}
