//! Property-based tests for Iso laws.
//!
//! - **GetReverseGet Law**: `iso.reverse_get(iso.get(&source)) == source`
//! - **ReverseGetGet Law**: `iso.get(&iso.reverse_get(value.clone())) == value`

use optica::iso;
use optica::optics::{Compose, Iso, iso_identity, iso_swap};
use proptest::prelude::*;

fn chars() -> Iso<String, Vec<char>> {
    iso!(
        |text: &String| text.chars().collect::<Vec<char>>(),
        |letters: Vec<char>| letters.into_iter().collect::<String>()
    )
}

fn wrapping_offset() -> Iso<i32, i32> {
    iso!(|number: &i32| number.wrapping_add(7), |number: i32| number.wrapping_sub(7))
}

proptest! {
    #[test]
    fn prop_chars_round_trips(text in ".{0,12}", letters in prop::collection::vec(any::<char>(), 0..12)) {
        let iso = chars();
        prop_assert_eq!(iso.reverse_get(iso.get(&text)), text);
        prop_assert_eq!(iso.get(&iso.reverse_get(letters.clone())), letters);
    }

    #[test]
    fn prop_swap_round_trips(pair in any::<(i64, bool)>(), swapped in any::<(bool, i64)>()) {
        let iso = iso_swap::<i64, bool>();
        prop_assert_eq!(iso.reverse_get(iso.get(&pair)), pair);
        prop_assert_eq!(iso.get(&iso.reverse_get(swapped)), swapped);
    }

    #[test]
    fn prop_identity_round_trips(number in any::<u64>()) {
        let iso = iso_identity::<u64>();
        prop_assert_eq!(iso.get(&number), number);
        prop_assert_eq!(iso.reverse_get(number), number);
    }

    #[test]
    fn prop_composed_round_trips(number in any::<i32>()) {
        let iso = wrapping_offset().compose(wrapping_offset());
        prop_assert_eq!(iso.reverse_get(iso.get(&number)), number);
        prop_assert_eq!(iso.get(&number), number.wrapping_add(14));
    }

    #[test]
    fn prop_reverse_round_trips(number in any::<i32>()) {
        let reversed = wrapping_offset().reverse();
        prop_assert_eq!(reversed.get(&number), number.wrapping_sub(7));
        prop_assert_eq!(reversed.reverse_get(reversed.get(&number)), number);
    }
}
