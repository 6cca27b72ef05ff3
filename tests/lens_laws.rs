//! Property-based tests for Lens laws.
//!
//! This module verifies that derived, hand-written, composed and widened
//! lenses satisfy the required laws:
//!
//! - **GetPut Law**: `lens.set(source.clone(), lens.get(&source)) == source`
//! - **PutGet Law**: `lens.get(&lens.set(source, value.clone())) == value`
//! - **PutPut Law**: `lens.set(lens.set(source.clone(), v1), v2) == lens.set(source, v2)`

use optica::lens;
use optica::optics::{Compose, Lens, first_lens, iso_swap, second_lens};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    address: Address,
}

fn person_street() -> Lens<Person, String> {
    lens!(Person, address).compose(lens!(Address, street))
}

fn person_strategy() -> impl Strategy<Value = Person> {
    ("[a-z]{0,8}", "[a-z]{0,8}", "[a-z]{0,8}").prop_map(|(name, street, city)| Person {
        name,
        address: Address { street, city },
    })
}

// =============================================================================
// Macro-derived lens
// =============================================================================

proptest! {
    #[test]
    fn prop_point_x_get_put_law(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        prop_assert_eq!(x_lens.set(point.clone(), x_lens.get(&point)), point);
    }

    #[test]
    fn prop_point_x_put_get_law(x in any::<i32>(), y in any::<i32>(), value in any::<i32>()) {
        let x_lens = lens!(Point, x);
        prop_assert_eq!(x_lens.get(&x_lens.set(Point { x, y }, value)), value);
    }

    #[test]
    fn prop_point_x_put_put_law(
        x in any::<i32>(),
        y in any::<i32>(),
        first in any::<i32>(),
        second in any::<i32>()
    ) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        prop_assert_eq!(
            x_lens.set(x_lens.set(point.clone(), first), second),
            x_lens.set(point, second)
        );
    }

    #[test]
    fn prop_point_x_set_leaves_y(x in any::<i32>(), y in any::<i32>(), value in any::<i32>()) {
        prop_assert_eq!(lens!(Point, x).set(Point { x, y }, value).y, y);
    }
}

// =============================================================================
// Composed lens
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_get_put_law(person in person_strategy()) {
        let lens = person_street();
        prop_assert_eq!(lens.set(person.clone(), lens.get(&person)), person);
    }

    #[test]
    fn prop_composed_put_get_law(person in person_strategy(), street in "[a-z]{0,8}") {
        let lens = person_street();
        prop_assert_eq!(lens.get(&lens.set(person, street.clone())), street);
    }

    #[test]
    fn prop_composed_put_put_law(
        person in person_strategy(),
        first in "[a-z]{0,8}",
        second in "[a-z]{0,8}"
    ) {
        let lens = person_street();
        prop_assert_eq!(
            lens.set(lens.set(person.clone(), first), second.clone()),
            lens.set(person, second)
        );
    }

    #[test]
    fn prop_composed_set_leaves_siblings(person in person_strategy(), street in "[a-z]{0,8}") {
        let updated = person_street().set(person.clone(), street);
        prop_assert_eq!(updated.name, person.name);
        prop_assert_eq!(updated.address.city, person.address.city);
    }
}

// =============================================================================
// Pair lenses and widened iso
// =============================================================================

proptest! {
    #[test]
    fn prop_pair_lenses_laws(pair in any::<(i16, bool)>(), number in any::<i16>(), flag in any::<bool>()) {
        let first = first_lens::<i16, bool>();
        let second = second_lens::<i16, bool>();

        prop_assert_eq!(first.set(pair, first.get(&pair)), pair);
        prop_assert_eq!(first.get(&first.set(pair, number)), number);
        prop_assert_eq!(second.get(&second.set(pair, flag)), flag);
    }

    #[test]
    fn prop_iso_as_lens_laws(pair in any::<(u8, char)>(), swapped in any::<(char, u8)>()) {
        let lens: Lens<(u8, char), (char, u8)> = iso_swap().into();

        prop_assert_eq!(lens.set(pair, lens.get(&pair)), pair);
        prop_assert_eq!(lens.get(&lens.set(pair, swapped)), swapped);
    }
}
