//! Standard optics that are commonly used.
//!
//! This module provides pre-defined optics for tuples and identities. They
//! are the building blocks of the recursive traversal builder: the identity
//! traversal is depth zero, and `second_lens` projects the children out of a
//! `(label, children)` node payload.

use super::{Iso, Lens, Traversal};

/// Creates an identity Iso that doesn't transform the value.
///
/// The identity Iso satisfies:
/// - `iso.get(&x) == x`
/// - `iso.reverse_get(x) == x`
///
/// # Example
///
/// ```
/// use optica::optics::iso_identity;
///
/// let identity_iso = iso_identity::<i32>();
///
/// assert_eq!(identity_iso.get(&42), 42);
/// assert_eq!(identity_iso.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<T: Clone + 'static>() -> Iso<T, T> {
    Iso::new(T::clone, |value: T| value)
}

/// Creates an Iso that swaps the elements of a pair.
///
/// Converts `(A, B)` to `(B, A)` and vice versa.
///
/// # Example
///
/// ```
/// use optica::optics::iso_swap;
///
/// let swap_iso = iso_swap::<i32, String>();
///
/// let pair = (42, "hello".to_string());
/// let swapped = swap_iso.get(&pair);
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// assert_eq!(swap_iso.reverse_get(swapped), pair);
/// ```
#[must_use]
pub fn iso_swap<A, B>() -> Iso<(A, B), (B, A)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    Iso::new(
        |(first, second): &(A, B)| (second.clone(), first.clone()),
        |(second, first): (B, A)| (first, second),
    )
}

/// Creates a Lens focusing on the first element of a pair.
///
/// ```
/// use optica::optics::first_lens;
///
/// let first = first_lens::<i32, &str>();
/// assert_eq!(first.get(&(1, "a")), 1);
/// assert_eq!(first.set((1, "a"), 2), (2, "a"));
/// ```
#[must_use]
pub fn first_lens<A, B>() -> Lens<(A, B), A>
where
    A: Clone + 'static,
    B: 'static,
{
    Lens::new(
        |(first, _): &(A, B)| first.clone(),
        |(_, second): (A, B), first: A| (first, second),
    )
}

/// Creates a Lens focusing on the second element of a pair.
///
/// ```
/// use optica::optics::second_lens;
///
/// let second = second_lens::<i32, &str>();
/// assert_eq!(second.get(&(1, "a")), "a");
/// assert_eq!(second.set((1, "a"), "b"), (1, "b"));
/// ```
#[must_use]
pub fn second_lens<A, B>() -> Lens<(A, B), B>
where
    A: 'static,
    B: Clone + 'static,
{
    Lens::new(
        |(_, second): &(A, B)| second.clone(),
        |(first, _): (A, B), second: B| (first, second),
    )
}

/// Creates a Traversal with exactly one focus: the source itself.
///
/// Composing with it on either side changes nothing.
#[must_use]
pub fn identity_traversal<T: Clone + 'static>() -> Traversal<T, T> {
    Traversal::new(
        |source: &T| vec![source.clone()],
        |source: T, function: &mut dyn FnMut(T) -> T| function(source),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::Compose;
    use rstest::rstest;

    #[rstest]
    fn test_iso_swap_round_trips() {
        let swap = iso_swap::<i32, char>();
        let pair = (1, 'x');
        assert_eq!(swap.reverse_get(swap.get(&pair)), pair);
        assert_eq!(swap.get(&swap.reverse_get(('y', 2))), ('y', 2));
    }

    #[rstest]
    fn test_iso_swap_is_its_own_reverse() {
        let reversed = iso_swap::<i32, char>().reverse();
        assert_eq!(reversed.get(&('a', 1)), (1, 'a'));
    }

    #[rstest]
    fn test_pair_lenses_leave_sibling_untouched() {
        let pair = (String::from("left"), vec![1, 2]);

        let updated = first_lens().set(pair.clone(), String::from("new"));
        assert_eq!(updated.1, vec![1, 2]);

        let updated = second_lens().set(pair, vec![3]);
        assert_eq!(updated.0, "left");
    }

    #[rstest]
    fn test_identity_traversal_is_neutral() {
        let identity = identity_traversal::<Vec<i32>>();
        assert_eq!(identity.get_all(&vec![1, 2]), vec![vec![1, 2]]);

        let elements = crate::optics::each::<Vec<i32>>();
        let composed = identity.compose(elements.clone());
        assert_eq!(composed.get_all(&vec![1, 2]), elements.get_all(&vec![1, 2]));
        assert_eq!(composed.modify(vec![1, 2], |x| x + 1), vec![2, 3]);
    }

    #[rstest]
    fn test_iso_identity() {
        let identity = iso_identity::<String>();
        assert_eq!(identity.get(&"a".to_string()), "a");
        assert_eq!(identity.modify("a".to_string(), |text| text + "b"), "ab");
    }
}
