//! Depth traversals over self-similar data.
//!
//! Given a one-level "descend to children" [`Traversal<T, T>`] for some
//! recursive type `T`, [`at_depth`] builds the traversal focusing on every
//! node exactly `m` edges below the root by composing the one-level step
//! with itself `m` times. A branch that ends before depth `m` contributes no
//! foci; it is not an error.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{at_depth, Traversal};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Dir { name: &'static str, entries: Vec<Dir> }
//!
//! let children = Traversal::new(
//!     |dir: &Dir| dir.entries.clone(),
//!     |mut dir: Dir, function: &mut dyn FnMut(Dir) -> Dir| {
//!         dir.entries = dir.entries.into_iter().map(function).collect();
//!         dir
//!     },
//! );
//!
//! let leaf = |name| Dir { name, entries: vec![] };
//! let root = Dir {
//!     name: "/",
//!     entries: vec![Dir { name: "usr", entries: vec![leaf("bin"), leaf("lib")] }, leaf("tmp")],
//! };
//!
//! let names: Vec<_> = at_depth(children, 2).get_all(&root).into_iter().map(|dir| dir.name).collect();
//! assert_eq!(names, vec!["bin", "lib"]);
//! ```

use super::{Compose, Fold, Getter, Traversal, identity_traversal};

/// Builds the traversal focusing on every node exactly `depth` edges below
/// the source.
///
/// Depth zero is the identity traversal. Larger depths are the left fold of
/// `compose` over `depth` copies of `descend`.
#[must_use]
pub fn at_depth<T>(descend: Traversal<T, T>, depth: usize) -> Traversal<T, T>
where
    T: Clone + 'static,
{
    tracing::trace!(depth, "building depth traversal");
    (0..depth).fold(identity_traversal(), |traversal, _| {
        traversal.compose(descend.clone())
    })
}

/// Reads the label of every node exactly `depth` edges below `source`, in
/// left-to-right depth-first encounter order.
///
/// ```
/// use optica::optics::{values_at_depth, Getter, Traversal};
///
/// let halves = Traversal::new(
///     |range: &(u32, u32)| {
///         let (low, high) = *range;
///         if high - low < 2 {
///             Vec::new()
///         } else {
///             let middle = (low + high) / 2;
///             vec![(low, middle), (middle, high)]
///         }
///     },
///     |range: (u32, u32), _: &mut dyn FnMut((u32, u32)) -> (u32, u32)| range,
/// );
/// let low = Getter::new(|range: &(u32, u32)| range.0);
///
/// assert_eq!(values_at_depth(halves, low, 2, &(0, 8)), vec![0, 2, 4, 6]);
/// ```
pub fn values_at_depth<T, L>(
    descend: Traversal<T, T>,
    label: Getter<T, L>,
    depth: usize,
    source: &T,
) -> Vec<L>
where
    T: Clone + 'static,
    L: 'static,
{
    Fold::from(at_depth(descend, depth))
        .compose(label)
        .get_all(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn countdown() -> Traversal<u32, u32> {
        Traversal::new(
            |number: &u32| if *number == 0 { Vec::new() } else { vec![number - 1, number - 1] },
            |number: u32, _: &mut dyn FnMut(u32) -> u32| number,
        )
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(3, 8)]
    #[case(4, 0)]
    fn test_at_depth_counts_foci(#[case] depth: usize, #[case] expected: usize) {
        assert_eq!(at_depth(countdown(), depth).length(&3), expected);
    }

    #[rstest]
    fn test_at_depth_zero_is_identity() {
        let identity = at_depth(countdown(), 0);
        assert_eq!(identity.get_all(&7), vec![7]);
        assert_eq!(identity.modify(7, |number| number * 2), 14);
    }

    #[rstest]
    fn test_values_at_depth_uses_label() {
        let parity = Getter::new(|number: &u32| number % 2 == 0);
        assert_eq!(values_at_depth(countdown(), parity, 1, &3), vec![true, true]);
    }
}
