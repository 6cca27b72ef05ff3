//! Composition of optics of any two kinds.
//!
//! The kind of a composed optic is the meet of its operands' kinds in the
//! capability lattice (see [`OpticKind::meet`](super::OpticKind::meet)):
//!
//! ```text
//! Iso > Lens > Optional > Traversal > Fold
//! Iso > Prism > Optional
//! Lens > Getter > Fold
//! Traversal > Setter
//! ```
//!
//! Same-kind composition is written by hand next to each kind. Every other
//! pair is derived mechanically here: both operands are widened to the meet
//! kind with `From`, then composed with that kind's own rule. Read-only
//! kinds (`Getter`, `Fold`) and the write-only `Setter` have no meet, so no
//! `Compose` implementation exists for those pairs and misuse fails to
//! compile.
//!
//! # Composition Rules
//!
//! - Iso + K -> K, K + Iso -> K
//! - Lens + Prism -> Optional, Prism + Lens -> Optional
//! - Optional + (Lens | Prism) -> Optional
//! - Traversal + anything writable -> Traversal
//! - anything readable + Fold -> Fold
//! - anything writable + Setter -> Setter
//!
//! # Example
//!
//! ```
//! use optica::optics::{compose, Each, Optic, OpticKind};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Tag { Label(String), Priority(u8) }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Task { tags: Vec<Tag> }
//!
//! let priorities = compose(
//!     compose(lens!(Task, tags), Vec::<Tag>::each()),
//!     prism!(Tag, Priority),
//! );
//! assert_eq!(priorities.kind(), OpticKind::Traversal);
//!
//! let task = Task { tags: vec![Tag::Priority(1), Tag::Label("x".into()), Tag::Priority(2)] };
//! assert_eq!(priorities.get_all(&task), vec![1, 2]);
//!
//! let bumped = priorities.modify(task, |priority| priority + 1);
//! assert_eq!(bumped.tags, vec![Tag::Priority(2), Tag::Label("x".into()), Tag::Priority(3)]);
//! ```

use super::{Fold, Getter, Iso, Lens, Optic, Optional, Prism, Setter, Traversal};

/// Composition of an outer optic `Self` (`S -> A`) with an inner optic
/// `Inner` (`A -> B`), yielding an optic `S -> B`.
///
/// `Output` is the meet of both kinds.
pub trait Compose<Inner> {
    /// The composed optic.
    type Output: Optic;

    /// Focuses through `self`, then through `inner`.
    fn compose(self, inner: Inner) -> Self::Output;
}

/// Composes `outer` with `inner`.
///
/// Equivalent to `outer.compose(inner)`; handy for left-nested chains.
pub fn compose<X, Y>(outer: X, inner: Y) -> X::Output
where
    X: Compose<Y>,
{
    outer.compose(inner)
}

macro_rules! compose_by_widening {
    ($($outer:ident + $inner:ident => $output:ident;)+) => {
        $(
            impl<S: 'static, A: 'static, B: 'static> Compose<$inner<A, B>> for $outer<S, A> {
                type Output = $output<S, B>;

                fn compose(self, inner: $inner<A, B>) -> $output<S, B> {
                    $output::from(self).compose($output::from(inner))
                }
            }
        )+
    };
}

compose_by_widening! {
    Iso + Lens => Lens;
    Iso + Prism => Prism;
    Iso + Optional => Optional;
    Iso + Traversal => Traversal;
    Iso + Getter => Getter;
    Iso + Fold => Fold;
    Iso + Setter => Setter;

    Lens + Iso => Lens;
    Lens + Prism => Optional;
    Lens + Optional => Optional;
    Lens + Traversal => Traversal;
    Lens + Getter => Getter;
    Lens + Fold => Fold;
    Lens + Setter => Setter;

    Prism + Iso => Prism;
    Prism + Lens => Optional;
    Prism + Optional => Optional;
    Prism + Traversal => Traversal;
    Prism + Getter => Fold;
    Prism + Fold => Fold;
    Prism + Setter => Setter;

    Optional + Iso => Optional;
    Optional + Lens => Optional;
    Optional + Prism => Optional;
    Optional + Traversal => Traversal;
    Optional + Getter => Fold;
    Optional + Fold => Fold;
    Optional + Setter => Setter;

    Traversal + Iso => Traversal;
    Traversal + Lens => Traversal;
    Traversal + Prism => Traversal;
    Traversal + Optional => Traversal;
    Traversal + Getter => Fold;
    Traversal + Fold => Fold;
    Traversal + Setter => Setter;

    Getter + Iso => Getter;
    Getter + Lens => Getter;
    Getter + Prism => Fold;
    Getter + Optional => Fold;
    Getter + Traversal => Fold;
    Getter + Fold => Fold;

    Fold + Iso => Fold;
    Fold + Lens => Fold;
    Fold + Prism => Fold;
    Fold + Optional => Fold;
    Fold + Traversal => Fold;
    Fold + Getter => Fold;

    Setter + Iso => Setter;
    Setter + Lens => Setter;
    Setter + Prism => Setter;
    Setter + Optional => Setter;
    Setter + Traversal => Setter;
}

static_assertions::assert_not_impl_any!(Getter<i32, i32>: Compose<Setter<i32, i32>>);
static_assertions::assert_not_impl_any!(Fold<i32, i32>: Compose<Setter<i32, i32>>);
static_assertions::assert_not_impl_any!(Setter<i32, i32>: Compose<Getter<i32, i32>>);
static_assertions::assert_not_impl_any!(Setter<i32, i32>: Compose<Fold<i32, i32>>);
