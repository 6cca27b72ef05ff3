//! Traversal optics for focusing on multiple elements.
//!
//! A Traversal reads and rewrites zero or more foci as a batch. Lenses,
//! prisms, optionals and isos all widen into one, and composing a Traversal
//! with anything writable yields a Traversal.
//!
//! # Laws
//!
//! 1. **Identity Law**: Modifying with identity returns the original.
//!    ```text
//!    traversal.modify(source.clone(), |x| x) == source
//!    ```
//!
//! 2. **Composition Law**: Two modifications equal one composed modification.
//!    ```text
//!    traversal.modify(traversal.modify(source.clone(), f), g)
//!        == traversal.modify(source, |x| g(f(x)))
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Compose, Each};
//!
//! let cells = Vec::<Vec<i32>>::each().compose(Vec::<i32>::each());
//! let grid = vec![vec![1, 2], vec![3]];
//!
//! assert_eq!(cells.get_all(&grid), vec![1, 2, 3]);
//! assert_eq!(cells.modify(grid, |cell| cell * 10), vec![vec![10, 20], vec![30]]);
//! ```

use std::sync::Arc;

use super::function::{GetAllFunction, ModifyFunction};
use super::{Compose, Fold, Optic, OpticKind, Setter};

/// A Traversal focuses on zero or more elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the container)
/// - `A`: The element type
pub struct Traversal<S, A> {
    get_all_function: GetAllFunction<S, A>,
    modify_function: ModifyFunction<S, A>,
}

impl<S, A> Traversal<S, A> {
    /// Creates a traversal from a reading function and a rewriting function.
    ///
    /// Both functions must visit the foci in the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Traversal;
    ///
    /// let both = Traversal::new(
    ///     |pair: &(i32, i32)| vec![pair.0, pair.1],
    ///     |pair: (i32, i32), function: &mut dyn FnMut(i32) -> i32| {
    ///         let first = function(pair.0);
    ///         (first, function(pair.1))
    ///     },
    /// );
    ///
    /// assert_eq!(both.get_all(&(1, 2)), vec![1, 2]);
    /// assert_eq!(both.modify((1, 2), |x| x + 1), (2, 3));
    /// ```
    #[must_use]
    pub fn new<G, M>(get_all: G, modify: M) -> Self
    where
        G: Fn(&S) -> Vec<A> + Send + Sync + 'static,
        M: Fn(S, &mut dyn FnMut(A) -> A) -> S + Send + Sync + 'static,
    {
        Self {
            get_all_function: Arc::new(get_all),
            modify_function: Arc::new(modify),
        }
    }

    /// Returns every focus in encounter order.
    pub fn get_all(&self, source: &S) -> Vec<A> {
        (self.get_all_function)(source)
    }

    /// Applies `function` to every focus, left to right.
    pub fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        (self.modify_function)(source, &mut function)
    }

    /// Replaces every focus with `value`.
    pub fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Returns the number of foci.
    pub fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Returns the first focus, if any.
    pub fn head_option(&self, source: &S) -> Option<A> {
        self.get_all(source).into_iter().next()
    }
}

impl<S, A> Optic for Traversal<S, A> {
    const KIND: OpticKind = OpticKind::Traversal;
}

impl<S, A> Clone for Traversal<S, A> {
    fn clone(&self) -> Self {
        Self {
            get_all_function: Arc::clone(&self.get_all_function),
            modify_function: Arc::clone(&self.modify_function),
        }
    }
}

impl<S, A> std::fmt::Debug for Traversal<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Traversal").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static, B: 'static> Compose<Traversal<A, B>> for Traversal<S, A> {
    type Output = Traversal<S, B>;

    /// Reads flatten in encounter order; the inner rewrite runs once per
    /// outer focus, left to right.
    fn compose(self, inner: Traversal<A, B>) -> Traversal<S, B> {
        let first_get_all = self.get_all_function;
        let second_get_all = inner.get_all_function;
        let first_modify = self.modify_function;
        let second_modify = inner.modify_function;
        Traversal::new(
            move |source: &S| {
                first_get_all(source)
                    .iter()
                    .flat_map(|intermediate| second_get_all(intermediate))
                    .collect()
            },
            move |source: S, function: &mut dyn FnMut(B) -> B| {
                first_modify(source, &mut |intermediate: A| {
                    second_modify(intermediate, &mut *function)
                })
            },
        )
    }
}

impl<S: 'static, A: 'static> From<Traversal<S, A>> for Fold<S, A> {
    fn from(traversal: Traversal<S, A>) -> Self {
        let get_all = traversal.get_all_function;
        Self::new(move |source: &S| get_all(source))
    }
}

impl<S: 'static, A: 'static> From<Traversal<S, A>> for Setter<S, A> {
    fn from(traversal: Traversal<S, A>) -> Self {
        let modify = traversal.modify_function;
        Self::new(move |source: S, function: &mut dyn FnMut(A) -> A| modify(source, function))
    }
}

static_assertions::assert_impl_all!(Traversal<Vec<i32>, i32>: Send, Sync, Clone);
