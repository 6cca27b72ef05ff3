//! Fold optics for read-only access to zero or more elements.
//!
//! A Fold is a read-only optic focusing on any number of values, in the
//! natural encounter order of the source. Every readable optic widens into a
//! Fold, and composing anything readable with a Fold yields a Fold.
//!
//! # Examples
//!
//! ```
//! use optica::optics::Fold;
//!
//! let evens = Fold::new(|numbers: &Vec<i32>| {
//!     numbers.iter().copied().filter(|number| number % 2 == 0).collect()
//! });
//!
//! let data = vec![1, 2, 3, 4, 5, 6];
//! assert_eq!(evens.get_all(&data), vec![2, 4, 6]);
//! assert_eq!(evens.length(&data), 3);
//! assert_eq!(evens.fold(&data, 0, |sum, number| sum + number), 12);
//! ```

use std::sync::Arc;

use super::function::GetAllFunction;
use super::{Compose, Optic, OpticKind};

/// A read-only optic focusing on zero or more values.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focused type
///
/// # Laws
///
/// `get_all` is deterministic: the same source always yields the same
/// sequence, in the same order.
pub struct Fold<S, A> {
    get_all_function: GetAllFunction<S, A>,
}

impl<S, A> Fold<S, A> {
    /// Creates a fold from a function collecting every focus.
    #[must_use]
    pub fn new<G>(get_all: G) -> Self
    where
        G: Fn(&S) -> Vec<A> + Send + Sync + 'static,
    {
        Self {
            get_all_function: Arc::new(get_all),
        }
    }

    /// Returns every focus in encounter order.
    pub fn get_all(&self, source: &S) -> Vec<A> {
        (self.get_all_function)(source)
    }

    /// Folds over every focus.
    pub fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Returns the number of foci.
    pub fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Returns `true` if there is no focus.
    pub fn is_empty(&self, source: &S) -> bool {
        self.get_all(source).is_empty()
    }

    /// Tests whether every focus satisfies the predicate.
    ///
    /// Vacuously `true` when there is no focus.
    pub fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().all(predicate)
    }

    /// Tests whether any focus satisfies the predicate.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().any(predicate)
    }

    /// Returns the first focus satisfying the predicate.
    pub fn find<P>(&self, source: &S, mut predicate: P) -> Option<A>
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source)
            .into_iter()
            .find(|element| predicate(element))
    }

    /// Returns the first focus, if any.
    pub fn head_option(&self, source: &S) -> Option<A> {
        self.get_all(source).into_iter().next()
    }

    /// Returns the last focus, if any.
    pub fn last_option(&self, source: &S) -> Option<A> {
        self.get_all(source).pop()
    }
}

impl<S, A> Optic for Fold<S, A> {
    const KIND: OpticKind = OpticKind::Fold;
}

impl<S, A> Clone for Fold<S, A> {
    fn clone(&self) -> Self {
        Self {
            get_all_function: Arc::clone(&self.get_all_function),
        }
    }
}

impl<S, A> std::fmt::Debug for Fold<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Fold").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static, B: 'static> Compose<Fold<A, B>> for Fold<S, A> {
    type Output = Fold<S, B>;

    /// Flattens the inner foci of every outer focus, in encounter order.
    fn compose(self, inner: Fold<A, B>) -> Fold<S, B> {
        let first = self.get_all_function;
        let second = inner.get_all_function;
        Fold::new(move |source: &S| {
            first(source)
                .iter()
                .flat_map(|intermediate| second(intermediate))
                .collect()
        })
    }
}

static_assertions::assert_impl_all!(Fold<Vec<i32>, i32>: Send, Sync, Clone);
