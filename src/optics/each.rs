//! Each combinator for element-wise traversal of containers.
//!
//! This module provides the [`Each`] trait: the two container operations
//! optics need (`map_each` and `collect_all`) and the "each element"
//! [`Traversal`] built from them.
//!
//! # Examples
//!
//! ```
//! use optica::optics::Each;
//!
//! let traversal = Vec::<i32>::each();
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(traversal.get_all(&numbers), vec![1, 2, 3, 4, 5]);
//! assert_eq!(traversal.modify(numbers, |x| x * 2), vec![2, 4, 6, 8, 10]);
//! ```
//!
//! # Implementations
//!
//! - [`Vec<T>`]
//! - [`NonEmptyVec<T>`]
//! - [`Option<T>`]

use crate::collection::NonEmptyVec;
use crate::optics::Traversal;

/// A container whose elements can be rewritten and listed in order.
///
/// `map_each` preserves order and length; `collect_all` lists the elements
/// in iteration order. Both are total.
pub trait Each: Sized {
    /// The element type.
    type Element;

    /// Applies `function` to every element, preserving order and length.
    #[must_use]
    fn map_each<F>(self, function: F) -> Self
    where
        F: FnMut(Self::Element) -> Self::Element;

    /// Lists every element in iteration order.
    fn collect_all(&self) -> Vec<Self::Element>;

    /// Returns a Traversal that focuses on all elements.
    #[must_use]
    fn each() -> Traversal<Self, Self::Element>
    where
        Self: 'static,
        Self::Element: 'static,
    {
        Traversal::new(
            |source: &Self| source.collect_all(),
            |source: Self, function: &mut dyn FnMut(Self::Element) -> Self::Element| {
                source.map_each(function)
            },
        )
    }
}

impl<T: Clone> Each for Vec<T> {
    type Element = T;

    fn map_each<F>(self, function: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.into_iter().map(function).collect()
    }

    fn collect_all(&self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Clone> Each for NonEmptyVec<T> {
    type Element = T;

    fn map_each<F>(self, function: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.map(function)
    }

    fn collect_all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> NonEmptyVec<T> {
    /// Lists every element in order, keeping the non-empty guarantee.
    #[must_use]
    pub fn collect_all_non_empty(&self) -> Self {
        self.clone()
    }
}

impl<T: Clone> Each for Option<T> {
    type Element = T;

    fn map_each<F>(self, function: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.map(function)
    }

    fn collect_all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Returns the "each element" traversal of `T`.
///
/// Shorthand for `T::each()`.
#[must_use]
pub fn each<T>() -> Traversal<T, T::Element>
where
    T: Each + 'static,
    T::Element: 'static,
{
    T::each()
}
