//! Setter optics: write-only access to zero or more foci.
//!
//! A Setter can only modify. It is the write half shared by lenses, prisms,
//! optionals, traversals and isos, and it composes only with those write
//! capable kinds. Composing a Setter with a `Getter` or `Fold` does not
//! compile.
//!
//! # Laws
//!
//! ```text
//! setter.modify(source, |x| x) == source
//! ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::Setter;
//!
//! let every = Setter::new(|numbers: Vec<i32>, function: &mut dyn FnMut(i32) -> i32| {
//!     numbers.into_iter().map(function).collect()
//! });
//!
//! assert_eq!(every.modify(vec![1, 2, 3], |number| number * 10), vec![10, 20, 30]);
//! assert_eq!(every.set(vec![1, 2, 3], 0), vec![0, 0, 0]);
//! ```

use std::sync::Arc;

use super::function::ModifyFunction;
use super::{Compose, Optic, OpticKind};

/// A write-only optic.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focused type
pub struct Setter<S, A> {
    modify_function: ModifyFunction<S, A>,
}

impl<S, A> Setter<S, A> {
    /// Creates a setter from a function rewriting every focus.
    #[must_use]
    pub fn new<M>(modify: M) -> Self
    where
        M: Fn(S, &mut dyn FnMut(A) -> A) -> S + Send + Sync + 'static,
    {
        Self {
            modify_function: Arc::new(modify),
        }
    }

    /// Applies `function` to every focus.
    pub fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        (self.modify_function)(source, &mut function)
    }

    /// Replaces every focus with `value`.
    pub fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }
}

impl<S, A> Optic for Setter<S, A> {
    const KIND: OpticKind = OpticKind::Setter;
}

impl<S, A> Clone for Setter<S, A> {
    fn clone(&self) -> Self {
        Self {
            modify_function: Arc::clone(&self.modify_function),
        }
    }
}

impl<S, A> std::fmt::Debug for Setter<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Setter").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static, B: 'static> Compose<Setter<A, B>> for Setter<S, A> {
    type Output = Setter<S, B>;

    fn compose(self, inner: Setter<A, B>) -> Setter<S, B> {
        let first = self.modify_function;
        let second = inner.modify_function;
        Setter::new(move |source: S, function: &mut dyn FnMut(B) -> B| {
            first(source, &mut |intermediate: A| second(intermediate, &mut *function))
        })
    }
}

/// Creates a [`Setter`] writing a struct field.
///
/// ```
/// use optica::setter;
///
/// struct Counter { hits: u32, label: &'static str }
///
/// let hits = setter!(Counter, hits);
/// let counter = hits.modify(Counter { hits: 1, label: "home" }, |hits| hits + 1);
/// assert_eq!(counter.hits, 2);
/// assert_eq!(counter.label, "home");
/// ```
#[macro_export]
macro_rules! setter {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::Setter::new(
            |mut source: $struct_type, function| {
                source.$field = function(source.$field);
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::Setter::new(
            |mut source: $struct_type<$($generic),+>, function| {
                source.$field = function(source.$field);
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::Setter::new(
            |mut source: $struct_type, function| {
                source.$field = function(source.$field);
                source
            },
        )
    };
}

static_assertions::assert_impl_all!(Setter<Vec<i32>, i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_setter_macro_modifies_only_its_field() {
        let x = setter!(Point, x);
        let moved = x.modify(Point { x: 1, y: 2 }, |x| x + 10);
        assert_eq!(moved, Point { x: 11, y: 2 });
    }

    #[test]
    fn test_setter_identity_law() {
        let x = setter!(Point, x);
        let point = Point { x: 1, y: 2 };
        assert_eq!(x.modify(point.clone(), |x| x), point);
    }

    #[test]
    fn test_setter_compose() {
        let rows = Setter::new(|rows: Vec<Vec<i32>>, function: &mut dyn FnMut(Vec<i32>) -> Vec<i32>| {
            rows.into_iter().map(function).collect()
        });
        let cells = Setter::new(|row: Vec<i32>, function: &mut dyn FnMut(i32) -> i32| {
            row.into_iter().map(function).collect()
        });

        let every_cell = rows.compose(cells);
        let mut counter = 0;
        let numbered = every_cell.modify(vec![vec![0, 0], vec![0]], |_| {
            counter += 1;
            counter
        });
        assert_eq!(numbered, vec![vec![1, 2], vec![3]]);
    }
}
