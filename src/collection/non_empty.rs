//! A vector that always holds at least one element.
//!
//! [`NonEmptyVec`] stores its first element separately from the rest, so
//! emptiness is unrepresentable. The first element lives on the heap, which
//! lets a recursive type hold a `NonEmptyVec` of itself. Every transformation that preserves length
//! (`map`, `iter`, the [`Each`](crate::optics::Each) adapter) returns a
//! `NonEmptyVec` again.
//!
//! # Examples
//!
//! ```rust
//! use optica::collection::NonEmptyVec;
//! use optica::non_empty_vec;
//!
//! let numbers = non_empty_vec![1, 2, 3];
//! assert_eq!(*numbers.first(), 1);
//! assert_eq!(numbers.len(), 3);
//!
//! let doubled = numbers.map(|value| value * 2);
//! assert_eq!(doubled.into_vec(), vec![2, 4, 6]);
//!
//! assert!(NonEmptyVec::<i32>::from_vec(Vec::new()).is_none());
//! ```

use std::fmt;

use thiserror::Error;

/// Returned when converting an empty collection into a [`NonEmptyVec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot build a NonEmptyVec from an empty collection")]
pub struct EmptyCollectionError;

/// An ordered sequence with at least one element.
///
/// # Type Parameters
///
/// - `T`: The element type
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: Box<T>,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Creates a sequence holding exactly one element.
    #[must_use]
    pub fn singleton(head: T) -> Self {
        Self::new(head, Vec::new())
    }

    /// Creates a sequence from a first element and the remaining ones.
    #[must_use]
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self {
            head: Box::new(head),
            tail,
        }
    }

    /// Converts a `Vec`, returning `None` when it is empty.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Option<Self> {
        let mut elements = elements.into_iter();
        elements
            .next()
            .map(|head| Self::new(head, elements.collect()))
    }

    /// Returns the first element. Always present.
    #[must_use]
    pub fn first(&self) -> &T {
        &self.head
    }

    /// Returns the last element. Always present.
    #[must_use]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or_else(|| self.first())
    }

    /// Returns the elements after the first.
    #[must_use]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.head),
            _ => self.tail.get(index - 1),
        }
    }

    /// Returns the number of elements; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always `false`; present so the type reads like the other sequences.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Appends an element, returning the extended sequence.
    #[must_use]
    pub fn push(mut self, element: T) -> Self {
        self.tail.push(element);
        self
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&*self.head).chain(self.tail.iter())
    }

    /// Applies `function` to every element, preserving order and length.
    #[must_use]
    pub fn map<B, F>(self, mut function: F) -> NonEmptyVec<B>
    where
        F: FnMut(T) -> B,
    {
        let head = function(*self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(function).collect())
    }

    /// Splits into the first element and the rest.
    #[must_use]
    pub fn into_parts(self) -> (T, Vec<T>) {
        (*self.head, self.tail)
    }

    /// Flattens into a `Vec` of the same order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.tail.len() + 1);
        elements.push(*self.head);
        elements.extend(self.tail);
        elements
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = EmptyCollectionError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(elements).ok_or(EmptyCollectionError)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(elements: NonEmptyVec<T>) -> Self {
        elements.into_vec()
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(*self.head).chain(self.tail)
    }
}

impl<T: fmt::Debug> fmt::Debug for NonEmptyVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Builds a [`NonEmptyVec`] from one or more literal elements.
///
/// An empty invocation does not compile.
///
/// ```rust
/// use optica::non_empty_vec;
///
/// let single = non_empty_vec![1];
/// assert_eq!(single.len(), 1);
///
/// let many = non_empty_vec!["a", "b", "c"];
/// assert_eq!(many.tail(), &["b", "c"]);
/// ```
#[macro_export]
macro_rules! non_empty_vec {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::collection::NonEmptyVec::new($head, vec![$($tail),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_from_vec_rejects_empty() {
        assert!(NonEmptyVec::<i32>::from_vec(Vec::new()).is_none());
        assert_eq!(
            NonEmptyVec::<i32>::try_from(Vec::new()),
            Err(EmptyCollectionError)
        );
    }

    #[rstest]
    #[case(vec![1], 1)]
    #[case(vec![1, 2, 3], 3)]
    fn test_from_vec_keeps_order_and_length(#[case] elements: Vec<i32>, #[case] length: usize) {
        let non_empty = NonEmptyVec::from_vec(elements.clone()).unwrap();
        assert_eq!(non_empty.len(), length);
        assert_eq!(non_empty.into_vec(), elements);
    }

    #[rstest]
    fn test_first_last_and_get() {
        let elements = crate::non_empty_vec![10, 20, 30];
        assert_eq!(*elements.first(), 10);
        assert_eq!(*elements.last(), 30);
        assert_eq!(elements.get(1), Some(&20));
        assert_eq!(elements.get(3), None);
        assert_eq!(*crate::non_empty_vec![5].last(), 5);
    }

    #[rstest]
    fn test_map_preserves_length() {
        let elements = crate::non_empty_vec![1, 2, 3].map(|value| value.to_string());
        assert_eq!(elements.len(), 3);
        assert_eq!(elements.iter().cloned().collect::<Vec<_>>(), ["1", "2", "3"]);
    }

    #[rstest]
    fn test_recursive_type_can_hold_itself() {
        #[derive(Clone, PartialEq, Debug)]
        enum Nested {
            End,
            More(NonEmptyVec<Nested>),
        }

        fn depth(nested: &Nested) -> usize {
            match nested {
                Nested::End => 0,
                Nested::More(children) => 1 + children.iter().map(depth).max().unwrap_or(0),
            }
        }

        let nested = Nested::More(crate::non_empty_vec![
            Nested::End,
            Nested::More(NonEmptyVec::singleton(Nested::End)),
        ]);
        assert_eq!(depth(&nested), 2);
        assert_eq!(nested.clone(), nested);
    }

    #[rstest]
    fn test_into_parts_and_into_iter_keep_order() {
        let (head, tail) = crate::non_empty_vec!['a', 'b', 'c'].into_parts();
        assert_eq!(head, 'a');
        assert_eq!(tail, vec!['b', 'c']);
        assert_eq!(
            crate::non_empty_vec![1, 2, 3].into_iter().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[rstest]
    fn test_debug_formats_as_list() {
        assert_eq!(format!("{:?}", crate::non_empty_vec![1, 2]), "[1, 2]");
    }

    #[rstest]
    fn test_error_display() {
        assert_eq!(
            EmptyCollectionError.to_string(),
            "cannot build a NonEmptyVec from an empty collection"
        );
    }
}
