//! Prism optics for focusing on enum variants.
//!
//! A Prism focuses on zero or one value: the payload of one case of a sum
//! type. Reading may fail (the source is another case); writing back through
//! `review` always succeeds, building the case from a payload.
//!
//! # Laws
//!
//! 1. **ReviewPreview Law**: Building then matching yields the payload.
//!    ```text
//!    prism.get_or_modify(prism.review(value.clone())) == Either::Right(value)
//!    ```
//!
//! 2. **Unmatched Law**: A source of another case comes back unaltered.
//!    ```text
//!    prism.preview(&source).is_none() implies
//!        prism.get_or_modify(source.clone()) == Either::Left(source)
//!    ```
//!
//! 3. **PreviewReview Law**: Rebuilding a matched payload yields the source.
//!    ```text
//!    prism.preview(&source) == Some(value) implies prism.review(value) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::control::Either;
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.preview(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle.get_or_modify(Shape::Square(2.0)), Either::Left(Shape::Square(2.0)));
//! assert_eq!(circle.review(1.5), Shape::Circle(1.5));
//! ```

use std::sync::Arc;

use super::function::{MatchFunction, PreviewFunction, ReviewFunction};
use super::{Compose, Fold, Optic, OpticKind, Optional, Setter, Traversal};
use crate::control::Either;

/// A Prism focuses on the payload of one case of a sum type.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole enum)
/// - `A`: The payload of the focused case
pub struct Prism<S, A> {
    preview_function: PreviewFunction<S, A>,
    review_function: ReviewFunction<S, A>,
    match_function: Option<MatchFunction<S>>,
}

impl<S, A> Prism<S, A> {
    /// Creates a prism from a matching function and a constructor.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    ///
    /// let parsed = Prism::new(
    ///     |text: &String| text.parse::<i32>().ok(),
    ///     |number: i32| number.to_string(),
    /// );
    ///
    /// assert_eq!(parsed.preview(&"42".to_string()), Some(42));
    /// assert_eq!(parsed.preview(&"forty".to_string()), None);
    /// ```
    #[must_use]
    pub fn new<P, R>(preview: P, review: R) -> Self
    where
        P: Fn(&S) -> Option<A> + Send + Sync + 'static,
        R: Fn(A) -> S + Send + Sync + 'static,
    {
        Self {
            preview_function: Arc::new(preview),
            review_function: Arc::new(review),
            match_function: None,
        }
    }

    /// Creates a prism that can also test for its case without extracting
    /// the payload.
    ///
    /// `set` and `is_match` use `matches` instead of `preview`, so writing
    /// through the prism never clones a payload only to discard it.
    /// `matches(source)` must agree with `preview(source).is_some()`.
    ///
    /// ```
    /// use optica::optics::Prism;
    ///
    /// let first_word = Prism::with_matcher(
    ///     |words: &Vec<String>| words.first().cloned().filter(|_| words.len() == 1),
    ///     |word: String| vec![word],
    ///     |words: &Vec<String>| words.len() == 1,
    /// );
    ///
    /// assert!(first_word.is_match(&vec!["one".to_string()]));
    /// assert_eq!(first_word.set(vec![], "two".to_string()), Vec::<String>::new());
    /// ```
    #[must_use]
    pub fn with_matcher<P, R, M>(preview: P, review: R, matches: M) -> Self
    where
        P: Fn(&S) -> Option<A> + Send + Sync + 'static,
        R: Fn(A) -> S + Send + Sync + 'static,
        M: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self {
            match_function: Some(Arc::new(matches)),
            ..Self::new(preview, review)
        }
    }

    /// Returns the payload if the source is the focused case.
    pub fn preview(&self, source: &S) -> Option<A> {
        (self.preview_function)(source)
    }

    /// Matches the source: `Right(payload)` on a match, otherwise
    /// `Left(source)` carrying the original unchanged.
    pub fn get_or_modify(&self, source: S) -> Either<S, A> {
        match self.preview(&source) {
            Some(value) => Either::Right(value),
            None => Either::Left(source),
        }
    }

    /// Builds the focused case from a payload.
    pub fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    /// Alias of [`Prism::review`].
    pub fn reverse_get(&self, value: A) -> S {
        self.review(value)
    }

    /// Returns `true` if the source is the focused case.
    pub fn is_match(&self, source: &S) -> bool {
        match &self.match_function {
            Some(matches) => matches(source),
            None => self.preview(source).is_some(),
        }
    }

    /// Replaces the payload if the source is the focused case; any other
    /// case is returned unchanged.
    pub fn set(&self, source: S, value: A) -> S {
        if self.is_match(&source) {
            self.review(value)
        } else {
            source
        }
    }

    /// Applies `function` to the payload if the source is the focused case;
    /// any other case is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle = prism!(Shape, Circle);
    /// assert_eq!(circle.modify(Shape::Circle(2.0), |r| r * 2.0), Shape::Circle(4.0));
    /// assert_eq!(circle.modify(Shape::Square(2.0), |r| r * 2.0), Shape::Square(2.0));
    /// ```
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.preview(&source) {
            Some(value) => self.review(function(value)),
            None => source,
        }
    }

    /// Like [`Prism::modify`], but returns `None` when the case does not match.
    pub fn modify_option<F>(&self, source: &S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview(source).map(|value| self.review(function(value)))
    }
}

impl<S, A> Optic for Prism<S, A> {
    const KIND: OpticKind = OpticKind::Prism;
}

impl<S, A> Clone for Prism<S, A> {
    fn clone(&self) -> Self {
        Self {
            preview_function: Arc::clone(&self.preview_function),
            review_function: Arc::clone(&self.review_function),
            match_function: self.match_function.clone(),
        }
    }
}

impl<S, A> std::fmt::Debug for Prism<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Prism").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static, B: 'static> Compose<Prism<A, B>> for Prism<S, A> {
    type Output = Prism<S, B>;

    /// Matches the outer case, then the inner one; the first mismatch wins.
    fn compose(self, inner: Prism<A, B>) -> Prism<S, B> {
        let outer_preview = self.preview_function;
        let outer_review = self.review_function;
        let inner_preview = inner.preview_function;
        let inner_review = inner.review_function;
        Prism::new(
            move |source: &S| outer_preview(source).and_then(|value| inner_preview(&value)),
            move |value: B| outer_review(inner_review(value)),
        )
    }
}

impl<S: 'static, A: 'static> From<Prism<S, A>> for Optional<S, A> {
    fn from(prism: Prism<S, A>) -> Self {
        let preview = Arc::clone(&prism.preview_function);
        Self::new(move |source: &S| preview(source), move |source: S, value: A| {
            prism.set(source, value)
        })
    }
}

impl<S: 'static, A: 'static> From<Prism<S, A>> for Traversal<S, A> {
    fn from(prism: Prism<S, A>) -> Self {
        Self::from(Optional::from(prism))
    }
}

impl<S: 'static, A: 'static> From<Prism<S, A>> for Fold<S, A> {
    fn from(prism: Prism<S, A>) -> Self {
        let preview = prism.preview_function;
        Self::new(move |source: &S| preview(source).into_iter().collect())
    }
}

impl<S: 'static, A: 'static> From<Prism<S, A>> for Setter<S, A> {
    fn from(prism: Prism<S, A>) -> Self {
        Self::new(move |source: S, function: &mut dyn FnMut(A) -> A| prism.modify(source, function))
    }
}

/// Creates a [`Prism`] for a single-payload tuple variant of an enum.
///
/// The payload type must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, Variant)
/// prism!(GenericEnum<Concrete>, Variant)
/// ```
///
/// # Example
///
/// ```
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Tag { Label(String), Priority(u8) }
///
/// let priority = prism!(Tag, Priority);
/// assert_eq!(priority.preview(&Tag::Priority(3)), Some(3));
/// assert_eq!(priority.preview(&Tag::Label("x".to_string())), None);
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::Prism::with_matcher(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(value.clone()),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: &$enum_type| matches!(source, $enum_type::$variant(_)),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::Prism::with_matcher(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(value.clone()),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: &$enum_type<$($generic),+>| matches!(source, $enum_type::$variant(_)),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::Prism::with_matcher(
            |source: &$enum_type| match source {
                <$enum_type>::$variant(value) => Some(value.clone()),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
            |source: &$enum_type| matches!(source, <$enum_type>::$variant(_)),
        )
    };
}

static_assertions::assert_impl_all!(Prism<Option<i32>, i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, PartialEq, Debug)]
    enum Shape {
        Circle(f64),
        Rectangle((f64, f64)),
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Wrapper {
        Shape(Shape),
        Empty,
    }

    #[test]
    fn test_prism_preview_and_review() {
        let circle = prism!(Shape, Circle);
        assert_eq!(circle.preview(&Shape::Circle(5.0)), Some(5.0));
        assert_eq!(circle.preview(&Shape::Rectangle((1.0, 2.0))), None);
        assert_eq!(circle.review(3.0), Shape::Circle(3.0));
        assert_eq!(circle.reverse_get(3.0), Shape::Circle(3.0));
    }

    #[test]
    fn test_prism_get_or_modify_returns_original_on_mismatch() {
        let circle = prism!(Shape, Circle);
        let rectangle = Shape::Rectangle((1.0, 2.0));
        assert_eq!(circle.get_or_modify(rectangle.clone()), Either::Left(rectangle));
        assert_eq!(circle.get_or_modify(Shape::Circle(1.0)), Either::Right(1.0));
    }

    #[test]
    fn test_prism_set_only_touches_matching_case() {
        let circle = prism!(Shape, Circle);
        assert_eq!(circle.set(Shape::Circle(1.0), 9.0), Shape::Circle(9.0));
        assert_eq!(
            circle.set(Shape::Rectangle((1.0, 2.0)), 9.0),
            Shape::Rectangle((1.0, 2.0))
        );
    }

    #[test]
    fn test_prism_modify_option() {
        let circle = prism!(Shape, Circle);
        assert_eq!(
            circle.modify_option(&Shape::Circle(1.0), |radius| radius + 1.0),
            Some(Shape::Circle(2.0))
        );
        assert_eq!(
            circle.modify_option(&Shape::Rectangle((0.0, 0.0)), |radius| radius),
            None
        );
    }

    #[test]
    fn test_prism_compose_short_circuits() {
        let wrapped_circle = prism!(Wrapper, Shape).compose(prism!(Shape, Circle));

        assert_eq!(wrapped_circle.preview(&Wrapper::Shape(Shape::Circle(2.0))), Some(2.0));
        assert_eq!(wrapped_circle.preview(&Wrapper::Empty), None);

        let rectangle = Wrapper::Shape(Shape::Rectangle((1.0, 1.0)));
        assert_eq!(wrapped_circle.get_or_modify(rectangle.clone()), Either::Left(rectangle));
        assert_eq!(wrapped_circle.review(4.0), Wrapper::Shape(Shape::Circle(4.0)));
    }

    #[derive(Debug)]
    struct Tracked {
        clones: Arc<AtomicUsize>,
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            self.clones.fetch_add(1, Ordering::SeqCst);
            Self {
                clones: Arc::clone(&self.clones),
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Slot {
        Filled(Tracked),
        Vacant,
    }

    #[test]
    fn test_prism_set_does_not_clone_the_old_payload() {
        let clones = Arc::new(AtomicUsize::new(0));
        let filled = prism!(Slot, Filled);
        let slot = Slot::Filled(Tracked {
            clones: Arc::clone(&clones),
        });

        let replaced = filled.set(
            slot,
            Tracked {
                clones: Arc::clone(&clones),
            },
        );
        assert!(filled.is_match(&replaced));
        assert!(!filled.is_match(&Slot::Vacant));
        assert_eq!(clones.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_prism_without_matcher_falls_back_to_preview() {
        let even = Prism::new(
            |number: &i32| (number % 2 == 0).then_some(*number),
            |number: i32| number,
        );
        assert!(even.is_match(&4));
        assert_eq!(even.set(3, 8), 3);
        assert_eq!(even.set(2, 8), 8);
    }

    #[test]
    fn test_prism_widens_to_fold() {
        let fold: Fold<Shape, f64> = prism!(Shape, Circle).into();
        assert_eq!(fold.get_all(&Shape::Circle(1.0)), vec![1.0]);
        assert!(fold.get_all(&Shape::Rectangle((1.0, 1.0))).is_empty());
    }
}
