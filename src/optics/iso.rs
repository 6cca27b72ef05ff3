//! Iso optics for isomorphic type conversions.
//!
//! An Iso (isomorphism) is an optic that represents a bidirectional conversion
//! between two types where no information is lost. It is the strongest form
//! of optic: it widens into every other kind, and composing an Iso with any
//! optic yields an optic of that other optic's kind.
//!
//! # Laws
//!
//! Every Iso must satisfy two laws:
//!
//! 1. **`GetReverseGet` Law**: Converting forward then backward yields the original.
//!    ```text
//!    iso.reverse_get(iso.get(&source)) == source
//!    ```
//!
//! 2. **`ReverseGetGet` Law**: Converting backward then forward yields the original.
//!    ```text
//!    iso.get(&iso.reverse_get(value)) == value
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::iso;
//!
//! let chars = iso!(
//!     |text: &String| text.chars().collect::<Vec<char>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>()
//! );
//!
//! let original = "hello".to_string();
//! let letters = chars.get(&original);
//! assert_eq!(letters, vec!['h', 'e', 'l', 'l', 'o']);
//! assert_eq!(chars.reverse_get(letters), original);
//! ```

use std::sync::Arc;

use super::function::{GetFunction, ReviewFunction};
use super::{Compose, Fold, Getter, Lens, Optic, OpticKind, Optional, Prism, Setter, Traversal};

/// An Iso represents an isomorphism between two types.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
pub struct Iso<S, A> {
    get_function: GetFunction<S, A>,
    reverse_get_function: ReviewFunction<S, A>,
}

impl<S, A> Iso<S, A> {
    /// Creates an iso from a forward and a backward conversion.
    #[must_use]
    pub fn new<G, R>(get: G, reverse_get: R) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        R: Fn(A) -> S + Send + Sync + 'static,
    {
        Self {
            get_function: Arc::new(get),
            reverse_get_function: Arc::new(reverse_get),
        }
    }

    /// Converts from the source type to the target type.
    pub fn get(&self, source: &S) -> A {
        (self.get_function)(source)
    }

    /// Converts from the target type back to the source type.
    pub fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }

    /// Converts to the target, applies `function`, and converts back.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(function(self.get(&source)))
    }

    /// Returns the iso running in the opposite direction.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::iso;
    ///
    /// let celsius_to_kelvin = iso!(|celsius: &i64| celsius + 273, |kelvin: i64| kelvin - 273);
    /// let kelvin_to_celsius = celsius_to_kelvin.reverse();
    ///
    /// assert_eq!(kelvin_to_celsius.get(&300), 27);
    /// assert_eq!(kelvin_to_celsius.reverse_get(27), 300);
    /// ```
    #[must_use]
    pub fn reverse(self) -> Iso<A, S>
    where
        S: 'static,
        A: Clone + 'static,
    {
        let get = self.get_function;
        let reverse_get = self.reverse_get_function;
        Iso::new(move |value: &A| reverse_get(value.clone()), move |source: S| get(&source))
    }
}

impl<S, A> Optic for Iso<S, A> {
    const KIND: OpticKind = OpticKind::Iso;
}

impl<S, A> Clone for Iso<S, A> {
    fn clone(&self) -> Self {
        Self {
            get_function: Arc::clone(&self.get_function),
            reverse_get_function: Arc::clone(&self.reverse_get_function),
        }
    }
}

impl<S, A> std::fmt::Debug for Iso<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Iso").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static, B: 'static> Compose<Iso<A, B>> for Iso<S, A> {
    type Output = Iso<S, B>;

    fn compose(self, inner: Iso<A, B>) -> Iso<S, B> {
        let first_get = self.get_function;
        let first_reverse = self.reverse_get_function;
        let second_get = inner.get_function;
        let second_reverse = inner.reverse_get_function;
        Iso::new(
            move |source: &S| second_get(&first_get(source)),
            move |value: B| first_reverse(second_reverse(value)),
        )
    }
}

impl<S: 'static, A: 'static> From<Iso<S, A>> for Lens<S, A> {
    fn from(iso: Iso<S, A>) -> Self {
        let get = iso.get_function;
        let reverse_get = iso.reverse_get_function;
        Self::new(move |source: &S| get(source), move |_source: S, value: A| reverse_get(value))
    }
}

impl<S: 'static, A: 'static> From<Iso<S, A>> for Prism<S, A> {
    fn from(iso: Iso<S, A>) -> Self {
        let get = iso.get_function;
        let reverse_get = iso.reverse_get_function;
        Self::new(move |source: &S| Some(get(source)), move |value: A| reverse_get(value))
    }
}

impl<S: 'static, A: 'static> From<Iso<S, A>> for Optional<S, A> {
    fn from(iso: Iso<S, A>) -> Self {
        Self::from(Lens::from(iso))
    }
}

impl<S: 'static, A: 'static> From<Iso<S, A>> for Traversal<S, A> {
    fn from(iso: Iso<S, A>) -> Self {
        Self::from(Lens::from(iso))
    }
}

impl<S: 'static, A: 'static> From<Iso<S, A>> for Getter<S, A> {
    fn from(iso: Iso<S, A>) -> Self {
        let get = iso.get_function;
        Self::new(move |source: &S| get(source))
    }
}

impl<S: 'static, A: 'static> From<Iso<S, A>> for Fold<S, A> {
    fn from(iso: Iso<S, A>) -> Self {
        Self::from(Getter::from(iso))
    }
}

impl<S: 'static, A: 'static> From<Iso<S, A>> for Setter<S, A> {
    fn from(iso: Iso<S, A>) -> Self {
        Self::from(Lens::from(iso))
    }
}

/// Creates an [`Iso`] from a forward and a backward conversion.
///
/// # Syntax
///
/// ```text
/// iso!(get_function, reverse_get_function)
/// ```
///
/// # Example
///
/// ```
/// use optica::iso;
///
/// let swap = iso!(
///     |pair: &(i32, String)| (pair.1.clone(), pair.0),
///     |(text, number): (String, i32)| (number, text)
/// );
///
/// let original = (42, "hello".to_string());
/// let swapped = swap.get(&original);
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// assert_eq!(swap.reverse_get(swapped), original);
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr) => {
        $crate::optics::Iso::new($get, $reverse_get)
    };
}

static_assertions::assert_impl_all!(Iso<String, Vec<char>>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Meters(f64);

    fn meters() -> Iso<Meters, f64> {
        Iso::new(|meters: &Meters| meters.0, Meters)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn centimeters() -> Iso<f64, i64> {
        Iso::new(|value: &f64| (value * 100.0).round() as i64, |value: i64| value as f64 / 100.0)
    }

    #[rstest]
    fn test_iso_round_trips() {
        let iso = meters();
        assert_eq!(iso.reverse_get(iso.get(&Meters(1.5))), Meters(1.5));
        assert_eq!(iso.get(&iso.reverse_get(2.5)), 2.5);
    }

    #[rstest]
    fn test_iso_modify() {
        assert_eq!(meters().modify(Meters(2.0), |value| value * 3.0), Meters(6.0));
    }

    #[rstest]
    fn test_iso_reverse_swaps_directions() {
        let reversed = meters().reverse();
        assert_eq!(reversed.get(&4.0), Meters(4.0));
        assert_eq!(reversed.reverse_get(Meters(4.0)), 4.0);
    }

    #[rstest]
    fn test_iso_compose() {
        let composed = meters().compose(centimeters());
        assert_eq!(composed.get(&Meters(1.25)), 125);
        assert_eq!(composed.reverse_get(50), Meters(0.5));
    }

    #[rstest]
    fn test_iso_widened_prism_always_matches() {
        let prism: Prism<Meters, f64> = meters().into();
        assert_eq!(prism.preview(&Meters(1.0)), Some(1.0));
        assert_eq!(prism.review(3.0), Meters(3.0));
    }

    #[rstest]
    fn test_iso_widened_lens_ignores_old_source() {
        let lens: Lens<Meters, f64> = meters().into();
        assert_eq!(lens.set(Meters(1.0), 9.0), Meters(9.0));
    }
}
