//! Optional optics for focusing on elements that may or may not exist.
//!
//! An Optional is an affine optic: it provides read/write access to at most
//! one value. Unlike a [`Prism`](super::Prism) it cannot rebuild the whole
//! from the focus alone, so writing needs the original source. It is the
//! result of composing a Lens with a Prism, in either order.
//!
//! # Laws
//!
//! Every Optional must satisfy two laws when the element is present:
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    optional.preview(&source) == Some(value) implies
//!        optional.set(source.clone(), value) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    optional.preview(&source).is_some() implies
//!        optional.preview(&optional.set(source, value.clone())) == Some(value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::Compose;
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Slot { Filled(i32), Vacant }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Container { slot: Slot }
//!
//! let filled = lens!(Container, slot).compose(prism!(Slot, Filled));
//!
//! assert_eq!(filled.preview(&Container { slot: Slot::Filled(42) }), Some(42));
//! assert_eq!(filled.preview(&Container { slot: Slot::Vacant }), None);
//! ```

use std::sync::Arc;

use super::function::{PreviewFunction, SetFunction};
use super::{Compose, Fold, Optic, OpticKind, Setter, Traversal};
use crate::control::Either;

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
pub struct Optional<S, A> {
    preview_function: PreviewFunction<S, A>,
    set_function: SetFunction<S, A>,
}

impl<S, A> Optional<S, A> {
    /// Creates an optional from a partial read and a write.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Optional;
    ///
    /// let first = Optional::new(
    ///     |numbers: &Vec<i32>| numbers.first().copied(),
    ///     |mut numbers: Vec<i32>, value: i32| {
    ///         if let Some(slot) = numbers.first_mut() {
    ///             *slot = value;
    ///         }
    ///         numbers
    ///     },
    /// );
    ///
    /// assert_eq!(first.preview(&vec![1, 2]), Some(1));
    /// assert_eq!(first.set(vec![1, 2], 9), vec![9, 2]);
    /// assert_eq!(first.set(Vec::new(), 9), Vec::<i32>::new());
    /// ```
    #[must_use]
    pub fn new<P, St>(preview: P, setter: St) -> Self
    where
        P: Fn(&S) -> Option<A> + Send + Sync + 'static,
        St: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self {
            preview_function: Arc::new(preview),
            set_function: Arc::new(setter),
        }
    }

    /// Returns the focused value if present.
    pub fn preview(&self, source: &S) -> Option<A> {
        (self.preview_function)(source)
    }

    /// `Right(focus)` when present, otherwise `Left(source)` unchanged.
    pub fn get_or_modify(&self, source: S) -> Either<S, A> {
        match self.preview(&source) {
            Some(value) => Either::Right(value),
            None => Either::Left(source),
        }
    }

    /// Returns `true` if the focus is present.
    pub fn is_present(&self, source: &S) -> bool {
        self.preview(source).is_some()
    }

    /// Writes `value` into the source.
    ///
    /// What happens for a source without a focus depends on how the optional
    /// was built: composed optionals leave it unchanged, while `optional!`
    /// promotes an absent field to present.
    pub fn set(&self, source: S, value: A) -> S {
        (self.set_function)(source, value)
    }

    /// Applies `function` to the focus if present; otherwise returns the
    /// source unchanged.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.preview(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Like [`Optional::modify`], but returns `None` when the focus is absent.
    pub fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        match self.preview(&source) {
            Some(value) => Some(self.set(source, function(value))),
            None => None,
        }
    }
}

impl<S, A> Optic for Optional<S, A> {
    const KIND: OpticKind = OpticKind::Optional;
}

impl<S, A> Clone for Optional<S, A> {
    fn clone(&self) -> Self {
        Self {
            preview_function: Arc::clone(&self.preview_function),
            set_function: Arc::clone(&self.set_function),
        }
    }
}

impl<S, A> std::fmt::Debug for Optional<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Optional").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static, B: 'static> Compose<Optional<A, B>> for Optional<S, A> {
    type Output = Optional<S, B>;

    /// Chains the partial reads; a write only lands when the outer focus
    /// is present.
    fn compose(self, inner: Optional<A, B>) -> Optional<S, B> {
        let outer_preview = Arc::clone(&self.preview_function);
        let inner_preview = Arc::clone(&inner.preview_function);
        let outer = self;
        Optional::new(
            move |source: &S| outer_preview(source).and_then(|value| inner_preview(&value)),
            move |source: S, value: B| match outer.preview(&source) {
                Some(intermediate) => {
                    let updated = inner.set(intermediate, value);
                    outer.set(source, updated)
                }
                None => source,
            },
        )
    }
}

impl<S: 'static, A: 'static> From<Optional<S, A>> for Traversal<S, A> {
    fn from(optional: Optional<S, A>) -> Self {
        let preview = Arc::clone(&optional.preview_function);
        Self::new(
            move |source: &S| preview(source).into_iter().collect(),
            move |source: S, function: &mut dyn FnMut(A) -> A| optional.modify(source, function),
        )
    }
}

impl<S: 'static, A: 'static> From<Optional<S, A>> for Fold<S, A> {
    fn from(optional: Optional<S, A>) -> Self {
        let preview = optional.preview_function;
        Self::new(move |source: &S| preview(source).into_iter().collect())
    }
}

impl<S: 'static, A: 'static> From<Optional<S, A>> for Setter<S, A> {
    fn from(optional: Optional<S, A>) -> Self {
        Self::new(move |source: S, function: &mut dyn FnMut(A) -> A| optional.modify(source, function))
    }
}

/// Creates an [`Optional`] for a struct field of type `Option<T>`.
///
/// Reading yields the payload when the field is `Some`. Writing stores
/// `Some(value)`, so an absent field becomes present. Other fields are
/// carried over untouched.
///
/// # Example
///
/// ```
/// use optica::optional;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Article { title: String, subtitle: Option<String> }
///
/// let subtitle = optional!(Article, subtitle);
/// let article = Article { title: "Optics".to_string(), subtitle: None };
///
/// assert_eq!(subtitle.preview(&article), None);
/// let article = subtitle.set(article, "in Rust".to_string());
/// assert_eq!(article.subtitle.as_deref(), Some("in Rust"));
/// ```
#[macro_export]
macro_rules! optional {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::Optional::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = Some(value);
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::Optional::new(
            |source: &$struct_type<$($generic),+>| source.$field.clone(),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = Some(value);
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::Optional::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = Some(value);
                source
            },
        )
    };
}

static_assertions::assert_impl_all!(Optional<Vec<i32>, i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Profile {
        nickname: Option<String>,
        age: u32,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Account {
        profile: Option<Profile>,
    }

    #[rstest]
    #[case(Some("neo".to_string()), Some("neo".to_string()))]
    #[case(None, None)]
    fn test_optional_macro_preview(#[case] nickname: Option<String>, #[case] expected: Option<String>) {
        let profile = Profile { nickname, age: 30 };
        assert_eq!(optional!(Profile, nickname).preview(&profile), expected);
    }

    #[rstest]
    fn test_optional_macro_set_promotes_absent_field() {
        let profile = Profile { nickname: None, age: 30 };
        let updated = optional!(Profile, nickname).set(profile, "trinity".to_string());
        assert_eq!(updated, Profile { nickname: Some("trinity".to_string()), age: 30 });
    }

    #[rstest]
    fn test_optional_get_or_modify() {
        let nickname = optional!(Profile, nickname);
        let anonymous = Profile { nickname: None, age: 1 };
        assert_eq!(nickname.get_or_modify(anonymous.clone()), Either::Left(anonymous));
    }

    #[rstest]
    fn test_optional_modify_skips_absent_focus() {
        let nickname = optional!(Profile, nickname);
        let anonymous = Profile { nickname: None, age: 1 };

        assert_eq!(nickname.modify(anonymous.clone(), |name| name + "!"), anonymous);
        assert_eq!(nickname.modify_option(anonymous, |name| name + "!"), None);
    }

    #[rstest]
    fn test_optional_compose_writes_only_through_present_outer() {
        let nickname = optional!(Account, profile).compose(optional!(Profile, nickname));

        let empty = Account { profile: None };
        assert_eq!(nickname.preview(&empty), None);
        assert_eq!(nickname.set(empty.clone(), "x".to_string()), empty);

        let anonymous = Account {
            profile: Some(Profile { nickname: None, age: 5 }),
        };
        assert!(!nickname.is_present(&anonymous));
        let named = nickname.set(anonymous, "x".to_string());
        assert_eq!(nickname.preview(&named), Some("x".to_string()));
        assert_eq!(named.profile.map(|profile| profile.age), Some(5));
    }

    #[rstest]
    fn test_optional_widens_to_traversal() {
        let traversal: Traversal<Profile, String> = optional!(Profile, nickname).into();
        let profile = Profile { nickname: Some("a".to_string()), age: 1 };

        assert_eq!(traversal.get_all(&profile), vec!["a".to_string()]);
        assert_eq!(
            traversal.modify(profile, |name| name.to_uppercase()).nickname,
            Some("A".to_string())
        );
    }
}
