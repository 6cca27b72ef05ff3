//! Getter optics: a single read-only focus.
//!
//! A Getter is nothing more than a pure total function `&S -> A`. It is the
//! read half of a [`Lens`](super::Lens); every lens and iso widens into one.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Compose, Getter};
//!
//! let length = Getter::new(|text: &String| text.len());
//! let is_long = Getter::new(|length: &usize| *length > 3);
//!
//! let text_is_long = length.compose(is_long);
//! assert!(text_is_long.get(&"hello".to_string()));
//! assert!(!text_is_long.get(&"hi".to_string()));
//! ```

use std::sync::Arc;

use super::function::GetFunction;
use super::{Compose, Fold, Optic, OpticKind};

/// A read-only optic focusing on exactly one value.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focused type
pub struct Getter<S, A> {
    get_function: GetFunction<S, A>,
}

impl<S, A> Getter<S, A> {
    /// Creates a getter from a reading function.
    #[must_use]
    pub fn new<G>(getter: G) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
    {
        Self {
            get_function: Arc::new(getter),
        }
    }

    /// Reads the focus.
    pub fn get(&self, source: &S) -> A {
        (self.get_function)(source)
    }
}

impl<S, A> Optic for Getter<S, A> {
    const KIND: OpticKind = OpticKind::Getter;
}

impl<S, A> Clone for Getter<S, A> {
    fn clone(&self) -> Self {
        Self {
            get_function: Arc::clone(&self.get_function),
        }
    }
}

impl<S, A> std::fmt::Debug for Getter<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Getter").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static, B: 'static> Compose<Getter<A, B>> for Getter<S, A> {
    type Output = Getter<S, B>;

    fn compose(self, inner: Getter<A, B>) -> Getter<S, B> {
        let first = self.get_function;
        let second = inner.get_function;
        Getter::new(move |source: &S| second(&first(source)))
    }
}

impl<S: 'static, A: 'static> From<Getter<S, A>> for Fold<S, A> {
    fn from(getter: Getter<S, A>) -> Self {
        let get = getter.get_function;
        Self::new(move |source: &S| vec![get(source)])
    }
}

/// Creates a [`Getter`] reading a struct field.
///
/// The field type must implement `Clone`.
///
/// ```
/// use optica::getter;
///
/// #[derive(Clone)]
/// struct Article { title: String, views: u32 }
///
/// let views = getter!(Article, views);
/// let article = Article { title: "Optics".to_string(), views: 12 };
/// assert_eq!(views.get(&article), 12);
/// ```
#[macro_export]
macro_rules! getter {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::Getter::new(|source: &$struct_type| source.$field.clone())
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::Getter::new(|source: &$struct_type<$($generic),+>| source.$field.clone())
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::Getter::new(|source: &$struct_type| source.$field.clone())
    };
}

static_assertions::assert_impl_all!(Getter<String, usize>: Send, Sync, Clone);
