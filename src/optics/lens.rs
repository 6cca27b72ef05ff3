//! Lens optics for focusing on struct fields.
//!
//! A Lens is an optic that provides get/set access to exactly one value
//! within a larger structure. Lenses compose, giving access to deeply nested
//! fields, and widen into [`Optional`], [`Traversal`], [`Getter`], [`Fold`]
//! and [`Setter`].
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetSet Law**: Setting what was read yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 2. **SetGet Law**: Reading what was set yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value.clone())) == value
//!    ```
//!
//! 3. **SetSet Law**: Two consecutive sets equal the last set.
//!    ```text
//!    lens.set(lens.set(source.clone(), v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::lens;
//! use optica::optics::Compose;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let moved = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(moved.address.street, "Oak Ave");
//! assert_eq!(moved.address.city, "Tokyo");
//! ```

use std::sync::Arc;

use super::function::{GetFunction, SetFunction};
use super::{Compose, Fold, Getter, Optic, OpticKind, Optional, Setter, Traversal};

/// A Lens focuses on exactly one readable and writable value.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
pub struct Lens<S, A> {
    get_function: GetFunction<S, A>,
    set_function: SetFunction<S, A>,
}

impl<S, A> Lens<S, A> {
    /// Creates a lens from a getter and a setter.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = Lens::new(
    ///     |point: &Point| point.x,
    ///     |point: Point, x: i32| Point { x, ..point },
    /// );
    ///
    /// assert_eq!(x_lens.get(&Point { x: 10, y: 20 }), 10);
    /// ```
    #[must_use]
    pub fn new<G, St>(getter: G, setter: St) -> Self
    where
        G: Fn(&S) -> A + Send + Sync + 'static,
        St: Fn(S, A) -> S + Send + Sync + 'static,
    {
        Self {
            get_function: Arc::new(getter),
            set_function: Arc::new(setter),
        }
    }

    /// Reads the focused value.
    pub fn get(&self, source: &S) -> A {
        (self.get_function)(source)
    }

    /// Replaces the focused value, returning the new source.
    pub fn set(&self, source: S, value: A) -> S {
        (self.set_function)(source, value)
    }

    /// Replaces the focused value with `function` applied to it.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let doubled = lens!(Point, x).modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled, Point { x: 20, y: 20 });
    /// ```
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }
}

impl<S, A> Optic for Lens<S, A> {
    const KIND: OpticKind = OpticKind::Lens;
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self {
        Self {
            get_function: Arc::clone(&self.get_function),
            set_function: Arc::clone(&self.set_function),
        }
    }
}

impl<S, A> std::fmt::Debug for Lens<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Lens").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static, B: 'static> Compose<Lens<A, B>> for Lens<S, A> {
    type Output = Lens<S, B>;

    fn compose(self, inner: Lens<A, B>) -> Lens<S, B> {
        let outer_get = Arc::clone(&self.get_function);
        let inner_get = Arc::clone(&inner.get_function);
        let outer = self;
        Lens::new(
            move |source: &S| inner_get(&outer_get(source)),
            move |source: S, value: B| {
                let intermediate = outer.get(&source);
                let updated = inner.set(intermediate, value);
                outer.set(source, updated)
            },
        )
    }
}

impl<S: 'static, A: 'static> From<Lens<S, A>> for Optional<S, A> {
    fn from(lens: Lens<S, A>) -> Self {
        let get = lens.get_function;
        Self::new(move |source: &S| Some(get(source)), move |source: S, value: A| {
            (lens.set_function)(source, value)
        })
    }
}

impl<S: 'static, A: 'static> From<Lens<S, A>> for Traversal<S, A> {
    fn from(lens: Lens<S, A>) -> Self {
        let get = Arc::clone(&lens.get_function);
        Self::new(
            move |source: &S| vec![get(source)],
            move |source: S, function: &mut dyn FnMut(A) -> A| lens.modify(source, function),
        )
    }
}

impl<S: 'static, A: 'static> From<Lens<S, A>> for Getter<S, A> {
    fn from(lens: Lens<S, A>) -> Self {
        let get = lens.get_function;
        Self::new(move |source: &S| get(source))
    }
}

impl<S: 'static, A: 'static> From<Lens<S, A>> for Fold<S, A> {
    fn from(lens: Lens<S, A>) -> Self {
        Self::from(Getter::from(lens))
    }
}

impl<S: 'static, A: 'static> From<Lens<S, A>> for Setter<S, A> {
    fn from(lens: Lens<S, A>) -> Self {
        Self::new(move |source: S, function: &mut dyn FnMut(A) -> A| lens.modify(source, function))
    }
}

/// Creates a [`Lens`] for a struct field.
///
/// The getter clones the field; the setter moves the struct and replaces
/// only that field, so sibling fields are carried over untouched.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(GenericStruct<Concrete>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(x_lens.get(&point), 10);
/// assert_eq!(x_lens.set(point, 100), Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$struct_type<$($generic),+>| source.$field.clone(),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

static_assertions::assert_impl_all!(Lens<(i32, String), String>: Send, Sync, Clone);
