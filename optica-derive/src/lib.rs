//! Derive macros for optica optics.
//!
//! This crate provides procedural macros that generate optic constructors
//! from a type's shape: one set of field optics per named struct field, and
//! one prism per enum variant.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens, getter and setter methods for struct fields,
//!   plus an optional method for every `Option<T>` field
//! - [`Prisms`]: Generates prism methods for enum variants
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use optica::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> Lens<Point, i32>
//! // - Point::x_getter() -> Getter<Point, i32>
//! // - Point::x_setter() -> Setter<Point, i32>
//! // (and the same for y)
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().get(&point), 10);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use optica::Prisms;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> Prism<Shape, f64>
//! // - Shape::rectangle_prism() -> Prism<Shape, (f64, f64)>
//!
//! let circle = Shape::Circle(5.0);
//! assert_eq!(Shape::circle_prism().preview(&circle), Some(5.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;
use syn::{GenericParam, Generics, parse_quote};

/// Derive macro for generating field optics for struct fields.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
/// - Every field of a concrete type must implement `Clone`; mark a field
///   that does not with `#[lenses(skip)]` to generate nothing for it
/// - A field whose type mentions a type parameter gets a `Clone` bound on
///   its own methods, so those methods exist only for `Clone` arguments
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> Lens<StructName, T> { ... }
///     pub fn foo_getter() -> Getter<StructName, T> { ... }
///     pub fn foo_setter() -> Setter<StructName, T> { ... }
/// }
/// ```
///
/// When the field is written `Option<U>`, it also generates
///
/// ```rust,ignore
/// pub fn foo_optional() -> Optional<StructName, U> { ... }
/// ```
///
/// whose `set` stores `Some(value)`, so an absent field becomes present.
///
/// The getter and setter are the lens widened, so all three agree.
///
/// # Example
///
/// ```rust,ignore
/// use optica::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Article {
///     title: String,
///     subtitle: Option<String>,
/// }
///
/// let article = Article { title: "Optics".to_string(), subtitle: None };
///
/// let article = Article::subtitle_optional().set(article, "in Rust".to_string());
/// assert_eq!(article.subtitle.as_deref(), Some("in Rust"));
///
/// let article = Article::title_lens().set(article, "Lenses".to_string());
/// assert_eq!(article.subtitle.as_deref(), Some("in Rust"));
/// ```
///
/// # Skipping fields
///
/// ```rust,ignore
/// #[derive(Lenses)]
/// struct Session {
///     user: String,
///     #[lenses(skip)]
///     socket: TcpStream,
/// }
///
/// let user = Session::user_lens();
/// ```
///
/// # Generics
///
/// Generic structs are supported; every type parameter must be `'static`:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(lens.get(&Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses, attributes(lenses))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for generating Prism implementations for enum variants.
///
/// This macro generates a method for each variant in the enum that returns
/// a prism focusing on that variant. The method name follows the pattern
/// `{variant_name_snake_case}_prism()`.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `None`): `Prism<Enum, ()>`
/// - **Single-field variants** (e.g., `Some(T)`): `Prism<Enum, T>`
/// - **Multi-field tuple variants** (e.g., `Point(i32, i32)`): `Prism<Enum, (T1, T2, ...)>`
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): `Prism<Enum, (T1, T2, ...)>`,
///   fields in declaration order
///
/// # Example
///
/// ```rust,ignore
/// use optica::Prisms;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     Click { x: i32, y: i32 },
///     KeyPress(char),
///     Idle,
/// }
///
/// assert_eq!(Event::click_prism().preview(&Event::Click { x: 1, y: 2 }), Some((1, 2)));
/// assert_eq!(Event::key_press_prism().review('a'), Event::KeyPress('a'));
/// assert_eq!(Event::idle_prism().preview(&Event::Idle), Some(()));
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}

/// Adds a `'static` bound to every type parameter.
///
/// Optics store their functions as `'static` trait objects, so every type
/// they mention must outlive `'static`.
fn with_static_type_parameters(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let parameters: Vec<_> = generics
        .params
        .iter()
        .filter_map(|parameter| match parameter {
            GenericParam::Type(type_parameter) => Some(type_parameter.ident.clone()),
            GenericParam::Lifetime(_) | GenericParam::Const(_) => None,
        })
        .collect();
    let where_clause = generics.make_where_clause();
    for parameter in parameters {
        where_clause.predicates.push(parse_quote!(#parameter: 'static));
    }
    generics
}
