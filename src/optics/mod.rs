//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable
//! data structures. Optics allow you to focus on specific parts of a data
//! structure, enabling type-safe reading and updating of deeply nested fields.
//!
//! Every optic is a plain value: a struct holding one or two shared
//! functions. Values are cheap to clone, `Send + Sync`, and immutable once
//! built.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens <: Optional <: Traversal <: Fold
//! Iso <: Prism <: Optional
//! Lens <: Getter <: Fold
//! Traversal <: Setter
//! ```
//!
//! `X <: Y` means an `X` converts into a `Y` with `Y::from(x)`. Composing two
//! optics yields the strongest kind both convert into (see [`OpticKind::meet`]).
//!
//! # Available Optics
//!
//! - [`Iso`]: Isomorphism between types (bidirectional conversion)
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Prism`]: Focus on a variant of an enum (preview/review access)
//! - [`Optional`]: Focus on a value that may or may not exist (Lens + Prism composition)
//! - [`Traversal`]: Focus on multiple elements (batch access)
//! - [`Getter`]: Read a single derived value
//! - [`Fold`]: Read multiple elements
//! - [`Setter`]: Write-only access
//!
//! # Example with Lens
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
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with Optional (Lens + Prism)
//!
//! ```
//! use optica::optics::{Compose, Optic, OpticKind};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Maybe<T> { Just(T), Nothing }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Container { maybe_value: Maybe<i32> }
//!
//! let optional = lens!(Container, maybe_value).compose(prism!(Maybe<i32>, Just));
//! assert_eq!(optional.kind(), OpticKind::Optional);
//!
//! assert_eq!(optional.preview(&Container { maybe_value: Maybe::Just(42) }), Some(42));
//! assert_eq!(optional.preview(&Container { maybe_value: Maybe::Nothing }), None);
//! ```
//!
//! # Lens Laws
//!
//! 1. **GetPut Law**: `lens.set(source.clone(), lens.get(&source)) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value.clone())) == value`
//! 3. **PutPut Law**: `lens.set(lens.set(source.clone(), v1), v2) == lens.set(source, v2)`
//!
//! # Prism Laws
//!
//! 1. **ReviewPreview Law**: `prism.preview(&prism.review(value.clone())) == Some(value)`
//! 2. **PreviewReview Law**: if `prism.preview(&source) == Some(value)` then
//!    `prism.review(value) == source`
//!
//! # Iso Laws
//!
//! 1. **GetReverseGet Law**: `iso.reverse_get(iso.get(&source)) == source`
//! 2. **ReverseGetGet Law**: `iso.get(&iso.reverse_get(value.clone())) == value`

mod each;
mod fold;
mod function;
mod getter;
mod iso;
mod kind;
mod lens;
mod optics_compose;
mod optional;
mod prism;
mod recursive;
mod setter;
mod standard_optics;
mod traversal;

pub use each::Each;
pub use each::each;

pub use kind::Capabilities;
pub use kind::CompositionError;
pub use kind::Optic;
pub use kind::OpticKind;

pub use optics_compose::Compose;
pub use optics_compose::compose;

pub use fold::Fold;
pub use getter::Getter;
pub use iso::Iso;
pub use lens::Lens;
pub use optional::Optional;
pub use prism::Prism;
pub use setter::Setter;
pub use traversal::Traversal;

pub use standard_optics::first_lens;
pub use standard_optics::identity_traversal;
pub use standard_optics::iso_identity;
pub use standard_optics::iso_swap;
pub use standard_optics::second_lens;

pub use recursive::at_depth;
pub use recursive::values_at_depth;
