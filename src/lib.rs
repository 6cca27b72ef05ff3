//! # optica
//!
//! Composable, law-abiding optics for immutable Rust data.
//!
//! ## Overview
//!
//! An optic is a first-class accessor into a larger value. This library
//! provides eight kinds of them and composes any two, picking the kind of
//! the result from the kinds of its operands:
//!
//! - **Optic kinds**: Iso, Lens, Prism, Optional, Traversal, Getter, Fold, Setter
//! - **Composition**: `Compose` over every valid pair, driven by a lattice of
//!   capabilities ([`optics::OpticKind::meet`])
//! - **Derivation**: `lens!`, `prism!`, `optional!`, `getter!`, `setter!` and
//!   the `Lenses` / `Prisms` derive macros
//! - **Containers**: the `Each` adapter for `Vec`, `Option` and [`collection::NonEmptyVec`]
//! - **Recursion**: depth traversals built by self-composition, with a
//!   labelled rose tree in [`tree`]
//!
//! ## Feature Flags
//!
//! - `derive` (default): re-exports `#[derive(Lenses)]` and `#[derive(Prisms)]`
//!
//! ## Example
//!
//! ```rust
//! use optica::prelude::*;
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Tag { Draft, Topic(String) }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Article { title: String, tags: Vec<Tag> }
//!
//! let topics = lens!(Article, tags)
//!     .compose(Vec::<Tag>::each())
//!     .compose(prism!(Tag, Topic));
//!
//! let article = Article {
//!     title: "Optics".to_string(),
//!     tags: vec![Tag::Draft, Tag::Topic("rust".to_string())],
//! };
//!
//! let shouted = topics.modify(article, |topic| topic.to_uppercase());
//! assert_eq!(shouted.tags, vec![Tag::Draft, Tag::Topic("RUST".to_string())]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the optic types, the composition trait and the container
/// adapter.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::NonEmptyVec;
    pub use crate::control::Either;
    pub use crate::optics::{
        Compose, Each, Fold, Getter, Iso, Lens, Optic, OpticKind, Optional, Prism, Setter,
        Traversal, compose,
    };

    #[cfg(feature = "derive")]
    pub use crate::{Lenses, Prisms};
}

pub mod collection;
pub mod control;
pub mod optics;
pub mod tree;

#[cfg(feature = "derive")]
pub use optica_derive::{Lenses, Prisms};
