//! Sequence collaborators consumed by the optics.
//!
//! Plain `Vec<T>` serves as the ordered sequence; this module adds the
//! non-empty variant:
//!
//! - [`NonEmptyVec`]: an ordered sequence statically guaranteed to hold at
//!   least one element
//! - [`EmptyCollectionError`]: the failure of converting an empty `Vec`

mod non_empty;

pub use non_empty::EmptyCollectionError;
pub use non_empty::NonEmptyVec;
