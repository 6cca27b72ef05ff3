//! Control structures used by the optics.
//!
//! - [`Either`]: the two-branch result of a partial read (`get_or_modify`)
//!
//! # Examples
//!
//! ```rust
//! use optica::control::Either;
//!
//! let outcome: Either<&str, i32> = Either::Right(3);
//! assert_eq!(outcome.map_right(|value| value + 1), Either::Right(4));
//! ```

mod either;

pub use either::Either;
