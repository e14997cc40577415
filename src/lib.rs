//! Optval - An explicit optional value
//!
//! [`Optional<T>`] is a closed sum type holding either nothing ([`Optional::None`])
//! or exactly one value ([`Optional::Value`]). It exists to replace null-like
//! and exception-like representations of absence with a type that must be
//! matched exhaustively at every use site.
//!
//! ```
//! use optval::Optional;
//!
//! let five = Optional::Value(5);
//! let empty: Optional<i32> = Optional::None;
//!
//! match five {
//!     Optional::None => unreachable!(),
//!     Optional::Value(v) => assert_eq!(v, 5),
//! }
//! assert_ne!(five, empty);
//! ```
//!
//! The payload is only reachable through a `match`, [`Optional::fold`], or the
//! fallible accessors that return [`NoValue`]. There is no accessor that hands
//! back a default in place of a missing value.

#![deny(warnings)]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

pub mod optional;
pub use optional::{NoValue, Optional};
