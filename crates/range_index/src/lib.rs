//! Range-aggregate index with point updates.
//!
//! - Query ranges are closed: `[l, r]` with `0 <= l <= r < n`.
//! - The aggregation is any associative operator with an identity, supplied
//!   as a [`Monoid`] policy type; [`Max`] reproduces a classic maximum tree.
//! - Malformed arguments are reported as [`RangeIndexError`] values, never
//!   masked by a sentinel result.

mod error;
mod policy;
mod tree;

pub use error::RangeIndexError;
pub use policy::{BitOr, Gcd, Max, Min, Monoid, Sum};
pub use tree::RangeIndex;
