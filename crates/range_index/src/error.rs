use thiserror::Error;

/// Caller-contract violations reported by [`RangeIndex`](crate::RangeIndex).
///
/// Every variant is detected synchronously before any mutation, so a failed
/// call never leaves the structure partially updated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeIndexError {
    /// The backing store of `4n + 1` nodes cannot be represented.
    #[error("backing store for {capacity} leaves overflows usize")]
    InvalidSize { capacity: usize },

    /// `build` was given a sequence whose length differs from the capacity.
    #[error("expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// `build` was called on an already built index.
    #[error("index is already built")]
    AlreadyBuilt,

    /// `query` or `update` was called before `build`.
    #[error("index is not built")]
    NotBuilt,

    /// The closed range `[low, high]` is not contained in `[0, capacity - 1]`.
    #[error("range [{low}, {high}] is invalid for capacity {capacity}")]
    OutOfRange {
        low: usize,
        high: usize,
        capacity: usize,
    },
}
