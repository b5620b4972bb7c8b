use std::fmt;

use crate::error::RangeIndexError;
use crate::policy::Monoid;

/// Range-aggregate index over a fixed number of leaves.
///
/// The node array encodes a binary tree by position: the root is at index 0
/// and node `k` covering `[low, high]` has children at `2k + 1` (covering
/// `[low, mid]`) and `2k + 2` (covering `[mid + 1, high]`), with
/// `mid = (low + high) / 2`. The store holds `4n + 1` nodes, deliberately
/// over-provisioned so every recursive index stays in bounds for arbitrary
/// `n` without rounding up to a power of two.
pub struct RangeIndex<M: Monoid> {
    capacity: usize,
    nodes: Vec<M::Value>,
    built: bool,
}

// Derives would demand `M: Clone` / `M: Debug`; the policy type is a
// phantom, only its `Value` matters.
impl<M: Monoid> Clone for RangeIndex<M> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            nodes: self.nodes.clone(),
            built: self.built,
        }
    }
}

impl<M: Monoid> fmt::Debug for RangeIndex<M>
where
    M::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeIndex")
            .field("capacity", &self.capacity)
            .field("built", &self.built)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<M: Monoid> RangeIndex<M> {
    /// Allocates an unbuilt index over `n` leaves, every node seeded with
    /// the identity.
    ///
    /// Fails with `InvalidSize` when the `4n + 1` node store overflows
    /// `usize`.
    pub fn new(n: usize) -> Result<Self, RangeIndexError> {
        let slots = n
            .checked_mul(4)
            .and_then(|slots| slots.checked_add(1))
            .ok_or(RangeIndexError::InvalidSize { capacity: n })?;
        Ok(Self {
            capacity: n,
            nodes: vec![M::identity(); slots],
            built: false,
        })
    }

    /// Builds the tree from `values`, one leaf per element.
    ///
    /// Legal exactly once per index; `query` and `update` are rejected until
    /// it has run. Fails with `SizeMismatch` if `values.len()` differs from
    /// the capacity and `AlreadyBuilt` on a second call. O(n).
    pub fn build(&mut self, values: &[M::Value]) -> Result<(), RangeIndexError> {
        if self.built {
            return Err(RangeIndexError::AlreadyBuilt);
        }
        if values.len() != self.capacity {
            return Err(RangeIndexError::SizeMismatch {
                expected: self.capacity,
                actual: values.len(),
            });
        }
        if self.capacity > 0 {
            self.build_node(0, 0, self.capacity - 1, values);
        }
        self.built = true;
        Ok(())
    }

    /// `new(values.len())` followed by `build(values)`.
    pub fn from_values(values: &[M::Value]) -> Result<Self, RangeIndexError> {
        let mut index = Self::new(values.len())?;
        index.build(values)?;
        Ok(index)
    }

    /// Combined aggregate over the closed range `[l, r]`. O(log n).
    ///
    /// Fails with `OutOfRange` for an inverted or out-of-bounds range; a
    /// malformed range is a caller error, not an identity result.
    pub fn query(&self, l: usize, r: usize) -> Result<M::Value, RangeIndexError> {
        if !self.built {
            return Err(RangeIndexError::NotBuilt);
        }
        if l > r || r >= self.capacity {
            return Err(RangeIndexError::OutOfRange {
                low: l,
                high: r,
                capacity: self.capacity,
            });
        }
        Ok(self.query_node(0, 0, self.capacity - 1, l, r))
    }

    /// Aggregate over all leaves; the root already stores it. O(1).
    pub fn query_all(&self) -> Result<M::Value, RangeIndexError> {
        if !self.built {
            return Err(RangeIndexError::NotBuilt);
        }
        Ok(self.nodes[0])
    }

    /// Current value at leaf `i`.
    pub fn get(&self, i: usize) -> Result<M::Value, RangeIndexError> {
        self.query(i, i)
    }

    /// Overwrites leaf `i` and recomputes every ancestor on the way back up,
    /// so the tree is aggregate-consistent when the call returns. O(log n).
    ///
    /// Fails with `OutOfRange` for an invalid `i`, leaving the structure
    /// untouched.
    pub fn update(&mut self, i: usize, value: M::Value) -> Result<(), RangeIndexError> {
        if !self.built {
            return Err(RangeIndexError::NotBuilt);
        }
        if i >= self.capacity {
            return Err(RangeIndexError::OutOfRange {
                low: i,
                high: i,
                capacity: self.capacity,
            });
        }
        self.update_node(0, 0, self.capacity - 1, i, value);
        Ok(())
    }

    /// Number of leaves, fixed at construction.
    pub fn len(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    fn build_node(&mut self, node: usize, low: usize, high: usize, values: &[M::Value]) {
        if low == high {
            self.nodes[node] = values[low];
            return;
        }
        let mid = low + (high - low) / 2;
        self.build_node(2 * node + 1, low, mid, values);
        self.build_node(2 * node + 2, mid + 1, high, values);
        self.nodes[node] = M::combine(&self.nodes[2 * node + 1], &self.nodes[2 * node + 2]);
    }

    fn query_node(&self, node: usize, low: usize, high: usize, l: usize, r: usize) -> M::Value {
        // No overlap.
        if high < l || low > r {
            return M::identity();
        }
        // Total overlap: the stored aggregate answers without descending.
        if low >= l && high <= r {
            return self.nodes[node];
        }
        // Partial overlap; left result folded first to keep leaf order.
        let mid = low + (high - low) / 2;
        let left = self.query_node(2 * node + 1, low, mid, l, r);
        let right = self.query_node(2 * node + 2, mid + 1, high, l, r);
        M::combine(&left, &right)
    }

    fn update_node(&mut self, node: usize, low: usize, high: usize, i: usize, value: M::Value) {
        debug_assert!(low <= i && i <= high);
        if low == high {
            self.nodes[node] = value;
            return;
        }
        let mid = low + (high - low) / 2;
        if i <= mid {
            self.update_node(2 * node + 1, low, mid, i, value);
        } else {
            self.update_node(2 * node + 2, mid + 1, high, i, value);
        }
        self.nodes[node] = M::combine(&self.nodes[2 * node + 1], &self.nodes[2 * node + 2]);
    }
}
