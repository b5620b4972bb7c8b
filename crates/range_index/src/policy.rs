//! Aggregation policies for [`RangeIndex`](crate::RangeIndex).

/// An associative aggregation with a neutral element.
///
/// - `combine` must be associative.
/// - `identity()` must be neutral in `combine` on both sides.
/// - Commutativity is not required; the index always combines partial
///   results in left-to-right leaf order.
pub trait Monoid {
    type Value: Copy;

    /// Neutral element; also the result of a fold over no leaves.
    fn identity() -> Self::Value;

    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// Range maximum over `i64`, with `i64::MIN` as the absorbing sentinel.
#[derive(Clone, Copy, Debug)]
pub enum Max {}

impl Monoid for Max {
    type Value = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        i64::MIN
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        (*a).max(*b)
    }
}

/// Range minimum over `i64`.
#[derive(Clone, Copy, Debug)]
pub enum Min {}

impl Monoid for Min {
    type Value = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        i64::MAX
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        (*a).min(*b)
    }
}

/// Range sum over `i64`.
#[derive(Clone, Copy, Debug)]
pub enum Sum {}

impl Monoid for Sum {
    type Value = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a + b
    }
}

/// Range gcd over `u64`; `gcd(0, x) == x`, so `0` is the identity.
#[derive(Clone, Copy, Debug)]
pub enum Gcd {}

impl Monoid for Gcd {
    type Value = u64;

    #[inline(always)]
    fn identity() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        let (mut a, mut b) = (*a, *b);
        while b != 0 {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }
}

/// Range bitwise-or over `u64`.
#[derive(Clone, Copy, Debug)]
pub enum BitOr {}

impl Monoid for BitOr {
    type Value = u64;

    #[inline(always)]
    fn identity() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a | b
    }
}
