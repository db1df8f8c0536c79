//! Numeric path costs.

use std::fmt::Debug;
use std::ops::Add;

/// Numeric type usable as an accumulated path cost.
///
/// Edge costs must be non-negative. Unsigned types make that structural;
/// for signed types it is a caller contract and is not checked.
pub trait Cost: Copy + Ord + Add<Output = Self> + Debug {
    /// Additive identity, the cost of the empty path.
    const ZERO: Self;
    /// Cost of a single step when no cost function is supplied.
    const ONE: Self;
}

macro_rules! impl_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
