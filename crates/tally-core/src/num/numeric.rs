// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Wrapping Numeric Bound
//!
//! `WrappingNumeric` collects the integer capabilities that fixed-width
//! arithmetic code relies on: the intrinsic traits from `num_traits`
//! (`PrimInt`, `Signed`), the associated constants, and the by-value
//! wrapping operations from `ops`. It is blanket-implemented, so any signed
//! primitive integer qualifies.
//!
//! `wrapping_sum` folds an iterator with two's-complement addition. Because
//! wrapping addition is associative and commutative modulo `2^N`, the result
//! does not depend on the order of the items.

use crate::num::{
    constants::Zero,
    ops::wrapping_arithmetic::{WrappingAddVal, WrappingNegVal},
};
use num_traits::{PrimInt, Signed};

/// A trait alias for signed integer types with explicit wrapping semantics.
/// These are the signed primitives `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
pub trait WrappingNumeric:
    PrimInt
    + Signed
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + WrappingAddVal
    + WrappingNegVal
    + Send
    + Sync
{
}

impl<T> WrappingNumeric for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + WrappingAddVal
        + WrappingNegVal
        + Send
        + Sync
{
}

/// Sums `values` with two's-complement wraparound, starting from zero.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::numeric::wrapping_sum;
/// assert_eq!(wrapping_sum([1i32, 2, 3, 4, 5, 6]), 21);
/// assert_eq!(wrapping_sum([i32::MAX, 1]), i32::MIN);
/// assert_eq!(wrapping_sum(Vec::<i64>::new()), 0);
/// ```
#[inline]
pub fn wrapping_sum<T, I>(values: I) -> T
where
    T: WrappingAddVal + Zero,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(T::ZERO, T::wrapping_add_val)
}

/// Computes `a - b` as `a + (-b)`, wrapping both the negation and the sum.
///
/// This agrees with the inherent `a.wrapping_sub(b)` for every input, including
/// `b == T::min_value()` where the negation wraps to itself.
#[inline]
pub fn wrapping_sub_via_neg<T: WrappingNumeric>(a: T, b: T) -> T {
    a.wrapping_add_val(b.wrapping_neg_val())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_wrapping_numeric<T: WrappingNumeric>() {}

    #[test]
    fn test_signed_primitives_are_wrapping_numeric() {
        assert_wrapping_numeric::<i8>();
        assert_wrapping_numeric::<i16>();
        assert_wrapping_numeric::<i32>();
        assert_wrapping_numeric::<i64>();
        assert_wrapping_numeric::<i128>();
        assert_wrapping_numeric::<isize>();
    }

    #[test]
    fn test_wrapping_sum_overflow_propagates() {
        assert_eq!(wrapping_sum([i32::MAX, 1, 0, 0, 0, 0]), i32::MIN);
        assert_eq!(wrapping_sum([i32::MIN, -1]), i32::MAX);
        assert_eq!(wrapping_sum([i8::MAX, i8::MAX, 2i8]), 0i8);
    }

    #[test]
    fn test_wrapping_sum_is_order_independent() {
        let forward = wrapping_sum([i32::MAX, 7, i32::MIN, -3, 1_000_000, 42]);
        let backward = wrapping_sum([42, 1_000_000, -3, i32::MIN, 7, i32::MAX]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_wrapping_sub_via_neg_matches_wrapping_sub() {
        let samples = [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(wrapping_sub_via_neg(a, b), a.wrapping_sub(b));
            }
        }
    }

    #[test]
    fn test_wrapping_sub_via_neg_min_operand() {
        assert_eq!(wrapping_sub_via_neg(0i32, i32::MIN), i32::MIN);
        assert_eq!(wrapping_sub_via_neg(1i64, i64::MIN), i64::MIN + 1);
    }
}
