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

use core::ops::{Add, Neg};

macro_rules! wrapping_impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

macro_rules! wrapping_impl_unary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self) -> Self {
                    <$t>::$src_method(self)
                }
            }
        )+
    };
}

/// Wrapping addition by value (no references).
///
/// The result is reduced modulo `2^N`, where `N` is the bit width of the
/// type. Unlike the `+` operator this never panics, not even in debug
/// builds.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::wrapping_arithmetic::WrappingAddVal;
///
/// let a: i32 = i32::MAX;
/// assert_eq!(a.wrapping_add_val(1), i32::MIN);
///
/// let b: i8 = -128;
/// assert_eq!(b.wrapping_add_val(-1), 127);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(
    WrappingAddVal,
    wrapping_add_val,
    wrapping_add,
    i8, i16, i32, i64, i128, isize
);

/// Wrapping negation by value (no references).
///
/// The minimum value of a signed type has no positive counterpart, so its
/// negation wraps back to itself.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::ops::wrapping_arithmetic::WrappingNegVal;
///
/// let a: i32 = 7;
/// assert_eq!(a.wrapping_neg_val(), -7);
///
/// let b: i32 = i32::MIN;
/// assert_eq!(b.wrapping_neg_val(), i32::MIN);
/// ```
pub trait WrappingNegVal: Sized + Neg<Output = Self> {
    /// Performs wrapping negation by value.
    fn wrapping_neg_val(self) -> Self;
}

wrapping_impl_unary_val!(
    WrappingNegVal,
    wrapping_neg_val,
    wrapping_neg,
    i8, i16, i32, i64, i128, isize
);

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapping_add_val<T: WrappingAddVal>(a: T, b: T) -> T {
        a.wrapping_add_val(b)
    }
    fn wrapping_neg_val<T: WrappingNegVal>(a: T) -> T {
        a.wrapping_neg_val()
    }

    #[test]
    fn test_wrapping_add_val() {
        assert_eq!(wrapping_add_val(127i8, 1i8), -128i8);
        assert_eq!(wrapping_add_val(i32::MAX, 1), i32::MIN);
        assert_eq!(wrapping_add_val(i64::MIN, -1), i64::MAX);
        assert_eq!(wrapping_add_val(20i32, 22i32), 42i32);
    }

    #[test]
    fn test_wrapping_neg_val() {
        assert_eq!(wrapping_neg_val(127i8), -127i8);
        assert_eq!(wrapping_neg_val(-128i8), -128i8);
        assert_eq!(wrapping_neg_val(i32::MIN), i32::MIN);
        assert_eq!(wrapping_neg_val(i64::MIN), i64::MIN);
        assert_eq!(wrapping_neg_val(0i32), 0i32);
    }
}
