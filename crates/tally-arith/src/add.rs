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

//! Fixed-width arithmetic functions.
//!
//! Integer functions wrap on overflow and never panic, regardless of the
//! build profile. Float functions are plain IEEE-754 additions in the
//! precision of their arguments; constants are typed at that precision.

use tally_core::num::{
    constants::NegHalf,
    numeric::{wrapping_sub_via_neg, wrapping_sum},
    ops::wrapping_arithmetic::WrappingAddVal,
};

/// Offset applied by [`long_add_const`].
pub const LONG_OFFSET: i64 = -9;

/// Offset applied by [`int_add_const`].
pub const INT_OFFSET: i32 = 1_000_000;

/// Returns `a - b`, computed as `a + (-b)` with wraparound.
///
/// `-i32::MIN` wraps to `i32::MIN`, so `subtract(x, i32::MIN)` equals
/// `add(x, i32::MIN)`.
#[inline]
pub fn subtract(a: i32, b: i32) -> i32 {
    wrapping_sub_via_neg(a, b)
}

/// Returns `a + b` with wraparound.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add_val(b)
}

/// Returns `a + (-0.5)` in double precision.
#[inline]
pub fn double_add_half(a: f64) -> f64 {
    a + f64::NEG_HALF
}

/// Returns `a + b` in double precision.
#[inline]
pub fn double_add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `f + (-0.5)` in single precision.
#[inline]
pub fn float_add_half(f: f32) -> f32 {
    f + f32::NEG_HALF
}

/// Returns `l + (-9)` with 64-bit wraparound.
#[inline]
pub fn long_add_const(l: i64) -> i64 {
    l.wrapping_add_val(LONG_OFFSET)
}

/// Returns `i + 1_000_000` with wraparound.
#[inline]
pub fn int_add_const(i: i32) -> i32 {
    i.wrapping_add_val(INT_OFFSET)
}

/// Returns the wrapping sum of all six arguments.
///
/// The parameter order is `a, b, c, d, f, e`; the sum is order independent.
#[inline]
pub fn add_many(a: i32, b: i32, c: i32, d: i32, f: i32, e: i32) -> i32 {
    wrapping_sum([a, b, c, d, e, f])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_basic_and_overflow() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-7, 7), 0);
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
        assert_eq!(add(i32::MAX, i32::MAX), -2);
    }

    #[test]
    fn test_subtract_basic_and_overflow() {
        assert_eq!(subtract(2, 3), -1);
        assert_eq!(subtract(10, -5), 15);
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(subtract(i32::MAX, -1), i32::MIN);
    }

    #[test]
    fn test_subtract_min_negates_to_itself() {
        assert_eq!(subtract(0, i32::MIN), i32::MIN);
        assert_eq!(subtract(5, i32::MIN), add(5, i32::MIN));
        assert_eq!(subtract(i32::MIN, i32::MIN), 0);
    }

    #[test]
    fn test_subtract_inverts_add_at_boundaries() {
        let samples = [i32::MIN, -1_000_000, -1, 0, 1, 999_999, i32::MAX];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(subtract(add(a, b), b), a, "a={a}, b={b}");
            }
        }
    }

    #[test]
    fn test_double_add_half() {
        assert_eq!(double_add_half(1.5), 1.0);
        assert_eq!(double_add_half(0.0), -0.5);
        assert_eq!(double_add_half(0.5).to_bits(), 0.0f64.to_bits());
        assert_eq!(double_add_half(f64::INFINITY), f64::INFINITY);
        assert_eq!(double_add_half(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(double_add_half(f64::MAX), f64::MAX);
        assert!(double_add_half(f64::NAN).is_nan());
    }

    #[test]
    fn test_double_add_ieee_behaviour() {
        assert_eq!(double_add(1.25, 2.5), 3.75);
        assert_eq!(double_add(0.1, 0.2), 0.300_000_000_000_000_04);
        assert_eq!(double_add(f64::MAX, f64::MAX), f64::INFINITY);
        assert!(double_add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
        assert!(double_add(f64::NAN, 1.0).is_nan());
        assert_eq!(double_add(-0.0, -0.0).to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_float_add_half_single_precision() {
        assert_eq!(float_add_half(1.5), 1.0);
        assert_eq!(float_add_half(1.5).to_bits(), 1.0f32.to_bits());
        assert_eq!(float_add_half(-0.0), -0.5);
        assert_eq!(float_add_half(0.5).to_bits(), 0.0f32.to_bits());
        assert_eq!(float_add_half(f32::MAX), f32::MAX);
        assert_eq!(float_add_half(f32::INFINITY), f32::INFINITY);
        assert!(float_add_half(f32::NAN).is_nan());
    }

    #[test]
    fn test_float_add_half_rounds_ties_to_even() {
        // 2^24 - 0.5 lies halfway between 2^24 - 1 and 2^24.
        assert_eq!(float_add_half(16_777_216.0), 16_777_216.0);
        // 2^23 + 1 - 0.5 lies halfway between 2^23 and 2^23 + 1.
        assert_eq!(float_add_half(8_388_609.0), 8_388_608.0);
    }

    #[test]
    fn test_long_add_const() {
        assert_eq!(long_add_const(9), 0);
        assert_eq!(long_add_const(0), -9);
        assert_eq!(long_add_const(i64::MIN), i64::MAX - 8);
        assert_eq!(long_add_const(i64::MIN + 9), i64::MIN);
    }

    #[test]
    fn test_int_add_const() {
        assert_eq!(int_add_const(0), 1_000_000);
        assert_eq!(int_add_const(-1_000_000), 0);
        assert_eq!(int_add_const(i32::MAX - 1_000_000 + 1), i32::MIN);
        assert_eq!(int_add_const(i32::MAX), i32::MIN + 999_999);
    }

    #[test]
    fn test_add_many() {
        assert_eq!(add_many(1, 2, 3, 4, 5, 6), 21);
        assert_eq!(add_many(i32::MAX, 1, 0, 0, 0, 0), i32::MIN);
        assert_eq!(add_many(0, 0, 0, 0, i32::MAX, 1), i32::MIN);
        assert_eq!(add_many(i32::MIN, -1, 1, 0, 0, 0), i32::MIN);
        assert_eq!(add_many(1, 1, 1, 1, 1, 1), 6);
    }
}
