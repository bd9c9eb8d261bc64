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

/// A trait for signed integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for floating-point types that have a constant representing -0.5.
///
/// The constant is a literal of the implementing type, so `f32::NEG_HALF`
/// is never the result of narrowing an `f64`. `-0.5` is exactly
/// representable in both formats.
///
/// # Examples
///
/// ```rust
/// # use tally_core::num::constants::NegHalf;
/// assert_eq!(f32::NEG_HALF.to_bits(), (-0.5f32).to_bits());
/// assert_eq!(f64::NEG_HALF.to_bits(), (-0.5f64).to_bits());
/// ```
pub trait NegHalf {
    /// The constant representing -0.5 for the implementing type.
    const NEG_HALF: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                const $const_name: Self = $value;
            }
        )+
    };
}

impl_const_for!(Zero, ZERO, 0, i8, i16, i32, i64, i128, isize);

impl NegHalf for f32 {
    const NEG_HALF: Self = -0.5f32;
}

impl NegHalf for f64 {
    const NEG_HALF: Self = -0.5f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_constants() {
        assert_eq!(i8::ZERO, 0);
        assert_eq!(i32::ZERO, 0);
        assert_eq!(i64::ZERO, 0);
        assert_eq!(isize::ZERO, 0);
    }

    #[test]
    fn test_neg_half_is_exact_in_both_precisions() {
        assert_eq!(f32::NEG_HALF.to_bits(), 0xBF00_0000);
        assert_eq!(f64::NEG_HALF.to_bits(), 0xBFE0_0000_0000_0000);
        assert_eq!(f64::from(f32::NEG_HALF).to_bits(), f64::NEG_HALF.to_bits());
    }
}
