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

//! # Numeric Foundations
//!
//! Traits and utilities for fixed-width numeric programming. Primitive
//! integer arithmetic in Rust panics on overflow in debug builds and wraps in
//! release builds; the traits in this module make two's-complement wraparound
//! the only behavior, independent of the profile.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits, `Zero` for the signed integer
//!   primitives and `NegHalf` for `f32`/`f64`, where the constant is written
//!   in the type's own precision.
//! - `ops`: By-value wrapping arithmetic traits for addition and negation.
//! - `numeric`: The `WrappingNumeric` alias bound and `wrapping_sum`.

pub mod constants;
pub mod numeric;
pub mod ops;
