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

//! # Tally Arith
//!
//! A small library of fixed-width arithmetic functions whose numeric
//! semantics are exact: 32- and 64-bit integers wrap in two's complement,
//! and `f32`/`f64` follow IEEE-754 round-to-nearest-even with the usual NaN
//! and infinity rules. None of the functions can fail.
//!
//! ## Modules
//!
//! - `add`: The eight pure functions (`add`, `subtract`, `double_add_half`,
//!   `double_add`, `float_add_half`, `long_add_const`, `int_add_const`,
//!   `add_many`).
//! - `value`: `Value` and `ValueKind`, a tagged primitive used when the
//!   function to call is only known at runtime.
//! - `descriptor`: `MethodDescriptor`, the compact `(II)I` signature form.
//! - `invoke`: `Registry` of named operations with validated invocation.
//!
//! ## Example
//!
//! ```rust
//! use tally_arith::{add, invoke::Registry, value::Value};
//!
//! assert_eq!(add::add(i32::MAX, 1), i32::MIN);
//!
//! let registry = Registry::standard();
//! let diff = registry.invoke("subtract", &[Value::Int(2), Value::Int(3)]);
//! assert_eq!(diff, Ok(Value::Int(-1)));
//! ```

pub mod add;
pub mod descriptor;
pub mod invoke;
pub mod value;
