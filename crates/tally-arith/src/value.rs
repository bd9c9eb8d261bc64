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

//! Tagged primitive values.
//!
//! `Value` carries one of the four primitive kinds the arithmetic functions
//! operate on. It is used by the `invoke` layer, where the function and its
//! argument kinds are only known at runtime. Arithmetic on values keeps the
//! exact semantics of the underlying primitive: integers wrap, floats follow
//! IEEE-754. Operations on mismatched kinds are reported as errors.

use tally_core::num::ops::wrapping_arithmetic::{WrappingAddVal, WrappingNegVal};

/// The kind of a primitive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit IEEE-754 float.
    Float,
    /// 64-bit IEEE-754 float.
    Double,
}

impl ValueKind {
    /// Returns the one-character descriptor code for this kind.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            ValueKind::Int => 'I',
            ValueKind::Long => 'J',
            ValueKind::Float => 'F',
            ValueKind::Double => 'D',
        }
    }

    /// Returns the kind denoted by a descriptor code, if any.
    #[inline]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'I' => Some(ValueKind::Int),
            'J' => Some(ValueKind::Long),
            'F' => Some(ValueKind::Float),
            'D' => Some(ValueKind::Double),
            _ => None,
        }
    }

    /// Parses `text` as a value of this kind.
    ///
    /// Surrounding whitespace is ignored. The accepted literals are those of
    /// the primitive's `FromStr`:
    ///
    /// - `Int`/`Long`: decimal digits with an optional leading `+` or `-`,
    ///   within the kind's range.
    /// - `Float`/`Double`: decimal or exponent notation (`1.5`, `-2e-3`,
    ///   `.5`), plus `inf`, `infinity` and `nan` in any case, optionally
    ///   signed.
    ///
    /// Float text is rounded to the kind's precision directly, so a `Float`
    /// is never produced by narrowing a `Double`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Parse`] if `text` is not a valid literal of
    /// this kind.
    pub fn parse(self, text: &str) -> Result<Value, ValueError> {
        let trimmed = text.trim();
        let parsed = match self {
            ValueKind::Int => trimmed.parse().ok().map(Value::Int),
            ValueKind::Long => trimmed.parse().ok().map(Value::Long),
            ValueKind::Float => trimmed.parse().ok().map(Value::Float),
            ValueKind::Double => trimmed.parse().ok().map(Value::Double),
        };
        parsed.ok_or_else(|| ValueError::Parse {
            text: text.to_string(),
            kind: self,
        })
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Int => write!(f, "int"),
            ValueKind::Long => write!(f, "long"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Double => write!(f, "double"),
        }
    }
}

/// The error type for operations on [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// A value of one kind was used where another kind was required.
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        /// The kind that was required.
        expected: ValueKind,
        /// The kind that was supplied.
        found: ValueKind,
    },
    /// A textual argument could not be parsed into the requested kind.
    #[error("could not parse '{text}' as {kind}")]
    Parse {
        /// The offending text.
        text: String,
        /// The kind we tried to parse into.
        kind: ValueKind,
    },
    /// An operation received the wrong number of values.
    #[error("expected {expected} value(s), found {found}")]
    Arity {
        /// The number of values required.
        expected: usize,
        /// The number of values supplied.
        found: usize,
    },
}

/// A primitive value tagged with its kind.
///
/// Equality via `PartialEq` follows IEEE-754 for floats (`NaN != NaN`,
/// `0.0 == -0.0`). Use [`Value::bit_eq`] for an exact comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 32-bit signed integer.
    Int(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A 32-bit IEEE-754 float.
    Float(f32),
    /// A 64-bit IEEE-754 float.
    Double(f64),
}

impl Value {
    /// Returns the kind of this value.
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Long(_) => ValueKind::Long,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
        }
    }

    /// Adds two values of the same kind.
    ///
    /// Integers wrap on overflow; floats are added in their own precision.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::KindMismatch`] if `rhs` has a different kind
    /// than `self`. There is no implicit widening.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tally_arith::value::Value;
    /// let sum = Value::Int(i32::MAX).wrapping_add(Value::Int(1));
    /// assert_eq!(sum, Ok(Value::Int(i32::MIN)));
    /// assert!(Value::Int(1).wrapping_add(Value::Long(1)).is_err());
    /// ```
    pub fn wrapping_add(self, rhs: Value) -> Result<Value, ValueError> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add_val(b))),
            (Value::Long(a), Value::Long(b)) => Ok(Value::Long(a.wrapping_add_val(b))),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            (Value::Double(a), Value::Double(b)) => Ok(Value::Double(a + b)),
            (lhs, rhs) => Err(ValueError::KindMismatch {
                expected: lhs.kind(),
                found: rhs.kind(),
            }),
        }
    }

    /// Negates the value. Integer minimums wrap to themselves; floats flip
    /// their sign bit (including for zero and NaN).
    #[inline]
    pub fn wrapping_neg(self) -> Value {
        match self {
            Value::Int(a) => Value::Int(a.wrapping_neg_val()),
            Value::Long(a) => Value::Long(a.wrapping_neg_val()),
            Value::Float(a) => Value::Float(-a),
            Value::Double(a) => Value::Double(-a),
        }
    }

    /// Compares kind and bit pattern.
    #[inline]
    pub fn bit_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_value_conversions {
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(v: $t) -> Self {
                    Value::$variant(v)
                }
            }

            impl TryFrom<Value> for $t {
                type Error = ValueError;

                #[inline]
                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(ValueError::KindMismatch {
                            expected: ValueKind::$variant,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )+
    };
}

impl_value_conversions!(i32 => Int, i64 => Long, f32 => Float, f64 => Double);
