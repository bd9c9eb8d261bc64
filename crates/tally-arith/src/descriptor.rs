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

//! Method descriptors.
//!
//! A descriptor is the compact textual signature of an operation: parameter
//! kind codes in parentheses followed by the return kind code. `(II)I` takes
//! two ints and returns an int; `(J)J` maps a long to a long. The codes are
//! those of [`ValueKind::code`].

use crate::value::ValueKind;
use std::str::FromStr;

/// The error type for parsing a [`MethodDescriptor`].
///
/// Positions are byte offsets into the parsed text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// The descriptor does not start with `(`.
    #[error("descriptor must start with '('")]
    MissingOpenParen,
    /// The parameter list is not closed by `)`.
    #[error("descriptor parameter list is not closed by ')'")]
    MissingCloseParen,
    /// A character is not a known kind code.
    #[error("unknown type code '{code}' at position {position}")]
    UnknownCode {
        /// The offending character.
        code: char,
        /// The byte offset of the character.
        position: usize,
    },
    /// Nothing follows the parameter list.
    #[error("descriptor has no return type")]
    MissingReturn,
    /// Characters follow the return type.
    #[error("unexpected input after return type at position {position}")]
    TrailingInput { position: usize },
}

/// The parameter and return kinds of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    params: Vec<ValueKind>,
    ret: ValueKind,
}

impl MethodDescriptor {
    /// Creates a new descriptor.
    #[inline]
    pub fn new(params: impl Into<Vec<ValueKind>>, ret: ValueKind) -> Self {
        Self {
            params: params.into(),
            ret,
        }
    }

    /// Returns the parameter kinds in declaration order.
    #[inline]
    pub fn params(&self) -> &[ValueKind] {
        &self.params
    }

    /// Returns the return kind.
    #[inline]
    pub fn ret(&self) -> ValueKind {
        self.ret
    }

    /// Returns the number of parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl FromStr for MethodDescriptor {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('(')
            .ok_or(DescriptorError::MissingOpenParen)?;
        let close = rest.find(')').ok_or(DescriptorError::MissingCloseParen)?;

        let params = rest[..close]
            .char_indices()
            .map(|(i, code)| {
                ValueKind::from_code(code).ok_or(DescriptorError::UnknownCode {
                    code,
                    position: i + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // `(` and `)` are one byte each.
        let tail_start = close + 2;
        let mut tail = s[tail_start..].char_indices();
        let (_, code) = tail.next().ok_or(DescriptorError::MissingReturn)?;
        let ret = ValueKind::from_code(code).ok_or(DescriptorError::UnknownCode {
            code,
            position: tail_start,
        })?;
        if let Some((i, _)) = tail.next() {
            return Err(DescriptorError::TrailingInput {
                position: tail_start + i,
            });
        }

        Ok(Self { params, ret })
    }
}

impl std::fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for kind in &self.params {
            write!(f, "{}", kind.code())?;
        }
        write!(f, "){}", self.ret.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binary_int() {
        let d: MethodDescriptor = "(II)I".parse().unwrap();
        assert_eq!(d.params(), &[ValueKind::Int, ValueKind::Int]);
        assert_eq!(d.ret(), ValueKind::Int);
        assert_eq!(d.arity(), 2);
    }

    #[test]
    fn test_parse_mixed_and_empty_params() {
        let d: MethodDescriptor = "(JFD)D".parse().unwrap();
        assert_eq!(
            d.params(),
            &[ValueKind::Long, ValueKind::Float, ValueKind::Double]
        );

        let nullary: MethodDescriptor = "()J".parse().unwrap();
        assert_eq!(nullary.arity(), 0);
        assert_eq!(nullary.ret(), ValueKind::Long);
    }

    #[test]
    fn test_display_renders_codes() {
        let d = MethodDescriptor::new(vec![ValueKind::Int; 6], ValueKind::Int);
        assert_eq!(d.to_string(), "(IIIIII)I");
        let d = MethodDescriptor::new([ValueKind::Float], ValueKind::Float);
        assert_eq!(d.to_string(), "(F)F");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "II)I".parse::<MethodDescriptor>(),
            Err(DescriptorError::MissingOpenParen)
        );
        assert_eq!(
            "(II".parse::<MethodDescriptor>(),
            Err(DescriptorError::MissingCloseParen)
        );
        assert_eq!(
            "(IX)I".parse::<MethodDescriptor>(),
            Err(DescriptorError::UnknownCode {
                code: 'X',
                position: 2
            })
        );
        assert_eq!(
            "(II)".parse::<MethodDescriptor>(),
            Err(DescriptorError::MissingReturn)
        );
        assert_eq!(
            "(II)V".parse::<MethodDescriptor>(),
            Err(DescriptorError::UnknownCode {
                code: 'V',
                position: 4
            })
        );
        assert_eq!(
            "(II)II".parse::<MethodDescriptor>(),
            Err(DescriptorError::TrailingInput { position: 5 })
        );
    }
}
