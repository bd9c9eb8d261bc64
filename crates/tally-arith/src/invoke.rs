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

//! # Named Operations
//!
//! A `Registry` maps operation names to a [`MethodDescriptor`] and an
//! implementation. Invocation validates the argument count and kinds against
//! the descriptor before calling, so implementations only ever see
//! well-typed arguments.
//!
//! `Registry::standard` registers the eight functions of [`crate::add`]
//! under their camel-case names:
//!
//! | Name | Descriptor |
//! |---|---|
//! | `add` | `(II)I` |
//! | `subtract` | `(II)I` |
//! | `doubleAddHalf` | `(D)D` |
//! | `doubleAdd` | `(DD)D` |
//! | `floatAddHalf` | `(F)F` |
//! | `longAddConst` | `(J)J` |
//! | `intAddConst` | `(I)I` |
//! | `addMany` | `(IIIIII)I` |
//!
//! A registry is immutable once built and can be shared between threads.

use crate::{
    add,
    descriptor::MethodDescriptor,
    value::{Value, ValueError, ValueKind},
};
use rustc_hash::FxHashMap;

/// Adapts a typed function into an [`OperationFn`].
macro_rules! operation {
    ($func:path, $($arg:ident: $t:ty),+ $(,)?) => {
        |args: &[Value]| -> Result<Value, ValueError> {
            match args {
                [$($arg),+] => Ok(Value::from($func($(<$t>::try_from(*$arg)?),+))),
                _ => Err(ValueError::Arity {
                    expected: [$(stringify!($arg)),+].len(),
                    found: args.len(),
                }),
            }
        }
    };
}

/// The implementation of an operation.
pub type OperationFn = fn(&[Value]) -> Result<Value, ValueError>;

/// The error type for [`Registry::invoke`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvokeError {
    /// No operation is registered under the name.
    #[error("no operation named '{0}'")]
    UnknownOperation(String),
    /// The number of arguments does not match the descriptor.
    #[error("operation '{name}' takes {expected} argument(s), got {found}")]
    ArityMismatch {
        /// The name of the operation.
        name: String,
        /// The number of parameters in the descriptor.
        expected: usize,
        /// The number of arguments supplied.
        found: usize,
    },
    /// An argument has a different kind than the descriptor requires.
    #[error("argument {index} of '{name}': expected {expected}, found {found}")]
    ArgumentKind {
        /// The name of the operation.
        name: String,
        /// The zero-based position of the argument.
        index: usize,
        /// The parameter kind in the descriptor.
        expected: ValueKind,
        /// The kind of the supplied argument.
        found: ValueKind,
    },
    /// A textual argument could not be parsed.
    #[error("argument {index} of '{name}': {source}")]
    Argument {
        /// The name of the operation.
        name: String,
        /// The zero-based position of the argument.
        index: usize,
        /// The parse failure.
        #[source]
        source: ValueError,
    },
    /// The implementation rejected its arguments.
    #[error("operation '{name}' failed: {source}")]
    Rejected {
        /// The name of the operation.
        name: String,
        /// The error reported by the implementation.
        #[source]
        source: ValueError,
    },
    /// The implementation returned a value of a different kind than the
    /// descriptor declares.
    #[error("operation '{name}' returned {found}, descriptor declares {expected}")]
    ReturnKind {
        /// The name of the operation.
        name: String,
        /// The return kind in the descriptor.
        expected: ValueKind,
        /// The kind of the returned value.
        found: ValueKind,
    },
}

/// A named operation with its descriptor.
#[derive(Debug, Clone)]
pub struct Operation {
    name: String,
    descriptor: MethodDescriptor,
    call: OperationFn,
}

impl Operation {
    /// Creates a new operation.
    #[inline]
    pub fn new(name: impl Into<String>, descriptor: MethodDescriptor, call: OperationFn) -> Self {
        Self {
            name: name.into(),
            descriptor,
            call,
        }
    }

    /// Returns the name of the operation.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the descriptor of the operation.
    #[inline]
    pub fn descriptor(&self) -> &MethodDescriptor {
        &self.descriptor
    }

    /// Validates `args` against the descriptor and applies the operation.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::ArityMismatch`] or [`InvokeError::ArgumentKind`]
    /// if `args` do not match the descriptor, [`InvokeError::Rejected`]
    /// if the implementation itself reports an error, and
    /// [`InvokeError::ReturnKind`] if it returns a value of the wrong kind.
    pub fn apply(&self, args: &[Value]) -> Result<Value, InvokeError> {
        let expected = self.descriptor.arity();
        if args.len() != expected {
            return Err(InvokeError::ArityMismatch {
                name: self.name.clone(),
                expected,
                found: args.len(),
            });
        }

        for (index, (arg, &kind)) in args.iter().zip(self.descriptor.params()).enumerate() {
            if arg.kind() != kind {
                return Err(InvokeError::ArgumentKind {
                    name: self.name.clone(),
                    index,
                    expected: kind,
                    found: arg.kind(),
                });
            }
        }

        let value = (self.call)(args).map_err(|source| InvokeError::Rejected {
            name: self.name.clone(),
            source,
        })?;
        if value.kind() != self.descriptor.ret() {
            return Err(InvokeError::ReturnKind {
                name: self.name.clone(),
                expected: self.descriptor.ret(),
                found: value.kind(),
            });
        }
        Ok(value)
    }

    /// Parses textual arguments with the descriptor's parameter kinds and
    /// applies the operation.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::ArityMismatch`] if the argument count is wrong
    /// and [`InvokeError::Argument`] if an argument fails to parse.
    pub fn apply_str(&self, args: &[&str]) -> Result<Value, InvokeError> {
        let expected = self.descriptor.arity();
        if args.len() != expected {
            return Err(InvokeError::ArityMismatch {
                name: self.name.clone(),
                expected,
                found: args.len(),
            });
        }

        let values = args
            .iter()
            .zip(self.descriptor.params())
            .enumerate()
            .map(|(index, (text, kind))| {
                kind.parse(text).map_err(|source| InvokeError::Argument {
                    name: self.name.clone(),
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.apply(&values)
    }
}

/// A set of operations keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    // Sorted by name.
    operations: Vec<Operation>,
    index: FxHashMap<String, usize>,
}

impl Registry {
    /// Returns an empty builder.
    #[inline]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns a registry holding the eight arithmetic functions.
    pub fn standard() -> Self {
        use ValueKind::{Double, Float, Int, Long};

        Self::builder()
            .register(
                "add",
                MethodDescriptor::new([Int, Int], Int),
                operation!(add::add, a: i32, b: i32),
            )
            .register(
                "subtract",
                MethodDescriptor::new([Int, Int], Int),
                operation!(add::subtract, a: i32, b: i32),
            )
            .register(
                "doubleAddHalf",
                MethodDescriptor::new([Double], Double),
                operation!(add::double_add_half, a: f64),
            )
            .register(
                "doubleAdd",
                MethodDescriptor::new([Double, Double], Double),
                operation!(add::double_add, a: f64, b: f64),
            )
            .register(
                "floatAddHalf",
                MethodDescriptor::new([Float], Float),
                operation!(add::float_add_half, f: f32),
            )
            .register(
                "longAddConst",
                MethodDescriptor::new([Long], Long),
                operation!(add::long_add_const, l: i64),
            )
            .register(
                "intAddConst",
                MethodDescriptor::new([Int], Int),
                operation!(add::int_add_const, i: i32),
            )
            .register(
                "addMany",
                MethodDescriptor::new([Int; 6], Int),
                operation!(add::add_many, a: i32, b: i32, c: i32, d: i32, f: i32, e: i32),
            )
            .build()
    }

    /// Returns the operation registered under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.index.get(name).map(|&i| &self.operations[i])
    }

    /// Returns the number of registered operations.
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if no operation is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Iterates over the operations in name order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Invokes the operation registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::UnknownOperation`] if `name` is not
    /// registered, otherwise any error of [`Operation::apply`].
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, InvokeError> {
        let span = tracing::trace_span!("invoke", operation = name, arity = args.len());
        let _enter = span.enter();

        let result = self.resolve(name).and_then(|op| op.apply(args));
        log_outcome(&result);
        result
    }

    /// Invokes the operation registered under `name` with textual arguments.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::UnknownOperation`] if `name` is not
    /// registered, otherwise any error of [`Operation::apply_str`].
    pub fn invoke_str(&self, name: &str, args: &[&str]) -> Result<Value, InvokeError> {
        let span = tracing::trace_span!("invoke_str", operation = name, arity = args.len());
        let _enter = span.enter();

        let result = self.resolve(name).and_then(|op| op.apply_str(args));
        log_outcome(&result);
        result
    }

    fn resolve(&self, name: &str) -> Result<&Operation, InvokeError> {
        self.get(name)
            .ok_or_else(|| InvokeError::UnknownOperation(name.to_string()))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for [`Registry`].
///
/// Registering a name twice keeps the later operation.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    operations: Vec<Operation>,
}

impl RegistryBuilder {
    /// Adds an operation.
    pub fn register(
        mut self,
        name: impl Into<String>,
        descriptor: MethodDescriptor,
        call: OperationFn,
    ) -> Self {
        let operation = Operation::new(name, descriptor, call);
        self.operations.retain(|op| op.name != operation.name);
        self.operations.push(operation);
        self
    }

    /// Builds the registry.
    pub fn build(mut self) -> Registry {
        self.operations.sort_by(|a, b| a.name.cmp(&b.name));
        let index = self
            .operations
            .iter()
            .enumerate()
            .map(|(i, op)| (op.name.clone(), i))
            .collect();
        Registry {
            operations: self.operations,
            index,
        }
    }
}

fn log_outcome(result: &Result<Value, InvokeError>) {
    match result {
        Ok(value) => tracing::trace!(result = %value, "invocation completed"),
        Err(err) => tracing::debug!(error = %err, "invocation rejected"),
    }
}
