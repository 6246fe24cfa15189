//! Registered operation metadata

use super::function::Operation;
use crate::types::{OperationKind, OperationOptions, Value};

/// One registered, named operation
#[derive(Debug, Clone)]
pub struct OperationDefinition {
    /// Unique name in its registry
    pub name: String,

    /// Declared arity of the body
    pub arity: usize,

    /// May be chained after another operation
    pub pipeable: bool,

    /// Filter, modifying or wrapping
    pub kind: OperationKind,

    /// Body
    pub operation: Operation,
}

impl OperationDefinition {
    pub fn new(name: impl Into<String>, operation: Operation, options: OperationOptions) -> Self {
        Self {
            name: name.into(),
            arity: operation.arity(),
            pipeable: options.pipeable,
            kind: options.kind(),
            operation,
        }
    }

    pub fn invoke(&self, args: &[Value]) -> Value {
        self.operation.invoke(args)
    }
}
