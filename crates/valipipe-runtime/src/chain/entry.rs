//! Bound chain entries

use std::sync::Arc;
use valipipe_core::{OperationDefinition, OperationKind, Value};

/// Ordered entries of one chain-building session
pub type Stack = Vec<ChainEntry>;

/// An operation closed over the configuration arguments supplied so far
#[derive(Debug, Clone)]
pub struct ChainEntry {
    definition: Arc<OperationDefinition>,
    bound: Vec<Value>,
}

impl ChainEntry {
    /// Entry with no bound arguments
    pub fn new(definition: Arc<OperationDefinition>) -> Self {
        Self {
            definition,
            bound: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn kind(&self) -> OperationKind {
        self.definition.kind
    }

    pub fn bound(&self) -> &[Value] {
        &self.bound
    }

    /// Arguments still needed before the operation's arity is met
    pub fn remaining_arity(&self) -> usize {
        self.definition.arity.saturating_sub(self.bound.len())
    }

    /// Copy of this entry with `args` appended to the bound arguments
    pub fn with_args(&self, args: &[Value]) -> Self {
        let mut bound = Vec::with_capacity(self.bound.len() + args.len());
        bound.extend_from_slice(&self.bound);
        bound.extend_from_slice(args);

        Self {
            definition: Arc::clone(&self.definition),
            bound,
        }
    }

    /// Run the operation with the bound arguments followed by `value`
    pub fn invoke(&self, value: &[Value]) -> Value {
        if self.bound.is_empty() {
            return self.definition.invoke(value);
        }

        let mut args = Vec::with_capacity(self.bound.len() + value.len());
        args.extend_from_slice(&self.bound);
        args.extend_from_slice(value);
        self.definition.invoke(&args)
    }
}
