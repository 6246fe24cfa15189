//! Chain cursor
//!
//! A `ChainCursor` points at the operation currently being resolved and
//! owns the stack of entries completed before it.
//!
//! # Example
//!
//! ```rust,ignore
//! // between(lo, hi, v) partially applied, then completed
//! let cursor = ChainCursor::start(Arc::clone(&registry), "between")?;
//! let partial = cursor.call([0])?.into_partial().unwrap();
//! let partial = partial.call([10])?.into_partial().unwrap();
//! assert!(partial.check([5])?);
//!
//! // len modifies the value, so eq compares against the string length
//! let three_chars = ChainCursor::start(registry, "len")?.then("eq")?;
//! assert!(three_chars.call([3])?.into_partial().unwrap().check(["abc"])?);
//! ```

use super::entry::{ChainEntry, Stack};
use crate::engine::Evaluator;
use crate::error::{Result, RuntimeError};
use crate::registry::Registry;
use std::sync::Arc;
use tracing::debug;
use valipipe_core::{OperationKind, Value};

/// Outcome of calling a cursor
#[derive(Debug, Clone)]
pub enum Invocation {
    /// Arity not met yet; the cursor carries the supplied arguments
    Partial(ChainCursor),
    /// Chain completed and evaluated
    Resolved(bool),
}

impl Invocation {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Invocation::Resolved(_))
    }

    /// Evaluation result, if the call completed the chain
    pub fn result(&self) -> Option<bool> {
        match self {
            Invocation::Resolved(valid) => Some(*valid),
            Invocation::Partial(_) => None,
        }
    }

    /// Partially applied cursor, if the call did not complete the chain
    pub fn into_partial(self) -> Option<ChainCursor> {
        match self {
            Invocation::Partial(cursor) => Some(cursor),
            Invocation::Resolved(_) => None,
        }
    }
}

/// Position in a chain being built
#[derive(Debug, Clone)]
pub struct ChainCursor {
    registry: Arc<Registry>,
    stack: Stack,
    current: ChainEntry,
}

impl ChainCursor {
    /// Start a new chain at `name` with an empty stack.
    ///
    /// Operations registered with `pipeable = false` may start a chain.
    pub fn start(registry: Arc<Registry>, name: &str) -> Result<Self> {
        let definition = registry
            .lookup(name)
            .ok_or_else(|| RuntimeError::UnknownOperation(name.to_string()))?;

        Ok(Self {
            registry,
            stack: Stack::new(),
            current: ChainEntry::new(definition),
        })
    }

    /// Advance the chain to `name`.
    ///
    /// The active entry, with whatever arguments it has bound, is pushed
    /// onto the stack and the returned cursor points at `name`.
    pub fn then(mut self, name: &str) -> Result<Self> {
        let definition = self
            .registry
            .lookup(name)
            .ok_or_else(|| RuntimeError::UnknownOperation(name.to_string()))?;

        if !definition.pipeable {
            return Err(RuntimeError::NotPipeable {
                name: name.to_string(),
            });
        }

        let previous = std::mem::replace(&mut self.current, ChainEntry::new(definition));
        self.stack.push(previous);

        Ok(self)
    }

    /// Call the active operation with `args`.
    ///
    /// Fewer arguments than the remaining arity produce a partial that can be
    /// called again or chained further. Otherwise the active entry is pushed
    /// and the whole stack is evaluated with `args` as the initial value.
    pub fn call<I>(&self, args: I) -> Result<Invocation>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();

        if args.len() < self.current.remaining_arity() {
            return Ok(Invocation::Partial(Self {
                registry: Arc::clone(&self.registry),
                stack: self.stack.clone(),
                current: self.current.with_args(&args),
            }));
        }

        if self.current.kind() == OperationKind::Wrapping {
            return Err(RuntimeError::InvalidWrappingUse {
                name: self.current.name().to_string(),
            });
        }

        let mut stack = self.stack.clone();
        stack.push(self.current.clone());

        let valid = Evaluator::evaluate(&stack, &args);
        debug!(
            "Chain ending at '{}' ({} entries) evaluated to {}",
            self.current.name(),
            stack.len(),
            valid
        );

        Ok(Invocation::Resolved(valid))
    }

    /// Call the active operation and require the chain to complete
    pub fn check<I>(&self, args: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        match self.call(args)? {
            Invocation::Resolved(valid) => Ok(valid),
            Invocation::Partial(cursor) => Err(RuntimeError::IncompleteInvocation {
                name: cursor.current.name().to_string(),
                remaining: cursor.current.remaining_arity(),
            }),
        }
    }

    /// Name of the active operation
    pub fn current_name(&self) -> &str {
        self.current.name()
    }

    /// Arguments the active operation still needs
    pub fn remaining_arity(&self) -> usize {
        self.current.remaining_arity()
    }

    /// Number of entries completed before the active one
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Entries completed before the active one
    pub fn stack(&self) -> &[ChainEntry] {
        &self.stack
    }
}
