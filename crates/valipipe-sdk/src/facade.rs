//! The Valipipe facade
//!
//! Entry point for registering operations and starting chains.
//!
//! # Example
//!
//! ```rust,ignore
//! use valipipe_sdk::{Operation, OperationOptions, Valipipe};
//!
//! let vp = Valipipe::with_builtins();
//!
//! // string length below 10
//! let short = vp.get("string")?.then("len")?.then("lt")?;
//! let short = short.call([10])?.into_partial().unwrap();
//! assert!(short.check(["hello"])?);
//!
//! vp.register_validator(
//!     "even",
//!     Operation::unary(|v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0)),
//!     OperationOptions::default(),
//! );
//! assert!(vp.get("number")?.then("even")?.check([4])?);
//! ```

use crate::builder::ValipipeBuilder;
use crate::builtins;
use crate::error::{Result, SdkError};
use std::sync::Arc;
use valipipe_core::{Operation, OperationOptions, Value};
use valipipe_runtime::{ChainCursor, Registry};

/// Facade over one registry
///
/// Clones share the same registry.
#[derive(Debug, Clone)]
pub struct Valipipe {
    registry: Arc<Registry>,
}

impl Valipipe {
    /// Facade over a new empty registry
    pub fn new() -> Self {
        Self::from_registry(Arc::new(Registry::new()))
    }

    /// Facade with every built-in registered
    pub fn with_builtins() -> Self {
        let valipipe = Self::new();
        builtins::register_all(&valipipe.registry);
        valipipe
    }

    /// Facade over an existing registry
    pub fn from_registry(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Create a builder
    pub fn builder() -> ValipipeBuilder {
        ValipipeBuilder::new()
    }

    /// Register an operation.
    ///
    /// Returns `false` if `name` is already registered; the first
    /// registration is kept.
    pub fn register_validator(
        &self,
        name: impl Into<String>,
        operation: Operation,
        options: OperationOptions,
    ) -> bool {
        self.registry.register(name, operation, options)
    }

    /// Start a new chain at `name`
    pub fn get(&self, name: &str) -> Result<ChainCursor> {
        Ok(ChainCursor::start(Arc::clone(&self.registry), name)?)
    }

    /// Run `name` alone with `args`
    pub fn check<I>(&self, name: &str, args: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Ok(self.get(name)?.check(args)?)
    }

    /// Operations cannot be assigned directly; use `register_validator`
    pub fn set(&self, name: &str, _operation: Operation) -> Result<()> {
        Err(SdkError::ReadOnlyFacade {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl Default for Valipipe {
    fn default() -> Self {
        Self::new()
    }
}
