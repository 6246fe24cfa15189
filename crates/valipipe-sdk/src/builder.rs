//! Builder pattern for Valipipe

use crate::builtins;
use crate::config::ValipipeConfig;
use crate::error::Result;
use crate::facade::Valipipe;
use std::sync::Arc;
use tracing::info;
use valipipe_core::{Operation, OperationOptions};
use valipipe_runtime::Registry;

/// Builder for [`Valipipe`]
///
/// Custom operations are registered before the built-ins, so a custom
/// operation may take a built-in's name.
///
/// # Example
///
/// ```rust,ignore
/// use valipipe_sdk::{Operation, OperationOptions, ValipipeBuilder};
///
/// let vp = ValipipeBuilder::new()
///     .exclude_builtin("email")
///     .register(
///         "positive",
///         Operation::unary(|v| v.as_f64().is_some_and(|n| n > 0.0)),
///         OperationOptions::default(),
///     )
///     .build()?;
/// ```
pub struct ValipipeBuilder {
    config: ValipipeConfig,
    registry: Option<Arc<Registry>>,
    operations: Vec<(String, Operation, OperationOptions)>,
}

impl ValipipeBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: ValipipeConfig::new(),
            registry: None,
            operations: Vec::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ValipipeConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable the built-in catalogue
    pub fn register_builtins(mut self, enable: bool) -> Self {
        self.config.register_builtins = enable;
        self
    }

    /// Leave one built-in out
    pub fn exclude_builtin(mut self, name: impl Into<String>) -> Self {
        self.config.exclude.push(name.into());
        self
    }

    /// Build on top of an existing registry instead of a new one
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Queue a custom operation
    pub fn register(
        mut self,
        name: impl Into<String>,
        operation: Operation,
        options: OperationOptions,
    ) -> Self {
        self.operations.push((name.into(), operation, options));
        self
    }

    /// Build the facade
    pub fn build(self) -> Result<Valipipe> {
        self.config.validate()?;

        let registry = self.registry.unwrap_or_default();

        let custom = self.operations.len();
        for (name, operation, options) in self.operations {
            registry.register(name, operation, options);
        }

        let installed = builtins::register_enabled(&registry, &self.config);
        info!(
            "Valipipe ready: {} custom and {} built-in operations ({} total)",
            custom,
            installed,
            registry.len()
        );

        Ok(Valipipe::from_registry(registry))
    }
}

impl Default for ValipipeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
