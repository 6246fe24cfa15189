//! Operation Registry
//!
//! Append-only mapping from operation name to its definition. The first
//! registration of a name wins; later registrations under the same name are
//! ignored.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};
use valipipe_core::{Operation, OperationDefinition, OperationOptions};

/// Registry of named operations
pub struct Registry {
    /// All registered operations indexed by name
    operations: RwLock<HashMap<String, Arc<OperationDefinition>>>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            operations: RwLock::new(HashMap::new()),
        }
    }

    /// Register an operation under `name`.
    ///
    /// Returns `false` and keeps the existing definition when the name is
    /// already taken.
    pub fn register(
        &self,
        name: impl Into<String>,
        operation: Operation,
        options: OperationOptions,
    ) -> bool {
        let name = name.into();

        // Check and insert under one write guard so concurrent registrations
        // of the same name cannot both succeed
        let mut operations = self
            .operations
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if operations.contains_key(&name) {
            debug!("Operation '{}' already registered, ignoring", name);
            return false;
        }

        if options.has_conflicting_roles() {
            warn!(
                "Operation '{}' requested both modifying and wrapping, registering as modifying",
                name
            );
        }

        let definition = OperationDefinition::new(name.clone(), operation, options);
        debug!(
            "Registered operation '{}' (arity {}, {}, pipeable: {})",
            name, definition.arity, definition.kind, definition.pipeable
        );
        operations.insert(name, Arc::new(definition));

        true
    }

    /// Get an operation by name
    pub fn lookup(&self, name: &str) -> Option<Arc<OperationDefinition>> {
        self.operations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Check if an operation exists
    pub fn contains(&self, name: &str) -> bool {
        self.operations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Get all operation names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .operations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Get count of registered operations
    pub fn len(&self) -> usize {
        self.operations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("operations", &self.names())
            .finish()
    }
}
