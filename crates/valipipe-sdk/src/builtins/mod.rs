//! Built-in operation catalogue
//!
//! Every built-in is an ordinary registration: a name, an [`Operation`]
//! and its [`OperationOptions`]. Nothing here is known to the runtime.

mod collection;
mod comparison;
mod logic;
mod types;

use crate::config::ValipipeConfig;
use tracing::debug;
use valipipe_core::{Operation, OperationOptions};
use valipipe_runtime::Registry;

/// Names of all built-ins, in registration order
pub const NAMES: &[&str] = &[
    "string", "email", "number", "int", "eq", "lt", "gt", "btw", "array", "any", "all", "len",
    "not",
];

/// A built-in ready to be registered
#[derive(Debug, Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub operation: Operation,
    pub options: OperationOptions,
}

impl Builtin {
    fn filter(name: &'static str, operation: Operation) -> Self {
        Self {
            name,
            operation,
            options: OperationOptions::default(),
        }
    }

    fn with_options(name: &'static str, operation: Operation, options: OperationOptions) -> Self {
        Self {
            name,
            operation,
            options,
        }
    }
}

/// Every built-in, in registration order
pub fn catalogue() -> Vec<Builtin> {
    vec![
        Builtin::filter("string", types::string()),
        Builtin::filter("email", types::email()),
        Builtin::filter("number", types::number()),
        Builtin::filter("int", types::int()),
        Builtin::filter("eq", comparison::eq()),
        Builtin::filter("lt", comparison::lt()),
        Builtin::filter("gt", comparison::gt()),
        Builtin::filter("btw", comparison::btw()),
        Builtin::filter("array", types::array()),
        Builtin::filter("any", collection::any()),
        Builtin::filter("all", collection::all()),
        Builtin::with_options(
            "len",
            collection::len(),
            OperationOptions::new().modifying(true),
        ),
        Builtin::with_options("not", logic::not(), OperationOptions::new().wrapping(true)),
    ]
}

/// Register every built-in into `registry`
pub fn register_all(registry: &Registry) -> usize {
    register_enabled(registry, &ValipipeConfig::default())
}

/// Register the built-ins `config` enables. Returns how many were inserted.
pub fn register_enabled(registry: &Registry, config: &ValipipeConfig) -> usize {
    let mut inserted = 0;
    for builtin in catalogue() {
        if !config.is_builtin_enabled(builtin.name) {
            continue;
        }
        if registry.register(builtin.name, builtin.operation, builtin.options) {
            inserted += 1;
        }
    }

    debug!("Registered {} built-in operations", inserted);
    inserted
}
