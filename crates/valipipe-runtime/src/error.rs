//! Runtime error types

use thiserror::Error;

/// Runtime error
///
/// Only structural misuse of a chain is an error. A predicate that does not
/// match is reported as a `false` outcome, never through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Chain advanced to an operation registered with `pipeable = false`
    #[error("Validator {name} is not pipeable")]
    NotPipeable { name: String },

    /// Wrapping operation invoked as the completing call of a chain
    #[error("Validator {name} should not be called without pipe")]
    InvalidWrappingUse { name: String },

    /// Name not present in the registry
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// `check` was used on a call that only partially applied its operation
    #[error("Operation {name} still expects {remaining} argument(s)")]
    IncompleteInvocation { name: String, remaining: usize },
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
