//! Result wrappers

use valipipe_core::Operation;

/// Logical negation of the downstream outcome
pub(super) fn not() -> Operation {
    Operation::unary(|v| !v.is_truthy())
}
