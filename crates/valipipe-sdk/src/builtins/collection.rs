//! Array predicates and the length modifier

use valipipe_core::{Operation, Value};

/// Array with at least one truthy item
pub(super) fn any() -> Operation {
    Operation::unary(|v| v.as_array().is_some_and(|items| items.iter().any(Value::is_truthy)))
}

/// Array whose items are all truthy
pub(super) fn all() -> Operation {
    Operation::unary(|v| v.as_array().is_some_and(|items| items.iter().all(Value::is_truthy)))
}

/// Character count of a string or item count of an array; null otherwise
pub(super) fn len() -> Operation {
    Operation::unary(|v| match v {
        Value::String(s) => Value::from(s.chars().count()),
        Value::Array(items) => Value::from(items.len()),
        _ => Value::Null,
    })
}
