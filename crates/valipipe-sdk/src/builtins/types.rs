//! Type predicates

use regex::Regex;
use std::sync::LazyLock;
use valipipe_core::{Operation, Value};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

pub(super) fn string() -> Operation {
    Operation::unary(|v| matches!(v, Value::String(_)))
}

pub(super) fn email() -> Operation {
    Operation::unary(|v| v.as_str().is_some_and(|s| EMAIL_PATTERN.is_match(s)))
}

pub(super) fn number() -> Operation {
    Operation::unary(|v| matches!(v, Value::Number(_)))
}

/// Finite number without a fractional part
pub(super) fn int() -> Operation {
    Operation::unary(|v| v.as_f64().is_some_and(|n| n.is_finite() && n.fract() == 0.0))
}

pub(super) fn array() -> Operation {
    Operation::unary(|v| matches!(v, Value::Array(_)))
}
