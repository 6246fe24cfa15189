//! Comparison predicates
//!
//! The configuration argument comes first and the checked value last, so
//! `lt(10)` reads as "less than 10" once partially applied.

use std::cmp::Ordering;
use valipipe_core::{Operation, Value};

/// Ordering between two numbers or two strings; anything else is unordered
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l.partial_cmp(r),
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        _ => None,
    }
}

pub(super) fn eq() -> Operation {
    Operation::binary(|a, b| a == b)
}

/// `lt(bound, v)`: v < bound
pub(super) fn lt() -> Operation {
    Operation::binary(|bound, v| compare(v, bound) == Some(Ordering::Less))
}

/// `gt(bound, v)`: v > bound
pub(super) fn gt() -> Operation {
    Operation::binary(|bound, v| compare(v, bound) == Some(Ordering::Greater))
}

/// `btw(lo, hi, v)`: lo < v < hi
pub(super) fn btw() -> Operation {
    Operation::ternary(|lo, hi, v| {
        compare(v, lo) == Some(Ordering::Greater) && compare(v, hi) == Some(Ordering::Less)
    })
}
