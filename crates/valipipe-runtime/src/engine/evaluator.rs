//! Stack evaluator

use crate::chain::ChainEntry;
use std::borrow::Cow;
use tracing::trace;
use valipipe_core::{OperationKind, Value};

/// Evaluates a completed stack.
///
/// Each entry is handled according to its kind:
/// - filter: a falsy result stops evaluation with `false`
/// - modifying: the result becomes the sole value seen by later entries
/// - wrapping: the rest of the stack is evaluated first, and the wrapper's
///   result over that boolean is final
///
/// A stack with no entries left is satisfied.
///
/// Filters and modifiers run in a single pass over the stack. Wrappers are
/// held back and applied innermost first once the pass ends.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate `stack` with `value` as the initial argument list
    pub fn evaluate(stack: &[ChainEntry], value: &[Value]) -> bool {
        let mut current: Cow<'_, [Value]> = Cow::Borrowed(value);
        let mut wrappers: Vec<(usize, &ChainEntry)> = Vec::new();
        let mut valid = true;

        for (index, entry) in stack.iter().enumerate() {
            match entry.kind() {
                OperationKind::Modifying => {
                    let modified = entry.invoke(&current);
                    trace!("[{}] {} modified value to {:?}", index, entry.name(), modified);
                    current = Cow::Owned(vec![modified]);
                }
                OperationKind::Wrapping => wrappers.push((index, entry)),
                OperationKind::Filter => {
                    if !entry.invoke(&current).is_truthy() {
                        trace!("[{}] {} rejected {:?}", index, entry.name(), current);
                        valid = false;
                        break;
                    }
                }
            }
        }

        // Innermost wrapper sees the pass result, each outer one the next
        for (index, entry) in wrappers.into_iter().rev() {
            let outcome = entry.invoke(&[Value::Bool(valid)]).is_truthy();
            trace!("[{}] {} wrapped {} into {}", index, entry.name(), valid, outcome);
            valid = outcome;
        }

        valid
    }
}
