//! Chain building
//!
//! A chain is grown one operation at a time. Advancing to a new name pushes
//! the previously active entry onto the stack; a call either partially
//! applies the active entry or completes it and runs the evaluator.

mod cursor;
mod entry;

pub use cursor::{ChainCursor, Invocation};
pub use entry::{ChainEntry, Stack};
