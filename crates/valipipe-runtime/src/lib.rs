//! Valipipe Runtime - Registry, chain builder and evaluator
//!
//! Operations are registered once in a [`Registry`]. A [`ChainCursor`]
//! grows an ordered stack of bound operations, resolving partial
//! application by arity, and hands the completed stack to the
//! [`Evaluator`].

pub mod chain;
pub mod engine;
pub mod error;
pub mod registry;

// Re-export main types
pub use chain::{ChainCursor, ChainEntry, Invocation, Stack};
pub use engine::Evaluator;
pub use error::{Result, RuntimeError};
pub use registry::Registry;
