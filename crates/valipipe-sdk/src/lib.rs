//! Valipipe SDK
//!
//! High-level API for registering operations and evaluating chains:
//! the [`Valipipe`] facade, its builder and configuration, and the
//! built-in operation catalogue.

pub mod builder;
pub mod builtins;
pub mod config;
pub mod error;
pub mod facade;

use std::sync::OnceLock;

// Re-export main types
pub use builder::ValipipeBuilder;
pub use config::ValipipeConfig;
pub use error::{Result, SdkError};
pub use facade::Valipipe;

// Re-export commonly used types from dependencies
pub use valipipe_core::{Operation, OperationKind, OperationOptions, Value};
pub use valipipe_runtime::{ChainCursor, Invocation, Registry, RuntimeError};

static GLOBAL: OnceLock<Valipipe> = OnceLock::new();

/// Process-wide facade with every built-in registered, created on first use
pub fn global() -> &'static Valipipe {
    GLOBAL.get_or_init(Valipipe::with_builtins)
}
