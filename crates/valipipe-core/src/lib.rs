//! Valipipe Core - Core types for the Valipipe combinator runtime
//!
//! This crate provides the fundamental types shared by the runtime and SDK:
//! - Value types passed through pipelines
//! - Operation bodies with declared arity
//! - Registration options and operation metadata

pub mod operation;
pub mod types;

// Re-export commonly used types
pub use operation::{Operation, OperationDefinition};
pub use types::{OperationKind, OperationOptions, Value};
