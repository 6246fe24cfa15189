//! Type system for Valipipe
//!
//! This module contains:
//! - Runtime values passed through pipelines
//! - Registration options and the operation kinds they map to

pub mod options;
pub mod value;

pub use options::{OperationKind, OperationOptions};
pub use value::Value;
