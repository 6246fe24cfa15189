//! Operations: callables with a declared arity, and their registered form

pub mod definition;
pub mod function;

pub use definition::OperationDefinition;
pub use function::{Operation, OperationFn};
