//! Chain evaluation
//!
//! Interprets a completed stack against a threaded value.

mod evaluator;

#[cfg(test)]
mod tests;

pub use evaluator::Evaluator;
