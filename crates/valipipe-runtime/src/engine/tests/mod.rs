//! Test modules for the evaluator
