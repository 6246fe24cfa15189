//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use valipipe_sdk::{Operation, OperationOptions, Valipipe, Value};

/// Facade with the operations used by the chain scenarios
pub fn scenario_facade() -> Valipipe {
    let vp = Valipipe::new();

    vp.register_validator(
        "isPositive",
        Operation::unary(|v| v.as_f64().is_some_and(|n| n > 0.0)),
        OperationOptions::default(),
    );
    vp.register_validator(
        "double",
        Operation::unary(|v| v.as_f64().map(|n| n * 2.0)),
        OperationOptions::new().modifying(true),
    );
    vp.register_validator(
        "isEven",
        Operation::unary(|v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0)),
        OperationOptions::default(),
    );
    vp.register_validator(
        "negate",
        Operation::unary(|b| !b.is_truthy()),
        OperationOptions::new().wrapping(true),
    );
    vp.register_validator(
        "isString",
        Operation::unary(|v| matches!(v, Value::String(_))),
        OperationOptions::default(),
    );
    vp.register_validator(
        "between",
        Operation::ternary(|lo, hi, v| match (lo.as_f64(), hi.as_f64(), v.as_f64()) {
            (Some(lo), Some(hi), Some(v)) => v > lo && v < hi,
            _ => false,
        }),
        OperationOptions::default(),
    );

    vp
}

/// Records which operations ran, in order
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    /// Unary filter that logs its name and returns `result`
    pub fn filter(&self, name: &str, result: bool) -> Operation {
        let log = self.clone();
        let name = name.to_string();
        Operation::unary(move |_| {
            log.0.lock().unwrap().push(name.clone());
            result
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}
