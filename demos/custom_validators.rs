//! Custom validators example
//!
//! This example demonstrates:
//! - Registering filters, modifiers and wrappers on a fresh facade
//! - First registration wins
//! - Structural errors: unpipeable operations and bare wrappers

use valipipe_sdk::{Operation, OperationOptions, Valipipe, Value};

fn main() -> anyhow::Result<()> {
    valipipe_demos::init_tracing()?;

    println!("=== Custom Validators Example ===\n");

    let vp = Valipipe::builder().register_builtins(false).build()?;

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
        OperationOptions::new().pipeable(false),
    );

    println!("isPositive(5)       = {}", vp.check("isPositive", [5])?);
    println!("isPositive(-1)      = {}", vp.check("isPositive", [-1])?);
    println!("double.isEven(3)    = {}", vp.get("double")?.then("isEven")?.check([3])?);

    let replaced = vp.register_validator(
        "isPositive",
        Operation::unary(|_| true),
        OperationOptions::default(),
    );
    println!("re-registered isPositive: {} (still {})", replaced, vp.check("isPositive", [-1])?);

    match vp.get("negate")?.then("isString") {
        Ok(_) => println!("negate.isString accepted"),
        Err(e) => println!("negate.isString rejected: {}", e),
    }

    match vp.check("negate", [true]) {
        Ok(valid) => println!("negate(true) = {}", valid),
        Err(e) => println!("negate(true) rejected: {}", e),
    }

    if let Err(e) = vp.set("isEven", Operation::unary(|_| true)) {
        println!("set(isEven) rejected: {}", e);
    }

    Ok(())
}
