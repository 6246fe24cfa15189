//! Basic chain example
//!
//! This example demonstrates:
//! - Using the process-wide facade with built-in validators
//! - Chaining filters, modifiers and wrappers
//! - Partial application of configuration arguments

use valipipe_sdk::{global, Value};

fn main() -> anyhow::Result<()> {
    valipipe_demos::init_tracing()?;

    println!("=== Basic Chain Example ===\n");

    let vp = global();

    // Single filters
    println!("string(\"hello\")          = {}", vp.check("string", ["hello"])?);
    println!("email(\"nobody\")          = {}", vp.check("email", ["nobody"])?);

    // string -> len -> lt(8): strings shorter than 8 characters
    let short = vp
        .get("string")?
        .then("len")?
        .then("lt")?
        .call([8])?
        .into_partial()
        .ok_or_else(|| anyhow::anyhow!("lt(8) should still await its value"))?;

    for input in ["valipipe", "short"] {
        println!("string.len.lt(8)({:?}) = {}", input, short.check([input])?);
    }

    // not -> email: anything that is not an email address
    let not_email = vp.get("not")?.then("email")?;
    println!("not.email(\"a@b.io\")      = {}", not_email.check(["a@b.io"])?);

    // btw curried one argument at a time
    let step = vp.get("btw")?.call([0])?;
    let step = step
        .into_partial()
        .ok_or_else(|| anyhow::anyhow!("btw(0) should be partial"))?
        .call([10])?;
    let in_range = step
        .into_partial()
        .ok_or_else(|| anyhow::anyhow!("btw(0)(10) should be partial"))?;
    println!("btw(0)(10)(5)            = {}", in_range.check([5])?);

    // Any JSON value can be validated
    let payload = Value::from(serde_json::json!([1, 0, 3]));
    let any_truthy = vp.get("array")?.then("any")?.check([payload.clone()])?;
    println!("array.any({:?}) = {}", payload, any_truthy);

    Ok(())
}
