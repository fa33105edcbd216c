//! Formatting primitives and small containers.
//!
//! Run with: cargo run --example simple

use console_inspect::{value, Console, Value};

fn main() -> console_inspect::Result<()> {
    let mut console = Console::stdio();

    console.log(&[value!("primitives:")])?;
    console.log(&[
        value!(undefined),
        value!(null),
        value!(true),
        value!(42),
        value!(-2.5),
    ])?;

    console.log(&[value!("a small object:")])?;
    console.log(&[value!({
        "name": "Alice",
        "age": 30,
        "tags": ["admin", "user"]
    })])?;

    console.log(&[value!("special atoms:")])?;
    console.log(&[
        Value::Function(Some("handler".to_string())),
        Value::Set(3),
        Value::BigInt(num_bigint::BigInt::from(i64::MAX) * 2),
    ])?;

    console.warn(&[value!("warnings go to stderr"), value!({ "code": 7 })])?;
    Ok(())
}
