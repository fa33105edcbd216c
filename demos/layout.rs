//! Wrapping, indentation, grouped numeric arrays, and truncation.
//!
//! Run with: cargo run --example layout

use console_inspect::{value, Buffer, Console, InspectOptions, Logger, TypedArray, Value};

fn main() -> console_inspect::Result<()> {
    let mut console = Console::stdio();

    console.log(&[value!("a wide object wraps with two-space indents:")])?;
    console.log(&[value!({
        "service": "inventory",
        "endpoint": "https://api.example.com/v2/items",
        "healthy": true
    })])?;

    console.log(&[value!("long numeric arrays group a fixed count per line:")])?;
    let samples: Vec<i64> = (1..=24).collect();
    console.log(&[console_inspect::to_value(&samples)?])?;

    console.log(&[value!("typed arrays and buffers carry a type prefix:")])?;
    console.log(&[Value::TypedArray(TypedArray::from_u16(vec![
        256, 512, 1024, 2048,
    ]))])?;
    console.log(&[Value::Buffer(Buffer::new(vec![0xde, 0xad, 0xbe, 0xef]))])?;

    console.log(&[value!("a narrow line width forces early wrapping:")])?;
    let mut narrow = Console::new(
        Logger::stdio().with_options(InspectOptions::new().with_line_width(20)),
    );
    narrow.log(&[value!({ "a": 1, "b": 2, "c": 3 })])?;
    Ok(())
}
