//! Cyclic and shared value graphs.
//!
//! Run with: cargo run --example cycles

use console_inspect::{value, Console, Object, Value};

fn main() -> console_inspect::Result<()> {
    let mut console = Console::stdio();

    console.log(&[value!("a self-referencing object:")])?;
    let node = Object::new();
    node.insert("name", "root");
    node.insert("me", Value::Object(node.clone()));
    console.log(&[Value::Object(node)])?;

    console.log(&[value!("a two-object cycle:")])?;
    let a = Object::new();
    let b = Object::new();
    a.insert("next", Value::Object(b.clone()));
    b.insert("prev", Value::Object(a.clone()));
    console.log(&[Value::Object(a)])?;

    console.log(&[value!("deep nesting collapses to a type name:")])?;
    console.log(&[value!({ "a": { "b": { "c": { "d": { "e": 1 } } } } })])?;
    Ok(())
}
