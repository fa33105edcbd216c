//! # console_inspect
//!
//! A console-style value inspector: renders dynamic runtime values
//! (primitives, containers, functions, boxed types, typed buffers) into
//! human-readable, optionally colorized text, the way a developer console
//! would print them.
//!
//! ## Key Features
//!
//! - **Recursive inspection**: nested objects and arrays with safe cycle
//!   detection, depth limits, and element caps
//! - **Width-aware layout**: containers stay on one line when they fit and
//!   break across indented lines when they do not; long numeric arrays
//!   group a fixed number of elements per line
//! - **Optional colors**: ANSI styling by value category, layered after
//!   layout so escape codes never skew wrap decisions
//! - **Console facade**: `log`/`warn`/`error` plus labelled timers,
//!   counters, assertions, and stack traces over any pair of sinks
//! - **Serde bridge**: build value graphs from any `T: Serialize`
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! console_inspect = "0.1"
//! ```
//!
//! ### Formatting values
//!
//! ```rust
//! use console_inspect::{format_value, value};
//!
//! let v = value!({ "name": "Alice", "tags": ["admin", "user"] });
//! let line = format_value(&v).unwrap();
//! assert_eq!(line, "{ name: 'Alice', tags: [ 'admin', 'user' ] }\n");
//! ```
//!
//! ### Logging through the facade
//!
//! ```rust
//! use console_inspect::{value, Console};
//!
//! let mut console = Console::stdio();
//! console.log(&[value!("server listening on"), value!(8080)]).unwrap();
//! ```
//!
//! ### Cyclic values
//!
//! Containers are shared handles, so cyclic graphs are expressible and
//! render safely:
//!
//! ```rust
//! use console_inspect::{format_value, Object, Value};
//!
//! let x = Object::new();
//! x.insert("self", Value::Object(x.clone()));
//! assert_eq!(format_value(&Value::Object(x)).unwrap(), "{ self: [Circular] }\n");
//! ```
//!
//! ## Design
//!
//! Formatting is a pure function of the value graph and the options; it
//! performs no I/O and keeps no state between calls. Internally it runs
//! two passes: a structural inspector flattens the value graph into a
//! token stream while accumulating per-node widths, then a layout pass
//! resolves spacing placeholders against those widths. See the
//! [`conventions`] module for the full notation reference.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Traversal is bounded for adversarial inputs: cycle detection, depth
//!   collapse, and element caps together bound both output size and
//!   recursion depth
//! - No panics in the public API on any value graph
//!
//! ## Examples
//!
//! See the `demos/` directory for focused example programs:
//!
//! - **`simple.rs`** - formatting primitives and small containers
//! - **`layout.rs`** - wrapping, indentation, and grouped numeric arrays
//! - **`cycles.rs`** - cyclic and shared value graphs
//! - **`facade.rs`** - the console facade: timers, counters, traces
//!
//! Run any of them with: `cargo run --example <name>`

pub mod classify;
pub mod conventions;
pub mod error;
pub mod inspect;
pub mod logger;
pub mod macros;
pub mod map;
pub mod options;
pub mod quote;
pub mod render;
pub mod ser;
pub mod style;
pub mod value;

pub use error::{Error, Result};
pub use logger::{Console, Logger};
pub use map::{PropertyKey, PropertyMap};
pub use options::InspectOptions;
pub use ser::ValueSerializer;
pub use value::{Array, Buffer, ElementKind, Number, Object, Symbol, TypedArray, Value};

use crate::classify::classify;
use crate::inspect::{container_of, Inspector};
use crate::style::paint;
use serde::Serialize;

/// Formats a sequence of top-level arguments into one newline-terminated
/// line of text.
///
/// Arguments are joined by single spaces. Top-level strings are written
/// through verbatim; nested strings are quoted and escaped. A call with
/// no arguments produces just the line break.
///
/// # Examples
///
/// ```rust
/// use console_inspect::{format, value, InspectOptions};
///
/// let line = format(
///     &[value!("count:"), value!(42)],
///     InspectOptions::new(),
/// ).unwrap();
/// assert_eq!(line, "count: 42\n");
/// ```
///
/// # Errors
///
/// Returns an error if a value cannot be rendered. With values built
/// through this crate's constructors the kind set is closed and this
/// does not occur; the fallible signature exists for forward
/// compatibility with relaxed value sources.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(values: &[Value], options: InspectOptions) -> Result<String> {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format_argument(value, &options)?);
    }
    out.push('\n');
    Ok(out)
}

/// Formats a single value with default options.
///
/// # Examples
///
/// ```rust
/// use console_inspect::{format_value, value};
///
/// assert_eq!(format_value(&value!([1, 2])).unwrap(), "[ 1, 2 ]\n");
/// ```
///
/// # Errors
///
/// See [`format`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_value(value: &Value) -> Result<String> {
    format(std::slice::from_ref(value), InspectOptions::new())
}

fn format_argument(value: &Value, options: &InspectOptions) -> Result<String> {
    if let Some(atom) = classify(value, true) {
        return Ok(match (options.colors, atom.category) {
            (true, Some(category)) => paint(category, &atom.text),
            _ => atom.text,
        });
    }
    // Containers get the full two-pass treatment, with traversal state
    // created fresh per top-level argument.
    let container = container_of(value).expect("non-atomic value is a container");
    let mut inspector = Inspector::new(options);
    inspector.root(&container);
    Ok(render::render(&inspector.tokens, &inspector.nodes, options))
}

/// Converts any `T: Serialize` into a [`Value`] graph.
///
/// # Examples
///
/// ```rust
/// use console_inspect::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] for serde shapes with no display
/// convention: tuple, struct, and newtype enum variants, and maps with
/// non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_just_a_line_break() {
        assert_eq!(format(&[], InspectOptions::new()).unwrap(), "\n");
    }

    #[test]
    fn test_arguments_join_with_spaces() {
        let line = format(
            &[Value::from("a"), Value::from(1), Value::Null],
            InspectOptions::new(),
        )
        .unwrap();
        assert_eq!(line, "a 1 null\n");
    }

    #[test]
    fn test_top_level_string_is_verbatim() {
        let line = format_value(&Value::from("no 'quoting' here\n")).unwrap();
        assert_eq!(line, "no 'quoting' here\n\n");
    }

    #[test]
    fn test_format_is_idempotent() {
        let v = value!({ "a": [1, "two", null], "b": { "c": true } });
        let first = format_value(&v).unwrap();
        let second = format_value(&v).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_colored_atom_at_top_level() {
        let line = format(&[Value::from(7)], InspectOptions::new().with_colors(true)).unwrap();
        assert_eq!(console::strip_ansi_codes(&line), "7\n");
        assert!(line.contains('\u{1b}'));
    }
}
