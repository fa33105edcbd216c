//! Output Notation Reference
//!
//! This module documents the display conventions this crate implements,
//! as produced by [`format`](crate::format) and the [`Console`](crate::Console)
//! facade.
//!
//! # Atomic values
//!
//! | Kind | Rendering | Example |
//! |------|-----------|---------|
//! | Undefined | literal | `undefined` |
//! | Null | literal | `null` |
//! | Boolean | literal | `true` |
//! | Number | decimal, or `NaN` / `Infinity` / `-Infinity` | `3.5` |
//! | BigInt | decimal with `n` suffix | `123n` |
//! | String (nested) | quoted and escaped | `'hello'` |
//! | String (top-level argument) | verbatim | `hello` |
//! | Function | bracketed name | `[Function: main]`, `[Function (anonymous)]` |
//! | Symbol | descriptive form | `Symbol(id)` |
//! | Boxed primitives | bracketed type and value | `[String: 'hi']`, `[Number: 42]` |
//! | Date | ISO-8601 instant | `2024-01-15T10:30:00.000Z` |
//! | Pattern | literal source and flags | `/ab+c/gi` |
//! | Error | message plus stack, verbatim and multi-line | |
//! | Promise | literal | `Promise` |
//! | Set / Map | size only, contents elided | `Set(3) { ... }`, `Map(0) {}` |
//! | WeakMap / WeakSet | fixed literal | `WeakMap { <items unknown> }` |
//!
//! # String quoting
//!
//! Nested strings take the first delimiter they do not contain, trying
//! `'`, then `"`, then `` ` ``. A string containing all three takes
//! single quotes with internal single quotes backslash-escaped.
//! Backslash, forward slash, backspace, form feed, newline, carriage
//! return, and tab are always escaped to their two-character forms.
//! A top-level string argument is written through verbatim.
//!
//! # Containers
//!
//! Plain objects render between `{` `}`, arrays and typed arrays between
//! `[` `]`, and buffers between `<` `>`. Typed arrays and buffers carry a
//! `TypeName(len) ` prefix (`Uint8Array(3) [ 1, 2, 3 ]`,
//! `Buffer(2) < de, ad >`); buffer bytes render as two-digit lowercase
//! hex.
//!
//! ## Key order and key quoting
//!
//! Arrays enumerate numeric indices first in ascending order, then extra
//! named properties in insertion order. Objects enumerate string keys in
//! insertion order. Symbol-keyed properties always come last. A key
//! renders bare when it is one of the literal words
//! `undefined | null | true | false | NaN | Infinity` or matches the
//! identifier shape (first character not a digit, all characters
//! alphanumeric or underscore); otherwise it takes single quotes,
//! unescaped. The empty key renders as `''`.
//!
//! ## Depth
//!
//! A non-empty container at nesting level 4 (configurable) renders as a
//! bracketed type name instead of expanding:
//!
//! ```text
//! { a: { b: { c: [Object] } } }
//! ```
//!
//! Empty containers expand to `{}` / `[]` at every depth.
//!
//! ## Cycles and shared references
//!
//! A reference back to a container currently open on the traversal path
//! renders as `[Circular]`. Below the top level, a reference to any
//! container already visited during the same argument's traversal is
//! flagged the same way, even when the graph is acyclic; this mirrors the
//! reference console convention and is a known over-approximation.
//!
//! # Layout
//!
//! A container whose rendered width fits 60 characters (configurable)
//! stays on one line with single spaces inside the brackets:
//!
//! ```text
//! { a: 1, b: 2, c: 3 }
//! ```
//!
//! Wider containers break across lines, indenting two spaces per nesting
//! level, with the closing bracket one level shallower:
//!
//! ```text
//! {
//!   message: 'a rather long string pushing this object past the limit'
//! }
//! ```
//!
//! ## Grouped numeric arrays
//!
//! A flat all-numeric array of at least 7 elements (and any typed array
//! of that length) always expands, placing a fixed number of elements per
//! line according to its length: 7+ elements give 4 per line, 9+ give 5,
//! 13+ give 6, 17+ give 7, 23+ give 8, 29+ give 9, 37+ give 10, 45+ give
//! 11, and 53+ give 12.
//!
//! ```text
//! [
//!   1, 2, 3, 4, 5,
//!   6, 7, 8, 9, 10
//! ]
//! ```
//!
//! ## Truncation
//!
//! Typed arrays cap at 100 elements and buffers at 50 bytes
//! (configurable); the omitted count renders as `... N more items` /
//! `... N more bytes`, on its own line when the container is expanded.
//!
//! # Colors
//!
//! When colors are enabled, tokens are wrapped in ANSI styles by
//! category: dim for `undefined`, bold for `null`, yellow for numbers and
//! booleans, green for strings and quoted keys, cyan for functions and
//! placeholder markers. Styling is applied after layout, so escape
//! sequences never affect wrap decisions.
