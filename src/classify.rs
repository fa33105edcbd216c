//! Atomic rendering of non-structural value kinds.
//!
//! The classifier maps a [`Value`] to its atomic text form and style
//! category, or to `None` when the value is one of the four container
//! kinds, which the structural inspector walks instead. The match is
//! exhaustive over the closed kind set, so there is no fallthrough arm:
//! a value the crate cannot render is rejected when it is constructed
//! (see the serde bridge), never silently stringified here.

use crate::quote::quote;
use crate::style::Category;
use crate::Value;
use chrono::SecondsFormat;

/// An atomic rendering: the literal text plus an optional style category.
pub(crate) struct Atom {
    pub text: String,
    pub category: Option<Category>,
}

impl Atom {
    fn new(text: impl Into<String>, category: Option<Category>) -> Self {
        Atom {
            text: text.into(),
            category,
        }
    }
}

/// Renders a non-structural value to its atomic form.
///
/// Returns `None` for plain objects, arrays, typed arrays, and buffers.
/// `top_level` controls string treatment: a top-level log argument is
/// written through verbatim and unstyled, a nested string is quoted and
/// escaped.
pub(crate) fn classify(value: &Value, top_level: bool) -> Option<Atom> {
    let atom = match value {
        Value::Undefined => Atom::new("undefined", Some(Category::Undefined)),
        Value::Null => Atom::new("null", Some(Category::Null)),
        Value::Bool(b) => Atom::new(b.to_string(), Some(Category::Number)),
        Value::Number(n) => Atom::new(n.to_string(), Some(Category::Number)),
        Value::String(s) => {
            if top_level {
                Atom::new(s.clone(), None)
            } else {
                Atom::new(quote(s), Some(Category::String))
            }
        }
        Value::BigInt(b) => Atom::new(format!("{}n", b), Some(Category::Number)),
        Value::Function(name) => {
            let text = match name {
                Some(name) => format!("[Function: {}]", name),
                None => "[Function (anonymous)]".to_string(),
            };
            Atom::new(text, Some(Category::Function))
        }
        Value::Symbol(sym) => Atom::new(sym.text(), None),
        Value::BoxedString(s) => Atom::new(format!("[String: {}]", quote(s)), None),
        Value::BoxedNumber(n) => Atom::new(format!("[Number: {}]", n), None),
        Value::BoxedBool(b) => Atom::new(format!("[Boolean: {}]", b), None),
        Value::Date(dt) => Atom::new(dt.to_rfc3339_opts(SecondsFormat::Millis, true), None),
        Value::Pattern { source, flags } => Atom::new(format!("/{}/{}", source, flags), None),
        // Errors carry their message-plus-stack text verbatim, multi-line
        // and unescaped.
        Value::Error(stack) => Atom::new(stack.clone(), None),
        Value::Promise => Atom::new("Promise", None),
        Value::Set(size) => Atom::new(collection_text("Set", *size), None),
        Value::Map(size) => Atom::new(collection_text("Map", *size), None),
        Value::WeakMap => Atom::new("WeakMap { <items unknown> }", None),
        Value::WeakSet => Atom::new("WeakSet { <items unknown> }", None),
        Value::Object(_) | Value::Array(_) | Value::TypedArray(_) | Value::Buffer(_) => {
            return None
        }
    };
    Some(atom)
}

/// Sets and maps show only their size; contents are not enumerated.
fn collection_text(kind: &str, size: usize) -> String {
    if size == 0 {
        format!("{}(0) {{}}", kind)
    } else {
        format!("{}({}) {{ ... }}", kind, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Array, Buffer, Number, Object, Symbol, TypedArray};
    use chrono::TimeZone;
    use num_bigint::BigInt;

    fn text(value: &Value) -> String {
        classify(value, false).expect("atomic value").text
    }

    #[test]
    fn test_literals() {
        assert_eq!(text(&Value::Undefined), "undefined");
        assert_eq!(text(&Value::Null), "null");
        assert_eq!(text(&Value::Bool(true)), "true");
        assert_eq!(text(&Value::Number(Number::NaN)), "NaN");
        assert_eq!(text(&Value::Number(Number::Float(3.5))), "3.5");
        assert_eq!(text(&Value::BigInt(BigInt::from(123))), "123n");
    }

    #[test]
    fn test_strings_quote_only_when_nested() {
        let v = Value::from("hi");
        assert_eq!(classify(&v, true).unwrap().text, "hi");
        assert_eq!(classify(&v, false).unwrap().text, "'hi'");
    }

    #[test]
    fn test_functions() {
        assert_eq!(
            text(&Value::Function(Some("main".into()))),
            "[Function: main]"
        );
        assert_eq!(text(&Value::Function(None)), "[Function (anonymous)]");
    }

    #[test]
    fn test_boxed_primitives() {
        assert_eq!(text(&Value::BoxedString("hi".into())), "[String: 'hi']");
        assert_eq!(
            text(&Value::BoxedNumber(Number::Integer(42))),
            "[Number: 42]"
        );
        assert_eq!(text(&Value::BoxedBool(false)), "[Boolean: false]");
    }

    #[test]
    fn test_date_is_iso_8601() {
        let dt = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(text(&Value::Date(dt)), "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn test_pattern_and_symbol() {
        let pat = Value::Pattern {
            source: "ab+c".into(),
            flags: "gi".into(),
        };
        assert_eq!(text(&pat), "/ab+c/gi");
        assert_eq!(text(&Value::Symbol(Symbol::new(Some("id")))), "Symbol(id)");
    }

    #[test]
    fn test_collections_show_size_only() {
        assert_eq!(text(&Value::Set(0)), "Set(0) {}");
        assert_eq!(text(&Value::Set(3)), "Set(3) { ... }");
        assert_eq!(text(&Value::Map(2)), "Map(2) { ... }");
        assert_eq!(text(&Value::WeakMap), "WeakMap { <items unknown> }");
        assert_eq!(text(&Value::WeakSet), "WeakSet { <items unknown> }");
    }

    #[test]
    fn test_error_text_is_verbatim() {
        let err = Value::Error("TypeError: oops\n    at main (app:1:1)".into());
        assert_eq!(text(&err), "TypeError: oops\n    at main (app:1:1)");
    }

    #[test]
    fn test_containers_are_not_atomic() {
        assert!(classify(&Value::Object(Object::new()), false).is_none());
        assert!(classify(&Value::Array(Array::new()), false).is_none());
        assert!(classify(&Value::TypedArray(TypedArray::from_u8(vec![])), false).is_none());
        assert!(classify(&Value::Buffer(Buffer::new(vec![])), false).is_none());
    }
}
