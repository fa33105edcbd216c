//! End-to-end formatting tests: atoms, quoting, keys, cycles, depth,
//! and truncation, all through the public `format` entry points.

use console_inspect::{
    format, format_value, value, Array, Buffer, InspectOptions, Number, Object, Symbol, TypedArray,
    Value,
};
use num_bigint::BigInt;

fn plain(value: &Value) -> String {
    format_value(value).unwrap()
}

#[test]
fn test_atomic_values() {
    assert_eq!(plain(&Value::Undefined), "undefined\n");
    assert_eq!(plain(&Value::Null), "null\n");
    assert_eq!(plain(&Value::Bool(true)), "true\n");
    assert_eq!(plain(&Value::Bool(false)), "false\n");
    assert_eq!(plain(&Value::from(42)), "42\n");
    assert_eq!(plain(&Value::from(-3.5)), "-3.5\n");
    assert_eq!(plain(&Value::Number(Number::NaN)), "NaN\n");
    assert_eq!(plain(&Value::Number(Number::Infinity)), "Infinity\n");
    assert_eq!(
        plain(&Value::Number(Number::NegativeInfinity)),
        "-Infinity\n"
    );
    assert_eq!(plain(&Value::BigInt(BigInt::from(123))), "123n\n");
}

#[test]
fn test_functions_and_symbols() {
    assert_eq!(
        plain(&Value::Function(Some("main".to_string()))),
        "[Function: main]\n"
    );
    assert_eq!(plain(&Value::Function(None)), "[Function (anonymous)]\n");
    assert_eq!(plain(&Value::Symbol(Symbol::new(Some("id")))), "Symbol(id)\n");
    assert_eq!(plain(&Value::Symbol(Symbol::new(None))), "Symbol()\n");
}

#[test]
fn test_top_level_string_is_verbatim() {
    assert_eq!(plain(&Value::from("it's \"fine\"")), "it's \"fine\"\n");
}

#[test]
fn test_nested_string_quoting_ladder() {
    assert_eq!(plain(&value!(["plain"])), "[ 'plain' ]\n");
    assert_eq!(plain(&value!(["it's"])), "[ \"it's\" ]\n");
    assert_eq!(
        plain(&value!(["she said \"it's\""])),
        "[ `she said \"it's\"` ]\n"
    );
    // All three delimiters present: single quotes win, escaped.
    assert_eq!(plain(&value!(["'\"`"])), "[ '\\'\"`' ]\n");
}

#[test]
fn test_nested_string_escapes() {
    assert_eq!(plain(&value!(["a\nb\tc"])), "[ 'a\\nb\\tc' ]\n");
    assert_eq!(plain(&value!(["back\\slash"])), "[ 'back\\\\slash' ]\n");
    assert_eq!(plain(&value!(["a/b"])), "[ 'a\\/b' ]\n");
}

#[test]
fn test_empty_containers() {
    assert_eq!(plain(&value!({})), "{}\n");
    assert_eq!(plain(&value!([])), "[]\n");
    assert_eq!(
        plain(&Value::TypedArray(TypedArray::from_u8(vec![]))),
        "Uint8Array(0) []\n"
    );
    assert_eq!(plain(&Value::Buffer(Buffer::new(vec![]))), "Buffer(0) <>\n");
}

#[test]
fn test_object_key_insertion_order() {
    let obj = Object::new();
    obj.insert("zebra", 1);
    obj.insert("apple", 2);
    obj.insert("mango", 3);
    assert_eq!(
        plain(&Value::Object(obj)),
        "{ zebra: 1, apple: 2, mango: 3 }\n"
    );
}

#[test]
fn test_key_quoting() {
    let obj = Object::new();
    obj.insert("name", 1);
    obj.insert("my-key", 2);
    obj.insert("2nd", 3);
    obj.insert("", 4);
    obj.insert("null", 5);
    obj.insert("NaN", 6);
    assert_eq!(
        plain(&Value::Object(obj)),
        "{ name: 1, 'my-key': 2, '2nd': 3, '': 4, null: 5, NaN: 6 }\n"
    );
}

#[test]
fn test_symbol_keys_come_last() {
    let obj = Object::new();
    obj.insert_symbol(Symbol::new(Some("tag")), 2);
    obj.insert("a", 1);
    assert_eq!(plain(&Value::Object(obj)), "{ a: 1, [Symbol(tag)]: 2 }\n");
}

#[test]
fn test_array_extra_properties_follow_elements() {
    let arr = Array::from_values(vec![Value::from(1), Value::from(2), Value::from(3)]);
    arr.insert("kv", "hi");
    assert_eq!(plain(&Value::Array(arr)), "[ 1, 2, 3, kv: 'hi' ]\n");
}

#[test]
fn test_collections_render_size_only() {
    let obj = Object::new();
    obj.insert("members", Value::Set(3));
    obj.insert("empty", Value::Map(0));
    assert_eq!(
        plain(&Value::Object(obj)),
        "{ members: Set(3) { ... }, empty: Map(0) {} }\n"
    );
    let weak = Object::new();
    weak.insert("w", Value::WeakMap);
    assert_eq!(
        plain(&Value::Object(weak)),
        "{ w: WeakMap { <items unknown> } }\n"
    );
}

#[test]
fn test_boxed_primitives() {
    let obj = Object::new();
    obj.insert("s", Value::BoxedString("hi".to_string()));
    obj.insert("n", Value::BoxedNumber(Number::Integer(42)));
    obj.insert("b", Value::BoxedBool(false));
    assert_eq!(
        plain(&Value::Object(obj)),
        "{ s: [String: 'hi'], n: [Number: 42], b: [Boolean: false] }\n"
    );
}

#[test]
fn test_depth_collapse() {
    let v = value!({ "a": { "b": { "c": { "d": 1 } } } });
    assert_eq!(plain(&v), "{ a: { b: { c: [Object] } } }\n");
}

#[test]
fn test_depth_collapse_names_the_kind() {
    let v = value!({ "a": { "b": [[1]] } });
    assert_eq!(plain(&v), "{ a: { b: [ [Array] ] } }\n");
}

#[test]
fn test_empty_containers_expand_past_the_depth_limit() {
    let v = value!({ "a": { "b": { "c": {} } } });
    assert_eq!(plain(&v), "{ a: { b: { c: {} } } }\n");
}

#[test]
fn test_custom_depth_limit() {
    let v = value!({ "a": { "b": 1 } });
    let line = format(
        std::slice::from_ref(&v),
        InspectOptions::new().with_depth_limit(2),
    )
    .unwrap();
    assert_eq!(line, "{ a: [Object] }\n");
}

#[test]
fn test_depth_limit_one_collapses_the_root() {
    let v = value!({ "a": 1 });
    let line = format(
        std::slice::from_ref(&v),
        InspectOptions::new().with_depth_limit(1),
    )
    .unwrap();
    assert_eq!(line, "[Object]\n");
}

#[test]
fn test_self_cycle() {
    let obj = Object::new();
    obj.insert("self", Value::Object(obj.clone()));
    assert_eq!(plain(&Value::Object(obj)), "{ self: [Circular] }\n");
}

#[test]
fn test_array_self_cycle() {
    let arr = Array::new();
    arr.push(Value::Array(arr.clone()));
    assert_eq!(plain(&Value::Array(arr)), "[ [Circular] ]\n");
}

#[test]
fn test_mutual_cycle() {
    let a = Object::new();
    let b = Object::new();
    a.insert("b", Value::Object(b.clone()));
    b.insert("a", Value::Object(a.clone()));
    assert_eq!(plain(&Value::Object(a)), "{ b: { a: [Circular] } }\n");
}

#[test]
fn test_shared_reference_expands_at_the_top_level() {
    let shared = Object::new();
    let root = Object::new();
    root.insert("x", Value::Object(shared.clone()));
    root.insert("y", Value::Object(shared));
    assert_eq!(plain(&Value::Object(root)), "{ x: {}, y: {} }\n");
}

#[test]
fn test_shared_reference_is_flagged_below_the_top_level() {
    let shared = Object::new();
    let inner = Object::new();
    inner.insert("x", Value::Object(shared.clone()));
    inner.insert("y", Value::Object(shared));
    let root = Object::new();
    root.insert("w", Value::Object(inner));
    assert_eq!(
        plain(&Value::Object(root)),
        "{ w: { x: {}, y: [Circular] } }\n"
    );
}

#[test]
fn test_typed_array_inline() {
    assert_eq!(
        plain(&Value::TypedArray(TypedArray::from_u8(vec![1, 2, 3]))),
        "Uint8Array(3) [ 1, 2, 3 ]\n"
    );
    assert_eq!(
        plain(&Value::TypedArray(TypedArray::from_i32(vec![-5, 70_000]))),
        "Int32Array(2) [ -5, 70000 ]\n"
    );
}

#[test]
fn test_typed_array_cap_inline() {
    let typed = TypedArray::from_i8(vec![1, 2, 3]);
    let line = format(
        &[Value::TypedArray(typed)],
        InspectOptions::new().with_typed_array_cap(2),
    )
    .unwrap();
    assert_eq!(line, "Int8Array(3) [ 1, 2, ... 1 more item ]\n");
}

#[test]
fn test_buffer_rendering() {
    assert_eq!(
        plain(&Value::Buffer(Buffer::new(vec![0xde, 0xad, 0xbe, 0xef]))),
        "Buffer(4) < de, ad, be, ef >\n"
    );
}

#[test]
fn test_buffer_cap() {
    let buffer = Buffer::new(vec![0xde, 0xad, 0xbe, 0xef]);
    let line = format(
        &[Value::Buffer(buffer)],
        InspectOptions::new().with_buffer_cap(2),
    )
    .unwrap();
    assert_eq!(line, "Buffer(4) < de, ad, ... 2 more bytes >\n");
}

#[test]
fn test_error_values_render_verbatim() {
    let stack = "Boom: it broke\n    at main (app.js:3:5)";
    assert_eq!(
        plain(&Value::Error(stack.to_string())),
        format!("{}\n", stack)
    );
}

#[test]
fn test_multiple_arguments_join_with_spaces() {
    let line = format(
        &[Value::from("loaded"), value!({ "ok": true }), Value::from(3)],
        InspectOptions::new(),
    )
    .unwrap();
    assert_eq!(line, "loaded { ok: true } 3\n");
}

#[test]
fn test_traversal_state_is_per_argument() {
    // The same container appearing in two arguments expands in both;
    // nothing leaks from one argument's traversal into the next.
    let shared = Object::new();
    shared.insert("n", 1);
    let line = format(
        &[Value::Object(shared.clone()), Value::Object(shared)],
        InspectOptions::new(),
    )
    .unwrap();
    assert_eq!(line, "{ n: 1 } { n: 1 }\n");
}

#[test]
fn test_serde_json_values_bridge_through() {
    let json = serde_json::json!({
        "name": "svc",
        "retries": [1, 2, 3],
        "enabled": true
    });
    let v = console_inspect::to_value(&json).unwrap();
    assert_eq!(
        plain(&v),
        "{ enabled: true, name: 'svc', retries: [ 1, 2, 3 ] }\n"
    );
}

#[test]
fn test_colors_strip_back_to_plain_output() {
    let v = value!({ "a": [1, "two", null], "b": { "c": true } });
    let plain_line = plain(&v);
    let colored = format(
        std::slice::from_ref(&v),
        InspectOptions::new().with_colors(true),
    )
    .unwrap();
    assert_ne!(colored, plain_line);
    assert_eq!(console::strip_ansi_codes(&colored), plain_line);
}
