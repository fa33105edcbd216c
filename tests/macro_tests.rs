//! Tests for the `value!` literal macro from an external crate's view.

use console_inspect::{format_value, value, Number, Value};

#[test]
fn test_literal_forms() {
    assert_eq!(value!(null), Value::Null);
    assert_eq!(value!(undefined), Value::Undefined);
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
    assert_eq!(value!(7), Value::Number(Number::Integer(7)));
    assert_eq!(value!(2.25), Value::Number(Number::Float(2.25)));
    assert_eq!(value!("hi"), Value::from("hi"));
}

#[test]
fn test_expression_fallback() {
    let port = 8080;
    assert_eq!(value!(port), Value::from(8080));
    let name = String::from("svc");
    assert_eq!(value!(name), Value::from("svc"));
}

#[test]
fn test_trailing_commas() {
    let v = value!([1, 2, 3,]);
    assert_eq!(v.as_array().unwrap().len(), 3);
    let v = value!({ "a": 1, "b": 2, });
    assert_eq!(v.as_object().unwrap().len(), 2);
}

#[test]
fn test_nested_structure_formats() {
    let v = value!({
        "name": "probe",
        "attempts": [1, 2, 3],
        "last": { "ok": false }
    });
    assert_eq!(
        format_value(&v).unwrap(),
        "{ name: 'probe', attempts: [ 1, 2, 3 ], last: { ok: false } }\n"
    );
}

#[test]
fn test_heterogeneous_array() {
    let v = value!([1, "two", null, true, [2]]);
    assert_eq!(
        format_value(&v).unwrap(),
        "[ 1, 'two', null, true, [ 2 ] ]\n"
    );
}
