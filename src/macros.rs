/// Builds a [`Value`](crate::Value) from a literal.
///
/// Supports `null`, `undefined`, booleans, numbers, strings, and nested
/// arrays/objects. Any other expression falls back to the serde bridge.
///
/// # Examples
///
/// ```rust
/// use console_inspect::{format_value, value};
///
/// let v = value!({ "name": "Alice", "tags": ["admin", "user"] });
/// let out = format_value(&v).unwrap();
/// assert_eq!(out, "{ name: 'Alice', tags: [ 'admin', 'user' ] }\n");
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (undefined) => {
        $crate::Value::Undefined
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array($crate::Array::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array($crate::Array::from_values(vec![$($crate::value!($elem)),*]))
    };

    ({}) => {
        $crate::Value::Object($crate::Object::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let object = $crate::Object::new();
        $(
            object.insert($key, $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any other expression, via the serde bridge.
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
