//! Serde bridge: builds a [`Value`] graph from any `T: Serialize`.
//!
//! This is the convenient way to hand ordinary Rust data to the
//! inspector. The mapping follows the serde data model:
//!
//! - integers become numbers; a `u64` beyond `i64` range becomes an
//!   arbitrary-precision integer
//! - non-finite floats become the dedicated `NaN` / `Infinity` forms
//! - byte slices become buffers
//! - `()`, `None`, and unit structs become `null`
//! - sequences and tuples become arrays
//! - maps and structs become objects; map keys must be strings
//! - unit enum variants become their name as a string
//!
//! Tuple, struct, and newtype enum variants have no rendering convention
//! and are rejected with [`Error::UnsupportedValue`], matching the
//! inspector's strictness rule: a visible error over silently-wrong
//! output.
//!
//! ## Examples
//!
//! ```rust
//! use console_inspect::{format_value, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(format_value(&value).unwrap(), "{ x: 1, y: 2 }\n");
//! ```

use crate::{Array, Buffer, Error, Number, Object, PropertyMap, Result, Value};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Serializer producing a [`Value`] graph.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeProperties {
    map: PropertyMap,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeProperties;
    type SerializeStruct = SerializeProperties;
    type SerializeStructVariant = SerializeProperties;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::BigInt(BigInt::from(v)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::from_f64(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::from_f64(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Buffer(Buffer::from_slice(v)))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeProperties> {
        Ok(SerializeProperties::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeProperties> {
        Ok(SerializeProperties::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeProperties> {
        Err(Error::unsupported("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeProperties {
    fn new() -> Self {
        SerializeProperties {
            map: PropertyMap::new(),
            current_key: None,
        }
    }

    fn into_object(self) -> Value {
        let object = Object::new();
        for (key, value) in self.map {
            match key {
                crate::PropertyKey::String(s) => object.insert(s, value),
                crate::PropertyKey::Symbol(sym) => object.insert_symbol(sym, value),
            }
        }
        Value::Object(object)
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(bridge(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(Array::from_values(self.vec)))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(bridge(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(Array::from_values(self.vec)))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(bridge(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(Array::from_values(self.vec)))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(bridge(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(Array::from_values(self.vec)))
    }
}

impl ser::SerializeMap for SerializeProperties {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match bridge(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::unsupported("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::Message("serialize_value called without serialize_key".into()))?;
        self.map.insert(key, bridge(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_object())
    }
}

impl ser::SerializeStruct for SerializeProperties {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), bridge(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_object())
    }
}

impl ser::SerializeStructVariant for SerializeProperties {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), bridge(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_object())
    }
}

fn bridge<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
