//! Dynamic value representation for the inspector.
//!
//! This module provides the [`Value`] enum, which models the closed set of
//! runtime value kinds the inspector knows how to render, plus the shared
//! container handles ([`Object`], [`Array`], [`TypedArray`], [`Buffer`]) and
//! the identity-carrying [`Symbol`] token.
//!
//! ## Identity semantics
//!
//! The four container handles and [`Symbol`] wrap an [`Rc`], so cloning a
//! handle shares the underlying storage. This is what makes cyclic and
//! shared value graphs expressible:
//!
//! ```rust
//! use console_inspect::{format_value, Object, Value};
//!
//! let x = Object::new();
//! x.insert("self", Value::Object(x.clone()));
//! let rendered = format_value(&Value::Object(x)).unwrap();
//! assert_eq!(rendered, "{ self: [Circular] }\n");
//! ```
//!
//! Equality follows the same split: atoms compare by value, containers and
//! symbols compare by identity (two empty objects are never equal).
//!
//! ## Creating values
//!
//! ```rust
//! use console_inspect::{value, Array, Value};
//!
//! let num = Value::from(42);
//! let text = Value::from("hello");
//! let list = Value::Array(Array::from_values(vec![num, text]));
//!
//! // Or with the macro
//! let obj = value!({ "name": "Alice", "age": 30 });
//! ```

use crate::PropertyMap;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A dynamically-typed runtime value the inspector can render.
///
/// The variant set is closed: every value the inspector accepts is one of
/// these kinds, and the classifier matches on them exhaustively. Atomic
/// kinds carry their payload directly; the four structural kinds carry
/// shared handles so that value graphs (including cycles) can be built.
///
/// # Examples
///
/// ```rust
/// use console_inspect::{Number, Value};
///
/// let undef = Value::Undefined;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(undef.is_undefined());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    BigInt(BigInt),
    /// A function reference, carrying only its name (if it has one).
    Function(Option<String>),
    /// An opaque identity token, usable as an alternate property key.
    Symbol(Symbol),
    BoxedString(String),
    BoxedNumber(Number),
    BoxedBool(bool),
    Date(DateTime<Utc>),
    /// A regular expression literal, rendered as `/source/flags`.
    Pattern { source: String, flags: String },
    /// An error, carrying its full message-plus-stack text verbatim.
    Error(String),
    /// A deferred computation whose contents are not synchronously
    /// observable; rendered as the bare literal `Promise`.
    Promise,
    /// An ordered unique set. Only the size is rendered, never the contents.
    Set(usize),
    /// An associative map. Only the size is rendered, never the contents.
    Map(usize),
    WeakMap,
    WeakSet,
    Array(Array),
    TypedArray(TypedArray),
    Buffer(Buffer),
    Object(Object),
}

/// A numeric value: integer, float, or one of the special forms
/// (`Infinity`, `-Infinity`, `NaN`).
///
/// # Examples
///
/// ```rust
/// use console_inspect::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(3.5).to_string(), "3.5");
/// assert_eq!(Number::NaN.to_string(), "NaN");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }

    /// Classifies an `f64`, mapping non-finite values to their special forms.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

/// An opaque identity token with an optional description.
///
/// Symbols compare by identity: two symbols are equal only if one was
/// cloned from the other, regardless of their descriptions. They can be
/// used as alternate property keys on objects and arrays; such properties
/// always enumerate after all string keys.
///
/// # Examples
///
/// ```rust
/// use console_inspect::Symbol;
///
/// let a = Symbol::new(Some("id"));
/// let b = Symbol::new(Some("id"));
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Clone)]
pub struct Symbol(Rc<Option<String>>);

impl Symbol {
    /// Creates a new, unique symbol with an optional description.
    #[must_use]
    pub fn new(description: Option<&str>) -> Self {
        Symbol(Rc::new(description.map(str::to_string)))
    }

    /// Returns the symbol's description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The descriptive text form, `Symbol(desc)` or `Symbol()`.
    #[must_use]
    pub fn text(&self) -> String {
        match self.description() {
            Some(desc) => format!("Symbol({})", desc),
            None => "Symbol()".to_string(),
        }
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?} @ {:#x})", self.0.as_deref(), self.addr())
    }
}

/// A shared handle to an insertion-ordered property map.
///
/// Cloning the handle shares the underlying map, so the same object can
/// appear at several points of a value graph (or inside itself).
///
/// # Examples
///
/// ```rust
/// use console_inspect::{Object, Value};
///
/// let obj = Object::new();
/// obj.insert("a", 1);
/// obj.insert("b", "two");
/// assert_eq!(obj.len(), 2);
/// ```
#[derive(Clone)]
pub struct Object(Rc<RefCell<PropertyMap>>);

impl Object {
    /// Creates a new, empty object.
    #[must_use]
    pub fn new() -> Self {
        Object(Rc::new(RefCell::new(PropertyMap::new())))
    }

    /// Inserts a string-keyed property, preserving insertion order.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.borrow_mut().insert(key.into(), value.into());
    }

    /// Inserts a symbol-keyed property. Symbol properties enumerate after
    /// all string-keyed properties.
    pub fn insert_symbol(&self, key: Symbol, value: impl Into<Value>) {
        self.0.borrow_mut().insert_symbol(key, value.into());
    }

    /// Returns a clone of the value stored under a string key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Number of own properties, counting both string and symbol keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the object has no own properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    pub(crate) fn properties(&self) -> Ref<'_, PropertyMap> {
        self.0.borrow()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({} properties @ {:#x})", self.len(), self.addr())
    }
}

pub(crate) struct ArrayInner {
    pub elements: Vec<Value>,
    pub extra: PropertyMap,
}

/// A shared handle to an ordered list of values.
///
/// Beyond its indexed elements, an array can carry extra named (and
/// symbol-keyed) properties; these render after the elements.
///
/// # Examples
///
/// ```rust
/// use console_inspect::{format_value, Array, Value};
///
/// let arr = Array::from_values(vec![1.into(), 2.into(), 3.into()]);
/// arr.insert("kv", "hi");
/// let out = format_value(&Value::Array(arr)).unwrap();
/// assert_eq!(out, "[ 1, 2, 3, kv: 'hi' ]\n");
/// ```
#[derive(Clone)]
pub struct Array(Rc<RefCell<ArrayInner>>);

impl Array {
    /// Creates a new, empty array.
    #[must_use]
    pub fn new() -> Self {
        Array(Rc::new(RefCell::new(ArrayInner {
            elements: Vec::new(),
            extra: PropertyMap::new(),
        })))
    }

    /// Creates an array from a vector of values.
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        Array(Rc::new(RefCell::new(ArrayInner {
            elements: values,
            extra: PropertyMap::new(),
        })))
    }

    /// Appends a value to the end of the array.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().elements.push(value.into());
    }

    /// Attaches an extra named property; it renders after the indexed
    /// elements, in insertion order.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.borrow_mut().extra.insert(key.into(), value.into());
    }

    /// Attaches an extra symbol-keyed property; it renders last.
    pub fn insert_symbol(&self, key: Symbol, value: impl Into<Value>) {
        self.0.borrow_mut().extra.insert_symbol(key, value.into());
    }

    /// Number of indexed elements (extra properties not included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().elements.len()
    }

    /// Returns `true` if the array has no elements and no extra properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let inner = self.0.borrow();
        inner.elements.is_empty() && inner.extra.is_empty()
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    pub(crate) fn inner(&self) -> Ref<'_, ArrayInner> {
        self.0.borrow()
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array({} elements @ {:#x})", self.len(), self.addr())
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Array::from_values(iter.into_iter().collect())
    }
}

/// Element type of a fixed-width integer array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
}

impl ElementKind {
    /// The display name used in the `TypeName(len)` prefix and in the
    /// depth-collapse placeholder.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            ElementKind::I8 => "Int8Array",
            ElementKind::U8 => "Uint8Array",
            ElementKind::I16 => "Int16Array",
            ElementKind::U16 => "Uint16Array",
            ElementKind::I32 => "Int32Array",
            ElementKind::U32 => "Uint32Array",
        }
    }
}

pub(crate) struct TypedArrayInner {
    pub kind: ElementKind,
    pub elements: Vec<i64>,
    pub extra: PropertyMap,
}

/// A shared handle to a fixed-width integer array.
///
/// Elements are stored widened to `i64`; the [`ElementKind`] records the
/// declared width and signedness for display purposes.
///
/// # Examples
///
/// ```rust
/// use console_inspect::{format_value, TypedArray, Value};
///
/// let arr = TypedArray::from_u8(vec![1, 2, 3]);
/// let out = format_value(&Value::TypedArray(arr)).unwrap();
/// assert_eq!(out, "Uint8Array(3) [ 1, 2, 3 ]\n");
/// ```
#[derive(Clone)]
pub struct TypedArray(Rc<RefCell<TypedArrayInner>>);

impl TypedArray {
    /// Creates a typed array with the given element kind.
    ///
    /// Elements are taken as already-widened `i64`; callers are expected
    /// to pass values in range for `kind`.
    #[must_use]
    pub fn new(kind: ElementKind, elements: Vec<i64>) -> Self {
        TypedArray(Rc::new(RefCell::new(TypedArrayInner {
            kind,
            elements,
            extra: PropertyMap::new(),
        })))
    }

    /// Creates an `Int8Array`.
    #[must_use]
    pub fn from_i8(elements: Vec<i8>) -> Self {
        Self::new(
            ElementKind::I8,
            elements.into_iter().map(i64::from).collect(),
        )
    }

    /// Creates a `Uint8Array`.
    #[must_use]
    pub fn from_u8(elements: Vec<u8>) -> Self {
        Self::new(
            ElementKind::U8,
            elements.into_iter().map(i64::from).collect(),
        )
    }

    /// Creates an `Int16Array`.
    #[must_use]
    pub fn from_i16(elements: Vec<i16>) -> Self {
        Self::new(
            ElementKind::I16,
            elements.into_iter().map(i64::from).collect(),
        )
    }

    /// Creates a `Uint16Array`.
    #[must_use]
    pub fn from_u16(elements: Vec<u16>) -> Self {
        Self::new(
            ElementKind::U16,
            elements.into_iter().map(i64::from).collect(),
        )
    }

    /// Creates an `Int32Array`.
    #[must_use]
    pub fn from_i32(elements: Vec<i32>) -> Self {
        Self::new(
            ElementKind::I32,
            elements.into_iter().map(i64::from).collect(),
        )
    }

    /// Creates a `Uint32Array`.
    #[must_use]
    pub fn from_u32(elements: Vec<u32>) -> Self {
        Self::new(
            ElementKind::U32,
            elements.into_iter().map(i64::from).collect(),
        )
    }

    /// Attaches an extra named property; it renders after the elements.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.borrow_mut().extra.insert(key.into(), value.into());
    }

    /// Attaches an extra symbol-keyed property; it renders last.
    pub fn insert_symbol(&self, key: Symbol, value: impl Into<Value>) {
        self.0.borrow_mut().extra.insert_symbol(key, value.into());
    }

    /// The declared element kind.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.0.borrow().kind
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().elements.len()
    }

    /// Returns `true` if the array has no elements and no extra properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let inner = self.0.borrow();
        inner.elements.is_empty() && inner.extra.is_empty()
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    pub(crate) fn inner(&self) -> Ref<'_, TypedArrayInner> {
        self.0.borrow()
    }
}

impl PartialEq for TypedArray {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({} elements @ {:#x})",
            self.kind().type_name(),
            self.len(),
            self.addr()
        )
    }
}

/// A shared handle to a byte buffer.
///
/// Buffers render their bytes as two-digit lowercase hex between `<` and
/// `>`, always on a single line, capped at the configured byte limit.
///
/// # Examples
///
/// ```rust
/// use console_inspect::{format_value, Buffer, Value};
///
/// let buf = Buffer::new(vec![0xde, 0xad]);
/// let out = format_value(&Value::Buffer(buf)).unwrap();
/// assert_eq!(out, "Buffer(2) < de, ad >\n");
/// ```
#[derive(Clone)]
pub struct Buffer(Rc<Vec<u8>>);

impl Buffer {
    /// Creates a buffer owning the given bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Buffer(Rc::new(bytes))
    }

    /// Creates a buffer by copying a byte slice.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Buffer(Rc::new(bytes.to_vec()))
    }

    /// The raw bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({} bytes @ {:#x})", self.len(), self.addr())
    }
}

impl Value {
    /// Returns `true` if the value is `undefined`.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` if the value is `null`.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number (including the special forms).
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a plain object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is a container kind: plain object,
    /// array, typed array, or buffer.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::Array(_) | Value::TypedArray(_) | Value::Buffer(_)
        )
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// If the value is an object, returns a clone of its handle.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<Object> {
        match self {
            Value::Object(obj) => Some(obj.clone()),
            _ => None,
        }
    }

    /// If the value is an array, returns a clone of its handle.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<Array> {
        match self {
            Value::Array(arr) => Some(arr.clone()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from_f64(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from_f64(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<TypedArray> for Value {
    fn from(value: TypedArray) -> Self {
        Value::TypedArray(value)
    }
}

impl From<Buffer> for Value {
    fn from(value: Buffer) -> Self {
        Value::Buffer(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(Array::from_values(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
