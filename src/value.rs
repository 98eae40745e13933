//! Value types for JSON-like documents.
//!
//! [`Value`] is an owned sum type: one variant per document kind, each
//! carrying its payload. The plain JSON kinds (string, number, object,
//! array, boolean, null) are joined by the BSON-style extensions (byte
//! sequences, fixed-width integers, dates) and by [`Value::Undefined`], the
//! "no value" sentinel that doubles as the default state and as the reader's
//! end-of-sequence marker.
//!
//! Objects are owned, key-sorted maps ([`BTreeMap`]); copying a value deep
//! copies every payload, so no two values ever share mutable storage.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{Error, Result};

/// An ordered mapping from string keys to values.
///
/// Keys are unique and iterate in sorted order.
pub type Object = BTreeMap<String, Value>;

/// The kind of a [`Value`].
///
/// The declared order is significant: it is the primary sort key when values
/// of different kinds are compared, so any string sorts before any number,
/// any number before any object, and so on down the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// UTF-8 text.
    String,
    /// IEEE-754 double.
    Number,
    /// Key-sorted mapping.
    Object,
    /// Ordered sequence.
    Array,
    /// Boolean.
    Bool,
    /// Null literal.
    Null,
    /// Raw byte sequence (extension).
    Bytes,
    /// 32-bit integer (extension).
    Int32,
    /// 64-bit integer (extension).
    Int64,
    /// Instant in time (extension).
    Date,
    /// No value.
    Undefined,
}

/// A JSON-like document value with BSON-style extensions.
///
/// All owning variants hold their payload exclusively; `Clone` is a deep
/// copy. Equality and ordering come from [`Value::compare`], not a derive,
/// so that the relation over kinds and payloads stays in one place.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// UTF-8 text. Byte length is authoritative; embedded NULs are data.
    String(String),
    /// IEEE-754 double.
    Number(f64),
    /// Owned, key-sorted mapping from string keys to values.
    Object(Object),
    /// Owned sequence of values.
    Array(Vec<Value>),
    /// Boolean.
    Bool(bool),
    /// Null literal.
    Null,
    /// Owned raw bytes (extension).
    Bytes(Vec<u8>),
    /// 32-bit integer (extension).
    Int32(i32),
    /// 64-bit integer (extension).
    Int64(i64),
    /// Milliseconds since the Unix epoch (extension).
    Date(i64),
    /// No value: the default state and the reader's end-of-sequence marker.
    #[default]
    Undefined,
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a byte-sequence value.
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(b.into())
    }

    /// Create an array value from existing elements.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// Create an array of `n` undefined elements, to be filled in by index.
    pub fn array_of(n: usize) -> Self {
        Value::Array(vec![Value::Undefined; n])
    }

    /// Create a date value from a timestamp.
    pub fn from_datetime(when: DateTime<Utc>) -> Self {
        Value::Date(when.timestamp_millis())
    }

    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Number(_) => Kind::Number,
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
            Value::Bool(_) => Kind::Bool,
            Value::Null => Kind::Null,
            Value::Bytes(_) => Kind::Bytes,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Date(_) => Kind::Date,
            Value::Undefined => Kind::Undefined,
        }
    }

    /// Returns the kind name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Bytes(_) => "bytes",
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Date(_) => "date",
            Value::Undefined => "undefined",
        }
    }

    /// Returns true unless this value is Undefined.
    ///
    /// This is the "is present" check; the reader relies on it to detect the
    /// end-of-sequence sentinel.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Value::Undefined)
    }

    /// Returns true if this value is Undefined.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a string slice if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a reference to the map if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the bytes if this is a Bytes value, None otherwise.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the integer if this is an Int32, None otherwise.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer if this is an Int64, None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the raw millisecond count if this is a Date, None otherwise.
    pub fn as_date_millis(&self) -> Option<i64> {
        match self {
            Value::Date(ms) => Some(*ms),
            _ => None,
        }
    }

    /// Returns the timestamp if this is a Date, None otherwise.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(ms) => Utc.timestamp_millis_opt(*ms).single(),
            _ => None,
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Borrow array element `index`, failing on non-arrays and past the end.
    pub fn element(&self, index: usize) -> Result<&Value> {
        match self {
            Value::Array(items) => {
                let len = items.len();
                items
                    .get(index)
                    .ok_or(Error::IndexOutOfBounds { index, len })
            }
            other => Err(Error::TypeMismatch {
                expected: "array",
                got: other.type_name(),
            }),
        }
    }

    /// Mutably borrow array element `index`, failing on non-arrays and past
    /// the end.
    pub fn element_mut(&mut self, index: usize) -> Result<&mut Value> {
        match self {
            Value::Array(items) => {
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(Error::IndexOutOfBounds { index, len })
            }
            other => Err(Error::TypeMismatch {
                expected: "array",
                got: other.type_name(),
            }),
        }
    }

    /// Append one element, promoting the receiver to an array if needed.
    ///
    /// - An Undefined receiver becomes `[value]`.
    /// - An Array receiver grows in place.
    /// - Any other receiver becomes element 0 of a new two-element array.
    pub fn push(&mut self, value: Value) {
        match self {
            Value::Undefined => *self = Value::Array(vec![value]),
            Value::Array(items) => items.push(value),
            _ => {
                let first = std::mem::take(self);
                *self = Value::Array(vec![first, value]);
            }
        }
    }

    /// Append several elements, with the same promotion policy as [`push`].
    ///
    /// An Undefined receiver becomes an array of exactly the given elements;
    /// a non-array receiver becomes element 0 followed by them.
    ///
    /// [`push`]: Value::push
    pub fn append(&mut self, values: Vec<Value>) {
        match self {
            Value::Undefined => *self = Value::Array(values),
            Value::Array(items) => items.extend(values),
            _ => {
                let first = std::mem::take(self);
                let mut items = Vec::with_capacity(values.len() + 1);
                items.push(first);
                items.extend(values);
                *self = Value::Array(items);
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(when: DateTime<Utc>) -> Self {
        Value::from_datetime(when)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undefined() {
        let v = Value::default();
        assert!(v.is_undefined());
        assert!(!v.is_defined());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Value::string("s").kind(), Kind::String);
        assert_eq!(Value::Number(1.0).kind(), Kind::Number);
        assert_eq!(Value::Object(Object::new()).kind(), Kind::Object);
        assert_eq!(Value::Array(vec![]).kind(), Kind::Array);
        assert_eq!(Value::Bool(true).kind(), Kind::Bool);
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::bytes(vec![1u8]).kind(), Kind::Bytes);
        assert_eq!(Value::Int32(1).kind(), Kind::Int32);
        assert_eq!(Value::Int64(1).kind(), Kind::Int64);
        assert_eq!(Value::Date(0).kind(), Kind::Date);
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
    }

    #[test]
    fn test_kind_order_follows_declaration() {
        assert!(Kind::String < Kind::Number);
        assert!(Kind::Number < Kind::Object);
        assert!(Kind::Object < Kind::Array);
        assert!(Kind::Array < Kind::Bool);
        assert!(Kind::Bool < Kind::Null);
        assert!(Kind::Null < Kind::Bytes);
        assert!(Kind::Date < Kind::Undefined);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Number(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::string("hi").as_str(), Some("hi"));
        assert_eq!(Value::Int32(7).as_i32(), Some(7));
        assert_eq!(Value::Int64(7).as_i64(), Some(7));
        assert_eq!(Value::bytes(vec![1u8, 2]).as_bytes(), Some(&[1u8, 2][..]));
        assert_eq!(Value::string("hi").as_bool(), None);
        assert_eq!(Value::Null.as_f64(), None);
    }

    #[test]
    fn test_object_get() {
        let mut map = Object::new();
        map.insert("a".to_string(), Value::Number(1.0));
        let v = Value::Object(map);
        assert!(v.get("a").is_some());
        assert!(v.get("b").is_none());
        assert!(Value::Null.get("a").is_none());
    }

    #[test]
    fn test_array_of_fills_with_undefined() {
        let v = Value::array_of(3);
        let items = v.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|e| e.is_undefined()));
    }

    #[test]
    fn test_element_access() {
        let mut v = Value::array(vec![Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(v.element(1).unwrap().as_f64(), Some(2.0));
        assert_eq!(
            v.element(2),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        );

        *v.element_mut(0).unwrap() = Value::string("replaced");
        assert_eq!(v.element(0).unwrap().as_str(), Some("replaced"));
    }

    #[test]
    fn test_element_on_non_array() {
        let v = Value::string("not an array");
        assert_eq!(
            v.element(0),
            Err(Error::TypeMismatch {
                expected: "array",
                got: "string",
            })
        );
    }

    #[test]
    fn test_push_onto_undefined() {
        let mut v = Value::Undefined;
        v.push(Value::Number(5.0));
        assert_eq!(v, Value::array(vec![Value::Number(5.0)]));
    }

    #[test]
    fn test_push_promotes_scalar() {
        let mut v = Value::string("x");
        v.push(Value::Number(5.0));
        assert_eq!(
            v,
            Value::array(vec![Value::string("x"), Value::Number(5.0)])
        );
    }

    #[test]
    fn test_push_onto_array_grows() {
        let mut v = Value::array(vec![Value::Number(1.0)]);
        v.push(Value::Number(2.0));
        v.push(Value::Number(3.0));
        assert_eq!(
            v,
            Value::array(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0),
            ])
        );
    }

    #[test]
    fn test_append_policies() {
        let mut v = Value::Undefined;
        v.append(vec![Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(
            v,
            Value::array(vec![Value::Number(1.0), Value::Number(2.0)])
        );

        let mut scalar = Value::Bool(true);
        scalar.append(vec![Value::Null]);
        assert_eq!(scalar, Value::array(vec![Value::Bool(true), Value::Null]));

        // Appending nothing to a scalar still promotes it.
        let mut lone = Value::Number(4.0);
        lone.append(vec![]);
        assert_eq!(lone, Value::array(vec![Value::Number(4.0)]));
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Value::array(vec![Value::string("a"), Value::Number(1.0)]);
        let mut copy = original.clone();
        *copy.element_mut(0).unwrap() = Value::string("changed");
        assert_eq!(original.element(0).unwrap().as_str(), Some("a"));
    }

    #[test]
    fn test_datetime_round_trip() {
        let when = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let v = Value::from_datetime(when);
        assert_eq!(v.as_date_millis(), Some(1_700_000_000_123));
        assert_eq!(v.as_datetime(), Some(when));
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(1.5), Value::Number(1.5));
        assert_eq!(Value::from(7i32), Value::Int32(7));
        assert_eq!(Value::from(7i64), Value::Int64(7));
        assert_eq!(Value::from("s"), Value::string("s"));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(false).type_name(), "boolean");
        assert_eq!(Value::Number(0.0).type_name(), "number");
        assert_eq!(Value::Undefined.type_name(), "undefined");
        assert_eq!(Value::bytes(vec![0u8]).type_name(), "bytes");
    }
}
