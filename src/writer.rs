//! Textual writer for document values.
//!
//! Pure rendering of a [`Value`] (or an [`Object`] map) to a `String`,
//! inverse to the reader for the plain JSON kinds. Strings come out
//! double-quoted with standard escapes, arrays bracketed and comma-joined,
//! objects as `"key":value` pairs in key order, numbers in shortest
//! locale-independent decimal form.
//!
//! The extended kinds make the output JSON-like rather than JSON: byte
//! sequences render as their raw bytes (write-only; such values do not
//! round-trip through text, and bytes above 0x7F are widened to characters),
//! integers and dates render as bare decimal digits that read back as
//! numbers, and Undefined renders as `*undefined*`.

use std::fmt;

use crate::value::{Object, Value};

/// Render a value to text.
pub fn write(value: &Value) -> String {
    let mut output = String::new();
    write_value(value, &mut output);
    output
}

/// Render an ordered key/value mapping to text.
pub fn write_object(object: &Object) -> String {
    let mut output = String::new();
    write_members(object, &mut output);
    output
}

/// Render one value into the output buffer.
fn write_value(value: &Value, output: &mut String) {
    match value {
        Value::String(s) => write_string(s, output),
        Value::Number(n) => output.push_str(&n.to_string()),
        Value::Object(map) => write_members(map, output),
        Value::Array(items) => {
            output.push('[');
            for (i, element) in items.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_value(element, output);
            }
            output.push(']');
        }
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Null => output.push_str("null"),
        Value::Bytes(bytes) => {
            for &b in bytes.iter() {
                output.push(char::from(b));
            }
        }
        Value::Int32(n) => output.push_str(&n.to_string()),
        Value::Int64(n) => output.push_str(&n.to_string()),
        Value::Date(ms) => output.push_str(&ms.to_string()),
        Value::Undefined => output.push_str("*undefined*"),
    }
}

/// Render a string with JSON escaping.
fn write_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                // Remaining control characters as \u00XX.
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

/// Render `"key":value` members, comma-joined in map order.
fn write_members(map: &Object, output: &mut String) {
    output.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        write_string(key, output);
        output.push(':');
        write_value(value, output);
    }
    output.push('}');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_primitives() {
        assert_eq!(write(&Value::Null), "null");
        assert_eq!(write(&Value::Bool(true)), "true");
        assert_eq!(write(&Value::Bool(false)), "false");
        assert_eq!(write(&Value::Undefined), "*undefined*");
    }

    #[test]
    fn test_write_numbers() {
        // Integral doubles render without a fractional part.
        assert_eq!(write(&Value::Number(42.0)), "42");
        assert_eq!(write(&Value::Number(-1.0)), "-1");
        assert_eq!(write(&Value::Number(0.5)), "0.5");
        assert_eq!(write(&Value::Number(1500.0)), "1500");
    }

    #[test]
    fn test_write_string() {
        assert_eq!(write(&Value::string("hello")), "\"hello\"");
        assert_eq!(write(&Value::string("")), "\"\"");
    }

    #[test]
    fn test_write_string_escapes() {
        assert_eq!(write(&Value::string("a\nb")), "\"a\\nb\"");
        assert_eq!(write(&Value::string("a\"b")), "\"a\\\"b\"");
        assert_eq!(write(&Value::string("a\\b")), "\"a\\\\b\"");
        assert_eq!(write(&Value::string("a\x01b")), "\"a\\u0001b\"");
    }

    #[test]
    fn test_write_array() {
        let v = Value::array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ]);
        assert_eq!(write(&v), "[1,2,3]");
        assert_eq!(write(&Value::array(vec![])), "[]");
    }

    #[test]
    fn test_write_object() {
        let mut map = Object::new();
        map.insert("b".to_string(), Value::Number(2.0));
        map.insert("a".to_string(), Value::Number(1.0));
        // Map order is key-sorted.
        assert_eq!(write(&Value::Object(map.clone())), "{\"a\":1,\"b\":2}");
        assert_eq!(write_object(&map), "{\"a\":1,\"b\":2}");
        assert_eq!(write_object(&Object::new()), "{}");
    }

    #[test]
    fn test_write_nested() {
        let mut inner = Object::new();
        inner.insert("x".to_string(), Value::Number(1.0));
        let mut outer = Object::new();
        outer.insert(
            "arr".to_string(),
            Value::array(vec![Value::Number(1.0)]),
        );
        outer.insert("obj".to_string(), Value::Object(inner));
        assert_eq!(
            write(&Value::Object(outer)),
            "{\"arr\":[1],\"obj\":{\"x\":1}}"
        );
    }

    #[test]
    fn test_write_extended_scalars() {
        assert_eq!(write(&Value::Int32(-7)), "-7");
        assert_eq!(write(&Value::Int64(1_000_000_000_000)), "1000000000000");
        assert_eq!(write(&Value::Date(1_700_000_000_123)), "1700000000123");
    }

    #[test]
    fn test_write_bytes_raw() {
        assert_eq!(write(&Value::bytes(b"abc".to_vec())), "abc");
        // Not quoted, not escaped: deliberately not valid textual JSON.
        assert_eq!(write(&Value::bytes(b"a\"b".to_vec())), "a\"b");
    }

    #[test]
    fn test_display_delegates_to_writer() {
        let v = Value::array(vec![Value::Bool(true), Value::Null]);
        assert_eq!(v.to_string(), "[true,null]");
    }
}
