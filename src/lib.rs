//! docson - JSON-like document values with BSON-style extensions.
//!
//! This crate provides an owned, deep-comparable value model for
//! semi-structured documents, together with a textual reader and writer that
//! round-trip it to a JSON-like format. It is a building block for code that
//! constructs, compares, traverses, and exchanges documents without
//! committing to a schema.
//!
//! # Architecture
//!
//! - [`value`] - the [`Value`] sum type, constructors, accessors, append
//! - [`compare`] - the ordering and equality relation over values
//! - [`reader`] - recursive descent parsing from text
//! - [`writer`] - rendering values back to text
//! - [`limits`] - resource limits enforced while parsing
//! - [`error`] - the crate-wide error type
//! - [`corpus`] - test-vector conformance runner
//!
//! # Text format
//!
//! The format is JSON-like, not strict JSON. The reader accepts single- or
//! double-quoted strings and tolerates a leading comma before a value; the
//! writer renders the extended kinds (byte sequences, fixed-width integers,
//! dates) in ways plain JSON has no spelling for. Values restricted to
//! strings, numbers, booleans, null, arrays, and objects round-trip.
//!
//! # Example
//!
//! ```
//! use docson::{parse_value, write, Value};
//!
//! let value = parse_value("{\"b\":2,\"a\":1}").unwrap();
//! assert_eq!(write(&value), "{\"a\":1,\"b\":2}");
//!
//! let mut row = Value::Undefined;
//! row.push(Value::string("x"));
//! row.push(Value::Number(5.0));
//! assert_eq!(write(&row), "[\"x\",5]");
//! ```

// Library code must avoid unwrap/expect/panic; failures travel as Error.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod compare;
pub mod corpus;
pub mod error;
pub mod limits;
pub mod reader;
pub mod value;
pub mod writer;

// Re-export commonly used items
pub use error::{Error, Result};
pub use limits::Limits;
pub use reader::{
    parse_object, parse_object_with_limits, parse_value, parse_value_with_limits, Reader,
};
pub use value::{Kind, Object, Value};
pub use writer::{write, write_object};
