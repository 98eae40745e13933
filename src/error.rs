//! Error handling for docson.
//!
//! Every recoverable failure in the crate is a variant of [`Error`]: grammar
//! violations carry the byte offset where the input stopped matching, limit
//! violations carry the measured size against the configured limit, and
//! element-access failures carry the index and length involved. Comparing
//! values of different kinds is never an error; it is defined behavior
//! (unequal, ordered by kind).

use thiserror::Error;

/// Errors produced by parsing, element access, and limit enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input does not match the grammar at the given byte offset.
    #[error("malformed input at byte {offset}: expected {expected}, found {found}")]
    Malformed {
        /// Byte offset of the offending character.
        offset: usize,
        /// What the grammar required at this position.
        expected: &'static str,
        /// What was actually present.
        found: String,
    },

    /// A string literal was still open at end of input.
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// A backslash escape was not one of the recognized sequences.
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape {
        /// Byte offset of the backslash.
        offset: usize,
    },

    /// Text where a number was expected does not parse as one.
    #[error("invalid number at byte {offset}")]
    InvalidNumber {
        /// Byte offset where the number began.
        offset: usize,
    },

    /// Array element access past the end.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The array's element count.
        len: usize,
    },

    /// Array semantics requested of a value of another kind.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// The kind the operation requires.
        expected: &'static str,
        /// The kind the value actually has.
        got: &'static str,
    },

    /// Input larger than the configured limit.
    #[error("input of {size} bytes exceeds limit of {limit}")]
    InputTooLarge {
        /// Input size in bytes.
        size: u64,
        /// The configured maximum.
        limit: u64,
    },

    /// Arrays/objects nested deeper than the configured limit.
    #[error("nesting depth {depth} exceeds limit of {limit}")]
    DepthExceeded {
        /// The depth reached.
        depth: u64,
        /// The configured maximum.
        limit: u64,
    },

    /// String literal longer than the configured limit.
    #[error("string of {len} bytes exceeds limit of {limit}")]
    StringTooLong {
        /// String length in bytes.
        len: u64,
        /// The configured maximum.
        limit: u64,
    },

    /// Array longer than the configured limit.
    #[error("array of {len} elements exceeds limit of {limit}")]
    ArrayTooLong {
        /// The element count reached.
        len: u64,
        /// The configured maximum.
        limit: u64,
    },

    /// Object with more members than the configured limit.
    #[error("object of {fields} members exceeds limit of {limit}")]
    TooManyFields {
        /// The member count reached.
        fields: u64,
        /// The configured maximum.
        limit: u64,
    },
}

impl Error {
    /// Stable variant name, independent of the payload.
    ///
    /// Used by the corpus runner to match expected failures against actual
    /// ones without spelling out offsets in test vectors.
    pub fn name(&self) -> &'static str {
        match self {
            Error::Malformed { .. } => "Malformed",
            Error::UnterminatedString { .. } => "UnterminatedString",
            Error::InvalidEscape { .. } => "InvalidEscape",
            Error::InvalidNumber { .. } => "InvalidNumber",
            Error::IndexOutOfBounds { .. } => "IndexOutOfBounds",
            Error::TypeMismatch { .. } => "TypeMismatch",
            Error::InputTooLarge { .. } => "InputTooLarge",
            Error::DepthExceeded { .. } => "DepthExceeded",
            Error::StringTooLong { .. } => "StringTooLong",
            Error::ArrayTooLong { .. } => "ArrayTooLong",
            Error::TooManyFields { .. } => "TooManyFields",
        }
    }
}

/// Result type alias for docson operations.
pub type Result<T> = std::result::Result<T, Error>;
