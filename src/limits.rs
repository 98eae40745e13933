//! Resource limits for parsing.
//!
//! Documents arrive from untrusted sources often enough that the reader
//! bounds input size, nesting depth, string length, array length, and object
//! member count. Each limit maps to its own [`Error`](crate::Error) variant
//! naming the measured value and the limit.

/// Resource limits enforced by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes.
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects.
    pub max_depth: u64,
    /// Maximum string literal length in bytes.
    pub max_string_length: u64,
    /// Maximum number of elements in an array.
    pub max_array_length: u64,
    /// Maximum number of members in an object.
    pub max_object_fields: u64,
}

impl Limits {
    /// Default limits, suitable for documents from untrusted peers.
    pub const fn standard() -> Self {
        Self {
            max_input_size: 1024 * 1024,  // 1 MiB
            max_depth: 64,                // 64 levels
            max_string_length: 64 * 1024, // 64 KiB
            max_array_length: 10_000,     // 10,000 elements
            max_object_fields: 1024,      // 1024 members
        }
    }

    /// Relaxed limits for trusted or locally generated input.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024, // 16 MiB
            max_depth: 256,                   // 256 levels
            max_string_length: 1024 * 1024,   // 1 MiB
            max_array_length: 100_000,        // 100,000 elements
            max_object_fields: 10_000,        // 10,000 members
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}
