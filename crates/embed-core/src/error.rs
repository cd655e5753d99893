//! Error types for sparse embedding lookups
//!
//! Provides a unified error type for all sparse-embed crates.

use thiserror::Error;

/// Core error type for embedding lookup operations
///
/// Every variant is fatal to the call that raised it: the inputs broke the
/// caller contract and retrying with the same inputs fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The running index cursor would read past the end of the index sequence
    #[error("Cursor overrun in group {group}: cursor {cursor} reached index size {index_size}")]
    CursorOverrun {
        group: usize,
        cursor: usize,
        index_size: usize,
    },

    /// A consumed index does not address a row of the embedding table
    #[error("Index {position} is out of bounds: {index}, range 0 to {data_size}")]
    IndexOutOfRange {
        position: usize,
        index: i64,
        data_size: usize,
    },

    /// The lengths do not add up to the number of indices
    #[error(
        "Length mismatch: the sum of lengths should be the size of the indices \
         ({index_size}), but {consumed} indices were consumed"
    )]
    LengthMismatch { consumed: usize, index_size: usize },

    /// A group declared a negative number of indices
    #[error("Negative length {length} for group {group}")]
    NegativeLength { group: usize, length: i32 },

    /// A caller-supplied buffer is shorter than its declared shape
    #[error("Buffer `{buffer}` too small: expected at least {required} elements, got {actual}")]
    BufferTooSmall {
        buffer: &'static str,
        required: usize,
        actual: usize,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a buffer shorter than its declared shape
    pub fn buffer_too_small(buffer: &'static str, required: usize, actual: usize) -> Self {
        Self::BufferTooSmall {
            buffer,
            required,
            actual,
        }
    }

    /// Create an error for a shape whose element count does not fit in `usize`
    pub fn shape_overflow(buffer: &str, rows: usize, cols: usize) -> Self {
        Self::InvalidParameter(format!(
            "Shape of `{buffer}` overflows: {rows} x {cols} elements"
        ))
    }
}
