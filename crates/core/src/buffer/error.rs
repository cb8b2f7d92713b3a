//! Error types for byte buffer reads and writes

use thiserror::Error;

/// Result type for buffer operations
pub(crate) type Result<T> = std::result::Result<T, BufferError>;

/// Errors from byte buffer reads, writes and positioning
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A read would run past the end of the backing store
    #[error("buffer underflow: need {needed} bytes, {remaining} remaining")]
    Underflow {
        /// Bytes the read requires
        needed: usize,
        /// Bytes left between the cursor and the end of the store
        remaining: usize,
    },

    /// Requested cursor lies outside `[0, capacity]`
    #[error("invalid position {position}, capacity is {capacity}")]
    InvalidPosition {
        /// The requested position
        position: usize,
        /// Current capacity
        capacity: usize,
    },

    /// A caller-supplied slice is too small for the requested range
    #[error("range {offset}..{offset}+{length} exceeds slice of length {available}")]
    OutOfRange {
        /// Start of the range
        offset: usize,
        /// Length of the range
        length: usize,
        /// Length of the slice
        available: usize,
    },

    /// No newline terminator between the cursor and the end of the store
    #[error("string terminator (byte 10) not found")]
    MissingTerminator,

    /// String bytes are not valid UTF-8
    #[error("invalid UTF-8 in string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Bit field width outside `1..=32`
    #[error("invalid bit count {0}, must be within 1..=32")]
    InvalidBitCount(u32),
}

impl BufferError {
    pub(crate) const fn underflow(needed: usize, remaining: usize) -> Self {
        Self::Underflow { needed, remaining }
    }

    pub(crate) const fn invalid_position(position: usize, capacity: usize) -> Self {
        Self::InvalidPosition { position, capacity }
    }

    pub(crate) const fn out_of_range(offset: usize, length: usize, available: usize) -> Self {
        Self::OutOfRange {
            offset,
            length,
            available,
        }
    }
}
