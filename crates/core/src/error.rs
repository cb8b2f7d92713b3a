//! Error types for the binkit-core crate
//!
//! Every codec and the byte buffer report failures through their own error
//! enum. `CoreError` wraps all of them so that callers mixing several
//! components can propagate with `?` into a single type.
//!
//! ## Example Usage
//!
//! ```
//! use binkit_core::error::{CoreError, Result};
//! use binkit_core::bech32::{self, Bech32Error};
//!
//! fn decode_address(text: &str) -> Result<Vec<u8>> {
//!     let (_hrp, data) = bech32::from_bech32(text)?;
//!     Ok(bech32::convert_from_5bit(&data)?)
//! }
//!
//! match decode_address("abc1qpzry9x8gf2tvdw0s3jn54khce6mua7lqqqqqq") {
//!     Err(CoreError::Bech32(Bech32Error::InvalidChecksum)) => println!("corrupted"),
//!     Err(e) => println!("malformed: {e}"),
//!     Ok(bytes) => println!("{} bytes", bytes.len()),
//! }
//! ```

use thiserror::Error;

use crate::base58::Base58Error;
use crate::base64::Base64Error;
use crate::bech32::Bech32Error;
use crate::buffer::BufferError;
use crate::encoding::EncodingError;
use crate::random::RandomError;

/// Result type for operations in the core crate
pub type Result<T> = std::result::Result<T, CoreError>;

/// Main error type for the core crate
///
/// Wraps the component-specific errors. Each variant is transparent, so the
/// message of the underlying error is shown unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Errors from hex, text, integer and padding conversions
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Errors from Base58 decoding
    #[error(transparent)]
    Base58(#[from] Base58Error),

    /// Errors from Base64 decoding
    #[error(transparent)]
    Base64(#[from] Base64Error),

    /// Errors from Bech32 encoding, decoding and regrouping
    #[error(transparent)]
    Bech32(#[from] Bech32Error),

    /// Errors from byte buffer reads, writes and positioning
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// Errors from the secure random source
    #[error(transparent)]
    Random(#[from] RandomError),
}

impl CoreError {
    /// Returns true if this error is a Bech32 checksum mismatch, i.e. the
    /// input was well formed but its content was corrupted or tampered with.
    pub const fn is_checksum_failure(&self) -> bool {
        matches!(self, Self::Bech32(Bech32Error::InvalidChecksum))
    }
}
