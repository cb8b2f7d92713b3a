//! Portable binary encoding toolkit
//!
//! This crate converts between raw bytes and the text and binary forms used
//! by wallets, network protocols and file formats, and provides a growable
//! buffer for assembling and parsing multi-field binary records.
//!
//! ## Key Components
//!
//! - **Byte utilities**: constant-time comparison and zeroing ([`byte_utils`])
//! - **Encoding**: hex, UTF-8, ASCII, fixed-width integers, PKCS#7 ([`encoding`])
//! - **Base58**: Bitcoin-alphabet codec of arbitrary length ([`base58`])
//! - **Base64**: standard and URL-safe, unpadded ([`base64`])
//! - **Bech32**: prefixed, checksummed 5-bit codec ([`bech32`])
//! - **ByteBuffer**: big-endian fields, newline-terminated strings and bit
//!   fields over one growable array ([`ByteBuffer`])
//! - **SecureRandom**: OS-seeded random bytes and numbers ([`SecureRandom`])
//!
//! ## Usage Examples
//!
//! ```
//! use binkit_core::{base58, bech32, encoding, ByteBuffer};
//!
//! let bytes = encoding::from_hex("00deadbeef").unwrap();
//! assert_eq!(base58::to_base58(&bytes), "16h8cQN");
//!
//! let address = bech32::encode_bytes("bc", &bytes).unwrap();
//! assert_eq!(bech32::decode_bytes(&address).unwrap().1, bytes);
//!
//! let mut buf = ByteBuffer::new();
//! buf.write_short(-1);
//! buf.write_string("id");
//! assert_eq!(encoding::to_hex(&buf.to_byte_array()), "ffff69640a");
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

// Re-export dependencies that are part of our public API
pub use bytes;

pub mod base58;
pub mod base64;
pub mod bech32;
pub mod buffer;
pub mod byte_utils;
pub mod encoding;
pub mod error;
pub mod random;

// Re-export core types
pub use base64::Base64Variant;
pub use bech32::Bech32Data;
pub use buffer::ByteBuffer;
pub use encoding::Endian;
pub use error::{CoreError, Result};
pub use random::SecureRandom;
