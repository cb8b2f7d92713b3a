//! Hex, text, fixed-width integer and PKCS#7 padding conversions.
//!
//! ## Example Usage
//!
//! ```
//! use binkit_core::encoding::{self, Endian};
//!
//! assert_eq!(encoding::to_hex(&[0x00, 0xFF, 0x10]), "00ff10");
//! assert_eq!(encoding::from_hex("0x00FF10").unwrap(), vec![0x00, 0xFF, 0x10]);
//!
//! let bytes = encoding::int_to_bytes(0x0102_0304, Endian::Little);
//! assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01]);
//! assert_eq!(encoding::bytes_to_int(&bytes, Endian::Little).unwrap(), 0x0102_0304);
//!
//! let padded = encoding::pkcs7_pad(b"YELLOW SUBMARINE", 20).unwrap();
//! assert_eq!(&padded[16..], &[4, 4, 4, 4]);
//! assert_eq!(encoding::pkcs7_unpad(&padded).unwrap(), b"YELLOW SUBMARINE");
//! ```

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use thiserror::Error;
use tracing::debug;

const INT_WIDTH: usize = 4;
const LONG_WIDTH: usize = 8;

/// Errors from hex, text, integer and padding conversions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Hex input has an odd number of digits
    #[error("hex string must have even length, got {0}")]
    OddHexLength(usize),

    /// Hex input contains a character outside `[0-9a-f]`
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidHexCharacter {
        /// The offending character (after lower-casing)
        character: char,
        /// Character index within the input, prefix excluded
        index: usize,
    },

    /// Text or bytes outside the 7-bit ASCII range
    #[error("non-ASCII input at index {0}")]
    NonAscii(usize),

    /// Bytes are not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Input is wider than the target integer
    #[error("{actual} bytes do not fit in a {width}-byte integer")]
    IntegerOverflow {
        /// Width of the target integer in bytes
        width: usize,
        /// Length of the input
        actual: usize,
    },

    /// PKCS#7 block size outside `1..=255`
    #[error("invalid block size {0}, must be within 1..=255")]
    InvalidBlockSize(usize),

    /// Nothing to unpad
    #[error("input is empty")]
    EmptyInput,

    /// Trailing bytes do not form valid PKCS#7 padding
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,
}

impl EncodingError {
    pub(crate) const fn invalid_hex_character(character: char, index: usize) -> Self {
        Self::InvalidHexCharacter { character, index }
    }

    pub(crate) const fn integer_overflow(width: usize, actual: usize) -> Self {
        Self::IntegerOverflow { width, actual }
    }
}

/// Byte order used by the integer conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Endian {
    /// Most significant byte first
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

/// Encodes bytes as lower-case hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hex text into bytes.
///
/// An optional leading `0x` is stripped. Digits are accepted in either case.
pub fn from_hex(text: &str) -> Result<Vec<u8>, EncodingError> {
    let clean = text.strip_prefix("0x").unwrap_or(text).to_ascii_lowercase();

    if let Some((index, character)) = clean
        .chars()
        .enumerate()
        .find(|(_, c)| !matches!(c, '0'..='9' | 'a'..='f'))
    {
        return Err(EncodingError::invalid_hex_character(character, index));
    }
    if clean.len() % 2 != 0 {
        return Err(EncodingError::OddHexLength(clean.len()));
    }

    hex::decode(&clean).map_err(|_| EncodingError::OddHexLength(clean.len()))
}

/// Encodes text as UTF-8 bytes.
pub fn to_utf8(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decodes UTF-8 bytes into text.
pub fn from_utf8(bytes: &[u8]) -> Result<String, EncodingError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Encodes text as ASCII bytes, rejecting any character above `0x7F`.
pub fn to_ascii(text: &str) -> Result<Vec<u8>, EncodingError> {
    match text.char_indices().find(|(_, c)| !c.is_ascii()) {
        Some((index, _)) => Err(EncodingError::NonAscii(index)),
        None => Ok(text.as_bytes().to_vec()),
    }
}

/// Decodes ASCII bytes into text, rejecting any byte above `0x7F`.
pub fn from_ascii(bytes: &[u8]) -> Result<String, EncodingError> {
    match bytes.iter().position(|b| !b.is_ascii()) {
        Some(index) => Err(EncodingError::NonAscii(index)),
        None => Ok(bytes.iter().map(|&b| b as char).collect()),
    }
}

/// Serializes a 32-bit integer into 4 bytes.
pub fn int_to_bytes(value: i32, endian: Endian) -> [u8; INT_WIDTH] {
    let mut out = [0u8; INT_WIDTH];
    match endian {
        Endian::Big => BigEndian::write_i32(&mut out, value),
        Endian::Little => LittleEndian::write_i32(&mut out, value),
    }
    out
}

/// Serializes a 64-bit integer into 8 bytes.
pub fn long_to_bytes(value: i64, endian: Endian) -> [u8; LONG_WIDTH] {
    let mut out = [0u8; LONG_WIDTH];
    match endian {
        Endian::Big => BigEndian::write_i64(&mut out, value),
        Endian::Little => LittleEndian::write_i64(&mut out, value),
    }
    out
}

/// Deserializes up to 4 bytes into a 32-bit integer.
///
/// Shorter inputs are zero-extended on their most significant side.
pub fn bytes_to_int(bytes: &[u8], endian: Endian) -> Result<i32, EncodingError> {
    let padded = zero_extend::<INT_WIDTH>(bytes, endian)?;
    Ok(match endian {
        Endian::Big => BigEndian::read_i32(&padded),
        Endian::Little => LittleEndian::read_i32(&padded),
    })
}

/// Deserializes up to 8 bytes into a 64-bit integer.
///
/// Shorter inputs are zero-extended on their most significant side.
pub fn bytes_to_long(bytes: &[u8], endian: Endian) -> Result<i64, EncodingError> {
    let padded = zero_extend::<LONG_WIDTH>(bytes, endian)?;
    Ok(match endian {
        Endian::Big => BigEndian::read_i64(&padded),
        Endian::Little => LittleEndian::read_i64(&padded),
    })
}

fn zero_extend<const N: usize>(bytes: &[u8], endian: Endian) -> Result<[u8; N], EncodingError> {
    if bytes.len() > N {
        return Err(EncodingError::integer_overflow(N, bytes.len()));
    }

    let mut padded = [0u8; N];
    match endian {
        Endian::Big => padded[N - bytes.len()..].copy_from_slice(bytes),
        Endian::Little => padded[..bytes.len()].copy_from_slice(bytes),
    }
    Ok(padded)
}

/// Applies PKCS#7 padding for the given block size.
///
/// Input that is already block-aligned receives a full block of padding.
pub fn pkcs7_pad(bytes: &[u8], block_size: usize) -> Result<Vec<u8>, EncodingError> {
    if !(1..=255).contains(&block_size) {
        return Err(EncodingError::InvalidBlockSize(block_size));
    }

    let pad_len = block_size - bytes.len() % block_size;
    let mut out = Vec::with_capacity(bytes.len() + pad_len);
    out.extend_from_slice(bytes);
    out.resize(bytes.len() + pad_len, pad_len as u8);
    Ok(out)
}

/// Strips PKCS#7 padding, validating every padding byte.
pub fn pkcs7_unpad(bytes: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let Some(&last) = bytes.last() else {
        return Err(EncodingError::EmptyInput);
    };

    let pad_len = last as usize;
    if pad_len == 0 || pad_len > bytes.len() {
        debug!(pad_len, len = bytes.len(), "rejecting PKCS#7 padding length");
        return Err(EncodingError::InvalidPadding);
    }

    let (body, padding) = bytes.split_at(bytes.len() - pad_len);
    if padding.iter().any(|&b| b != last) {
        debug!(pad_len, "rejecting PKCS#7 padding bytes");
        return Err(EncodingError::InvalidPadding);
    }

    Ok(body.to_vec())
}
