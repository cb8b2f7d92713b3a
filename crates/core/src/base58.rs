//! Base58 codec using the Bitcoin alphabet.
//!
//! The input is treated as one big-endian unsigned integer and converted
//! digit by digit, so no fixed-width arithmetic bounds the input length.
//! Leading zero bytes map one-to-one onto leading `'1'` characters.
//!
//! ```
//! use binkit_core::base58;
//!
//! assert_eq!(base58::to_base58(b"hello world"), "StV1DL6CwTryKyV");
//! assert_eq!(base58::to_base58(&[0, 0, 1]), "112");
//! assert_eq!(base58::from_base58("112").unwrap(), vec![0, 0, 1]);
//! ```

use thiserror::Error;
use tracing::debug;

/// The Base58 alphabet; `0`, `O`, `I` and `l` are excluded.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const ZERO_SYMBOL: u8 = ALPHABET[0];
const INVALID: u8 = 0xFF;

// Reverse lookup from ASCII to digit value
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Errors from Base58 decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    /// Character outside the Base58 alphabet
    #[error("invalid Base58 character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Character index within the input
        index: usize,
    },
}

/// Encodes bytes as Base58 text.
pub fn to_base58(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // Little-endian base-58 digits; log(256) / log(58) < 1.37
    let mut digits: Vec<u8> = Vec::with_capacity((bytes.len() - zeros) * 137 / 100 + 1);
    for &byte in &bytes[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat_n(ZERO_SYMBOL as char, zeros));
    out.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    out
}

/// Decodes Base58 text into bytes.
pub fn from_base58(text: &str) -> Result<Vec<u8>, Base58Error> {
    let zeros = text.bytes().take_while(|&c| c == ZERO_SYMBOL).count();

    // Little-endian base-256 digits; log(58) / log(256) < 0.74
    let mut bytes: Vec<u8> = Vec::with_capacity((text.len() - zeros) * 74 / 100 + 1);
    for (index, character) in text.chars().enumerate().skip(zeros) {
        let value = digit_value(character).ok_or_else(|| {
            debug!(index, "rejecting Base58 input");
            Base58Error::InvalidCharacter { character, index }
        })?;

        let mut carry = value as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}

fn digit_value(character: char) -> Option<u8> {
    let code = character as usize;
    match DECODE_TABLE.get(code) {
        Some(&value) if value != INVALID => Some(value),
        _ => None,
    }
}
