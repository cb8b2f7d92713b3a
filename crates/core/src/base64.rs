//! Base64 codec with standard and URL-safe alphabets.
//!
//! Output is never padded. Decoding accepts either alphabet, with or without
//! `=` padding, so text produced by padded encoders still decodes.
//!
//! ```
//! use binkit_core::base64::{self, Base64Variant};
//!
//! assert_eq!(base64::to_base64(&[0x4D, 0x61]), "TWE");
//! assert_eq!(base64::encode_with(&[0xFB, 0xFF], Base64Variant::UrlSafe), "-_8");
//! assert_eq!(base64::from_base64("TWE=").unwrap(), vec![0x4D, 0x61]);
//! assert_eq!(base64::from_base64("-_8").unwrap(), vec![0xFB, 0xFF]);
//! ```

use thiserror::Error;
use tracing::debug;

const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const INVALID: u8 = 0xFF;

// Reverse lookup from ASCII to sextet, URL-safe symbols folded onto their
// standard counterparts
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < STANDARD_ALPHABET.len() {
        table[STANDARD_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table[b'-' as usize] = 62;
    table[b'_' as usize] = 63;
    table
};

/// Errors from Base64 decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// Character outside both Base64 alphabets
    #[error("invalid Base64 character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Character index within the input
        index: usize,
    },
}

/// Selects the alphabet used for encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Base64Variant {
    /// `A-Z a-z 0-9 + /`
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`, safe for URLs and file names
    UrlSafe,
}

/// Encodes bytes as unpadded standard Base64.
pub fn to_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);

    for group in bytes.chunks(3) {
        let b1 = group[0];
        let b2 = group.get(1).copied().unwrap_or(0);
        let b3 = group.get(2).copied().unwrap_or(0);

        out.push(symbol(b1 >> 2));
        out.push(symbol((b1 << 4 | b2 >> 4) & 0x3F));
        if group.len() > 1 {
            out.push(symbol((b2 << 2 | b3 >> 6) & 0x3F));
        }
        if group.len() > 2 {
            out.push(symbol(b3 & 0x3F));
        }
    }

    out
}

/// Encodes bytes as unpadded URL-safe Base64.
pub fn to_base64_url_safe(bytes: &[u8]) -> String {
    to_base64(bytes)
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect::<String>()
        .trim_end_matches('=')
        .to_owned()
}

/// Encodes bytes using the given alphabet.
pub fn encode_with(bytes: &[u8], variant: Base64Variant) -> String {
    match variant {
        Base64Variant::Standard => to_base64(bytes),
        Base64Variant::UrlSafe => to_base64_url_safe(bytes),
    }
}

/// Decodes standard or URL-safe Base64, padded or not.
///
/// `=` characters are removed before decoding wherever they appear.
/// Absent characters of the final group count as zero, so a lone final
/// character still yields one byte.
pub fn from_base64(text: &str) -> Result<Vec<u8>, Base64Error> {
    let sextets = text
        .chars()
        .enumerate()
        .filter(|&(_, c)| c != '=')
        .map(|(index, character)| {
            sextet(character).ok_or_else(|| {
                debug!(index, "rejecting Base64 input");
                Base64Error::InvalidCharacter { character, index }
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let mut out = Vec::with_capacity(sextets.len() * 3 / 4);
    for group in sextets.chunks(4) {
        let c1 = group[0];
        let c2 = group.get(1).copied().unwrap_or(0);
        let c3 = group.get(2).copied().unwrap_or(0);
        let c4 = group.get(3).copied().unwrap_or(0);

        out.push(c1 << 2 | c2 >> 4);
        if group.len() > 2 {
            out.push(c2 << 4 | c3 >> 2);
        }
        if group.len() > 3 {
            out.push(c3 << 6 | c4);
        }
    }

    Ok(out)
}

#[inline]
fn symbol(sextet: u8) -> char {
    STANDARD_ALPHABET[sextet as usize] as char
}

#[inline]
fn sextet(character: char) -> Option<u8> {
    match DECODE_TABLE.get(character as usize) {
        Some(&value) if value != INVALID => Some(value),
        _ => None,
    }
}
