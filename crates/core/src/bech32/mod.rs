//! Bech32 codec: human-readable prefix, 5-bit payload, 6-symbol BCH checksum.
//!
//! The codec works on 5-bit values. Arbitrary bytes are regrouped with
//! [`convert_to_5bit`] before encoding and [`convert_from_5bit`] after
//! decoding, or in one step with [`encode_bytes`] and [`decode_bytes`].
//!
//! ## Example Usage
//!
//! ```
//! use binkit_core::bech32::{self, Bech32Error};
//!
//! let encoded = bech32::encode_bytes("addr", b"\x00\x14\x75").unwrap();
//! let (hrp, bytes) = bech32::decode_bytes(&encoded).unwrap();
//! assert_eq!(hrp, "addr");
//! assert_eq!(bytes, b"\x00\x14\x75");
//!
//! // A single flipped character is caught by the checksum
//! let mut corrupted = encoded.into_bytes();
//! let last = corrupted.len() - 1;
//! corrupted[last] = if corrupted[last] == b'q' { b'p' } else { b'q' };
//! let corrupted = String::from_utf8(corrupted).unwrap();
//! assert_eq!(bech32::from_bech32(&corrupted), Err(Bech32Error::InvalidChecksum));
//! ```

mod checksum;
mod convert;
pub mod error;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use checksum::{CHECKSUM_LENGTH, create_checksum, verify_checksum};
pub use convert::{convert_from_5bit, convert_to_5bit};
pub use error::Bech32Error;

/// The Bech32 alphabet, indexed by 5-bit value.
pub const ALPHABET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separates the prefix from the data part.
pub const SEPARATOR: char = '1';

/// Longest allowed human-readable prefix
pub const MAX_HRP_LENGTH: usize = 83;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 90;
const INVALID: u8 = 0xFF;

// Reverse lookup from lower-case ASCII to 5-bit value
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes a prefix and 5-bit payload into a Bech32 string.
///
/// The prefix is lower-cased; the output is entirely lower case. Inputs
/// whose encoded form would exceed 90 characters are rejected, so every
/// string this returns decodes again.
pub fn to_bech32(hrp: &str, data: &[u8]) -> Result<String, Bech32Error> {
    validate_payload(hrp, data)?;
    Ok(assemble(&hrp.to_ascii_lowercase(), data))
}

/// Decodes a Bech32 string into its lower-case prefix and 5-bit payload,
/// checksum removed.
///
/// All-upper-case input is accepted; mixed case is rejected. A string that is
/// well formed but fails verification yields [`Bech32Error::InvalidChecksum`].
pub fn from_bech32(text: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    let length = text.chars().count();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(Bech32Error::InvalidLength(length));
    }

    let has_lower = text.bytes().any(|c| c.is_ascii_lowercase());
    let has_upper = text.bytes().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }

    let text = text.to_ascii_lowercase();
    let separator = text.rfind(SEPARATOR).ok_or(Bech32Error::MissingSeparator)?;
    let (hrp, data_part) = (&text[..separator], &text[separator + 1..]);

    validate_hrp(hrp, false)?;
    let data_len = data_part.chars().count();
    if data_len < CHECKSUM_LENGTH {
        return Err(Bech32Error::DataTooShort(data_len));
    }

    // Indices count characters, like the length checks
    let data_start = hrp.chars().count() + 1;
    let data = data_part
        .chars()
        .enumerate()
        .map(|(i, c)| value_of(c).ok_or_else(|| Bech32Error::invalid_character(c, data_start + i)))
        .collect::<Result<Vec<u8>, _>>()?;

    if !verify_checksum(hrp, &data) {
        debug!(hrp, len = length, "rejecting Bech32 checksum");
        return Err(Bech32Error::InvalidChecksum);
    }

    let payload = data[..data.len() - CHECKSUM_LENGTH].to_vec();
    Ok((hrp.to_owned(), payload))
}

/// Regroups `bytes` into 5-bit values and encodes them under `hrp`.
pub fn encode_bytes(hrp: &str, bytes: &[u8]) -> Result<String, Bech32Error> {
    to_bech32(hrp, &convert_to_5bit(bytes))
}

/// Decodes a Bech32 string and regroups its payload back into bytes.
pub fn decode_bytes(text: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    let (hrp, data) = from_bech32(text)?;
    Ok((hrp, convert_from_5bit(&data)?))
}

/// Checks prefix length and characters. The separator is only forbidden when
/// encoding; when decoding the last separator has already been split off.
fn validate_hrp(hrp: &str, reject_separator: bool) -> Result<(), Bech32Error> {
    let length = hrp.chars().count();
    if length == 0 || length > MAX_HRP_LENGTH {
        return Err(Bech32Error::InvalidHrpLength(length));
    }

    match hrp
        .chars()
        .enumerate()
        .find(|&(_, c)| !matches!(c as u32, 33..=126) || (reject_separator && c == SEPARATOR))
    {
        Some((index, character)) => Err(Bech32Error::invalid_hrp_character(character, index)),
        None => Ok(()),
    }
}

/// Checks everything an encoder needs: the prefix, every payload value, and
/// that the assembled string fits within the decodable length.
fn validate_payload(hrp: &str, data: &[u8]) -> Result<(), Bech32Error> {
    validate_hrp(hrp, true)?;
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| **v > 31) {
        return Err(Bech32Error::invalid_data_value(value, index));
    }

    // The prefix is ASCII here, so bytes and characters agree
    let encoded_len = hrp.len() + 1 + data.len() + CHECKSUM_LENGTH;
    if encoded_len > MAX_LENGTH {
        debug!(
            hrp_len = hrp.len(),
            data_len = data.len(),
            "rejecting oversized Bech32 payload"
        );
        return Err(Bech32Error::InvalidLength(encoded_len));
    }
    Ok(())
}

/// Joins an already validated lower-case prefix and payload with its checksum.
fn assemble(hrp: &str, data: &[u8]) -> String {
    let checksum = create_checksum(hrp, data);

    let mut out = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    out.push_str(hrp);
    out.push(SEPARATOR);
    out.extend(
        data.iter()
            .chain(checksum.iter())
            .map(|&v| ALPHABET[v as usize] as char),
    );
    out
}

#[inline]
fn value_of(c: char) -> Option<u8> {
    match DECODE_TABLE.get(c as usize) {
        Some(&value) if value != INVALID => Some(value),
        _ => None,
    }
}

/// A decoded Bech32 value: lower-case prefix plus 5-bit payload.
///
/// Displays as its encoded string and parses from one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bech32Data {
    hrp: String,
    data: Vec<u8>,
}

impl Bech32Data {
    /// Validates and stores a prefix and payload; the prefix is lower-cased.
    pub fn new(hrp: impl Into<String>, data: Vec<u8>) -> Result<Self, Bech32Error> {
        let hrp = hrp.into();
        validate_payload(&hrp, &data)?;

        Ok(Self {
            hrp: hrp.to_ascii_lowercase(),
            data,
        })
    }

    /// Builds a value from raw bytes, regrouping them into 5-bit values.
    pub fn from_bytes(hrp: impl Into<String>, bytes: &[u8]) -> Result<Self, Bech32Error> {
        Self::new(hrp, convert_to_5bit(bytes))
    }

    /// The lower-case human-readable prefix
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// The 5-bit payload, without checksum
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The payload regrouped into bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, Bech32Error> {
        convert_from_5bit(&self.data)
    }

    /// Encodes this value as a Bech32 string.
    pub fn encode(&self) -> String {
        assemble(&self.hrp, &self.data)
    }

    /// Splits the value into prefix and payload.
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.hrp, self.data)
    }
}

impl fmt::Display for Bech32Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Bech32Data {
    type Err = Bech32Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hrp, data) = from_bech32(s)?;
        Ok(Self { hrp, data })
    }
}

#[cfg(any(test, feature = "arbitrary"))]
impl<'a> arbitrary::Arbitrary<'a> for Bech32Data {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Keep the encoded form within the decodable length
        let hrp_len = u.int_in_range(1..=MAX_HRP_LENGTH)?;
        let mut hrp = String::with_capacity(hrp_len);
        for _ in 0..hrp_len {
            let c = loop {
                let c = u.int_in_range(33u8..=126)?;
                if c != SEPARATOR as u8 && !c.is_ascii_uppercase() {
                    break c;
                }
            };
            hrp.push(c as char);
        }

        let data_len = u.int_in_range(0..=MAX_LENGTH - CHECKSUM_LENGTH - 1 - hrp_len)?;
        let mut data = Vec::with_capacity(data_len);
        for _ in 0..data_len {
            data.push(u.int_in_range(0u8..=31)?);
        }

        Ok(Self { hrp, data })
    }
}
