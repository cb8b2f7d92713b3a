//! Error types for Bech32 encoding, decoding and 5-bit regrouping.
//!
//! Every length and index counts characters, never bytes.

use thiserror::Error;

/// Errors from Bech32 encoding, decoding and 5-bit regrouping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Bech32Error {
    /// Human-readable prefix is empty or longer than 83 characters
    #[error("invalid HRP length {0}, must be within 1..=83")]
    InvalidHrpLength(usize),

    /// Human-readable prefix contains a non-printable, non-ASCII or separator character
    #[error("invalid HRP character {character:?} at index {index}")]
    InvalidHrpCharacter {
        /// The offending character
        character: char,
        /// Character index within the prefix
        index: usize,
    },

    /// A payload value does not fit in 5 bits
    #[error("data value {value} at index {index} exceeds 31")]
    InvalidDataValue {
        /// The offending value
        value: u8,
        /// Index within the payload
        index: usize,
    },

    /// Encoded string is, or would be, shorter than 8 or longer than 90
    /// characters
    #[error("invalid Bech32 string length {0}, must be within 8..=90")]
    InvalidLength(usize),

    /// No `'1'` separator found
    #[error("missing separator '1'")]
    MissingSeparator,

    /// Data part cannot hold the 6-character checksum
    #[error("data part too short: {0} characters, checksum needs 6")]
    DataTooShort(usize),

    /// Data part contains a character outside the Bech32 alphabet
    #[error("invalid Bech32 character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Character index within the whole string
        index: usize,
    },

    /// Both upper- and lower-case letters are present
    #[error("mixed-case Bech32 string")]
    MixedCase,

    /// The string is well formed but its checksum does not verify
    #[error("invalid Bech32 checksum")]
    InvalidChecksum,

    /// 5-bit groups leave 5 or more bits unconsumed
    #[error("invalid 5-bit padding: {0} leftover bits")]
    InvalidPadding(u32),
}

impl Bech32Error {
    pub(crate) const fn invalid_hrp_character(character: char, index: usize) -> Self {
        Self::InvalidHrpCharacter { character, index }
    }

    pub(crate) const fn invalid_data_value(value: u8, index: usize) -> Self {
        Self::InvalidDataValue { value, index }
    }

    pub(crate) const fn invalid_character(character: char, index: usize) -> Self {
        Self::InvalidCharacter { character, index }
    }
}
