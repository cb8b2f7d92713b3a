//! One-shot digests and the algorithm selector.

use core::{fmt, str::FromStr};

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use tracing::debug;

use crate::error::{HashError, Result};

/// MD5 output length in bytes
pub const MD5_LENGTH: usize = 16;
/// SHA-1 output length in bytes
pub const SHA1_LENGTH: usize = 20;
/// SHA-256 output length in bytes
pub const SHA256_LENGTH: usize = 32;
/// SHA-512 output length in bytes
pub const SHA512_LENGTH: usize = 64;

#[inline]
fn fixed<D: Digest, const N: usize>(data: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&D::digest(data));
    out
}

/// MD5 digest of `data`. Not collision resistant; use only for checksums
/// and legacy formats.
pub fn md5(data: &[u8]) -> [u8; MD5_LENGTH] {
    fixed::<Md5, MD5_LENGTH>(data)
}

/// SHA-1 digest of `data`. Not collision resistant.
pub fn sha1(data: &[u8]) -> [u8; SHA1_LENGTH] {
    fixed::<Sha1, SHA1_LENGTH>(data)
}

/// SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; SHA256_LENGTH] {
    fixed::<Sha256, SHA256_LENGTH>(data)
}

/// SHA-512 digest of `data`.
pub fn sha512(data: &[u8]) -> [u8; SHA512_LENGTH] {
    fixed::<Sha512, SHA512_LENGTH>(data)
}

/// A supported hash algorithm.
///
/// Parses case-insensitively from its name, with or without a hyphen after
/// `sha` (`"sha256"`, `"SHA-256"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::IntoStaticStr)]
#[derive(strum::VariantArray)]
#[derive(strum::EnumIter)]
#[derive(strum::EnumCount)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HashAlgorithm {
    /// MD5, 16-byte digest
    Md5,
    /// SHA-1, 20-byte digest
    Sha1,
    /// SHA-256, 32-byte digest
    Sha256,
    /// SHA-512, 64-byte digest
    Sha512,
}

impl HashAlgorithm {
    /// Returns the canonical lower-case name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Digest length in bytes.
    #[inline]
    pub const fn output_len(&self) -> usize {
        match self {
            Self::Md5 => MD5_LENGTH,
            Self::Sha1 => SHA1_LENGTH,
            Self::Sha256 => SHA256_LENGTH,
            Self::Sha512 => SHA512_LENGTH,
        }
    }

    /// Hashes `data` in one call.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => md5(data).to_vec(),
            Self::Sha1 => sha1(data).to_vec(),
            Self::Sha256 => sha256(data).to_vec(),
            Self::Sha512 => sha512(data).to_vec(),
        }
    }

    /// Hashes `data` and compares against `expected` in constant time.
    pub fn verify(&self, data: &[u8], expected: &[u8]) -> bool {
        binkit_core::byte_utils::constant_time_eq(&self.digest(data), expected)
    }

    /// Returns true for algorithms with practical collision attacks.
    #[inline]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::Md5 | Self::Sha1)
    }
}

impl fmt::Display for HashAlgorithm {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for HashAlgorithm {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let name = match name.strip_prefix("sha-") {
            Some(bits) => format!("sha{bits}"),
            None => name,
        };

        <Self as strum::VariantArray>::VARIANTS
            .iter()
            .copied()
            .find(|alg| alg.as_str() == name)
            .ok_or_else(|| {
                debug!(name = s, "unknown hash algorithm");
                HashError::unknown_algorithm(s)
            })
    }
}
