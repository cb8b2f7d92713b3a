//! Hash function adapters
//!
//! Thin wrappers over the RustCrypto implementations of MD5, SHA-1, SHA-256
//! and SHA-512 with a plain `bytes -> digest` interface: one-shot free
//! functions returning fixed-size arrays, a [`HashAlgorithm`] selector for
//! choosing the function at runtime, and a streaming [`Hasher`].
//!
//! ## Usage Examples
//!
//! ```
//! use binkit_hashing::{HashAlgorithm, sha256};
//!
//! let digest = sha256(b"abc");
//! assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
//!
//! let alg: HashAlgorithm = "SHA-256".parse().unwrap();
//! assert_eq!(alg.output_len(), 32);
//! assert_eq!(alg.digest(b"abc"), digest);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod algorithm;
pub mod error;
mod hasher;

pub use algorithm::{HashAlgorithm, md5, sha1, sha256, sha512};
pub use error::{HashError, Result};
pub use hasher::Hasher;
