//! Incremental hashing over any supported algorithm.

use std::fmt;
use std::io::{self, Write};

use digest::{Digest, Update};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::HashAlgorithm;

#[derive(Clone)]
enum State {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
}

impl State {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Md5 => Self::Md5(Md5::new()),
            HashAlgorithm::Sha1 => Self::Sha1(Sha1::new()),
            HashAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            HashAlgorithm::Sha512 => Self::Sha512(Sha512::new()),
        }
    }
}

/// Streaming hasher: feed data in any number of pieces, then finalize.
///
/// ```
/// use binkit_hashing::{HashAlgorithm, Hasher, sha256};
///
/// let mut hasher = Hasher::new(HashAlgorithm::Sha256);
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), sha256(b"hello world"));
/// ```
#[derive(Clone)]
pub struct Hasher {
    algorithm: HashAlgorithm,
    state: State,
}

impl Hasher {
    /// Creates a hasher for `algorithm` with no data absorbed.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            state: State::new(algorithm),
        }
    }

    /// The algorithm this hasher computes
    #[inline]
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Absorbs `data`.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let data = data.as_ref();
        match &mut self.state {
            State::Md5(h) => Digest::update(h, data),
            State::Sha1(h) => Digest::update(h, data),
            State::Sha256(h) => Digest::update(h, data),
            State::Sha512(h) => Digest::update(h, data),
        }
    }

    /// Consumes the hasher and returns the digest.
    pub fn finalize(self) -> Vec<u8> {
        match self.state {
            State::Md5(h) => h.finalize().to_vec(),
            State::Sha1(h) => h.finalize().to_vec(),
            State::Sha256(h) => h.finalize().to_vec(),
            State::Sha512(h) => h.finalize().to_vec(),
        }
    }

    /// Returns the digest and resets the hasher for reuse.
    pub fn finalize_reset(&mut self) -> Vec<u8> {
        let state = std::mem::replace(&mut self.state, State::new(self.algorithm));
        Self {
            algorithm: self.algorithm,
            state,
        }
        .finalize()
    }

    /// Discards absorbed data.
    pub fn reset(&mut self) {
        self.state = State::new(self.algorithm);
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl From<HashAlgorithm> for Hasher {
    fn from(algorithm: HashAlgorithm) -> Self {
        Self::new(algorithm)
    }
}

impl Update for Hasher {
    #[inline]
    fn update(&mut self, data: &[u8]) {
        Self::update(self, data);
    }
}

impl Write for Hasher {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Self::update(self, buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
