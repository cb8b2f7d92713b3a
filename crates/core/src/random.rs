//! Cryptographically secure random values.
//!
//! [`SecureRandom`] wraps a [`StdRng`] seeded from the operating system. Each
//! owner keeps its own generator; there is no shared global state.
//!
//! ## Example Usage
//!
//! ```
//! use binkit_core::SecureRandom;
//!
//! let mut rng = SecureRandom::new().unwrap();
//! let key = rng.next_bytes(32);
//! assert_eq!(key.len(), 32);
//!
//! let roll = rng.next_int_bounded(6).unwrap();
//! assert!((0..6).contains(&roll));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use thiserror::Error;
use tracing::debug;

/// Result type for random operations
pub(crate) type Result<T> = std::result::Result<T, RandomError>;

/// Errors from the secure random source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// The operating system entropy source could not seed the generator
    #[error("OS entropy source unavailable: {0}")]
    Unavailable(String),

    /// Upper bound for a bounded integer is not positive
    #[error("bound must be positive, got {0}")]
    InvalidBound(i32),
}

/// An OS-seeded cryptographically secure generator.
#[derive(Debug)]
pub struct SecureRandom {
    rng: StdRng,
    /// Second value of the last polar-method pair
    spare_gaussian: Option<f64>,
}

impl SecureRandom {
    /// Seeds a new generator from the operating system.
    pub fn new() -> Result<Self> {
        let rng = StdRng::try_from_os_rng().map_err(|e| {
            debug!(error = %e, "failed to seed secure random");
            RandomError::Unavailable(e.to_string())
        })?;
        Ok(Self {
            rng,
            spare_gaussian: None,
        })
    }

    /// Returns `len` random bytes.
    pub fn next_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }

    /// Fills `dest` with random bytes.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    /// Uniform over all `i32` values.
    pub fn next_int(&mut self) -> i32 {
        self.rng.random()
    }

    /// Uniform over `[0, bound)`; `bound` must be positive.
    pub fn next_int_bounded(&mut self, bound: i32) -> Result<i32> {
        if bound <= 0 {
            return Err(RandomError::InvalidBound(bound));
        }
        Ok(self.rng.random_range(0..bound))
    }

    /// Uniform over all `i64` values.
    pub fn next_long(&mut self) -> i64 {
        self.rng.random()
    }

    /// A fair coin flip.
    pub fn next_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// Uniform over `[0, 1)`.
    pub fn next_double(&mut self) -> f64 {
        self.rng.random()
    }

    /// Uniform over `[0, 1)`.
    pub fn next_float(&mut self) -> f32 {
        self.rng.random()
    }

    /// Standard normal sample (mean 0, standard deviation 1).
    ///
    /// Uses the Marsaglia polar method, which yields two samples per
    /// accepted point; the second is returned by the next call.
    pub fn next_gaussian(&mut self) -> f64 {
        if let Some(spare) = self.spare_gaussian.take() {
            return spare;
        }

        loop {
            let u = self.rng.random::<f64>() * 2.0 - 1.0;
            let v = self.rng.random::<f64>() * 2.0 - 1.0;
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let scale = (-2.0 * s.ln() / s).sqrt();
                self.spare_gaussian = Some(v * scale);
                return u * scale;
            }
        }
    }
}
