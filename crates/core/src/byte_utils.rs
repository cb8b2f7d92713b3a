//! Constant-time comparison and secure zeroing of byte buffers.

use zeroize::Zeroize;

/// Compares two byte slices for equality without short-circuiting on the
/// first mismatch.
///
/// Slices of different lengths compare unequal immediately; the length is
/// not treated as secret. For equal lengths every byte pair is visited.
///
/// ```
/// use binkit_core::byte_utils::constant_time_eq;
///
/// assert!(constant_time_eq(b"secret", b"secret"));
/// assert!(!constant_time_eq(b"secret", b"secreT"));
/// assert!(!constant_time_eq(b"secret", b"secrets"));
/// ```
#[inline(never)]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let acc = a.iter().zip(b).fold(0u8, |acc, (&x, &y)| acc | (x ^ y));
    std::hint::black_box(acc) == 0
}

/// Overwrites every byte of `buffer` with zero.
///
/// The writes are volatile and cannot be elided by the optimizer, so this is
/// suitable for clearing key material before a buffer is dropped.
pub fn wipe(buffer: &mut [u8]) {
    buffer.zeroize();
}
