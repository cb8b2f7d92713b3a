//! BCH checksum over GF(32) used by Bech32.
//!
//! The residue is tracked in a 30-bit accumulator, six 5-bit coefficients
//! packed most significant first. Each input value shifts the accumulator by
//! one coefficient; the coefficient shifted out selects which multiples of
//! the generator polynomial are folded back in.

/// Length of the checksum in 5-bit symbols
pub(crate) const CHECKSUM_LENGTH: usize = 6;

/// The generator polynomial times { 1, 2, 4, 8, 16 }, packed
const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Residue of every valid Bech32 string
const TARGET_RESIDUE: u32 = 1;

/// Feeds `values` through the checksum automaton, starting from residue 1.
fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = (chk & 0x1ff_ffff) << 5 ^ value as u32;
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Expands a prefix into 5-bit values: high 3 bits of every character, a
/// zero separator, then low 5 bits of every character.
fn hrp_expand(hrp: &str) -> impl Iterator<Item = u8> + '_ {
    hrp.bytes()
        .map(|c| c >> 5)
        .chain(std::iter::once(0))
        .chain(hrp.bytes().map(|c| c & 0x1f))
}

/// Computes the six checksum symbols for a lower-case prefix and payload.
pub(crate) fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let residue = polymod(
        hrp_expand(hrp)
            .chain(data.iter().copied())
            .chain([0u8; CHECKSUM_LENGTH]),
    ) ^ TARGET_RESIDUE;

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((residue >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Verifies a lower-case prefix against payload values that include the
/// trailing checksum.
pub(crate) fn verify_checksum(hrp: &str, data_with_checksum: &[u8]) -> bool {
    polymod(hrp_expand(hrp).chain(data_with_checksum.iter().copied())) == TARGET_RESIDUE
}
