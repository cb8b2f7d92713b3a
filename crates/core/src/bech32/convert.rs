//! Regrouping between 8-bit bytes and 5-bit Bech32 values.

use tracing::debug;

use super::error::Bech32Error;

/// Packs bytes into 5-bit values, most significant bit first.
///
/// A trailing partial group is zero-filled on the right.
pub fn convert_to_5bit(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        acc = (acc << 8 | byte as u32) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }

    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }

    out
}

/// Unpacks 5-bit values into bytes.
///
/// Every value must be at most 31. Fewer than 5 leftover bits are treated
/// as padding and dropped; 5 or more mean the grouping is not canonical.
pub fn convert_from_5bit(values: &[u8]) -> Result<Vec<u8>, Bech32Error> {
    let mut out = Vec::with_capacity(values.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for (index, &value) in values.iter().enumerate() {
        if value > 31 {
            return Err(Bech32Error::invalid_data_value(value, index));
        }
        acc = (acc << 5 | value as u32) & 0xfff;
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }

    if bits >= 5 {
        debug!(bits, "rejecting 5-bit grouping");
        return Err(Bech32Error::InvalidPadding(bits));
    }

    Ok(out)
}
