//! Growable byte buffer with a byte cursor and an independent bit cursor.
//!
//! Fixed-width values are big-endian. Strings are UTF-8 followed by a single
//! newline byte, with no length prefix. Writes grow the backing store by
//! doubling, or to exactly the required size if doubling is not enough.
//!
//! ## Byte and bit cursors
//!
//! [`ByteBuffer::write_bits`] and [`ByteBuffer::read_bits`] move the bit
//! cursor only; every other read and write moves the byte cursor only. The
//! two are connected explicitly:
//!
//! - [`ByteBuffer::sync_bits`] moves the bit cursor to the byte cursor, to
//!   start a bit field after byte-oriented data.
//! - [`ByteBuffer::flush_bits`] moves the byte cursor to the first whole byte
//!   after the bit cursor, so packed bits become part of
//!   [`ByteBuffer::to_byte_array`] and byte-oriented writes can follow.
//!
//! Interleaving byte and bit operations without one of these calls in between
//! leaves the two cursors pointing at unrelated offsets; what gets overwritten
//! is then up to the caller.
//!
//! ## Example Usage
//!
//! ```
//! use binkit_core::ByteBuffer;
//!
//! let mut buf = ByteBuffer::new();
//! buf.write_int(0x0102_0304);
//! buf.write_string("hello");
//! buf.sync_bits();
//! buf.write_bits(3, 0b101).unwrap();
//! buf.write_bits(5, 0b10001).unwrap();
//! buf.flush_bits();
//! assert_eq!(buf.to_byte_array(), b"\x01\x02\x03\x04hello\n\xB1");
//!
//! let mut reader = ByteBuffer::from_bytes(&buf.to_byte_array());
//! assert_eq!(reader.read_int().unwrap(), 0x0102_0304);
//! assert_eq!(reader.read_string().unwrap(), "hello");
//! assert_eq!(reader.read_byte().unwrap() as u8, 0xB1);
//! ```

pub mod error;

#[cfg(test)]
mod tests;

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;
use tracing::trace;

pub use error::BufferError;
use error::Result;

const STRING_TERMINATOR: u8 = b'\n';
const MAX_BIT_FIELD: u32 = 32;

/// A growable byte array with a read/write byte cursor and a bit cursor.
///
/// The buffer is not synchronized; share it across threads only behind a lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    /// Backing store; its length is the capacity
    buffer: Vec<u8>,
    /// Byte cursor
    position: usize,
    /// Bit cursor, counted in bits from the start of the store
    bit_position: usize,
}

impl ByteBuffer {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            position: 0,
            bit_position: 0,
        }
    }

    /// Creates a buffer of `size` zero bytes.
    pub fn with_size(size: usize) -> Self {
        Self {
            buffer: vec![0; size],
            position: 0,
            bit_position: 0,
        }
    }

    /// Creates a buffer holding a copy of `bytes`, cursor at the start.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buffer: bytes.to_vec(),
            position: 0,
            bit_position: 0,
        }
    }

    /// Size of the backing store
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes between the byte cursor and the end of the store
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Current byte cursor
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves the byte cursor; `position` must lie within `[0, capacity]`.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.buffer.len() {
            return Err(BufferError::invalid_position(position, self.buffer.len()));
        }
        self.position = position;
        Ok(())
    }

    /// Current bit cursor, in bits from the start of the store
    pub const fn bit_position(&self) -> usize {
        self.bit_position
    }

    /// Drops the backing store and rewinds both cursors.
    pub fn reset(&mut self) {
        self.buffer = Vec::new();
        self.position = 0;
        self.bit_position = 0;
    }

    /// Copies the bytes before the byte cursor.
    pub fn to_byte_array(&self) -> Vec<u8> {
        self.buffer[..self.position].to_vec()
    }

    /// The bytes before the byte cursor
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[..self.position]
    }

    // Read operations

    /// Reads a signed byte.
    pub fn read_byte(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    /// Reads a big-endian signed 16-bit integer.
    pub fn read_short(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.take(2)?))
    }

    /// Reads a big-endian unsigned 16-bit integer.
    pub fn read_unsigned_short(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    /// Reads a big-endian signed 32-bit integer.
    pub fn read_int(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    /// Reads a big-endian signed 64-bit integer.
    pub fn read_long(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    /// Reads UTF-8 text up to the next newline byte and skips the newline.
    ///
    /// The cursor does not move when no terminator is found or the text is
    /// not valid UTF-8.
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.position;
        let end = self.buffer[start..]
            .iter()
            .position(|&b| b == STRING_TERMINATOR)
            .map(|len| start + len)
            .ok_or(BufferError::MissingTerminator)?;

        let text = String::from_utf8(self.buffer[start..end].to_vec())?;
        self.position = end + 1;
        Ok(text)
    }

    /// Copies `length` bytes into `destination[offset..]`.
    pub fn read_bytes(
        &mut self,
        destination: &mut [u8],
        offset: usize,
        length: usize,
    ) -> Result<()> {
        let range = checked_range(offset, length, destination.len())?;
        let source = self.take(length)?;
        destination[range].copy_from_slice(source);
        Ok(())
    }

    /// Reads a bit field of `num_bits` (1 to 32) at the bit cursor, most
    /// significant bit first.
    pub fn read_bits(&mut self, num_bits: u32) -> Result<u32> {
        validate_bit_count(num_bits)?;
        let end_byte = (self.bit_position + num_bits as usize).div_ceil(8);
        if end_byte > self.buffer.len() {
            return Err(BufferError::underflow(
                end_byte - self.bit_position / 8,
                self.buffer.len().saturating_sub(self.bit_position / 8),
            ));
        }

        let mut remaining = num_bits;
        let mut byte_pos = self.bit_position >> 3;
        let mut bit_offset = 8 - (self.bit_position & 7) as u32;
        let mut value: u32 = 0;

        while remaining > bit_offset {
            value = (value << bit_offset) | (self.buffer[byte_pos] as u32 & low_mask(bit_offset));
            byte_pos += 1;
            remaining -= bit_offset;
            bit_offset = 8;
        }
        if remaining > 0 {
            let byte = self.buffer[byte_pos] as u32 >> (bit_offset - remaining);
            value = (value << remaining) | (byte & low_mask(remaining));
        }

        self.bit_position += num_bits as usize;
        Ok(value)
    }

    // Write operations

    /// Writes a signed byte.
    pub fn write_byte(&mut self, value: i8) {
        self.put(&value.to_be_bytes());
    }

    /// Writes a big-endian signed 16-bit integer.
    pub fn write_short(&mut self, value: i16) {
        let mut bytes = [0u8; 2];
        BigEndian::write_i16(&mut bytes, value);
        self.put(&bytes);
    }

    /// Writes a big-endian unsigned 16-bit integer.
    pub fn write_unsigned_short(&mut self, value: u16) {
        let mut bytes = [0u8; 2];
        BigEndian::write_u16(&mut bytes, value);
        self.put(&bytes);
    }

    /// Writes a big-endian signed 32-bit integer.
    pub fn write_int(&mut self, value: i32) {
        let mut bytes = [0u8; 4];
        BigEndian::write_i32(&mut bytes, value);
        self.put(&bytes);
    }

    /// Writes a big-endian signed 64-bit integer.
    pub fn write_long(&mut self, value: i64) {
        let mut bytes = [0u8; 8];
        BigEndian::write_i64(&mut bytes, value);
        self.put(&bytes);
    }

    /// Writes `value` as UTF-8 followed by a newline byte.
    pub fn write_string(&mut self, value: &str) {
        self.ensure_capacity(value.len() + 1);
        self.put(value.as_bytes());
        self.put(&[STRING_TERMINATOR]);
    }

    /// Writes `source[offset..offset + length]`.
    pub fn write_bytes(&mut self, source: &[u8], offset: usize, length: usize) -> Result<()> {
        let range = checked_range(offset, length, source.len())?;
        self.put(&source[range]);
        Ok(())
    }

    /// Writes the low `num_bits` (1 to 32) of `value` at the bit cursor, most
    /// significant bit first.
    ///
    /// Bits of partially filled bytes outside the field are preserved.
    pub fn write_bits(&mut self, num_bits: u32, value: u32) -> Result<()> {
        validate_bit_count(num_bits)?;
        let end_byte = (self.bit_position + num_bits as usize).div_ceil(8);
        self.grow_to(end_byte);

        let value = if num_bits == MAX_BIT_FIELD {
            value
        } else {
            value & ((1 << num_bits) - 1)
        };

        let mut remaining = num_bits;
        let mut byte_pos = self.bit_position >> 3;
        let mut bit_offset = 8 - (self.bit_position & 7) as u32;

        // Fill the free low bits of each byte the field runs through
        while remaining > bit_offset {
            let mask = low_mask(bit_offset);
            let chunk = (value >> (remaining - bit_offset)) & mask;
            self.buffer[byte_pos] = (self.buffer[byte_pos] as u32 & !mask | chunk) as u8;
            byte_pos += 1;
            remaining -= bit_offset;
            bit_offset = 8;
        }
        if remaining > 0 {
            let shift = bit_offset - remaining;
            let mask = low_mask(remaining) << shift;
            let chunk = (value & low_mask(remaining)) << shift;
            self.buffer[byte_pos] = (self.buffer[byte_pos] as u32 & !mask | chunk) as u8;
        }

        self.bit_position += num_bits as usize;
        Ok(())
    }

    // Cursor alignment

    /// Moves the bit cursor to the byte cursor.
    pub const fn sync_bits(&mut self) {
        self.bit_position = self.position * 8;
    }

    /// Moves the byte cursor to the first byte boundary at or after the bit
    /// cursor, and aligns the bit cursor to it.
    pub fn flush_bits(&mut self) {
        self.position = self.bit_position.div_ceil(8);
        self.bit_position = self.position * 8;
        trace!(position = self.position, "flushed bit cursor");
    }

    // Internals

    /// Grows the store so that `additional` bytes fit after the byte cursor.
    fn ensure_capacity(&mut self, additional: usize) {
        self.grow_to(self.position + additional);
    }

    fn grow_to(&mut self, required: usize) {
        let capacity = self.buffer.len();
        if required > capacity {
            let new_capacity = required.max(capacity * 2);
            trace!(capacity, new_capacity, "growing byte buffer");
            self.buffer.resize(new_capacity, 0);
        }
    }

    fn put(&mut self, bytes: &[u8]) {
        self.ensure_capacity(bytes.len());
        self.buffer[self.position..self.position + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
    }

    fn take(&mut self, len: usize) -> Result<&[u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(BufferError::underflow(len, remaining));
        }
        let start = self.position;
        self.position += len;
        Ok(&self.buffer[start..start + len])
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(buffer: Vec<u8>) -> Self {
        Self {
            buffer,
            position: 0,
            bit_position: 0,
        }
    }
}

impl From<Bytes> for ByteBuffer {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<ByteBuffer> for Bytes {
    fn from(mut buf: ByteBuffer) -> Self {
        buf.buffer.truncate(buf.position);
        Self::from(buf.buffer)
    }
}

#[inline]
const fn low_mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

fn validate_bit_count(num_bits: u32) -> Result<()> {
    if num_bits == 0 || num_bits > MAX_BIT_FIELD {
        return Err(BufferError::InvalidBitCount(num_bits));
    }
    Ok(())
}

fn checked_range(offset: usize, length: usize, available: usize) -> Result<std::ops::Range<usize>> {
    match offset.checked_add(length) {
        Some(end) if end <= available => Ok(offset..end),
        _ => Err(BufferError::out_of_range(offset, length, available)),
    }
}
