//! Tests for the byte buffer.

use super::*;
use proptest::prelude::*;

#[test]
fn test_fixed_width_round_trip() {
    let mut buf = ByteBuffer::new();
    buf.write_byte(-85);
    buf.write_short(-2);
    buf.write_unsigned_short(0xFFFE);
    buf.write_int(i32::MIN);
    buf.write_long(0x0102_0304_0506_0708);
    assert_eq!(buf.position(), 1 + 2 + 2 + 4 + 8);

    buf.set_position(0).unwrap();
    assert_eq!(buf.read_byte().unwrap(), -85);
    assert_eq!(buf.read_short().unwrap(), -2);
    assert_eq!(buf.read_unsigned_short().unwrap(), 0xFFFE);
    assert_eq!(buf.read_int().unwrap(), i32::MIN);
    assert_eq!(buf.read_long().unwrap(), 0x0102_0304_0506_0708);
}

#[test]
fn test_big_endian_layout() {
    let mut buf = ByteBuffer::new();
    buf.write_short(0x0102);
    buf.write_int(0x0304_0506);
    buf.write_long(-1);
    assert_eq!(
        buf.to_byte_array(),
        vec![1, 2, 3, 4, 5, 6, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn test_read_past_end() {
    let mut buf = ByteBuffer::from_bytes(&[1, 2, 3]);
    assert_eq!(
        buf.read_int(),
        Err(BufferError::Underflow {
            needed: 4,
            remaining: 3
        })
    );
    // A failed read does not move the cursor
    assert_eq!(buf.position(), 0);
    assert_eq!(buf.read_short().unwrap(), 0x0102);
    assert_eq!(buf.read_byte().unwrap(), 3);
    assert!(buf.read_byte().is_err());
}

#[test]
fn test_strings() {
    let mut buf = ByteBuffer::with_size(2);
    buf.write_string("héllo");
    buf.write_string("");
    buf.write_string("world");
    assert_eq!(buf.to_byte_array(), b"h\xC3\xA9llo\n\nworld\n");

    buf.set_position(0).unwrap();
    assert_eq!(buf.read_string().unwrap(), "héllo");
    assert_eq!(buf.read_string().unwrap(), "");
    assert_eq!(buf.read_string().unwrap(), "world");
}

#[test]
fn test_string_without_terminator() {
    let mut buf = ByteBuffer::from_bytes(b"no newline");
    assert_eq!(buf.read_string(), Err(BufferError::MissingTerminator));
    assert_eq!(buf.position(), 0);

    let mut buf = ByteBuffer::from_bytes(b"\xFF\xFE\n");
    assert!(matches!(buf.read_string(), Err(BufferError::InvalidUtf8(_))));
    assert_eq!(buf.position(), 0);
}

#[test]
fn test_block_copies() {
    let mut buf = ByteBuffer::new();
    buf.write_bytes(&[9, 8, 7, 6, 5], 1, 3).unwrap();
    assert_eq!(buf.to_byte_array(), vec![8, 7, 6]);

    assert_eq!(
        buf.write_bytes(&[1, 2], 1, 2),
        Err(BufferError::OutOfRange {
            offset: 1,
            length: 2,
            available: 2
        })
    );
    assert!(buf.write_bytes(&[1, 2], usize::MAX, 2).is_err());

    buf.set_position(0).unwrap();
    let mut dest = [0u8; 5];
    buf.read_bytes(&mut dest, 2, 3).unwrap();
    assert_eq!(dest, [0, 0, 8, 7, 6]);

    buf.set_position(0).unwrap();
    assert!(matches!(
        buf.read_bytes(&mut dest, 4, 3),
        Err(BufferError::OutOfRange { .. })
    ));
    assert!(matches!(
        buf.read_bytes(&mut dest, 0, 4),
        Err(BufferError::Underflow { .. })
    ));
}

#[test]
fn test_capacity_growth() {
    let mut buf = ByteBuffer::with_size(4);
    buf.write_int(1);
    assert_eq!(buf.capacity(), 4);

    // Doubling covers a single byte
    buf.write_byte(2);
    assert_eq!(buf.capacity(), 8);

    // Doubling is not enough for 20 more bytes: grow to exactly fit
    buf.write_bytes(&[0; 20], 0, 20).unwrap();
    assert_eq!(buf.capacity(), 25);
    assert_eq!(buf.to_byte_array().len(), 25);

    let mut empty = ByteBuffer::new();
    empty.write_byte(1);
    assert_eq!(empty.capacity(), 1);
    empty.write_byte(2);
    assert_eq!(empty.capacity(), 2);
    empty.write_byte(3);
    assert_eq!(empty.capacity(), 4);
}

#[test]
fn test_to_byte_array_is_written_prefix() {
    let mut buf = ByteBuffer::with_size(16);
    assert!(buf.to_byte_array().is_empty());
    buf.write_short(7);
    assert_eq!(buf.to_byte_array(), vec![0, 7]);
    assert_eq!(buf.as_slice(), &[0, 7]);
    assert_eq!(buf.capacity(), 16);
}

#[test]
fn test_positioning() {
    let mut buf = ByteBuffer::with_size(4);
    buf.set_position(4).unwrap();
    assert_eq!(buf.remaining(), 0);
    assert_eq!(
        buf.set_position(5),
        Err(BufferError::InvalidPosition {
            position: 5,
            capacity: 4
        })
    );
    assert_eq!(buf.position(), 4);
}

#[test]
fn test_reset() {
    let mut buf = ByteBuffer::from_bytes(&[1, 2, 3]);
    buf.read_byte().unwrap();
    buf.write_bits(4, 0xF).unwrap();
    buf.reset();

    assert_eq!(buf.capacity(), 0);
    assert_eq!(buf.position(), 0);
    assert_eq!(buf.bit_position(), 0);
    assert!(buf.to_byte_array().is_empty());
}

#[test]
fn test_bit_packing_example() {
    let mut buf = ByteBuffer::new();
    buf.write_bits(3, 5).unwrap();
    buf.write_bits(5, 17).unwrap();
    assert_eq!(buf.bit_position(), 8);
    assert_eq!(buf.capacity(), 1);

    buf.flush_bits();
    assert_eq!(buf.to_byte_array(), vec![0xB1]);
}

#[test]
fn test_bits_span_bytes() {
    let mut buf = ByteBuffer::new();
    buf.write_bits(4, 0xA).unwrap();
    buf.write_bits(12, 0xBCD).unwrap();
    buf.write_bits(32, 0xDEAD_BEEF).unwrap();
    buf.write_bits(1, 1).unwrap();
    buf.flush_bits();
    assert_eq!(
        buf.to_byte_array(),
        vec![0xAB, 0xCD, 0xDE, 0xAD, 0xBE, 0xEF, 0x80]
    );
    assert_eq!(buf.bit_position(), 56);
}

#[test]
fn test_bits_preserve_neighbours() {
    let mut buf = ByteBuffer::from_bytes(&[0xFF, 0xFF]);
    buf.write_bits(4, 0).unwrap();
    buf.write_bits(8, 0).unwrap();
    assert_eq!(buf.capacity(), 2);

    buf.set_position(2).unwrap();
    assert_eq!(buf.to_byte_array(), vec![0x00, 0x0F]);
}

#[test]
fn test_bits_mask_wide_values() {
    let mut buf = ByteBuffer::new();
    buf.write_bits(4, 0xFFFF_FFF3).unwrap();
    buf.write_bits(4, 0).unwrap();
    buf.flush_bits();
    assert_eq!(buf.to_byte_array(), vec![0x30]);
}

#[test]
fn test_invalid_bit_counts() {
    let mut buf = ByteBuffer::new();
    assert_eq!(buf.write_bits(0, 1), Err(BufferError::InvalidBitCount(0)));
    assert_eq!(buf.write_bits(33, 1), Err(BufferError::InvalidBitCount(33)));
    assert_eq!(buf.read_bits(0), Err(BufferError::InvalidBitCount(0)));
    assert!(matches!(buf.read_bits(1), Err(BufferError::Underflow { .. })));
}

#[test]
fn test_mixed_cursors_with_alignment() {
    let mut buf = ByteBuffer::new();
    buf.write_unsigned_short(0xCAFE);
    buf.sync_bits();
    buf.write_bits(6, 0b110011).unwrap();
    buf.flush_bits();
    buf.write_byte(0x42);
    buf.write_byte(-1);

    assert_eq!(buf.to_byte_array(), vec![0xCA, 0xFE, 0b1100_1100, 0x42, 0xFF]);

    let mut reader = ByteBuffer::from(buf.to_byte_array());
    assert_eq!(reader.read_unsigned_short().unwrap(), 0xCAFE);
    reader.sync_bits();
    assert_eq!(reader.read_bits(6).unwrap(), 0b110011);
    reader.flush_bits();
    assert_eq!(reader.read_byte().unwrap(), 0x42);
    assert_eq!(reader.read_byte().unwrap(), -1);
}

#[test]
fn test_byte_is_signed() {
    let mut buf = ByteBuffer::from_bytes(&[0x7F, 0x80, 0xFF, 0x00]);
    assert_eq!(buf.read_byte().unwrap(), i8::MAX);
    assert_eq!(buf.read_byte().unwrap(), i8::MIN);
    assert_eq!(buf.read_byte().unwrap(), -1);
    assert_eq!(buf.read_byte().unwrap(), 0);

    let mut buf = ByteBuffer::new();
    buf.write_byte(i8::MIN);
    buf.write_byte(-2);
    assert_eq!(buf.to_byte_array(), vec![0x80, 0xFE]);
}

#[test]
fn test_bytes_interop() {
    let mut buf = ByteBuffer::from(Bytes::from_static(b"\x00\x2A"));
    assert_eq!(buf.read_short().unwrap(), 42);

    let mut buf = ByteBuffer::with_size(32);
    buf.write_int(5);
    let frozen: Bytes = buf.into();
    assert_eq!(&frozen[..], &[0, 0, 0, 5]);
}

proptest! {
    #[test]
    fn test_integer_round_trip(a in any::<i16>(), b in any::<u16>(), c in any::<i32>(), d in any::<i64>(), e in any::<i8>()) {
        let mut buf = ByteBuffer::new();
        buf.write_short(a);
        buf.write_unsigned_short(b);
        buf.write_int(c);
        buf.write_long(d);
        buf.write_byte(e);

        let mut reader = ByteBuffer::from_bytes(&buf.to_byte_array());
        prop_assert_eq!(reader.read_short().unwrap(), a);
        prop_assert_eq!(reader.read_unsigned_short().unwrap(), b);
        prop_assert_eq!(reader.read_int().unwrap(), c);
        prop_assert_eq!(reader.read_long().unwrap(), d);
        prop_assert_eq!(reader.read_byte().unwrap(), e);
        prop_assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_bit_fields_round_trip(
        fields in proptest::collection::vec((1u32..=32, any::<u32>()), 1..24),
    ) {
        let mut buf = ByteBuffer::new();
        for &(width, value) in &fields {
            buf.write_bits(width, value).unwrap();
        }
        let total: u32 = fields.iter().map(|&(w, _)| w).sum();
        prop_assert_eq!(buf.bit_position(), total as usize);
        buf.flush_bits();

        let mut reader = ByteBuffer::from_bytes(&buf.to_byte_array());
        for &(width, value) in &fields {
            let expected = if width == 32 { value } else { value & ((1 << width) - 1) };
            prop_assert_eq!(reader.read_bits(width).unwrap(), expected);
        }
    }

    #[test]
    fn test_strings_round_trip(texts in proptest::collection::vec("[^\n]{0,24}", 0..8)) {
        let mut buf = ByteBuffer::new();
        for text in &texts {
            buf.write_string(text);
        }

        let mut reader = ByteBuffer::from_bytes(&buf.to_byte_array());
        for text in &texts {
            prop_assert_eq!(&reader.read_string().unwrap(), text);
        }
    }
}
