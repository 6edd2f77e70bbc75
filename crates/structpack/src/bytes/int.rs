// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Integer <-> byte conversion at arbitrary bit widths.

use super::ByteOrder;

/// Number of bytes needed to hold `bit_width` bits (`ceil(bit_width / 8)`).
#[inline]
pub fn byte_width(bit_width: u32) -> usize {
    bit_width.div_ceil(8) as usize
}

/// Encode `value` into `ceil(bit_width / 8)` bytes.
///
/// Output byte `i` is `value >> ((bit_width - 8) - 8 * i)` for big-endian and
/// `value >> (8 * i)` for little-endian, masked to 8 bits. No range check is
/// performed: a width narrower than the value silently truncates.
///
/// Shift amounts are taken modulo 64, as the hardware does. A `bit_width`
/// that is not a multiple of 8 therefore drives the last big-endian shift
/// negative, which wraps to a large right shift: `0xABC` at 12 bits is
/// `[0xAB, 0x00]`. Past 64 bits the leading bytes repeat low-order bytes.
pub fn int_to_bytes(value: i64, bit_width: u32, order: ByteOrder) -> Vec<u8> {
    let size = byte_width(bit_width);
    let bits = i64::from(bit_width);
    (0..size)
        .map(|i| {
            let i = i as i64;
            let shift = match order {
                ByteOrder::Big => (bits - 8) - 8 * i,
                ByteOrder::Little => 8 * i,
            };
            (shift_right(value, shift) & 0xFF) as u8
        })
        .collect()
}

/// Arithmetic shift with the amount masked to `0..64`.
#[inline]
fn shift_right(value: i64, shift: i64) -> i64 {
    value >> (shift & 63)
}

/// Decode an integer from `bytes`.
///
/// When `signed` is set and the most significant byte (by `order`) has its
/// top bit set, the two's-complement value is rebuilt explicitly: every byte
/// is inverted, accumulated as unsigned, and the result is `-acc - 1`. This
/// works for spans narrower than `i64` where native sign extension would not
/// apply.
///
/// Spans wider than 8 bytes keep only the low 64 bits.
pub fn bytes_to_int(bytes: &[u8], order: ByteOrder, signed: bool) -> i64 {
    let msb = match order {
        ByteOrder::Big => bytes.first(),
        ByteOrder::Little => bytes.last(),
    };
    let Some(&msb) = msb else {
        return 0;
    };

    let negative = signed && (msb & 0b1000_0000) != 0;
    let acc = match order {
        ByteOrder::Big => accumulate(bytes.iter(), negative),
        ByteOrder::Little => accumulate(bytes.iter().rev(), negative),
    };

    if negative {
        acc.wrapping_neg().wrapping_sub(1)
    } else {
        acc
    }
}

/// Most-significant-first fold, optionally inverting each byte.
fn accumulate<'a>(bytes: impl Iterator<Item = &'a u8>, invert: bool) -> i64 {
    bytes.fold(0i64, |acc, &b| {
        let b = if invert { !b } else { b };
        (acc << 8) | i64::from(b)
    })
}

/// Decode an unsigned integer from up to 8 bytes.
pub fn bytes_to_uint(bytes: &[u8], order: ByteOrder) -> u64 {
    let fold = |acc: u64, b: &u8| (acc << 8) | u64::from(*b);
    match order {
        ByteOrder::Big => bytes.iter().fold(0, fold),
        ByteOrder::Little => bytes.iter().rev().fold(0, fold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_to_bytes_endianness() {
        assert_eq!(int_to_bytes(0x1020, 16, ByteOrder::Big), vec![0x10, 0x20]);
        assert_eq!(
            int_to_bytes(0x1020, 16, ByteOrder::Little),
            vec![0x20, 0x10]
        );
    }

    #[test]
    fn test_int_to_bytes_widths() {
        assert_eq!(
            int_to_bytes(0x0102_0304, 32, ByteOrder::Big),
            vec![0x01, 0x02, 0x03, 0x04]
        );
        assert_eq!(
            int_to_bytes(0x0102_0304, 32, ByteOrder::Little),
            vec![0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(
            int_to_bytes(0x0102_0304_0506_0708, 64, ByteOrder::Big),
            vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
        assert_eq!(int_to_bytes(0x7F, 8, ByteOrder::Little), vec![0x7F]);
        assert!(int_to_bytes(0x7F, 0, ByteOrder::Big).is_empty());
    }

    #[test]
    fn test_int_to_bytes_truncates_silently() {
        assert_eq!(int_to_bytes(0x12_3456, 16, ByteOrder::Big), vec![0x34, 0x56]);
        assert_eq!(
            int_to_bytes(0x12_3456, 16, ByteOrder::Little),
            vec![0x56, 0x34]
        );
    }

    #[test]
    fn test_int_to_bytes_negative_values() {
        assert_eq!(int_to_bytes(-1, 24, ByteOrder::Big), vec![0xFF, 0xFF, 0xFF]);
        assert_eq!(int_to_bytes(-2, 16, ByteOrder::Big), vec![0xFF, 0xFE]);
        assert_eq!(int_to_bytes(-2, 16, ByteOrder::Little), vec![0xFE, 0xFF]);
        assert_eq!(
            int_to_bytes(i64::MIN, 64, ByteOrder::Big),
            vec![0x80, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_int_to_bytes_partial_byte_width() {
        // 12 bits -> 2 bytes; the last big-endian shift is -4, i.e. 60
        assert_eq!(int_to_bytes(0xABC, 12, ByteOrder::Big), vec![0xAB, 0x00]);
        assert_eq!(int_to_bytes(0xABC, 12, ByteOrder::Little), vec![0xBC, 0x0A]);
    }

    #[test]
    fn test_int_to_bytes_wider_than_value() {
        // 72 bits: the leading shift of 64 wraps to 0
        assert_eq!(int_to_bytes(-1, 72, ByteOrder::Big), vec![0xFF; 9]);
        assert_eq!(
            int_to_bytes(1, 72, ByteOrder::Big),
            vec![1, 0, 0, 0, 0, 0, 0, 0, 1]
        );
        assert_eq!(
            int_to_bytes(0x0102, 72, ByteOrder::Little),
            vec![0x02, 0x01, 0, 0, 0, 0, 0, 0, 0x02]
        );
    }

    #[test]
    fn test_bytes_to_int_signed_and_unsigned() {
        assert_eq!(bytes_to_int(&[0xFF, 0xFF], ByteOrder::Big, true), -1);
        assert_eq!(bytes_to_int(&[0xFF, 0xFF], ByteOrder::Big, false), 65535);
        assert_eq!(bytes_to_int(&[0xFE, 0xFF], ByteOrder::Little, true), -2);
        assert_eq!(bytes_to_int(&[0xFF, 0x7F], ByteOrder::Little, true), 0x7FFF);
        assert_eq!(bytes_to_int(&[0x80, 0x00], ByteOrder::Big, true), -32768);
        assert_eq!(bytes_to_int(&[0x80], ByteOrder::Big, true), -128);
        assert_eq!(bytes_to_int(&[0x80], ByteOrder::Big, false), 128);
    }

    #[test]
    fn test_bytes_to_int_narrow_spans() {
        // 3-byte signed span: no native sign extension available
        assert_eq!(bytes_to_int(&[0xFF, 0xFF, 0xFE], ByteOrder::Big, true), -2);
        assert_eq!(
            bytes_to_int(&[0x80, 0x00, 0x00], ByteOrder::Big, true),
            -8_388_608
        );
        assert_eq!(
            bytes_to_int(&[0x00, 0x00, 0x80], ByteOrder::Little, true),
            -8_388_608
        );
        assert_eq!(
            bytes_to_int(&[0x12, 0x34, 0x56], ByteOrder::Little, false),
            0x56_3412
        );
    }

    #[test]
    fn test_bytes_to_int_full_width() {
        let min = [0x80, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(bytes_to_int(&min, ByteOrder::Big, true), i64::MIN);
        assert_eq!(bytes_to_int(&[0xFF; 8], ByteOrder::Big, true), -1);
        assert_eq!(bytes_to_int(&[0xFF; 8], ByteOrder::Little, false), -1);
    }

    #[test]
    fn test_bytes_to_int_empty() {
        assert_eq!(bytes_to_int(&[], ByteOrder::Big, true), 0);
        assert_eq!(bytes_to_uint(&[], ByteOrder::Little), 0);
    }

    #[test]
    fn test_bytes_to_uint() {
        assert_eq!(bytes_to_uint(&[0xFF; 8], ByteOrder::Big), u64::MAX);
        assert_eq!(bytes_to_uint(&[0x01, 0x02], ByteOrder::Little), 0x0201);
    }

    #[test]
    fn test_signed_round_trip_all_i16() {
        for v in i16::MIN..=i16::MAX {
            for order in [ByteOrder::Big, ByteOrder::Little] {
                let bytes = int_to_bytes(i64::from(v), 16, order);
                assert_eq!(bytes_to_int(&bytes, order, true), i64::from(v));
            }
        }
    }
}
