// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::Result;

/// Encode bytes as hex, high nibble first.
pub fn bytes_to_hex(bytes: &[u8], lowercase: bool) -> String {
    if lowercase {
        hex::encode(bytes)
    } else {
        hex::encode_upper(bytes)
    }
}

/// Decode a hex string (either case).
///
/// Odd-length input and non-hex characters are rejected with
/// [`Error::InvalidHex`](crate::Error::InvalidHex); nothing is padded.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(hex)?)
}

/// Two hex characters for a single byte.
pub fn byte_to_hex(byte: u8, lowercase: bool) -> String {
    bytes_to_hex(&[byte], lowercase)
}

/// Lowercase hex of `value`, left-padded with `0` to an even length.
pub fn int_to_hex(value: u64) -> String {
    let hex = format!("{value:x}");
    if hex.len() % 2 != 0 {
        format!("0{hex}")
    } else {
        hex
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_bytes_to_hex_case() {
        assert_eq!(bytes_to_hex(&[0xAB], true), "ab");
        assert_eq!(bytes_to_hex(&[0xAB], false), "AB");
        assert_eq!(bytes_to_hex(&[0x00, 0x0F, 0xF0], false), "000FF0");
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("000FF0").unwrap(), vec![0x00, 0x0F, 0xF0]);
        assert_eq!(hex_to_bytes("aBcD").unwrap(), vec![0xAB, 0xCD]);
        assert!(hex_to_bytes("").unwrap().is_empty());
    }

    #[test]
    fn test_hex_to_bytes_rejects_odd_length() {
        assert!(matches!(hex_to_bytes("ABC"), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_hex_to_bytes_rejects_non_hex() {
        assert!(matches!(hex_to_bytes("zz"), Err(Error::InvalidHex(_))));
        assert!(matches!(hex_to_bytes("0x12"), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_hex_round_trip_random() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for len in 1..64 {
            let bytes: Vec<u8> = (0..len).map(|_| rng.u8(..)).collect();
            for lowercase in [true, false] {
                assert_eq!(hex_to_bytes(&bytes_to_hex(&bytes, lowercase)).unwrap(), bytes);
            }
        }
    }

    #[test]
    fn test_byte_to_hex() {
        assert_eq!(byte_to_hex(0x0A, false), "0A");
        assert_eq!(byte_to_hex(0xF3, true), "f3");
        assert_eq!(byte_to_hex(0x00, false), "00");
        for byte in 0..=u8::MAX {
            assert_eq!(byte_to_hex(byte, true), format!("{byte:02x}"));
            assert_eq!(byte_to_hex(byte, false), format!("{byte:02X}"));
        }
    }

    #[test]
    fn test_int_to_hex_even_length() {
        assert_eq!(int_to_hex(0xABC), "0abc");
        assert_eq!(int_to_hex(0xAB), "ab");
        assert_eq!(int_to_hex(0), "00");
    }
}
