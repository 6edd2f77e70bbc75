// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::{Error, Result};

/// Extract `size` contiguous bits of `byte` ending at bit `position`.
///
/// Bit 0 is the least significant bit. `position` is taken modulo 8. When the
/// requested run would extend below bit 0 it is clamped to start at bit 0.
///
/// ```rust
/// use structpack::bytes::bit_field;
///
/// assert_eq!(bit_field(0b1011_0000, 3, 7).unwrap(), 0b101);
/// ```
pub fn bit_field(byte: u8, size: u32, position: u32) -> Result<u8> {
    if !(1..=8).contains(&size) {
        return Err(Error::BitFieldRange(size));
    }
    let shift = ((position % 8) + 1).saturating_sub(size);
    let mask = (((1u16 << size) - 1) << shift) as u8;
    Ok((byte & mask) >> shift)
}

/// Render bytes as a string of `0`/`1`, 8 characters per byte.
pub fn to_binary_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8);
    for b in bytes {
        out.push_str(&format!("{b:08b}"));
    }
    out
}
