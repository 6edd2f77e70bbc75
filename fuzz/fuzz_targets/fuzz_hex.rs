// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use structpack::bytes::{bytes_to_hex, hex_to_bytes};

fuzz_target!(|data: &[u8]| {
    // Byte -> hex -> byte is lossless in both cases
    let lower = bytes_to_hex(data, true);
    let upper = bytes_to_hex(data, false);
    assert_eq!(hex_to_bytes(&lower).ok().as_deref(), Some(data));
    assert_eq!(hex_to_bytes(&upper).ok().as_deref(), Some(data));

    // Arbitrary text must parse or fail cleanly
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = hex_to_bytes(text);
    }
});
