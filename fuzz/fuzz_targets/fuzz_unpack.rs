// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use chrono::{DateTime, Utc};
use libfuzzer_sys::fuzz_target;
use structpack::Struct;

#[derive(Struct, Debug, Default)]
#[structpack(size = 48)]
struct Everything {
    a: u8,
    #[structpack(size = 3)]
    b: i32,
    #[structpack(order = "little")]
    c: u64,
    d: f32,
    e: f64,
    f: DateTime<Utc>,
    #[structpack(size = 6)]
    g: String,
    #[structpack(size = 6, charset = "UTF-16LE")]
    h: String,
    i: i16,
    #[structpack(size = 2, codec = "raw-bytes")]
    j: Vec<u8>,
}

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode or fail cleanly, never panic
    let Ok(record) = structpack::unpack::<Everything>(data) else {
        return;
    };

    // A decoded record always re-encodes to a full-size buffer
    let bytes = structpack::pack(&record).expect("decoded record re-encodes");
    assert_eq!(bytes.len(), 48);

    if data.len() > 1 {
        let _ = structpack::unpack_at::<Everything>(data, 1);
    }
});
