// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Stateless byte-level helpers.
//!
//! - [`int_to_bytes`] / [`bytes_to_int`]: arbitrary-width integer encoding in
//!   either byte order, with explicit two's-complement decoding
//! - [`bit_field`]: sub-byte flag extraction
//! - [`bytes_to_hex`] / [`hex_to_bytes`]: hex string conversion
//!
//! Nothing here holds state; every function is safe to call from any thread.
//!
//! # Example
//!
//! ```rust
//! use structpack::bytes::{bytes_to_int, int_to_bytes, ByteOrder};
//!
//! assert_eq!(int_to_bytes(0x1020, 16, ByteOrder::Big), vec![0x10, 0x20]);
//! assert_eq!(bytes_to_int(&[0xFF, 0xFF], ByteOrder::Big, true), -1);
//! ```

mod bits;
mod hex_fmt;
mod int;
mod order;

pub use bits::{bit_field, to_binary_string};
pub use hex_fmt::{byte_to_hex, bytes_to_hex, hex_to_bytes, int_to_hex};
pub use int::{byte_width, bytes_to_int, bytes_to_uint, int_to_bytes};
pub use order::ByteOrder;
