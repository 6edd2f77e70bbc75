// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # structpack - schema-driven fixed-layout binary structs
//!
//! Maps Rust records onto flat byte buffers the way a C struct maps onto a
//! wire or file format: fields in declaration order, each at a fixed offset
//! and width, in a chosen byte order.
//!
//! ## Quick Start
//!
//! ```rust
//! use structpack::{Result, Struct};
//!
//! #[derive(Struct, Default, Debug, PartialEq)]
//! #[structpack(size = 16)]
//! struct Telemetry {
//!     #[structpack(size = 2)]
//!     id: u32,
//!     temperature: f32,
//!     #[structpack(size = 6, charset = "US-ASCII")]
//!     station: String,
//! }
//!
//! fn main() -> Result<()> {
//!     let sample = Telemetry { id: 513, temperature: 21.5, station: "NORTH".into() };
//!
//!     let bytes = structpack::pack(&sample)?;
//!     assert_eq!(bytes.len(), 16);
//!     assert_eq!(&bytes[..2], &[0x02, 0x01]);
//!
//!     let back: Telemetry = structpack::unpack(&bytes)?;
//!     assert_eq!(back, sample);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! pack / unpack ──> StructCodec ──> SchemaCache ──miss──> SchemaBuilder
//!                        │                                   │
//!                        │                      classify + HandlerRegistry
//!                        v                                   │
//!                  engine loop <── StructSchema (memoised) <─┘
//!                        │
//!                converters / resolvers ──> bytes::{int_to_bytes, ...}
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Struct`] | Record types with a fixed layout (usually derived) |
//! | [`StructCodec`] | Registry + schema cache + defaults; pack/unpack entry points |
//! | [`schema::StructSchema`] | Resolved field offsets, sizes and handlers |
//! | [`HandlerRegistry`] | Converters and resolvers by capability id |
//! | [`CodecConfig`] | Default charset and byte order |
//!
//! ## Features
//!
//! - `config-loaders` (default): YAML loading of [`CodecConfig`] via `serde_yaml`

// Allow the derive macro to work inside this crate's tests
extern crate self as structpack;

/// Byte codec: integers, bit fields, hex.
pub mod bytes;
/// Text encodings for string fields.
pub mod charset;
/// Pack/unpack engine and the global codec.
pub mod codec;
/// Codec defaults from environment or YAML.
pub mod config;
/// Error type.
pub mod error;
/// Converters, resolvers and their registry.
pub mod handler;
mod record;
/// Declarations, schemas and the schema cache.
pub mod schema;
/// Value model and type classification.
pub mod types;

pub use bytes::ByteOrder;
pub use charset::Charset;
pub use codec::StructCodec;
pub use config::CodecConfig;
pub use error::{Error, Result};
pub use handler::{FieldConverter, FieldResolver, HandlerRegistry};
pub use record::Struct; // Trait (for type bounds)
pub use schema::{FieldDecl, StructDecl};
pub use structpack_codegen::Struct; // Derive macro (for #[derive(structpack::Struct)])
pub use types::{FieldValue, Value, ValueType};

/// Pack `record` with the global codec.
pub fn pack<T: Struct>(record: &T) -> Result<Vec<u8>> {
    StructCodec::global().pack(record)
}

/// Unpack a `T` from the start of `bytes` with the global codec.
pub fn unpack<T: Struct>(bytes: &[u8]) -> Result<T> {
    StructCodec::global().unpack(bytes)
}

/// Unpack a `T` starting at `bytes[start]` with the global codec.
pub fn unpack_at<T: Struct>(bytes: &[u8], start: usize) -> Result<T> {
    StructCodec::global().unpack_at(bytes, start)
}
