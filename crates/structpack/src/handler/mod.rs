// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Pluggable field encoders ("converters") and decoders ("resolvers").
//!
//! Handlers are registered under a capability id. At schema-build time each
//! field gets exactly one converter and one resolver: the explicitly named one
//! if the declaration names one, otherwise the first registered handler whose
//! `supports` predicate accepts the field. The choice is memoised in the
//! schema and never revisited on the pack/unpack path.
//!
//! # Built-in handlers (registration order)
//!
//! | Id | Kinds | Encoding |
//! |----|-------|----------|
//! | `primitive` | Int8..Int64, Float32, Float64, Text | integers in field byte order, IEEE bits, charset text |
//! | `datetime` | DateTime | epoch millis (epoch seconds when 4 bytes wide) |
//! | `raw-bytes` | Custom (`Vec<u8>`) | verbatim, zero-padded; explicit override only |

mod datetime;
mod primitive;
mod raw;
mod registry;

pub use datetime::DateTimeCodec;
pub use primitive::PrimitiveCodec;
pub use raw::RawBytesCodec;
pub use registry::{HandlerRegistry, Selected};

use crate::schema::{FieldDecl, FieldSchema};
use crate::types::{PrimitiveKind, Value};
use crate::{Error, Result};

/// Capability id of [`PrimitiveCodec`].
pub const PRIMITIVE: &str = "primitive";
/// Capability id of [`DateTimeCodec`].
pub const DATETIME: &str = "datetime";
/// Capability id of [`RawBytesCodec`].
pub const RAW_BYTES: &str = "raw-bytes";

/// Encodes a typed value into exactly `field.size()` bytes.
pub trait FieldConverter: Send + Sync {
    /// Whether this converter can handle the declared field.
    fn supports(&self, field: &FieldDecl, kind: PrimitiveKind) -> bool;

    fn convert(&self, field: &FieldSchema, value: &Value) -> Result<Vec<u8>>;
}

/// Decodes `field.size()` bytes at `offset` into a typed value.
pub trait FieldResolver: Send + Sync {
    /// Whether this resolver can handle the declared field.
    fn supports(&self, field: &FieldDecl, kind: PrimitiveKind) -> bool;

    /// `Ok(None)` leaves the record field at its default.
    fn resolve(&self, field: &FieldSchema, data: &[u8], offset: usize) -> Result<Option<Value>>;
}

/// Truncate or zero-pad `bytes` to `size`.
pub(crate) fn fit(mut bytes: Vec<u8>, size: usize) -> Vec<u8> {
    bytes.resize(size, 0);
    bytes
}

/// Built-in handlers only take plain fields. A fixed layout has no presence
/// bit, so `Option<T>` needs an application codec that encodes one.
pub(crate) fn is_plain(field: &FieldDecl) -> bool {
    !field.value_type().is_optional()
}

pub(crate) fn mismatch(field: &FieldSchema, expected: &str, found: &Value) -> Error {
    Error::ValueMismatch {
        field: field.name().to_string(),
        expected: expected.to_string(),
        found: found.type_name().to_string(),
    }
}

/// Raised when a selected handler meets a kind it cannot process.
pub(crate) fn unsupported(field: &FieldSchema) -> Error {
    Error::UnsupportedFieldType {
        type_name: field.owner().to_string(),
        field: field.name().to_string(),
        value_type: field.value_type().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit(vec![1, 2], 4), vec![1, 2, 0, 0]);
        assert_eq!(fit(vec![1, 2, 3, 4, 5], 3), vec![1, 2, 3]);
        assert!(fit(vec![], 0).is_empty());
    }
}
