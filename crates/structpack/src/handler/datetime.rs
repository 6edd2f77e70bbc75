// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Timestamp fields stored as epoch offsets.

use super::{is_plain, mismatch, FieldConverter, FieldResolver};
use crate::bytes::{bytes_to_int, int_to_bytes};
use crate::schema::{FieldDecl, FieldSchema};
use crate::types::{PrimitiveKind, Value};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Width at which a timestamp is stored in seconds instead of milliseconds.
const SECONDS_WIDTH: usize = 4;

/// Encodes `DateTime<Utc>` as a signed epoch offset in the field's byte order.
///
/// Milliseconds by default; a 4-byte field stores whole seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeCodec;

impl FieldConverter for DateTimeCodec {
    fn supports(&self, field: &FieldDecl, kind: PrimitiveKind) -> bool {
        is_plain(field) && kind == PrimitiveKind::DateTime
    }

    fn convert(&self, field: &FieldSchema, value: &Value) -> Result<Vec<u8>> {
        let raw = match value {
            Value::Null => 0,
            Value::DateTime(ts) if field.size() == SECONDS_WIDTH => ts.timestamp(),
            Value::DateTime(ts) => ts.timestamp_millis(),
            other => return Err(mismatch(field, "DateTime<Utc>", other)),
        };
        Ok(int_to_bytes(raw, (field.size() * 8) as u32, field.byte_order()))
    }
}

impl FieldResolver for DateTimeCodec {
    fn supports(&self, field: &FieldDecl, kind: PrimitiveKind) -> bool {
        is_plain(field) && kind == PrimitiveKind::DateTime
    }

    fn resolve(&self, field: &FieldSchema, data: &[u8], offset: usize) -> Result<Option<Value>> {
        let window = field.window(data, offset)?;
        let raw = bytes_to_int(window, field.byte_order(), true);
        let ts = if field.size() == SECONDS_WIDTH {
            DateTime::<Utc>::from_timestamp(raw, 0)
        } else {
            DateTime::<Utc>::from_timestamp_millis(raw)
        };
        ts.map(|ts| Some(Value::DateTime(ts))).ok_or_else(|| Error::ValueMismatch {
            field: field.name().to_string(),
            expected: "DateTime<Utc>".to_string(),
            found: format!("out-of-range timestamp {raw}"),
        })
    }
}
