// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Integer, floating point and text fields.

use super::{fit, is_plain, mismatch, unsupported, FieldConverter, FieldResolver};
use crate::bytes::{bytes_to_int, bytes_to_uint, int_to_bytes};
use crate::schema::{FieldDecl, FieldSchema};
use crate::types::{PrimitiveKind, Value};
use crate::Result;

/// Default handler for numeric and text kinds.
///
/// - Integers use the field's byte order and size; signedness follows the
///   declared Rust type. A value wider than the field is truncated.
/// - Floats are stored as their IEEE-754 bit pattern.
/// - Text is charset-encoded, then truncated or zero-padded to the field
///   size; decoding strips trailing NUL units.
/// - A null value encodes as zeros.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimitiveCodec;

fn handles(kind: PrimitiveKind) -> bool {
    kind.is_integer() || kind.is_float() || kind == PrimitiveKind::Text
}

impl FieldConverter for PrimitiveCodec {
    fn supports(&self, field: &FieldDecl, kind: PrimitiveKind) -> bool {
        is_plain(field) && handles(kind)
    }

    fn convert(&self, field: &FieldSchema, value: &Value) -> Result<Vec<u8>> {
        if value.is_null() {
            return Ok(vec![0; field.size()]);
        }
        let bits = (field.size() * 8) as u32;
        match field.kind() {
            kind if kind.is_integer() => {
                let raw = value
                    .as_i64()
                    .ok_or_else(|| mismatch(field, "integer", value))?;
                Ok(int_to_bytes(raw, bits, field.byte_order()))
            }
            PrimitiveKind::Float32 => match value {
                Value::F32(v) => Ok(int_to_bytes(
                    i64::from(v.to_bits()),
                    bits,
                    field.byte_order(),
                )),
                other => Err(mismatch(field, "f32", other)),
            },
            PrimitiveKind::Float64 => {
                let v = value.as_f64().ok_or_else(|| mismatch(field, "f64", value))?;
                Ok(int_to_bytes(v.to_bits() as i64, bits, field.byte_order()))
            }
            PrimitiveKind::Text => {
                let text = value
                    .as_str()
                    .ok_or_else(|| mismatch(field, "text", value))?;
                Ok(fit(field.charset().encode(text), field.size()))
            }
            _ => Err(unsupported(field)),
        }
    }
}

impl FieldResolver for PrimitiveCodec {
    fn supports(&self, field: &FieldDecl, kind: PrimitiveKind) -> bool {
        is_plain(field) && handles(kind)
    }

    fn resolve(&self, field: &FieldSchema, data: &[u8], offset: usize) -> Result<Option<Value>> {
        let window = field.window(data, offset)?;
        let order = field.byte_order();
        let value = match field.kind() {
            kind if kind.is_integer() => {
                let raw = bytes_to_int(window, order, field.value_type().is_signed());
                Value::from_i64(raw, field.value_type()).ok_or_else(|| unsupported(field))?
            }
            PrimitiveKind::Float32 => Value::F32(f32::from_bits(bytes_to_uint(window, order) as u32)),
            PrimitiveKind::Float64 => Value::F64(f64::from_bits(bytes_to_uint(window, order))),
            PrimitiveKind::Text => Value::Text(decode_text(field, window)),
            _ => return Err(unsupported(field)),
        };
        Ok(Some(value))
    }
}

fn decode_text(field: &FieldSchema, window: &[u8]) -> String {
    let charset = field.charset();
    let unit = charset.unit_width();
    let mut end = window.len() - window.len() % unit;
    while end >= unit && window[end - unit..end].iter().all(|&b| b == 0) {
        end -= unit;
    }
    charset.decode(&window[..end])
}
