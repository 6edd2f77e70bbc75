// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-record pack/unpack loops over a resolved schema.
//!
//! No locks and no shared state: everything needed was memoised in the
//! schema when it was built.

use crate::record::Struct;
use crate::schema::StructSchema;
use crate::{Error, Result};

/// Encode `record` into `buf`, which must be exactly `schema.total_size()`
/// bytes and already zeroed.
pub(crate) fn write_record<T: Struct>(schema: &StructSchema, record: &T, buf: &mut [u8]) -> Result<()> {
    debug_assert_eq!(buf.len(), schema.total_size());

    for (field, binding) in schema.bound() {
        let value = record.field_value(field.index())?;
        let encoded = binding.converter.convert(field, &value)?;
        if encoded.len() != field.size() {
            return Err(Error::EncodingSizeMismatch {
                field: field.name().to_string(),
                expected: field.size(),
                actual: encoded.len(),
            });
        }
        buf[field.offset()..field.offset() + field.size()].copy_from_slice(&encoded);
    }
    Ok(())
}

/// Decode one record starting at `start`.
pub(crate) fn read_record<T: Struct>(schema: &StructSchema, bytes: &[u8], start: usize) -> Result<T> {
    let available = bytes.len().saturating_sub(start);
    if available < schema.total_size() {
        return Err(Error::InsufficientData {
            required: schema.total_size(),
            available,
        });
    }

    let mut record =
        T::instantiate().ok_or_else(|| Error::UninstantiableType(schema.type_name().to_string()))?;

    for (field, binding) in schema.bound() {
        // None leaves the field at its default
        if let Some(value) = binding.resolver.resolve(field, bytes, start + field.offset())? {
            record.set_field_value(field.index(), value)?;
        }
    }
    Ok(record)
}
