// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::{fit, mismatch, FieldConverter, FieldResolver};
use crate::schema::{FieldDecl, FieldSchema};
use crate::types::{PrimitiveKind, Value, ValueType};
use crate::Result;

/// Opaque `Vec<u8>` fields, copied verbatim and zero-padded to size.
///
/// Never picked automatically; name it with `codec = "raw-bytes"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawBytesCodec;

fn handles(field: &FieldDecl, kind: PrimitiveKind) -> bool {
    kind == PrimitiveKind::Custom && *field.value_type() == ValueType::Bytes
}

impl FieldConverter for RawBytesCodec {
    fn supports(&self, field: &FieldDecl, kind: PrimitiveKind) -> bool {
        handles(field, kind)
    }

    fn convert(&self, field: &FieldSchema, value: &Value) -> Result<Vec<u8>> {
        match value {
            Value::Null => Ok(vec![0; field.size()]),
            Value::Bytes(bytes) => Ok(fit(bytes.clone(), field.size())),
            other => Err(mismatch(field, "Vec<u8>", other)),
        }
    }
}

impl FieldResolver for RawBytesCodec {
    fn supports(&self, field: &FieldDecl, kind: PrimitiveKind) -> bool {
        handles(field, kind)
    }

    fn resolve(&self, field: &FieldSchema, data: &[u8], offset: usize) -> Result<Option<Value>> {
        let window = field.window(data, offset)?;
        Ok(Some(Value::Bytes(window.to_vec())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::ByteOrder;
    use crate::charset::Charset;

    fn field() -> FieldSchema {
        FieldSchema::detached(
            "blob",
            ValueType::Bytes,
            PrimitiveKind::Custom,
            4,
            ByteOrder::Big,
            Charset::Utf8,
        )
    }

    #[test]
    fn test_only_byte_vectors_supported() {
        let bytes = FieldDecl::new("b", ValueType::Bytes);
        let custom = FieldDecl::new("c", ValueType::Custom("Point"));
        assert!(FieldConverter::supports(&RawBytesCodec, &bytes, PrimitiveKind::Custom));
        assert!(!FieldConverter::supports(&RawBytesCodec, &custom, PrimitiveKind::Custom));
        assert!(!FieldResolver::supports(&RawBytesCodec, &bytes, PrimitiveKind::Int8));
    }

    #[test]
    fn test_pad_truncate_and_copy_back() {
        let f = field();
        assert_eq!(
            RawBytesCodec.convert(&f, &Value::Bytes(vec![1, 2])).unwrap(),
            vec![1, 2, 0, 0]
        );
        assert_eq!(
            RawBytesCodec.convert(&f, &Value::Bytes(vec![1, 2, 3, 4, 5])).unwrap(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            RawBytesCodec.resolve(&f, &[9, 1, 2, 3, 4], 1).unwrap(),
            Some(Value::Bytes(vec![1, 2, 3, 4]))
        );
    }
}
