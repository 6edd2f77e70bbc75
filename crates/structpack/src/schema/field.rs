// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::bytes::ByteOrder;
use crate::charset::Charset;
use crate::types::{PrimitiveKind, ValueType};
use crate::{Error, Result};
use std::sync::Arc;

/// Resolved layout of one field. Immutable once its schema is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub(crate) owner: Arc<str>,
    pub(crate) name: String,
    pub(crate) index: usize,
    pub(crate) value_type: ValueType,
    pub(crate) kind: PrimitiveKind,
    pub(crate) size: usize,
    pub(crate) offset: usize,
    pub(crate) byte_order: ByteOrder,
    pub(crate) charset: Charset,
    pub(crate) converter_id: Arc<str>,
    pub(crate) resolver_id: Arc<str>,
}

impl FieldSchema {
    /// A field outside any record, at offset 0 and with no handlers bound.
    ///
    /// Meant for exercising a converter or resolver in isolation.
    pub fn detached(
        name: impl Into<String>,
        value_type: ValueType,
        kind: PrimitiveKind,
        size: usize,
        byte_order: ByteOrder,
        charset: Charset,
    ) -> Self {
        Self {
            owner: Arc::from(""),
            name: name.into(),
            index: 0,
            value_type,
            kind,
            size,
            offset: 0,
            byte_order,
            charset,
            converter_id: Arc::from(""),
            resolver_id: Arc::from(""),
        }
    }

    /// Name of the record type the field belongs to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the record declaration.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Byte offset from the start of the record.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn converter_id(&self) -> &str {
        &self.converter_id
    }

    pub fn resolver_id(&self) -> &str {
        &self.resolver_id
    }

    /// The `size` bytes of `data` starting at absolute position `at`.
    pub fn window<'a>(&self, data: &'a [u8], at: usize) -> Result<&'a [u8]> {
        let end = at.saturating_add(self.size);
        data.get(at..end).ok_or(Error::InsufficientData {
            required: end,
            available: data.len(),
        })
    }
}
