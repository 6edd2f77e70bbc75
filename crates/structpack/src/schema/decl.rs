// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record-type declarations: the input of the schema builder.
//!
//! A declaration is an ordered list of fields plus optional record-level
//! settings. Order is load-bearing: it fixes the byte offsets.

use crate::bytes::ByteOrder;
use crate::types::{FieldValue, ValueType};

/// Declaration of a whole record type.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub(crate) name: String,
    pub(crate) size: usize,
    pub(crate) charset: Option<String>,
    pub(crate) byte_order: Option<ByteOrder>,
    pub(crate) fields: Vec<FieldDecl>,
}

impl StructDecl {
    /// Start a declaration for the record type called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            charset: None,
            byte_order: None,
            fields: Vec::new(),
        }
    }

    /// Explicit total size; the effective size is the max of this and the field sum.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Charset for text fields that do not name their own.
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Byte order for fields that do not name their own.
    pub fn order(mut self, order: ByteOrder) -> Self {
        self.byte_order = Some(order);
        self
    }

    /// Append a field.
    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_size(&self) -> usize {
        self.size
    }

    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }
}

/// Declaration of a single field, with optional per-field overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub(crate) name: String,
    pub(crate) value_type: ValueType,
    pub(crate) size: usize,
    pub(crate) byte_order: Option<ByteOrder>,
    pub(crate) charset: Option<String>,
    pub(crate) converter: Option<String>,
    pub(crate) resolver: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            size: 0,
            byte_order: None,
            charset: None,
            converter: None,
            resolver: None,
        }
    }

    /// Declare a field whose type is the Rust type `T`.
    pub fn of<T: FieldValue>(name: impl Into<String>) -> Self {
        Self::new(name, T::value_type())
    }

    /// Byte length in the buffer; `0` means the kind's default size.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn order(mut self, order: ByteOrder) -> Self {
        self.byte_order = Some(order);
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Name the converter capability explicitly.
    pub fn converter(mut self, id: impl Into<String>) -> Self {
        self.converter = Some(id.into());
        self
    }

    /// Name the resolver capability explicitly.
    pub fn resolver(mut self, id: impl Into<String>) -> Self {
        self.resolver = Some(id.into());
        self
    }

    /// Name both converter and resolver.
    pub fn codec(self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.converter(id.clone()).resolver(id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    pub fn declared_size(&self) -> usize {
        self.size
    }

    pub fn byte_order(&self) -> Option<ByteOrder> {
        self.byte_order
    }

    pub fn charset_name(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    pub fn converter_id(&self) -> Option<&str> {
        self.converter.as_deref()
    }

    pub fn resolver_id(&self) -> Option<&str> {
        self.resolver.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_declaration_order() {
        let decl = StructDecl::new("Header")
            .size(16)
            .field(FieldDecl::of::<u16>("magic"))
            .field(FieldDecl::of::<u32>("length").order(ByteOrder::Little))
            .field(FieldDecl::of::<String>("tag").size(6).charset("US-ASCII"));

        let names: Vec<_> = decl.fields().iter().map(FieldDecl::name).collect();
        assert_eq!(names, ["magic", "length", "tag"]);
        assert_eq!(decl.declared_size(), 16);
        assert_eq!(decl.fields()[1].byte_order(), Some(ByteOrder::Little));
        assert_eq!(decl.fields()[2].charset_name(), Some("US-ASCII"));
    }

    #[test]
    fn test_codec_sets_both_handlers() {
        let field = FieldDecl::of::<Vec<u8>>("payload").size(4).codec("raw-bytes");
        assert_eq!(field.converter_id(), Some("raw-bytes"));
        assert_eq!(field.resolver_id(), Some("raw-bytes"));
        assert_eq!(field.value_type(), &ValueType::Bytes);
    }
}
