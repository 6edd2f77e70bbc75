// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The resolved, immutable layout of one record type.

use super::FieldSchema;
use crate::handler::{FieldConverter, FieldResolver};
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// Handlers memoised for one field at build time.
#[derive(Clone)]
pub(crate) struct Binding {
    pub(crate) converter: Arc<dyn FieldConverter>,
    pub(crate) resolver: Arc<dyn FieldResolver>,
}

/// Ordered field layout plus total size for one record type.
///
/// Equality compares layout only (type, fields, sizes); the bound handler
/// instances are not part of it.
#[derive(Clone)]
pub struct StructSchema {
    pub(crate) type_id: TypeId,
    pub(crate) type_name: Arc<str>,
    pub(crate) fields: Vec<FieldSchema>,
    pub(crate) bindings: Vec<Binding>,
    pub(crate) declared_size: usize,
    pub(crate) total_size: usize,
}

impl StructSchema {
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Fields in declaration order, i.e. in offset order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The record-level size as declared (0 if none).
    pub fn declared_size(&self) -> usize {
        self.declared_size
    }

    /// `max(declared size, sum of field sizes)`; the exact buffer length.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Bytes past the last field reserved by the declared size.
    pub fn padding(&self) -> usize {
        self.total_size - self.fields_size()
    }

    fn fields_size(&self) -> usize {
        self.fields.last().map_or(0, |f| f.offset() + f.size())
    }

    pub(crate) fn bound(&self) -> impl Iterator<Item = (&FieldSchema, &Binding)> {
        self.fields.iter().zip(self.bindings.iter())
    }
}

impl PartialEq for StructSchema {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
            && self.fields == other.fields
            && self.declared_size == other.declared_size
            && self.total_size == other.total_size
    }
}

impl Eq for StructSchema {}

impl fmt::Debug for StructSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructSchema")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("declared_size", &self.declared_size)
            .field("total_size", &self.total_size)
            .finish()
    }
}
