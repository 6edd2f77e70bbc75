// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Turns a [`StructDecl`] into a validated [`StructSchema`].
//!
//! Runs once per record type, off the pack/unpack path. Every configuration
//! problem is reported here so a malformed type fails early and exactly once:
//!
//! - text and custom fields need an explicit size > 0
//! - integer and timestamp fields are 1..=8 bytes, floats their native width
//! - field names are unique
//! - charset names are known
//! - `Option<T>` fields name both a converter and a resolver, since a fixed
//!   layout has no presence bit of its own
//! - every field gets a converter and a resolver from the registry

use super::layout::Binding;
use super::{FieldDecl, FieldSchema, StructDecl, StructSchema};
use crate::charset::Charset;
use crate::config::CodecConfig;
use crate::handler::HandlerRegistry;
use crate::record::Struct;
use crate::types::{classify, PrimitiveKind};
use crate::{Error, Result};
use std::any::TypeId;
use std::collections::HashSet;
use std::sync::Arc;

/// Resolves declarations against a handler registry and codec defaults.
pub struct SchemaBuilder<'a> {
    registry: &'a HandlerRegistry,
    config: &'a CodecConfig,
}

impl<'a> SchemaBuilder<'a> {
    pub fn new(registry: &'a HandlerRegistry, config: &'a CodecConfig) -> Self {
        Self { registry, config }
    }

    /// Build the schema of record type `T`.
    pub fn build_for<T: Struct>(&self) -> Result<StructSchema> {
        self.build(TypeId::of::<T>(), T::declare())
    }

    /// Build a schema from an explicit declaration, identified by `type_id`.
    pub fn build(&self, type_id: TypeId, decl: StructDecl) -> Result<StructSchema> {
        let type_name: Arc<str> = Arc::from(decl.name.as_str());
        let record_charset = match decl.charset.as_deref() {
            Some(name) => charset(&type_name, name)?,
            None => self.config.default_charset,
        };
        let record_order = decl.byte_order.unwrap_or(self.config.default_byte_order);

        let mut seen = HashSet::with_capacity(decl.fields.len());
        let mut fields = Vec::with_capacity(decl.fields.len());
        let mut bindings = Vec::with_capacity(decl.fields.len());
        let mut offset = 0usize;

        for (index, decl_field) in decl.fields.iter().enumerate() {
            if !seen.insert(decl_field.name()) {
                return Err(Error::configuration(
                    &type_name,
                    format!("duplicate field `{}`", decl_field.name()),
                ));
            }

            if decl_field.value_type().is_optional()
                && (decl_field.converter_id().is_none() || decl_field.resolver_id().is_none())
            {
                return Err(Error::configuration(
                    &type_name,
                    format!(
                        "optional field `{}` needs an explicit presence-aware codec",
                        decl_field.name()
                    ),
                ));
            }

            let kind = classify(decl_field.value_type());
            let size = field_size(&type_name, decl_field, kind)?;
            let field_charset = match decl_field.charset_name() {
                Some(name) => charset(&type_name, name)?,
                None => record_charset,
            };
            let byte_order = decl_field.byte_order().unwrap_or(record_order);

            let converter = self
                .registry
                .select_converter(&type_name, decl_field, kind)?;
            let resolver = self
                .registry
                .select_resolver(&type_name, decl_field, kind)?;

            fields.push(FieldSchema {
                owner: Arc::clone(&type_name),
                name: decl_field.name().to_string(),
                index,
                value_type: decl_field.value_type().clone(),
                kind,
                size,
                offset,
                byte_order,
                charset: field_charset,
                converter_id: converter.id,
                resolver_id: resolver.id,
            });
            bindings.push(Binding {
                converter: converter.handler,
                resolver: resolver.handler,
            });

            offset = offset
                .checked_add(size)
                .ok_or_else(|| Error::configuration(&type_name, "record size overflows usize"))?;
        }

        let total_size = decl.size.max(offset);
        log::debug!(
            "[structpack] built schema {}: {} fields, {} bytes ({} declared)",
            type_name,
            fields.len(),
            total_size,
            decl.size
        );

        Ok(StructSchema {
            type_id,
            type_name,
            fields,
            bindings,
            declared_size: decl.size,
            total_size,
        })
    }
}

fn charset(type_name: &str, name: &str) -> Result<Charset> {
    Charset::from_name(name)
        .ok_or_else(|| Error::configuration(type_name, format!("unknown charset `{name}`")))
}

/// Effective size of a field, validated against its kind.
fn field_size(type_name: &str, field: &FieldDecl, kind: PrimitiveKind) -> Result<usize> {
    let size = match (field.declared_size(), kind.default_size()) {
        (0, Some(default)) => default,
        (0, None) if kind == PrimitiveKind::Text => {
            return Err(Error::configuration(
                type_name,
                format!("text field `{}` requires an explicit size", field.name()),
            ))
        }
        (0, None) => {
            return Err(Error::configuration(
                type_name,
                format!(
                    "field `{}` of type {} requires an explicit size",
                    field.name(),
                    field.value_type()
                ),
            ))
        }
        (declared, _) => declared,
    };

    let allowed = match kind {
        PrimitiveKind::Float32 => size == 4,
        PrimitiveKind::Float64 => size == 8,
        k if k.is_integer() || k == PrimitiveKind::DateTime => (1..=8).contains(&size),
        _ => true,
    };
    if !allowed {
        return Err(Error::configuration(
            type_name,
            format!("field `{}` cannot be {size} bytes wide as {kind}", field.name()),
        ));
    }
    Ok(size)
}
