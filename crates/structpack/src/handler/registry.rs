// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Capability registry for converters and resolvers.
//!
//! Read-mostly: lookups load an `ArcSwap` snapshot without locking, and
//! registration publishes a new snapshot via `rcu` with insert-if-absent
//! semantics. Registration order is preserved and drives auto-selection.

use super::{DateTimeCodec, FieldConverter, FieldResolver, PrimitiveCodec, RawBytesCodec};
use super::{DATETIME, PRIMITIVE, RAW_BYTES};
use crate::schema::FieldDecl;
use crate::types::PrimitiveKind;
use crate::{Error, Result};
use arc_swap::ArcSwap;
use std::sync::Arc;

struct Entry<H: ?Sized> {
    id: Arc<str>,
    handler: Arc<H>,
}

impl<H: ?Sized> Clone for Entry<H> {
    fn clone(&self) -> Self {
        Self {
            id: Arc::clone(&self.id),
            handler: Arc::clone(&self.handler),
        }
    }
}

type Table<H> = ArcSwap<Vec<Entry<H>>>;

/// A handler picked for one field, with the id it was registered under.
pub struct Selected<H: ?Sized> {
    pub id: Arc<str>,
    pub handler: Arc<H>,
}

/// Ordered tables of converters and resolvers keyed by capability id.
pub struct HandlerRegistry {
    converters: Table<dyn FieldConverter>,
    resolvers: Table<dyn FieldResolver>,
}

impl HandlerRegistry {
    /// Registry with no handlers.
    pub fn empty() -> Self {
        Self {
            converters: ArcSwap::from_pointee(Vec::new()),
            resolvers: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Registry with the built-in handlers: `primitive`, `datetime`, `raw-bytes`.
    pub fn with_defaults() -> Self {
        let registry = Self::empty();
        registry.register_codec(PRIMITIVE, PrimitiveCodec);
        registry.register_codec(DATETIME, DateTimeCodec);
        registry.register_codec(RAW_BYTES, RawBytesCodec);
        registry
    }

    /// Register a converter; returns `false` if `id` is already taken.
    pub fn register_converter(&self, id: &str, converter: Arc<dyn FieldConverter>) -> bool {
        let inserted = insert_if_absent(&self.converters, id, converter);
        if !inserted {
            log::warn!("[structpack] converter `{id}` already registered, keeping existing");
        }
        inserted
    }

    /// Register a resolver; returns `false` if `id` is already taken.
    pub fn register_resolver(&self, id: &str, resolver: Arc<dyn FieldResolver>) -> bool {
        let inserted = insert_if_absent(&self.resolvers, id, resolver);
        if !inserted {
            log::warn!("[structpack] resolver `{id}` already registered, keeping existing");
        }
        inserted
    }

    /// Register one handler as both converter and resolver under `id`.
    ///
    /// Returns `true` only if both tables accepted it.
    pub fn register_codec<H>(&self, id: &str, handler: H) -> bool
    where
        H: FieldConverter + FieldResolver + 'static,
    {
        let handler = Arc::new(handler);
        let converter: Arc<dyn FieldConverter> = handler.clone();
        let resolver: Arc<dyn FieldResolver> = handler;
        let c = self.register_converter(id, converter);
        let r = self.register_resolver(id, resolver);
        c && r
    }

    pub fn converter(&self, id: &str) -> Option<Arc<dyn FieldConverter>> {
        lookup(&self.converters, id)
    }

    pub fn resolver(&self, id: &str) -> Option<Arc<dyn FieldResolver>> {
        lookup(&self.resolvers, id)
    }

    /// Converter ids in registration order.
    pub fn converter_ids(&self) -> Vec<Arc<str>> {
        self.converters.load().iter().map(|e| Arc::clone(&e.id)).collect()
    }

    /// Resolver ids in registration order.
    pub fn resolver_ids(&self) -> Vec<Arc<str>> {
        self.resolvers.load().iter().map(|e| Arc::clone(&e.id)).collect()
    }

    /// Pick the converter for a field.
    pub fn select_converter(
        &self,
        type_name: &str,
        field: &FieldDecl,
        kind: PrimitiveKind,
    ) -> Result<Selected<dyn FieldConverter>> {
        select(
            &self.converters,
            "converter",
            field.converter_id(),
            type_name,
            field,
            kind,
            |c| c.supports(field, kind),
        )
    }

    /// Pick the resolver for a field.
    pub fn select_resolver(
        &self,
        type_name: &str,
        field: &FieldDecl,
        kind: PrimitiveKind,
    ) -> Result<Selected<dyn FieldResolver>> {
        select(
            &self.resolvers,
            "resolver",
            field.resolver_id(),
            type_name,
            field,
            kind,
            |r| r.supports(field, kind),
        )
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("converters", &self.converter_ids())
            .field("resolvers", &self.resolver_ids())
            .finish()
    }
}

fn insert_if_absent<H: ?Sized>(table: &Table<H>, id: &str, handler: Arc<H>) -> bool {
    let mut inserted = false;
    table.rcu(|current| {
        let mut next: Vec<Entry<H>> = current.iter().cloned().collect();
        inserted = !next.iter().any(|e| &*e.id == id);
        if inserted {
            next.push(Entry {
                id: Arc::from(id),
                handler: Arc::clone(&handler),
            });
        }
        next
    });
    inserted
}

fn lookup<H: ?Sized>(table: &Table<H>, id: &str) -> Option<Arc<H>> {
    table
        .load()
        .iter()
        .find(|e| &*e.id == id)
        .map(|e| Arc::clone(&e.handler))
}

/// Selection order: explicit override (must support the field), then the
/// first registered handler that supports it. Custom kinds are never
/// auto-selected.
fn select<H: ?Sized>(
    table: &Table<H>,
    role: &str,
    explicit: Option<&str>,
    type_name: &str,
    field: &FieldDecl,
    kind: PrimitiveKind,
    supports: impl Fn(&H) -> bool,
) -> Result<Selected<H>> {
    let unsupported = || Error::UnsupportedFieldType {
        type_name: type_name.to_string(),
        field: field.name().to_string(),
        value_type: field.value_type().to_string(),
    };

    let entries = table.load();

    if let Some(id) = explicit {
        let entry = entries.iter().find(|e| &*e.id == id).ok_or_else(|| {
            Error::configuration(
                type_name,
                format!("{role} `{id}` for field `{}` is not registered", field.name()),
            )
        })?;
        if !supports(&*entry.handler) {
            return Err(unsupported());
        }
        return Ok(Selected {
            id: Arc::clone(&entry.id),
            handler: Arc::clone(&entry.handler),
        });
    }

    if kind == PrimitiveKind::Custom {
        return Err(unsupported());
    }

    entries
        .iter()
        .find(|e| supports(&*e.handler))
        .map(|e| Selected {
            id: Arc::clone(&e.id),
            handler: Arc::clone(&e.handler),
        })
        .ok_or_else(unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSchema;
    use crate::types::{Value, ValueType};

    struct Fixed(u8);

    impl FieldConverter for Fixed {
        fn supports(&self, _field: &FieldDecl, kind: PrimitiveKind) -> bool {
            kind == PrimitiveKind::Int8
        }

        fn convert(&self, field: &FieldSchema, _value: &Value) -> Result<Vec<u8>> {
            Ok(vec![self.0; field.size()])
        }
    }

    #[test]
    fn test_defaults_registered_in_order() {
        let registry = HandlerRegistry::with_defaults();
        let ids: Vec<String> = registry
            .converter_ids()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(ids, ["primitive", "datetime", "raw-bytes"]);
        assert_eq!(registry.resolver_ids().len(), 3);
    }

    #[test]
    fn test_register_is_insert_if_absent() {
        let registry = HandlerRegistry::empty();
        assert!(registry.register_converter("fixed", Arc::new(Fixed(1))));
        assert!(!registry.register_converter("fixed", Arc::new(Fixed(2))));
        assert_eq!(registry.converter_ids().len(), 1);
        assert!(registry.converter("fixed").is_some());
        assert!(registry.converter("missing").is_none());
    }

    #[test]
    fn test_auto_selection_uses_first_supporting() {
        let registry = HandlerRegistry::empty();
        registry.register_converter("fixed", Arc::new(Fixed(1)));
        registry.register_codec(PRIMITIVE, PrimitiveCodec);

        let byte_field = FieldDecl::of::<u8>("b");
        let selected = registry
            .select_converter("T", &byte_field, PrimitiveKind::Int8)
            .unwrap();
        assert_eq!(&*selected.id, "fixed");

        let word_field = FieldDecl::of::<u16>("w");
        let selected = registry
            .select_converter("T", &word_field, PrimitiveKind::Int16)
            .unwrap();
        assert_eq!(&*selected.id, PRIMITIVE);
    }

    #[test]
    fn test_explicit_override_wins() {
        let registry = HandlerRegistry::with_defaults();
        registry.register_converter("fixed", Arc::new(Fixed(9)));
        let field = FieldDecl::of::<u8>("b").converter("fixed");
        let selected = registry
            .select_converter("T", &field, PrimitiveKind::Int8)
            .unwrap();
        assert_eq!(&*selected.id, "fixed");
    }

    #[test]
    fn test_explicit_override_must_support_field() {
        let registry = HandlerRegistry::with_defaults();
        let field = FieldDecl::of::<u32>("n").converter(DATETIME);
        let err = registry
            .select_converter("T", &field, PrimitiveKind::Int32)
            .err()
            .unwrap();
        assert!(matches!(err, Error::UnsupportedFieldType { .. }));
    }

    #[test]
    fn test_unknown_override_is_configuration_error() {
        let registry = HandlerRegistry::with_defaults();
        let field = FieldDecl::of::<u32>("n").resolver("nope");
        let err = registry
            .select_resolver("T", &field, PrimitiveKind::Int32)
            .err()
            .unwrap();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_custom_kind_needs_override() {
        let registry = HandlerRegistry::with_defaults();
        let field = FieldDecl::new("blob", ValueType::Bytes).size(4);
        let err = registry
            .select_converter("T", &field, PrimitiveKind::Custom)
            .err()
            .unwrap();
        assert_eq!(
            err,
            Error::UnsupportedFieldType {
                type_name: "T".into(),
                field: "blob".into(),
                value_type: "Vec<u8>".into(),
            }
        );

        let field = field.codec(RAW_BYTES);
        assert!(registry
            .select_converter("T", &field, PrimitiveKind::Custom)
            .is_ok());
        assert!(registry
            .select_resolver("T", &field, PrimitiveKind::Custom)
            .is_ok());
    }

    #[test]
    fn test_concurrent_registration_keeps_one_entry() {
        let registry = Arc::new(HandlerRegistry::empty());
        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.register_converter("fixed", Arc::new(Fixed(i))))
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|inserted| *inserted)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(registry.converter_ids().len(), 1);
    }
}
