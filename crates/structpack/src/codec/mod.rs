// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec engine: records to fixed-size buffers and back.
//!
//! A [`StructCodec`] owns a handler registry, a schema cache and the codec
//! defaults. Most callers use the process-wide [`StructCodec::global`]
//! through [`crate::pack`] and [`crate::unpack`]; build a private codec when
//! you need custom handlers or defaults that must not leak into other users.
//!
//! # Example
//!
//! ```rust
//! use structpack::{ByteOrder, CodecConfig, Struct, StructCodec};
//!
//! #[derive(Struct, Default, Debug, PartialEq)]
//! struct Sample {
//!     id: u16,
//!     level: i8,
//! }
//!
//! let codec = StructCodec::with_config(CodecConfig::default().with_byte_order(ByteOrder::Little));
//! let bytes = codec.pack(&Sample { id: 0x0102, level: -1 }).unwrap();
//! assert_eq!(bytes, [0x02, 0x01, 0xFF]);
//!
//! let back: Sample = codec.unpack(&bytes).unwrap();
//! assert_eq!(back, Sample { id: 0x0102, level: -1 });
//! ```

mod engine;

use crate::config::CodecConfig;
use crate::handler::HandlerRegistry;
use crate::record::Struct;
use crate::schema::{SchemaBuilder, SchemaCache, StructSchema};
use crate::{Error, Result};
use std::any::TypeId;
use std::sync::{Arc, OnceLock};

static GLOBAL_CODEC: OnceLock<StructCodec> = OnceLock::new();

#[derive(Debug, Default)]
pub struct StructCodec {
    registry: HandlerRegistry,
    cache: SchemaCache,
    config: CodecConfig,
}

impl StructCodec {
    /// Codec with the built-in handlers and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self::with_registry(HandlerRegistry::with_defaults(), config)
    }

    /// Codec over a caller-assembled registry.
    pub fn with_registry(registry: HandlerRegistry, config: CodecConfig) -> Self {
        Self {
            registry,
            cache: SchemaCache::new(),
            config,
        }
    }

    /// Process-wide codec, configured from the environment on first use.
    ///
    /// Invalid `STRUCTPACK_*` values are logged and the defaults used.
    pub fn global() -> &'static StructCodec {
        GLOBAL_CODEC.get_or_init(|| {
            let config = CodecConfig::from_env().unwrap_or_else(|err| {
                log::warn!("[structpack] {err}, using default codec configuration");
                CodecConfig::default()
            });
            log::debug!("[structpack] global codec initialised with {config:?}");
            StructCodec::with_config(config)
        })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Handlers registered after a schema was built do not affect it.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &SchemaCache {
        &self.cache
    }

    /// Resolved layout of `T`, built on first request.
    pub fn schema<T: Struct>(&self) -> Result<Arc<StructSchema>> {
        self.cache.get_or_build(TypeId::of::<T>(), || {
            SchemaBuilder::new(&self.registry, &self.config).build_for::<T>()
        })
    }

    /// Encode `record` into a fresh buffer of exactly the record size.
    pub fn pack<T: Struct>(&self, record: &T) -> Result<Vec<u8>> {
        let schema = self.schema::<T>()?;
        let mut buf = vec![0u8; schema.total_size()];
        engine::write_record(&schema, record, &mut buf)?;
        Ok(buf)
    }

    /// Encode into the front of `buf`; returns the number of bytes written.
    pub fn pack_into<T: Struct>(&self, record: &T, buf: &mut [u8]) -> Result<usize> {
        let schema = self.schema::<T>()?;
        let size = schema.total_size();
        let available = buf.len();
        let target = buf.get_mut(..size).ok_or(Error::InsufficientData {
            required: size,
            available,
        })?;
        target.fill(0);
        engine::write_record(&schema, record, target)?;
        Ok(size)
    }

    pub fn unpack<T: Struct>(&self, bytes: &[u8]) -> Result<T> {
        self.unpack_at(bytes, 0)
    }

    /// Decode one record whose first byte is `bytes[start]`.
    pub fn unpack_at<T: Struct>(&self, bytes: &[u8], start: usize) -> Result<T> {
        let schema = self.schema::<T>()?;
        engine::read_record(&schema, bytes, start)
    }

    /// Decode back-to-back records. A trailing partial record is ignored.
    pub fn unpack_all<T: Struct>(&self, bytes: &[u8]) -> Result<Vec<T>> {
        let schema = self.schema::<T>()?;
        let size = schema.total_size();
        if size == 0 {
            return Ok(Vec::new());
        }
        (0..bytes.len() / size)
            .map(|i| engine::read_record(&schema, bytes, i * size))
            .collect()
    }
}
