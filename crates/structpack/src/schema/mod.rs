// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record layouts: declarations in, validated schemas out, cached per type.
//!
//! # Example
//!
//! ```rust
//! use structpack::schema::{FieldDecl, SchemaBuilder, StructDecl};
//! use structpack::{CodecConfig, HandlerRegistry};
//! use std::any::TypeId;
//!
//! struct Header;
//!
//! let registry = HandlerRegistry::with_defaults();
//! let config = CodecConfig::default();
//! let schema = SchemaBuilder::new(&registry, &config)
//!     .build(
//!         TypeId::of::<Header>(),
//!         StructDecl::new("Header")
//!             .size(16)
//!             .field(FieldDecl::of::<u32>("magic"))
//!             .field(FieldDecl::of::<u32>("length")),
//!     )
//!     .unwrap();
//!
//! assert_eq!(schema.field("length").unwrap().offset(), 4);
//! assert_eq!(schema.total_size(), 16);
//! ```

mod builder;
mod cache;
mod decl;
mod field;
mod layout;

pub use builder::SchemaBuilder;
pub use cache::{LookupStats, SchemaCache};
pub use decl::{FieldDecl, StructDecl};
pub use field::FieldSchema;
pub use layout::StructSchema;
