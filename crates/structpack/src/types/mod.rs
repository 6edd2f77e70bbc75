// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field value model and primitive classification.
//!
//! - [`ValueType`]: the declared Rust-side type of a record field
//! - [`PrimitiveKind`]: the closed set of wire kinds a field maps onto
//! - [`Value`]: a typed value in flight between a record and its bytes
//! - [`FieldValue`]: conversion between concrete Rust types and [`Value`]

mod field_value;
mod kind;
mod value;

pub use field_value::{assign, FieldValue};
pub use kind::{classify, PrimitiveKind};
pub use value::{Value, ValueType};
