// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record-type registration.

use crate::schema::StructDecl;
use crate::types::Value;
use crate::Result;

/// A record type with a fixed binary layout.
///
/// Usually derived:
///
/// ```rust
/// use structpack::Struct;
///
/// #[derive(Struct, Default, Debug, PartialEq)]
/// #[structpack(size = 12)]
/// struct Reading {
///     sensor: u16,
///     #[structpack(order = "little")]
///     value: i32,
///     #[structpack(size = 4)]
///     unit: String,
/// }
///
/// let bytes = structpack::pack(&Reading { sensor: 7, value: -2, unit: "mV".into() }).unwrap();
/// assert_eq!(bytes.len(), 12);
/// assert_eq!(&bytes[..6], &[0x00, 0x07, 0xFE, 0xFF, 0xFF, 0xFF]);
/// ```
///
/// Field indices passed to [`field_value`](Struct::field_value) and
/// [`set_field_value`](Struct::set_field_value) are positions in the
/// declaration returned by [`declare`](Struct::declare).
pub trait Struct: Sized + 'static {
    /// Ordered field declarations and record-level settings.
    fn declare() -> StructDecl;

    /// Construct an empty instance; `None` if the type has no such capability.
    fn instantiate() -> Option<Self>;

    /// Read the field at `index`.
    fn field_value(&self, index: usize) -> Result<Value>;

    /// Assign the field at `index`.
    fn set_field_value(&mut self, index: usize, value: Value) -> Result<()>;
}
