// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::ValueType;
use std::fmt;

/// Wire kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Text,
    DateTime,
    Custom,
}

impl PrimitiveKind {
    /// Default size in bytes (None for Text and Custom, which must be sized explicitly).
    pub fn default_size(self) -> Option<usize> {
        match self {
            Self::Int8 => Some(1),
            Self::Int16 => Some(2),
            Self::Int32 | Self::Float32 => Some(4),
            Self::Int64 | Self::Float64 | Self::DateTime => Some(8),
            Self::Text | Self::Custom => None,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Exact matches, checked first.
const EXACT: &[(ValueType, PrimitiveKind)] = &[
    (ValueType::I8, PrimitiveKind::Int8),
    (ValueType::U8, PrimitiveKind::Int8),
    (ValueType::Bool, PrimitiveKind::Int8),
    (ValueType::I16, PrimitiveKind::Int16),
    (ValueType::U16, PrimitiveKind::Int16),
    (ValueType::I32, PrimitiveKind::Int32),
    (ValueType::U32, PrimitiveKind::Int32),
    (ValueType::I64, PrimitiveKind::Int64),
    (ValueType::U64, PrimitiveKind::Int64),
    (ValueType::F32, PrimitiveKind::Float32),
    (ValueType::F64, PrimitiveKind::Float64),
    (ValueType::String, PrimitiveKind::Text),
    (ValueType::DateTime, PrimitiveKind::DateTime),
];

/// Map a declared value type onto its primitive kind.
///
/// Exact matches win; an `Optional(T)` is assignable from `T` and classifies
/// as `T`; anything else is `Custom` and needs an explicit handler.
pub fn classify(value_type: &ValueType) -> PrimitiveKind {
    if let Some((_, kind)) = EXACT.iter().find(|(ty, _)| ty == value_type) {
        return *kind;
    }
    match value_type {
        ValueType::Optional(inner) => classify(inner),
        _ => PrimitiveKind::Custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_scalars() {
        assert_eq!(classify(&ValueType::I8), PrimitiveKind::Int8);
        assert_eq!(classify(&ValueType::Bool), PrimitiveKind::Int8);
        assert_eq!(classify(&ValueType::U16), PrimitiveKind::Int16);
        assert_eq!(classify(&ValueType::I32), PrimitiveKind::Int32);
        assert_eq!(classify(&ValueType::U64), PrimitiveKind::Int64);
        assert_eq!(classify(&ValueType::F32), PrimitiveKind::Float32);
        assert_eq!(classify(&ValueType::F64), PrimitiveKind::Float64);
        assert_eq!(classify(&ValueType::String), PrimitiveKind::Text);
        assert_eq!(classify(&ValueType::DateTime), PrimitiveKind::DateTime);
    }

    #[test]
    fn test_classify_optional_uses_inner() {
        let ty = ValueType::Optional(Box::new(ValueType::U32));
        assert_eq!(classify(&ty), PrimitiveKind::Int32);
        let nested = ValueType::Optional(Box::new(ValueType::Optional(Box::new(
            ValueType::String,
        ))));
        assert_eq!(classify(&nested), PrimitiveKind::Text);
    }

    #[test]
    fn test_classify_custom() {
        assert_eq!(classify(&ValueType::Bytes), PrimitiveKind::Custom);
        assert_eq!(
            classify(&ValueType::Custom("Coordinates")),
            PrimitiveKind::Custom
        );
    }

    #[test]
    fn test_default_sizes() {
        assert_eq!(PrimitiveKind::Int16.default_size(), Some(2));
        assert_eq!(PrimitiveKind::Float64.default_size(), Some(8));
        assert_eq!(PrimitiveKind::DateTime.default_size(), Some(8));
        assert_eq!(PrimitiveKind::Text.default_size(), None);
        assert_eq!(PrimitiveKind::Custom.default_size(), None);
    }
}
