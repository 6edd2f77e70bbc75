// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declared value types and dynamic values.

use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Declared Rust-side type of a record field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    String,
    DateTime,
    /// Opaque byte array (`Vec<u8>`).
    Bytes,
    /// `Option<T>`; needs a presence-aware application codec.
    Optional(Box<ValueType>),
    /// Application-defined type, identified by name.
    Custom(&'static str),
}

impl ValueType {
    /// Strip any `Optional` wrappers.
    pub fn base(&self) -> &ValueType {
        match self {
            ValueType::Optional(inner) => inner.base(),
            other => other,
        }
    }

    /// True for signed integer types (after stripping `Optional`).
    pub fn is_signed(&self) -> bool {
        matches!(
            self.base(),
            ValueType::I8 | ValueType::I16 | ValueType::I32 | ValueType::I64
        )
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, ValueType::Optional(_))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Optional(inner) => write!(f, "Option<{inner}>"),
            ValueType::Custom(name) => f.write_str(name),
            ValueType::String => f.write_str("String"),
            ValueType::DateTime => f.write_str("DateTime<Utc>"),
            ValueType::Bytes => f.write_str("Vec<u8>"),
            other => {
                let name = format!("{other:?}");
                f.write_str(&name.to_ascii_lowercase())
            }
        }
    }
}

/// Typed value carried between a record field and its handler.
#[derive(Clone)]
pub enum Value {
    /// Absent optional value.
    Null,
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Text(String),
    DateTime(DateTime<Utc>),
    Bytes(Vec<u8>),
    /// Application value handled by a custom converter/resolver.
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wrap an application value.
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Value::Custom(Arc::new(value))
    }

    /// Borrow a custom payload as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(any) => any.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Integer view (bools as 0/1, unsigned values reinterpreted).
    pub fn as_i64(&self) -> Option<i64> {
        Some(match *self {
            Value::Bool(v) => i64::from(v),
            Value::I8(v) => i64::from(v),
            Value::U8(v) => i64::from(v),
            Value::I16(v) => i64::from(v),
            Value::U16(v) => i64::from(v),
            Value::I32(v) => i64::from(v),
            Value::U32(v) => i64::from(v),
            Value::I64(v) => v,
            Value::U64(v) => v as i64,
            _ => return None,
        })
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(v) => Some(f64::from(v)),
            Value::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Narrow a decoded integer to the variant matching `value_type`.
    ///
    /// Truncates like an `as` cast; `None` for non-integer types.
    pub fn from_i64(raw: i64, value_type: &ValueType) -> Option<Self> {
        Some(match value_type.base() {
            ValueType::Bool => Value::Bool(raw != 0),
            ValueType::I8 => Value::I8(raw as i8),
            ValueType::U8 => Value::U8(raw as u8),
            ValueType::I16 => Value::I16(raw as i16),
            ValueType::U16 => Value::U16(raw as u16),
            ValueType::I32 => Value::I32(raw as i32),
            ValueType::U32 => Value::U32(raw as u32),
            ValueType::I64 => Value::I64(raw),
            ValueType::U64 => Value::U64(raw as u64),
            _ => return None,
        })
    }

    /// Short variant name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::U8(_) => "u8",
            Value::I16(_) => "i16",
            Value::U16(_) => "u16",
            Value::I32(_) => "i32",
            Value::U32(_) => "u32",
            Value::I64(_) => "i64",
            Value::U64(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Text(_) => "text",
            Value::DateTime(_) => "datetime",
            Value::Bytes(_) => "bytes",
            Value::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(v) => write!(f, "Bool({v})"),
            Value::I8(v) => write!(f, "I8({v})"),
            Value::U8(v) => write!(f, "U8({v})"),
            Value::I16(v) => write!(f, "I16({v})"),
            Value::U16(v) => write!(f, "U16({v})"),
            Value::I32(v) => write!(f, "I32({v})"),
            Value::U32(v) => write!(f, "U32({v})"),
            Value::I64(v) => write!(f, "I64({v})"),
            Value::U64(v) => write!(f, "U64({v})"),
            Value::F32(v) => write!(f, "F32({v})"),
            Value::F64(v) => write!(f, "F64({v})"),
            Value::Text(v) => write!(f, "Text({v:?})"),
            Value::DateTime(v) => write!(f, "DateTime({v})"),
            Value::Bytes(v) => write!(f, "Bytes({v:02X?})"),
            Value::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for Value {
    /// Custom payloads compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a.to_bits() == b.to_bits(),
            (Value::F64(a), Value::F64(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_i64_views() {
        assert_eq!(Value::Bool(true).as_i64(), Some(1));
        assert_eq!(Value::I8(-3).as_i64(), Some(-3));
        assert_eq!(Value::U64(u64::MAX).as_i64(), Some(-1));
        assert_eq!(Value::F32(1.0).as_i64(), None);
        assert_eq!(Value::Null.as_i64(), None);
    }

    #[test]
    fn test_from_i64_narrows() {
        assert_eq!(Value::from_i64(300, &ValueType::U8), Some(Value::U8(44)));
        assert_eq!(Value::from_i64(-1, &ValueType::U16), Some(Value::U16(65535)));
        assert_eq!(Value::from_i64(2, &ValueType::Bool), Some(Value::Bool(true)));
        assert_eq!(
            Value::from_i64(7, &ValueType::Optional(Box::new(ValueType::I32))),
            Some(Value::I32(7))
        );
        assert_eq!(Value::from_i64(7, &ValueType::String), None);
    }

    #[test]
    fn test_custom_downcast() {
        #[derive(Debug, PartialEq)]
        struct Rgb(u8, u8, u8);

        let v = Value::custom(Rgb(1, 2, 3));
        assert_eq!(v.downcast_ref::<Rgb>(), Some(&Rgb(1, 2, 3)));
        assert_eq!(v.downcast_ref::<u32>(), None);
        assert_eq!(v.clone(), v);
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::U32.to_string(), "u32");
        assert_eq!(
            ValueType::Optional(Box::new(ValueType::String)).to_string(),
            "Option<String>"
        );
        assert_eq!(ValueType::Custom("Rgb").to_string(), "Rgb");
    }

    #[test]
    fn test_signedness() {
        assert!(ValueType::I16.is_signed());
        assert!(!ValueType::U16.is_signed());
        assert!(ValueType::Optional(Box::new(ValueType::I64)).is_signed());
    }
}
