// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Conversion between concrete field types and [`Value`].

use super::{Value, ValueType};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// A Rust type that can occupy a record field.
///
/// Implemented for the fixed-width integers, `bool`, `f32`, `f64`, `String`,
/// `Vec<u8>`, `DateTime<Utc>` and `Option<T>`. Application types implement it
/// with [`ValueType::Custom`] and [`Value::custom`] and are then handled by an
/// explicitly named converter/resolver.
pub trait FieldValue: Sized {
    /// Declared type used for classification.
    fn value_type() -> ValueType;

    fn to_value(&self) -> Value;

    /// Convert back, handing the value back on mismatch.
    fn from_value(value: Value) -> std::result::Result<Self, Value>;
}

/// Store `value` into `slot`, reporting a mismatch against `field`.
///
/// Used by `#[derive(Struct)]` in generated setters.
pub fn assign<T: FieldValue>(slot: &mut T, field: &str, value: Value) -> Result<()> {
    match T::from_value(value) {
        Ok(v) => {
            *slot = v;
            Ok(())
        }
        Err(rejected) => Err(Error::ValueMismatch {
            field: field.to_string(),
            expected: T::value_type().to_string(),
            found: rejected.type_name().to_string(),
        }),
    }
}

macro_rules! int_field_value {
    ($ty:ty, $variant:ident) => {
        impl FieldValue for $ty {
            fn value_type() -> ValueType {
                ValueType::$variant
            }

            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }

            fn from_value(value: Value) -> std::result::Result<Self, Value> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => other
                        .as_i64()
                        .and_then(|raw| <$ty>::try_from(raw).ok())
                        .ok_or(other),
                }
            }
        }
    };
}

int_field_value!(i8, I8);
int_field_value!(u8, U8);
int_field_value!(i16, I16);
int_field_value!(u16, U16);
int_field_value!(i32, I32);
int_field_value!(u32, U32);
int_field_value!(i64, I64);
int_field_value!(u64, U64);

impl FieldValue for bool {
    fn value_type() -> ValueType {
        ValueType::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Bool(v) => Ok(v),
            other => match other.as_i64() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(other),
            },
        }
    }
}

impl FieldValue for f32 {
    fn value_type() -> ValueType {
        ValueType::F32
    }

    fn to_value(&self) -> Value {
        Value::F32(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::F32(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FieldValue for f64 {
    fn value_type() -> ValueType {
        ValueType::F64
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(f64::from(v)),
            other => Err(other),
        }
    }
}

impl FieldValue for String {
    fn value_type() -> ValueType {
        ValueType::String
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FieldValue for Vec<u8> {
    fn value_type() -> ValueType {
        ValueType::Bytes
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Bytes(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FieldValue for DateTime<Utc> {
    fn value_type() -> ValueType {
        ValueType::DateTime
    }

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::DateTime(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn value_type() -> ValueType {
        ValueType::Optional(Box::new(T::value_type()))
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
