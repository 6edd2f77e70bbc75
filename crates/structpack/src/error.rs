// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error taxonomy for schema building, packing and unpacking.
//!
//! Errors are `Clone` because the schema cache memoises build failures:
//! every later request for a malformed record type receives the same error.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Structpack error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ========================================================================
    // Schema-build errors
    // ========================================================================
    /// Record declaration is incomplete or self-contradictory.
    #[error("configuration error in {type_name}: {reason}")]
    Configuration { type_name: String, reason: String },

    /// No registered handler accepts the field.
    #[error("unsupported field type: {type_name}.{field} [{value_type}]")]
    UnsupportedFieldType {
        type_name: String,
        field: String,
        value_type: String,
    },

    // ========================================================================
    // Pack / unpack errors
    // ========================================================================
    /// A converter produced a byte count different from the declared size.
    #[error("converter for field {field} produced {actual} bytes, expected {expected}")]
    EncodingSizeMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// Buffer shorter than the schema requires.
    #[error("insufficient data: required {required} bytes, available {available}")]
    InsufficientData { required: usize, available: usize },

    /// Record type has no no-argument construction capability.
    #[error("type {0} cannot be instantiated")]
    UninstantiableType(String),

    /// A value of the wrong variant reached a field setter or converter.
    #[error("value mismatch on field {field}: expected {expected}, found {found}")]
    ValueMismatch {
        field: String,
        expected: String,
        found: String,
    },

    // ========================================================================
    // Byte codec errors
    // ========================================================================
    /// Bit-field extraction with a size outside 1..=8.
    #[error("bit field size {0} out of range, required between 1 and 8")]
    BitFieldRange(u32),

    /// Malformed hex string (odd length or non-hex character).
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    // ========================================================================
    // Configuration loading
    // ========================================================================
    /// Environment or YAML configuration could not be loaded.
    #[error("invalid codec configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn configuration(type_name: &str, reason: impl Into<String>) -> Self {
        Error::Configuration {
            type_name: type_name.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors raised while building a schema.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Error::Configuration { .. } | Error::UnsupportedFieldType { .. }
        )
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHex(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_variants() {
        let err = Error::InsufficientData {
            required: 8,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: required 8 bytes, available 3"
        );

        let err = Error::configuration("Packet", "text field `name` requires a size");
        assert_eq!(
            err.to_string(),
            "configuration error in Packet: text field `name` requires a size"
        );

        assert_eq!(
            Error::BitFieldRange(9).to_string(),
            "bit field size 9 out of range, required between 1 and 8"
        );
    }

    #[test]
    fn test_schema_error_classification() {
        assert!(Error::configuration("T", "x").is_schema_error());
        assert!(Error::UnsupportedFieldType {
            type_name: "T".into(),
            field: "f".into(),
            value_type: "Custom(Foo)".into(),
        }
        .is_schema_error());
        assert!(!Error::UninstantiableType("T".into()).is_schema_error());
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: Error = hex::decode("abc").unwrap_err().into();
        assert!(matches!(err, Error::InvalidHex(_)));
    }
}
