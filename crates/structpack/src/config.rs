// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec-wide defaults.
//!
//! Fields and records can name their own charset and byte order; these are
//! the values used when neither does.
//!
//! # Environment
//!
//! - `STRUCTPACK_CHARSET` (e.g. `ISO-8859-1`)
//! - `STRUCTPACK_BYTE_ORDER` (`big` or `little`)
//!
//! # Example YAML
//!
//! ```yaml
//! # structpack.yaml
//! charset: ISO-8859-1
//! byte_order: little
//! ```

use crate::bytes::ByteOrder;
use crate::charset::Charset;
use crate::{Error, Result};

/// Environment variable naming the default charset.
pub const ENV_CHARSET: &str = "STRUCTPACK_CHARSET";
/// Environment variable naming the default byte order.
pub const ENV_BYTE_ORDER: &str = "STRUCTPACK_BYTE_ORDER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Charset for text fields when neither field nor record names one.
    pub default_charset: Charset,
    /// Byte order for fields when neither field nor record names one.
    pub default_byte_order: ByteOrder,
}

impl CodecConfig {
    /// Defaults overridden by `STRUCTPACK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(name) = lookup(ENV_CHARSET) {
            config.default_charset = parse_charset(&name)?;
        }
        if let Some(name) = lookup(ENV_BYTE_ORDER) {
            config.default_byte_order = parse_order(&name)?;
        }
        Ok(config)
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.default_charset = charset;
        self
    }

    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.default_byte_order = order;
        self
    }
}

fn parse_charset(name: &str) -> Result<Charset> {
    Charset::from_name(name).ok_or_else(|| Error::Config(format!("unknown charset `{name}`")))
}

fn parse_order(name: &str) -> Result<ByteOrder> {
    ByteOrder::from_name(name).ok_or_else(|| Error::Config(format!("unknown byte order `{name}`")))
}

#[cfg(feature = "config-loaders")]
mod yaml {
    use super::{parse_charset, parse_order, CodecConfig};
    use crate::{Error, Result};
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    /// On-disk form; every key is optional.
    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct YamlCodecConfig {
        charset: Option<String>,
        byte_order: Option<String>,
    }

    impl CodecConfig {
        /// Parse a YAML document; missing keys keep their defaults.
        pub fn from_yaml_str(yaml: &str) -> Result<Self> {
            let doc: YamlCodecConfig = serde_yaml::from_str(yaml)
                .map_err(|e| Error::Config(format!("invalid YAML: {e}")))?;
            let mut config = Self::default();
            if let Some(name) = doc.charset.as_deref() {
                config.default_charset = parse_charset(name)?;
            }
            if let Some(name) = doc.byte_order.as_deref() {
                config.default_byte_order = parse_order(name)?;
            }
            Ok(config)
        }

        pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            let yaml = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
            Self::from_yaml_str(&yaml)
        }
    }
}
