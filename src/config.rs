//! Format configuration shared by encoders and decoders.
//!
//! The defaults reproduce the legacy untagged layout. Configurations can be
//! embedded in a larger serde document or loaded on their own from JSON.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on the element count a decoder accepts unless configured
/// otherwise. At 16 bytes per `vec4` this caps a single array at 4 GiB.
pub const DEFAULT_MAX_ELEMENTS: u64 = 1 << 28;

/// Header layout of a serialized array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    /// `[u64 count][payload]`, native byte order, no kind information.
    #[default]
    Legacy,
    /// `[u8 kind tag][u8 byte order][u64 count][payload]`.
    Tagged,
}

/// Options consulted by [`crate::ser::encode_framed`] and
/// [`crate::ser::decode_framed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub framing: Framing,
    pub max_elements: u64,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            framing: Framing::Legacy,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

impl FormatConfig {
    pub fn tagged() -> Self {
        Self {
            framing: Framing::Tagged,
            ..Self::default()
        }
    }

    pub fn with_max_elements(mut self, max_elements: u64) -> Self {
        self.max_elements = max_elements;
        self
    }

    /// Parses a configuration from a JSON document. Missing fields take their
    /// default values; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = crate::io::read_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(FormatConfig::from_json_str("{}").unwrap(), FormatConfig::default());
    }

    #[test]
    fn framing_uses_snake_case() {
        let config = FormatConfig::from_json_str(r#"{"framing":"tagged","max_elements":16}"#)
            .unwrap();
        assert_eq!(config, FormatConfig::tagged().with_max_elements(16));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = FormatConfig::from_json_str(r#"{"padding":4}"#).expect_err("unknown field");
        assert!(matches!(err, Error::Config(_)));
    }
}
