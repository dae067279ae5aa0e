//! Decoder configuration
//!
//! Loaded from YAML. Every field has a default, so an empty document yields
//! `DecoderConfig::default()`.

use crate::error::{Error, Result};
use crate::payment_method::DEFAULT_LOGO_EXTENSION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for decoding payment setup payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderConfig {
    /// Reject payloads larger than this many bytes before parsing
    pub max_payload_bytes: Option<usize>,

    /// File extension appended to payment method logo names
    pub logo_extension: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: None,
            logo_extension: DEFAULT_LOGO_EXTENSION.to_string(),
        }
    }
}

impl DecoderConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payload size limit
    #[must_use]
    pub fn with_max_payload_bytes(mut self, limit: usize) -> Self {
        self.max_payload_bytes = Some(limit);
        self
    }

    /// Set the logo file extension
    #[must_use]
    pub fn with_logo_extension(mut self, extension: impl Into<String>) -> Self {
        self.logo_extension = extension.into();
        self
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as null, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.logo_extension.is_empty() {
            return Err(Error::config("logo_extension must not be empty"));
        }
        if self.logo_extension.contains(['/', '.']) {
            return Err(Error::config(format!(
                "logo_extension must be a bare extension, got '{}'",
                self.logo_extension
            )));
        }
        if self.max_payload_bytes == Some(0) {
            return Err(Error::config("max_payload_bytes must be greater than 0"));
        }
        Ok(())
    }
}
