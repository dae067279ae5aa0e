//! Error types for payment-setup
//!
//! Decoding a payload is all-or-nothing. Callers of the public contract only
//! see "no result", but internally every rejection carries one of the
//! variants below so it can be logged and asserted on in tests.

use thiserror::Error;

/// The main error type for payment-setup
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Payload Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Payload root is not a JSON object")]
    NotAnObject,

    #[error("Payload of {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    // ============================================================================
    // Field Errors
    // ============================================================================
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid type for '{field}': expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid URL in '{field}': {source}")]
    InvalidUrl {
        field: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid generation timestamp: {value:?}")]
    InvalidTimestamp { value: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
        }
    }

    /// Create an invalid URL error
    pub fn invalid_url(field: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            field: field.into(),
            source,
        }
    }

    /// Create an invalid timestamp error
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The payload field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingField { field }
            | Error::InvalidType { field, .. }
            | Error::InvalidUrl { field, .. } => Some(field.as_str()),
            Error::InvalidTimestamp { .. } => Some("generationtime"),
            _ => None,
        }
    }
}

/// Result type alias for payment-setup
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
