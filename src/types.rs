//! Common types used throughout payment-setup
//!
//! Type aliases for the generic JSON tree the decoder works over.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// JSON array type
pub type JsonArray = Vec<JsonValue>;
