//! Raw payload parsing

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Parse raw bytes into the root JSON object
///
/// Fails on malformed JSON, on a root that is not an object, and on payloads
/// larger than `limit` bytes (checked before parsing).
pub fn parse_root(bytes: &[u8], limit: Option<usize>) -> Result<JsonObject> {
    if let Some(limit) = limit {
        if bytes.len() > limit {
            return Err(Error::PayloadTooLarge {
                size: bytes.len(),
                limit,
            });
        }
    }

    match serde_json::from_slice::<JsonValue>(bytes)? {
        JsonValue::Object(root) => Ok(root),
        _ => Err(Error::NotAnObject),
    }
}
