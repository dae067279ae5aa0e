//! Strict field accessors
//!
//! One accessor per JSON type, used with two policies: `required` turns a
//! missing or mistyped field into an error, `optional` turns it into `None`.

use crate::error::{Error, Result};
use crate::types::{JsonArray, JsonObject, JsonValue};
use url::Url;

/// A typed view of a JSON value with no coercion between types
pub trait Extract<'a>: Sized {
    /// Type name used in diagnostics
    const EXPECTED: &'static str;

    /// Borrow or copy the value if it has exactly this type
    fn extract(value: &'a JsonValue) -> Option<Self>;
}

impl<'a> Extract<'a> for &'a str {
    const EXPECTED: &'static str = "string";

    fn extract(value: &'a JsonValue) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> Extract<'a> for i64 {
    const EXPECTED: &'static str = "integer";

    // Floats, numeric strings and booleans are all rejected here.
    fn extract(value: &'a JsonValue) -> Option<Self> {
        value.as_i64()
    }
}

impl<'a> Extract<'a> for &'a JsonObject {
    const EXPECTED: &'static str = "object";

    fn extract(value: &'a JsonValue) -> Option<Self> {
        value.as_object()
    }
}

impl<'a> Extract<'a> for &'a JsonArray {
    const EXPECTED: &'static str = "array";

    fn extract(value: &'a JsonValue) -> Option<Self> {
        value.as_array()
    }
}

/// Extract `key` from `object`, treating a missing or mistyped value as absent
pub fn optional<'a, T: Extract<'a>>(object: &'a JsonObject, key: &str) -> Option<T> {
    object.get(key).and_then(T::extract)
}

/// Extract `key` from `object`, failing if it is missing or mistyped
///
/// `scope` is the dotted path of `object` inside the payload (empty for the
/// root) and only feeds the diagnostic.
pub fn required<'a, T: Extract<'a>>(object: &'a JsonObject, scope: &str, key: &str) -> Result<T> {
    match object.get(key) {
        None => Err(Error::missing_field(field_path(scope, key))),
        Some(value) => T::extract(value)
            .ok_or_else(|| Error::invalid_type(field_path(scope, key), T::EXPECTED)),
    }
}

/// Optional string field, owned
pub fn optional_string(object: &JsonObject, key: &str) -> Option<String> {
    optional::<&str>(object, key).map(str::to_owned)
}

/// Optional integer field
pub fn optional_integer(object: &JsonObject, key: &str) -> Option<i64> {
    optional::<i64>(object, key)
}

/// Array field whose elements are all objects
///
/// A single non-object element makes the whole field absent.
pub fn optional_records<'a>(object: &'a JsonObject, key: &str) -> Option<Vec<&'a JsonObject>> {
    optional::<&JsonArray>(object, key)?
        .iter()
        .map(JsonValue::as_object)
        .collect()
}

/// Required string field, owned
pub fn required_string(object: &JsonObject, scope: &str, key: &str) -> Result<String> {
    required::<&str>(object, scope, key).map(str::to_owned)
}

/// Required string field that must parse as an absolute URL
///
/// Relative references such as `/logos/` are rejected.
pub fn required_url(object: &JsonObject, scope: &str, key: &str) -> Result<Url> {
    let raw = required::<&str>(object, scope, key)?;
    Url::parse(raw).map_err(|e| Error::invalid_url(field_path(scope, key), e))
}

/// Dotted path of a field for diagnostics
fn field_path(scope: &str, key: &str) -> String {
    if scope.is_empty() {
        key.to_string()
    } else {
        format!("{scope}.{key}")
    }
}
