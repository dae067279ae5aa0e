//! Generation timestamp parsing
//!
//! The server stamps each payload as `yyyy-MM-dd'T'HH:mm:ss'Z'` in UTC. The
//! trailing `Z` is a literal, so offsets and fractional seconds are rejected.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

/// chrono format string for the generation timestamp
pub const GENERATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Character classes of a valid timestamp; `d` is any ASCII digit
const SHAPE: &[u8; 20] = b"dddd-dd-ddTdd:dd:ddZ";

/// Parse a generation timestamp into a UTC instant
pub fn parse_generation_time(value: &str) -> Result<DateTime<Utc>> {
    // chrono accepts single-digit fields and signed years, the wire format doesn't
    if !has_exact_shape(value) {
        return Err(Error::invalid_timestamp(value));
    }
    // chrono reads a `60` seconds field as a leap second at any minute
    if value.as_bytes()[17] > b'5' {
        return Err(Error::invalid_timestamp(value));
    }

    NaiveDateTime::parse_from_str(value, GENERATION_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::invalid_timestamp(value))
}

fn has_exact_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == SHAPE.len()
        && bytes.iter().zip(SHAPE).all(|(b, class)| match class {
            b'd' => b.is_ascii_digit(),
            literal => b == literal,
        })
}
