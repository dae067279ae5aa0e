//! Low-level decoding helpers
//!
//! # Overview
//!
//! The decode module turns untrusted bytes into a generic JSON tree and
//! provides strict typed accessors over it:
//! - `parse_root` - bytes to root object, with an optional size limit
//! - `fields` - typed accessors with required/optional policies
//! - `parse_generation_time` - the fixed-format UTC timestamp

pub mod fields;

mod date;
mod payload;

pub use date::{parse_generation_time, GENERATION_TIME_FORMAT};
pub use payload::parse_root;
