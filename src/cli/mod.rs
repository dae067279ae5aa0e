//! CLI module
//!
//! Command-line interface for inspecting payment setup payloads.
//!
//! # Commands
//!
//! - `inspect` - Decode a payload and print it as JSON
//! - `validate` - Report whether a payload decodes, and why not

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
