//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Payment setup payload inspector
#[derive(Parser, Debug)]
#[command(name = "payment-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Decoder configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a payload and print the result
    Inspect {
        /// Payload file, or `-` for stdin
        input: PathBuf,
    },

    /// Check whether a payload decodes
    Validate {
        /// Payload file, or `-` for stdin
        input: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
