//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::DecoderConfig;
use crate::error::{Error, Result, ResultExt};
use crate::setup::PaymentSetupDecoder;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        self.run_with_output(&mut stdout.lock())
    }

    /// Run the CLI command, writing to `out`
    pub fn run_with_output(&self, out: &mut impl Write) -> Result<()> {
        let decoder = PaymentSetupDecoder::from_config(self.load_config()?);

        match &self.cli.command {
            Commands::Inspect { input } => self.inspect(&decoder, input, out),
            Commands::Validate { input } => self.validate(&decoder, input, out),
        }
    }

    /// Load decoder configuration
    fn load_config(&self) -> Result<DecoderConfig> {
        match &self.cli.config {
            Some(path) => DecoderConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => Ok(DecoderConfig::default()),
        }
    }

    /// Decode a payload and print it
    fn inspect(
        &self,
        decoder: &PaymentSetupDecoder,
        input: &Path,
        out: &mut impl Write,
    ) -> Result<()> {
        let payload = read_input(input)?;
        let setup = decoder.try_decode(&payload).context("Invalid payment setup")?;

        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(&setup)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(&setup)?,
        };
        writeln!(out, "{rendered}")?;
        Ok(())
    }

    /// Report whether a payload decodes
    fn validate(
        &self,
        decoder: &PaymentSetupDecoder,
        input: &Path,
        out: &mut impl Write,
    ) -> Result<()> {
        let payload = read_input(input)?;
        match decoder.try_decode(&payload) {
            Ok(setup) => {
                if self.cli.verbose {
                    writeln!(
                        out,
                        "valid: {} {} ({} available, {} preferred payment methods)",
                        setup.amount(),
                        setup.currency_code(),
                        setup.available_payment_methods().len(),
                        setup.preferred_payment_methods().len()
                    )?;
                } else {
                    writeln!(out, "valid")?;
                }
                Ok(())
            }
            Err(e) => Err(Error::Other(format!("invalid: {e}"))),
        }
    }
}

/// Read a payload from a file, or stdin for `-`
fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    if !input.exists() {
        return Err(Error::FileNotFound {
            path: input.display().to_string(),
        });
    }
    Ok(fs::read(input)?)
}
