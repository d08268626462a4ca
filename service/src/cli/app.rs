//! `gen-excel` application

use super::types::GenExcelCli;
use crate::config::ExcelConfig;
use crate::generator::{ExcelGenerator, GenerationSummary, Generator};
use crate::parser::Parser as SchemaFileParser;
use clap::Parser;
use colored::Colorize;
use linkml_core::error::{LinkMLError, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line application for Excel generation
pub struct GenExcelApp {
    cli: GenExcelCli,
}

impl GenExcelApp {
    /// Create application from command-line arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(GenExcelCli::parse())
    }

    /// Create application from already parsed arguments
    #[must_use]
    pub fn new(cli: GenExcelCli) -> Self {
        Self { cli }
    }

    /// Parsed arguments
    #[must_use]
    pub fn cli(&self) -> &GenExcelCli {
        &self.cli
    }

    /// Run the application. A failure is printed to stderr once, even
    /// with `--quiet`, and then returned.
    ///
    /// # Errors
    ///
    /// Returns error if configuration, schema loading or generation fails.
    pub fn run(self) -> Result<GenerationSummary> {
        self.init_logging();
        info!("Starting gen-excel");

        match self.generate() {
            Ok(summary) => {
                if !self.cli.quiet {
                    println!("{}", summary.output.display().to_string().green());
                }
                Ok(summary)
            }
            Err(err) => {
                eprintln!("{} {err}", "Error:".red().bold());
                Err(err)
            }
        }
    }

    /// Configure tracing subscriber based on CLI flags; `RUST_LOG` wins
    /// when set.
    fn init_logging(&self) {
        let level = if self.cli.quiet {
            "error"
        } else if self.cli.verbose {
            "debug"
        } else {
            "info"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        // A subscriber may already be installed when embedded or under test.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Configuration file values with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns error if the configuration file cannot be loaded or is invalid.
    pub fn effective_config(&self) -> Result<ExcelConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ExcelConfig::from_file(path)?,
            None => ExcelConfig::default(),
        };
        if self.cli.skip_abstract {
            config.skip_abstract = true;
        }
        if self.cli.checkpoint {
            config.checkpoint = true;
        }
        config.validate()?;
        Ok(config)
    }

    fn generate(&self) -> Result<GenerationSummary> {
        let config = self.effective_config()?;
        debug!("Output format: {}", self.cli.format.extension());

        let schema = SchemaFileParser::new().parse_file(&self.cli.schema)?;
        info!("Loaded schema '{}' from {}", schema.name, self.cli.schema.display());

        let generator =
            ExcelGenerator::with_config(config, &self.cli.schema, self.cli.output.as_deref())
                .map_err(LinkMLError::from)?;
        let extension = generator.get_file_extension();
        if generator.output_path().extension().and_then(|e| e.to_str()) != Some(extension) {
            warn!(
                "Output {} does not end in .{extension}",
                generator.output_path().display()
            );
        }
        generator.serialize(&schema).map_err(LinkMLError::from)
    }
}
