//! CLI type definitions and enums

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generate an Excel workbook from a `LinkML` schema
#[derive(Parser, Debug)]
#[command(
    name = "gen-excel",
    version,
    about = "Generate an Excel workbook with one sheet per class from a LinkML schema"
)]
pub struct GenExcelCli {
    /// Schema file path (YAML or JSON)
    pub schema: PathBuf,

    /// Output workbook path; derived from the schema file name when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, default_value = "xlsx")]
    pub format: OutputFormat,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Leave abstract and mixin classes out of the workbook
    #[arg(long)]
    pub skip_abstract: bool,

    /// Save the workbook after every sheet and dropdown
    #[arg(long)]
    pub checkpoint: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output formats for the generated workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Office Open XML workbook
    Xlsx,
}

impl OutputFormat {
    /// File extension for this format
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
        }
    }
}
