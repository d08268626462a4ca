//! Core generator traits and types
//!
//! This module defines the error type shared by the generator and the
//! traversal machinery, and the descriptive `Generator` trait.

use linkml_core::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur during workbook generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A permissible value had none of the recognized shapes
    #[error("Invalid permissible value in enum {enum_name}: {value}")]
    InvalidPermissibleValue {
        /// Enum holding the value
        enum_name: String,
        /// The offending value, rendered as JSON
        value: String,
    },

    /// Two classes map to the same worksheet name
    #[error("Class '{class_name}' maps to worksheet '{sheet}' which already exists")]
    DuplicateSheet {
        /// Worksheet name
        sheet: String,
        /// Class that tried to claim it
        class_name: String,
    },

    /// Error reported by the workbook writer
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Code generation error
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// `LinkML` core error
    #[error("LinkML error: {0}")]
    LinkML(#[from] LinkMLError),
}

impl From<GeneratorError> for LinkMLError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::LinkML(inner) => inner,
            other => {
                let message = format!("Excel generation failed: {other}");
                LinkMLError::other_with_source(message, other)
            }
        }
    }
}

/// Outcome of a completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Where the workbook was written
    pub output: PathBuf,
    /// Number of class worksheets
    pub sheets: usize,
    /// Number of dropdown validations
    pub validations: usize,
}

/// Descriptive trait implemented by generators
pub trait Generator {
    /// Get generator name
    fn name(&self) -> &str;

    /// Get the file extension for generated files
    fn get_file_extension(&self) -> &str;

    /// Validate schema before generation
    ///
    /// # Errors
    /// Returns an error if the schema cannot be turned into output
    fn validate_schema(&self, schema: &SchemaDefinition) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_permissible_value_display() {
        let err = GeneratorError::InvalidPermissibleValue {
            enum_name: "StatusEnum".to_string(),
            value: "42".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid permissible value in enum StatusEnum: 42"
        );
    }

    #[test]
    fn test_linkml_error_round_trip() {
        let err = GeneratorError::from(LinkMLError::parse("bad yaml"));
        let back: LinkMLError = err.into();
        assert!(matches!(back, LinkMLError::ParseError { .. }));

        let back: LinkMLError = GeneratorError::Generation("boom".to_string()).into();
        assert!(matches!(back, LinkMLError::Other { .. }));
    }
}
