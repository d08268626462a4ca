//! Schema parsing module
//!
//! This module handles parsing LinkML schemas from YAML and JSON formats.
//! Imports are not resolved; the generator works on a single document.

use linkml_core::{
    error::{LinkMLError, Result},
    types::SchemaDefinition,
};
use std::path::Path;

pub mod json_parser;
pub mod yaml_parser;

pub use json_parser::JsonParser;
pub use yaml_parser::YamlParser;

/// Trait for schema parsers
pub trait SchemaParser: Send + Sync {
    /// Parse schema from string content
    ///
    /// # Errors
    ///
    /// Returns a `LinkMLError` if parsing fails
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition>;

    /// Parse schema from file
    ///
    /// # Errors
    ///
    /// Returns a `LinkMLError` if:
    /// - File cannot be read
    /// - Parsing fails
    fn parse_file(&self, path: &Path) -> Result<SchemaDefinition> {
        let content = std::fs::read_to_string(path).map_err(|e| LinkMLError::io_at(path, &e))?;

        let mut schema = self.parse_str(&content).map_err(|e| match e {
            LinkMLError::ParseError { message, location } => LinkMLError::ParseError {
                message: format!("{message} in file {}", path.display()),
                location,
            },
            other => other,
        })?;
        schema.source_file = Some(path.display().to_string());
        Ok(schema)
    }
}

/// Main parser that delegates to format-specific parsers
#[derive(Default)]
pub struct Parser {
    yaml: YamlParser,
    json: JsonParser,
}

impl Parser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self {
            yaml: YamlParser::new(),
            json: JsonParser::new(),
        }
    }

    /// Parse schema from file, detecting format from extension
    ///
    /// # Errors
    ///
    /// Returns a `LinkMLError` if:
    /// - File has no extension
    /// - File format is not supported
    /// - Parsing fails
    pub fn parse_file(&self, path: &Path) -> Result<SchemaDefinition> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| LinkMLError::parse("No file extension found"))?;

        let schema = match extension {
            "yaml" | "yml" => self.yaml.parse_file(path)?,
            "json" => self.json.parse_file(path)?,
            _ => {
                return Err(LinkMLError::parse(format!(
                    "Unsupported file format: {extension}"
                )));
            }
        };
        tracing::debug!(
            "Parsed schema '{}' from {} ({} classes, {} enums)",
            schema.name,
            path.display(),
            schema.classes.len(),
            schema.enums.len()
        );
        Ok(schema)
    }

    /// Parse schema from string with specified format
    ///
    /// # Errors
    ///
    /// Returns a `LinkMLError` if:
    /// - Format is not supported
    /// - Parsing fails
    pub fn parse_str(&self, content: &str, format: &str) -> Result<SchemaDefinition> {
        match format {
            "yaml" | "yml" => self.yaml.parse_str(content),
            "json" => self.json.parse_str(content),
            _ => Err(LinkMLError::parse(format!("Unsupported format: {format}"))),
        }
    }
}
