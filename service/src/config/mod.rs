//! Configuration loading for the Excel generator
//!
//! This module provides configuration loading from YAML files with
//! environment variable substitution support.

pub mod validation;

use crate::generator::excel::{ExcelFeatures, MAX_EXCEL_ROW};
use linkml_core::{LinkMLError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// `${VAR}` or `${VAR:-default}`
static ENV_VAR_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}").ok());

/// Load configuration from `YAML` file with environment variable substitution
///
/// # Errors
///
/// Returns `LinkMLError::IoError` if the file cannot be read
/// Returns `LinkMLError::ConfigError` if the YAML cannot be parsed
pub fn load_config<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| LinkMLError::io_at(path, &e))?;
    parse_config(&contents)
}

/// Parse configuration from a `YAML` string with environment variable
/// substitution. An empty document yields `T::default()` through serde.
///
/// # Errors
///
/// Returns `LinkMLError::ConfigError` if the YAML cannot be parsed
pub fn parse_config<T: for<'de> Deserialize<'de>>(contents: &str) -> Result<T> {
    let substituted = substitute_env_vars(contents);
    let document = if substituted.trim().is_empty() {
        "{}"
    } else {
        substituted.as_str()
    };

    serde_yaml::from_str(document)
        .map_err(|e| LinkMLError::ConfigError(format!("Failed to parse YAML config: {e}")))
}

/// Substitute environment variables in the format ${VAR:-default}
fn substitute_env_vars(content: &str) -> String {
    substitute_env_vars_with(content, |name| env::var(name).ok())
}

/// Substitute placeholders using `lookup` to resolve variable names.
///
/// Unset variables without a default become the empty string.
pub fn substitute_env_vars_with<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let Some(re) = ENV_VAR_PATTERN.as_ref() else {
        return content.to_string();
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default_value = caps.get(3).map_or("", |m| m.as_str());

        lookup(var_name).unwrap_or_else(|| default_value.to_string())
    })
    .to_string()
}

/// Excel generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcelConfig {
    /// Name embedded in derived output file names
    pub generator_name: String,
    /// Version embedded in derived output file names
    pub generator_version: String,
    /// Save the workbook after every sheet and dropdown
    pub checkpoint: bool,
    /// Leave abstract and mixin classes out of the workbook
    pub skip_abstract: bool,
    /// Workbook features, e.g. `FORMAT_HEADERS | FREEZE_HEADERS`
    pub features: ExcelFeatures,
    /// Last zero-based row covered by dropdowns
    pub validation_last_row: u32,
    /// Width of every header column
    pub column_width: f64,
}

impl Default for ExcelConfig {
    fn default() -> Self {
        Self {
            generator_name: "excelgen".to_string(),
            generator_version: "0.0.1".to_string(),
            checkpoint: false,
            skip_abstract: false,
            features: ExcelFeatures::default(),
            validation_last_row: MAX_EXCEL_ROW,
            column_width: 15.0,
        }
    }
}

impl ExcelConfig {
    /// Load and validate configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or fails validation
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Self = load_config(path)?;
        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `LinkMLError::ConfigError` naming the first invalid value
    pub fn validate(&self) -> Result<()> {
        validation::validate_values(self)
    }
}
