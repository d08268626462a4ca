//! Range checks for [`ExcelConfig`] values

use super::ExcelConfig;
use crate::generator::excel::MAX_EXCEL_ROW;
use linkml_core::error::{LinkMLError, Result};

/// Widest column Excel allows, in character units
const MAX_COLUMN_WIDTH: f64 = 255.0;

/// Validate specific configuration values
///
/// # Errors
///
/// Returns an error if configuration values are invalid:
/// - Generator name or version is empty or contains a path separator
/// - The last validated row is the header row or beyond Excel's grid
/// - Column width is not positive or wider than Excel allows
pub fn validate_values(config: &ExcelConfig) -> Result<()> {
    for (field, value) in [
        ("generator_name", &config.generator_name),
        ("generator_version", &config.generator_version),
    ] {
        if value.trim().is_empty() {
            return Err(LinkMLError::config(format!("{field} must not be empty")));
        }
        if value.contains(['/', '\\']) {
            return Err(LinkMLError::config(format!(
                "{field} must not contain path separators: {value}"
            )));
        }
    }

    if config.validation_last_row == 0 || config.validation_last_row > MAX_EXCEL_ROW {
        return Err(LinkMLError::config(format!(
            "validation_last_row must be between 1 and {MAX_EXCEL_ROW}, got {}",
            config.validation_last_row
        )));
    }

    if !(config.column_width > 0.0 && config.column_width <= MAX_COLUMN_WIDTH) {
        return Err(LinkMLError::config(format!(
            "column_width must be in (0, {MAX_COLUMN_WIDTH}], got {}",
            config.column_width
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_values(&ExcelConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            ExcelConfig {
                generator_version: " ".to_string(),
                ..ExcelConfig::default()
            },
            ExcelConfig {
                generator_name: "a/b".to_string(),
                ..ExcelConfig::default()
            },
            ExcelConfig {
                validation_last_row: 0,
                ..ExcelConfig::default()
            },
            ExcelConfig {
                column_width: f64::NAN,
                ..ExcelConfig::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(validate_values(&config), Err(LinkMLError::ConfigError(_))),
                "{config:?}"
            );
        }
    }
}
