//! Error types for `LinkML` operations

use thiserror::Error;

/// Main error type for `LinkML` operations
#[derive(Error, Debug)]
pub enum LinkMLError {
    /// Schema parsing errors
    #[error("Failed to parse schema: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Location in schema if available
        location: Option<String>,
    },

    /// Schema validation errors
    #[error("Schema validation failed: {message}")]
    SchemaValidationError {
        /// Error message
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for `LinkML` operations
pub type Result<T> = std::result::Result<T, LinkMLError>;

impl LinkMLError {
    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new schema validation error
    #[must_use]
    pub fn schema_validation(message: impl Into<String>) -> Self {
        Self::SchemaValidationError {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// IO error that names the file it happened on
    #[must_use]
    pub fn io_at(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::IoError(std::io::Error::new(
            err.kind(),
            format!("{}: {err}", path.display()),
        ))
    }

    /// Create a generic error with source
    #[must_use]
    pub fn other_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let err = LinkMLError::parse("Invalid YAML");
        assert!(matches!(err, LinkMLError::ParseError { .. }));

        let err = LinkMLError::parse_at("Invalid syntax", "line 3, column 1");
        match err {
            LinkMLError::ParseError { location, .. } => {
                assert_eq!(location.as_deref(), Some("line 3, column 1"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = LinkMLError::schema_validation("Schema must have a name");
        assert_eq!(
            err.to_string(),
            "Schema validation failed: Schema must have a name"
        );

        let err = LinkMLError::config("validation_last_row must be positive");
        assert!(err.to_string().contains("validation_last_row"));
    }

    #[test]
    fn test_io_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = LinkMLError::io_at(Path::new("schemas/missing.yaml"), &source);
        assert_eq!(err.to_string(), "IO error: schemas/missing.yaml: not found");
        match err {
            LinkMLError::IoError(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Wrong error type: {other}"),
        }
    }
}
