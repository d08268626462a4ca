//! JSON parser for `LinkML` schemas

use linkml_core::{
    error::{LinkMLError, Result},
    types::SchemaDefinition,
};

use super::SchemaParser;

/// `JSON` parser implementation
#[derive(Default)]
pub struct JsonParser;

impl JsonParser {
    /// Create a new `JSON` parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition> {
        let mut schema: SchemaDefinition = serde_json::from_str(content)
            .map_err(|e| LinkMLError::parse(format!("JSON parsing error: {e}")))?;
        schema.fill_element_names();
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_schema() -> std::result::Result<(), anyhow::Error> {
        let json = r#"{
            "id": "https://example.org/test",
            "name": "test_schema",
            "enums": {"StatusEnum": {"permissible_values": {"active": {}, "inactive": null}}}
        }"#;

        let parser = JsonParser::new();
        let schema = parser.parse_str(json)?;

        assert_eq!(schema.id, "https://example.org/test");
        assert_eq!(schema.name, "test_schema");
        assert_eq!(schema.enums["StatusEnum"].name, "StatusEnum");
        assert_eq!(schema.enums["StatusEnum"].permissible_values.len(), 2);
        Ok(())
    }

    #[test]
    fn test_parse_invalid_json() {
        let json = r#"{"invalid": json content"#;

        let parser = JsonParser::new();
        let result = parser.parse_str(json);

        assert!(result.is_err());
        if let Err(LinkMLError::ParseError { message, .. }) = result {
            assert!(message.contains("JSON parsing error"));
        } else {
            panic!("Expected ParseError");
        }
    }
}
