//! YAML parser for `LinkML` schemas

use linkml_core::{
    error::{LinkMLError, Result},
    types::SchemaDefinition,
};

use super::SchemaParser;

/// `YAML` parser implementation
#[derive(Default)]
pub struct YamlParser;

impl YamlParser {
    /// Create a new `YAML` parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaParser for YamlParser {
    fn parse_str(&self, content: &str) -> Result<SchemaDefinition> {
        let mut schema: SchemaDefinition = serde_yaml::from_str(content).map_err(|e| {
            let location = e
                .location()
                .map(|loc| format!("line {}, column {}", loc.line(), loc.column()));
            match location {
                Some(location) => {
                    LinkMLError::parse_at(format!("YAML parsing error: {e}"), location)
                }
                None => LinkMLError::parse(format!("YAML parsing error: {e}")),
            }
        })?;
        schema.fill_element_names();
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkml_core::types::PermissibleValue;

    #[test]
    fn test_parse_schema_with_mixed_permissible_values() -> std::result::Result<(), anyhow::Error> {
        let yaml = r"
id: https://example.org/people
name: people
classes:
  Person:
    slots: [name, status]
slots:
  name:
  status:
    range: StatusEnum
enums:
  StatusEnum:
    permissible_values:
      - active
      - text: inactive
        description: No longer active
      - code: pending
";
        let schema = YamlParser::new().parse_str(yaml)?;

        assert_eq!(schema.classes["Person"].slots, vec!["name", "status"]);
        assert_eq!(schema.slots["status"].name, "status");
        let values = &schema.enums["StatusEnum"].permissible_values;
        assert!(matches!(values[0], PermissibleValue::Simple(_)));
        assert!(matches!(values[1], PermissibleValue::Complex { .. }));
        assert!(matches!(values[2], PermissibleValue::Text(_)));
        Ok(())
    }

    #[test]
    fn test_parse_error_has_location() {
        let result = YamlParser::new().parse_str("name: [unclosed");
        match result {
            Err(LinkMLError::ParseError { message, .. }) => {
                assert!(message.contains("YAML parsing error"));
            }
            other => panic!("Expected ParseError, got {other:?}"),
        }
    }
}
