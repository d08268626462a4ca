//! Enumeration registry filled while enums are visited.

use super::super::traits::{GeneratorError, GeneratorResult};
use indexmap::IndexMap;
use linkml_core::types::{EnumDefinition, PermissibleValue};

/// Plain code of a permissible value.
///
/// # Errors
/// Returns [`GeneratorError::InvalidPermissibleValue`] for any shape other
/// than a bare token, a structured value with a `text` code, or a text-only
/// wrapper.
pub fn permissible_value_code<'a>(
    enum_name: &str,
    value: &'a PermissibleValue,
) -> GeneratorResult<&'a str> {
    match value {
        PermissibleValue::Simple(text) => Ok(text.as_str()),
        PermissibleValue::Complex { text, .. } => Ok(text.code.as_str()),
        PermissibleValue::Text(text) => Ok(text.code.as_str()),
        PermissibleValue::Unrecognized(other) => Err(GeneratorError::InvalidPermissibleValue {
            enum_name: enum_name.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Enum name to ordered permissible value codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumRegistry {
    values: IndexMap<String, Vec<String>>,
}

impl EnumRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and record the values of `enum_def`.
    ///
    /// A later registration under the same name replaces the earlier one.
    ///
    /// # Errors
    /// Fails on the first value with an unrecognized shape; nothing is
    /// recorded in that case.
    pub fn register(&mut self, enum_def: &EnumDefinition) -> GeneratorResult<&[String]> {
        let codes = enum_def
            .permissible_values
            .iter()
            .map(|value| permissible_value_code(&enum_def.name, value).map(str::to_string))
            .collect::<GeneratorResult<Vec<_>>>()?;

        if self.values.contains_key(&enum_def.name) {
            tracing::debug!("Enum '{}' registered again, replacing values", enum_def.name);
        }
        let entry = self.values.entry(enum_def.name.clone()).or_default();
        *entry = codes;
        Ok(entry.as_slice())
    }

    /// Values registered for `enum_name`
    #[must_use]
    pub fn get(&self, enum_name: &str) -> Option<&[String]> {
        self.values.get(enum_name).map(Vec::as_slice)
    }

    /// Whether `enum_name` has been registered
    #[must_use]
    pub fn contains(&self, enum_name: &str) -> bool {
        self.values.contains_key(enum_name)
    }

    /// Number of registered enums
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
