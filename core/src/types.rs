//! Core type definitions for LinkML schemas

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Schema definition - the root of a `LinkML` schema
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SchemaDefinition {
    /// Unique identifier for the schema
    #[serde(default)]
    pub id: String,

    /// Name of the schema
    #[serde(default)]
    pub name: String,

    /// Human-readable title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description of the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Version of the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// License information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Default prefix for the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prefix: Option<String>,

    /// Prefix declarations
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub prefixes: IndexMap<String, PrefixDefinition>,

    /// Import statements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// Class definitions
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub classes: IndexMap<String, ClassDefinition>,

    /// Slot definitions
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub slots: IndexMap<String, SlotDefinition>,

    /// Type definitions
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub types: IndexMap<String, TypeDefinition>,

    /// Enum definitions
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub enums: IndexMap<String, EnumDefinition>,

    /// Default range for slots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_range: Option<String>,

    /// Source file the schema was loaded from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
}

/// Class definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassDefinition {
    /// Name of the class
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Is this class abstract?
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<bool>,

    /// Is this a mixin?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixin: Option<bool>,

    /// Parent class (single inheritance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,

    /// Mixin classes (multiple inheritance via composition)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,

    /// Slots used by this class
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<String>,

    /// Slot usage overrides
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub slot_usage: IndexMap<String, SlotDefinition>,

    /// Attributes (inline slots)
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "deserialize_definitions"
    )]
    pub attributes: IndexMap<String, SlotDefinition>,

    /// Class URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_uri: Option<String>,

    /// Tree root flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_root: Option<bool>,
}

/// Slot definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SlotDefinition {
    /// Name of the slot
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Range (type) of the slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Is this slot required?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Is this slot multivalued?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multivalued: Option<bool>,

    /// Is this slot an identifier?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<bool>,

    /// Name the slot is exposed under within a class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Pattern for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Domain - the class that this slot applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Slot URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_uri: Option<String>,
}

/// Type definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TypeDefinition {
    /// Name of the type
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Base type
    #[serde(skip_serializing_if = "Option::is_none", rename = "typeof")]
    pub base_type: Option<String>,

    /// Type URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Pattern constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Enum definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnumDefinition {
    /// Name of the enum
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Permissible values
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_permissible_values"
    )]
    pub permissible_values: Vec<PermissibleValue>,

    /// Code set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_set: Option<String>,
}

/// Metadata attached to a permissible value in the map form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PermissibleValueMetadata {
    /// Description of this permissible value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Meaning URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

/// The code of a permissible value.
///
/// Accepts either a bare string or a `{ code: ... }` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PermissibleValueTextRepr")]
pub struct PermissibleValueText {
    /// The value code as it appears in data
    pub code: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PermissibleValueTextRepr {
    Bare(String),
    Wrapped { code: String },
}

impl From<PermissibleValueTextRepr> for PermissibleValueText {
    fn from(repr: PermissibleValueTextRepr) -> Self {
        match repr {
            PermissibleValueTextRepr::Bare(code) | PermissibleValueTextRepr::Wrapped { code } => {
                Self { code }
            }
        }
    }
}

impl PermissibleValueText {
    /// Wrap a value code
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl From<&str> for PermissibleValueText {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// A permissible value of an enumeration.
///
/// Variant order matters for untagged deserialization: anything that is
/// not one of the first three shapes lands in `Unrecognized`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PermissibleValue {
    /// Bare text token
    Simple(String),
    /// Structured value whose code sits under `text`
    Complex {
        /// Value code
        text: PermissibleValueText,
        /// Description
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        /// Meaning URI
        #[serde(skip_serializing_if = "Option::is_none")]
        meaning: Option<String>,
    },
    /// Text-only wrapper
    Text(PermissibleValueText),
    /// Any other shape
    Unrecognized(Value),
}

impl PermissibleValue {
    /// Create a bare text value
    pub fn simple(code: impl Into<String>) -> Self {
        Self::Simple(code.into())
    }

    /// Create a structured value with no metadata
    pub fn complex(code: impl Into<String>) -> Self {
        Self::Complex {
            text: PermissibleValueText::new(code),
            description: None,
            meaning: None,
        }
    }
}

/// Prefix definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PrefixDefinition {
    /// Simple string expansion
    Simple(String),
    /// Complex prefix with reference
    Complex {
        /// Prefix expansion
        prefix_prefix: String,
        /// Reference URL
        #[serde(skip_serializing_if = "Option::is_none")]
        prefix_reference: Option<String>,
    },
}

impl SchemaDefinition {
    /// Create a new schema definition with the given name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("https://example.org/{name}"),
            name,
            ..Default::default()
        }
    }

    /// Fill in element names that were only given as map keys.
    ///
    /// `LinkML` YAML names classes, slots, enums and types by their key, so
    /// after deserialization the `name` fields are usually empty.
    pub fn fill_element_names(&mut self) {
        for (name, class) in &mut self.classes {
            if class.name.is_empty() {
                class.name.clone_from(name);
            }
            for (attr_name, attr) in &mut class.attributes {
                if attr.name.is_empty() {
                    attr.name.clone_from(attr_name);
                }
            }
            for (usage_name, usage) in &mut class.slot_usage {
                if usage.name.is_empty() {
                    usage.name.clone_from(usage_name);
                }
            }
        }
        for (name, slot) in &mut self.slots {
            if slot.name.is_empty() {
                slot.name.clone_from(name);
            }
        }
        for (name, enum_def) in &mut self.enums {
            if enum_def.name.is_empty() {
                enum_def.name.clone_from(name);
            }
        }
        for (name, type_def) in &mut self.types {
            if type_def.name.is_empty() {
                type_def.name.clone_from(name);
            }
        }
    }
}

impl ClassDefinition {
    /// Create a new class definition with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the class is abstract or a mixin
    #[must_use]
    pub fn is_abstract_or_mixin(&self) -> bool {
        self.abstract_.unwrap_or(false) || self.mixin.unwrap_or(false)
    }
}

impl SlotDefinition {
    /// Create a new slot definition with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Name the slot is exposed under: its alias if set, else its name
    #[must_use]
    pub fn aliased_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl EnumDefinition {
    /// Create a new enum definition with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Deserialize a name-keyed map whose values may be null (`name:` with no body)
fn deserialize_definitions<'de, D, T>(deserializer: D) -> std::result::Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw = Option::<IndexMap<String, Option<T>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, def)| (name, def.unwrap_or_default()))
        .collect())
}

/// Custom deserializer for `permissible_values` that handles both map and sequence formats
fn deserialize_permissible_values<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<PermissibleValue>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct PermissibleValuesVisitor;

    impl<'de> Visitor<'de> for PermissibleValuesVisitor {
        type Value = Vec<PermissibleValue>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a sequence or map of permissible values")
        }

        // Sequence format: ["value1", {text: value2}, {code: value3}]
        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Vec<PermissibleValue>, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut values = Vec::new();
            while let Some(value) = seq.next_element::<PermissibleValue>()? {
                values.push(value);
            }
            Ok(values)
        }

        // Map format: { "value1": null, "value2": { "description": "..." } }
        fn visit_map<M>(self, mut map: M) -> std::result::Result<Vec<PermissibleValue>, M::Error>
        where
            M: de::MapAccess<'de>,
        {
            let mut values = Vec::new();
            while let Some((key, value)) =
                map.next_entry::<String, Option<PermissibleValueMetadata>>()?
            {
                let pv = if let Some(metadata) = value {
                    PermissibleValue::Complex {
                        text: PermissibleValueText::new(key),
                        description: metadata.description,
                        meaning: metadata.meaning,
                    }
                } else {
                    PermissibleValue::Simple(key)
                };
                values.push(pv);
            }
            Ok(values)
        }

        fn visit_unit<E>(self) -> std::result::Result<Vec<PermissibleValue>, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(PermissibleValuesVisitor)
}
