//! Name-based references from Objects, Perspectives and Views to attributes.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use super::de::scalar_to_string;

/// One entry of a `CoreAttributes`, `RelevantAttributes` or
/// `IncludedAttributes` list.
///
/// Hand-written files use either a bare name or a mapping carrying `Name`
/// (plus arbitrary annotations). Both resolve to the same reference.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeRef {
    Bare(String),
    Entry { name: Option<String> },
    Other(Value),
}

impl<'de> Deserialize<'de> for AttributeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => AttributeRef::Bare(s),
            Value::Mapping(map) => AttributeRef::Entry {
                name: map.get("Name").and_then(scalar_to_string),
            },
            other => AttributeRef::Other(other),
        })
    }
}

impl AttributeRef {
    /// Referenced display name, trimmed. `None` for blank or missing names.
    pub fn name(&self) -> Option<String> {
        let raw = match self {
            AttributeRef::Bare(s) => s.clone(),
            AttributeRef::Entry { name } => name.clone()?,
            AttributeRef::Other(value) => scalar_to_string(value)?,
        };
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
