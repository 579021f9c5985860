//! Business objects and their perspectives (`data/objects/*.yaml`).

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_yaml::Mapping;

use super::de::{lenient_string, nullable, scalar_to_string};
use super::reference::AttributeRef;

/// A business entity grouping core attributes and named perspectives
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectRecord {
    #[serde(rename = "Name", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "CoreAttributes", default, deserialize_with = "nullable")]
    pub core_attributes: Vec<AttributeRef>,
    /// Perspectives in document key order
    #[serde(
        rename = "SystemPerspectives",
        default,
        deserialize_with = "ordered_perspectives"
    )]
    pub perspectives: Vec<(String, PerspectiveRecord)>,
}

impl ObjectRecord {
    /// Display name, falling back to the file stem
    pub fn display_name<'a>(&'a self, stem: &'a str) -> &'a str {
        if self.name.trim().is_empty() {
            stem
        } else {
            &self.name
        }
    }
}

/// A domain-specific slice of an object, owned by that object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerspectiveRecord {
    #[serde(rename = "RelevantAttributes", default, deserialize_with = "nullable")]
    pub relevant_attributes: Vec<AttributeRef>,
}

fn ordered_perspectives<'de, D>(deserializer: D) -> Result<Vec<(String, PerspectiveRecord)>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(mapping) = Option::<Mapping>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    let mut perspectives = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let Some(name) = scalar_to_string(&key) else {
            return Err(D::Error::custom("perspective names must be scalars"));
        };
        let record: Option<PerspectiveRecord> =
            serde_yaml::from_value(value).map_err(D::Error::custom)?;
        perspectives.push((name, record.unwrap_or_default()));
    }

    Ok(perspectives)
}
