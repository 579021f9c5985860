//! Attribute records as stored in `data/attributes/*.yaml`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Number, Value};
use std::fmt;

use super::de::scalar_to_string;

/// Declared type of an attribute's values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    #[default]
    String,
    Integer,
    Decimal,
    DateTime,
    Enum,
    /// Any type name this tool does not know yet, kept verbatim
    Other(String),
}

impl From<String> for DataType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "String" => DataType::String,
            "Integer" => DataType::Integer,
            "Decimal" => DataType::Decimal,
            "DateTime" => DataType::DateTime,
            "Enum" => DataType::Enum,
            _ => DataType::Other(s),
        }
    }
}

impl From<DataType> for String {
    fn from(t: DataType) -> Self {
        t.to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => write!(f, "String"),
            DataType::Integer => write!(f, "Integer"),
            DataType::Decimal => write!(f, "Decimal"),
            DataType::DateTime => write!(f, "DateTime"),
            DataType::Enum => write!(f, "Enum"),
            DataType::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Lifecycle state of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Draft,
    Active,
    Other(String),
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "draft" => Status::Draft,
            "active" => Status::Active,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Draft => write!(f, "draft"),
            Status::Active => write!(f, "active"),
            Status::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Who produced the record's content.
///
/// Only `AutoGenerated` records are eligible for schema population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Source {
    AutoGenerated,
    Inferred,
    Manual,
    Other(String),
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Auto-generated" => Source::AutoGenerated,
            "Inferred" => Source::Inferred,
            "Manual" => Source::Manual,
            _ => Source::Other(s),
        }
    }
}

impl From<Source> for String {
    fn from(s: Source) -> Self {
        s.to_string()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::AutoGenerated => write!(f, "Auto-generated"),
            Source::Inferred => write!(f, "Inferred"),
            Source::Manual => write!(f, "Manual"),
            Source::Other(s) => write!(f, "{s}"),
        }
    }
}

/// One allowed value of an `Enum` attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl EnumValue {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

/// A single data dictionary entry.
///
/// Keys this tool does not model land in `extra` and are written back
/// unchanged, after the known fields. A known constraint key whose value
/// does not fit its type (`values: [Normal, Closed]`, `precision: 2.5`)
/// is kept in `extra` as well, so any YAML mapping yields a record with
/// its `id` and `name` intact.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub data_type: DataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EnumValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl<'de> Deserialize<'de> for AttributeRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mapping = Option::<Mapping>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::from_mapping(mapping))
    }
}

impl AttributeRecord {
    /// Build a record from any mapping, in document key order.
    ///
    /// Identity fields take any scalar. Typed fields that do not fit are
    /// moved to `extra` instead of failing the record.
    pub fn from_mapping(mapping: Mapping) -> Self {
        let mut record = Self::default();

        for (key, value) in mapping {
            let kept = match key.as_str() {
                Some("id") => text(&mut record.id, &value),
                Some("name") => text(&mut record.name, &value),
                Some("description") => text(&mut record.description, &value),
                Some("dataType") => {
                    if let Some(name) = scalar_to_string(&value) {
                        record.data_type = DataType::from(name);
                    }
                    true
                }
                Some("source") => labelled(&mut record.source, &value),
                Some("status") => labelled(&mut record.status, &value),
                Some("format") => typed(&mut record.format, &value),
                Some("minLength") => typed(&mut record.min_length, &value),
                Some("maxLength") => typed(&mut record.max_length, &value),
                Some("minValue") => typed(&mut record.min_value, &value),
                Some("maxValue") => typed(&mut record.max_value, &value),
                Some("unit") => typed(&mut record.unit, &value),
                Some("precision") => typed(&mut record.precision, &value),
                Some("values") => {
                    if value.is_null() {
                        true
                    } else if let Ok(values) = serde_yaml::from_value(value.clone()) {
                        record.values = values;
                        true
                    } else {
                        false
                    }
                }
                Some("example") => {
                    record.example = (!value.is_null()).then(|| value.clone());
                    true
                }
                _ => false,
            };

            if !kept {
                record.extra.insert(key, value);
            }
        }

        record
    }

    /// Drop `extra` entries a typed field now carries, so a rewrite never
    /// emits the same key twice.
    pub fn release_shadowed_extras(&mut self) {
        let set = [
            ("format", self.format.is_some()),
            ("minLength", self.min_length.is_some()),
            ("maxLength", self.max_length.is_some()),
            ("minValue", self.min_value.is_some()),
            ("maxValue", self.max_value.is_some()),
            ("unit", self.unit.is_some()),
            ("precision", self.precision.is_some()),
            ("values", !self.values.is_empty()),
            ("source", self.source.is_some()),
            ("status", self.status.is_some()),
        ];
        for (key, present) in set {
            if present {
                self.extra.remove(key);
            }
        }
    }

    /// Canonical key of the display name, `None` when the name is blank
    pub fn canonical_name(&self) -> Option<String> {
        let key = crate::names::normalize(&self.name);
        (!key.is_empty()).then_some(key)
    }

    /// Display name, falling back to the file stem
    pub fn display_name<'a>(&'a self, stem: &'a str) -> &'a str {
        if self.name.trim().is_empty() {
            stem
        } else {
            &self.name
        }
    }

    pub fn is_auto_generated(&self) -> bool {
        self.source == Some(Source::AutoGenerated)
    }
}

/// Scalars become text, null leaves the default. Anything else is dropped
/// since the field is always written.
fn text(field: &mut String, value: &Value) -> bool {
    if let Some(s) = scalar_to_string(value) {
        *field = s;
    }
    true
}

fn labelled<T: From<String>>(field: &mut Option<T>, value: &Value) -> bool {
    if value.is_null() {
        return true;
    }
    match scalar_to_string(value) {
        Some(label) => {
            *field = Some(T::from(label));
            true
        }
        None => false,
    }
}

fn typed<T: DeserializeOwned>(field: &mut Option<T>, value: &Value) -> bool {
    if value.is_null() {
        return true;
    }
    match serde_yaml::from_value(value.clone()) {
        Ok(v) => {
            *field = Some(v);
            true
        }
        Err(_) => false,
    }
}
