use serde_yaml::{Number, Value};

use crate::models::{AttributeRecord, DataType, EnumValue};

/// Schema detail inferred for an attribute.
///
/// Every `Some` field (and a non-empty `values` list) replaces the
/// record's own value when applied; `None` leaves it alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaFragment {
    pub data_type: DataType,
    pub description: Option<String>,
    pub format: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub min_value: Option<Number>,
    pub max_value: Option<Number>,
    pub unit: Option<String>,
    pub precision: Option<u32>,
    pub values: Vec<EnumValue>,
    pub example: Option<Value>,
}

impl SchemaFragment {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            ..Default::default()
        }
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn format(mut self, pattern: &str) -> Self {
        self.format = Some(pattern.to_string());
        self
    }

    pub fn length(mut self, min: Option<u32>, max: u32) -> Self {
        self.min_length = min;
        self.max_length = Some(max);
        self
    }

    pub fn min(mut self, value: impl Into<Number>) -> Self {
        self.min_value = Some(value.into());
        self
    }

    pub fn max(mut self, value: impl Into<Number>) -> Self {
        self.max_value = Some(value.into());
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }

    pub fn values(mut self, values: &[(&str, &str)]) -> Self {
        self.values = values
            .iter()
            .map(|(label, description)| EnumValue::new(*label, *description))
            .collect();
        self
    }

    pub fn example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Overlay this fragment onto `record`
    pub fn apply_to(&self, record: &mut AttributeRecord) {
        record.data_type = self.data_type.clone();

        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if self.format.is_some() {
            record.format = self.format.clone();
        }
        if self.min_length.is_some() {
            record.min_length = self.min_length;
        }
        if self.max_length.is_some() {
            record.max_length = self.max_length;
        }
        if self.min_value.is_some() {
            record.min_value = self.min_value.clone();
        }
        if self.max_value.is_some() {
            record.max_value = self.max_value.clone();
        }
        if self.unit.is_some() {
            record.unit = self.unit.clone();
        }
        if self.precision.is_some() {
            record.precision = self.precision;
        }
        if !self.values.is_empty() {
            record.values = self.values.clone();
        }
        if self.example.is_some() {
            record.example = self.example.clone();
        }
    }
}
