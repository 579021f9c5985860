//! Front matter written for each generated page.

use anyhow::{Context, Result};
use serde::Serialize;

use super::provenance::Provenance;
use crate::models::{AttributeRecord, ObjectRecord, ViewRecord};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributePage<'a> {
    pub title: &'a str,
    pub id: &'a str,
    pub data_type: String,
    pub description: &'a str,
    pub source_system: &'a str,
    pub source_type: &'a str,
    pub source_entity: &'a str,
    pub refresh_rate: &'a str,
}

impl<'a> AttributePage<'a> {
    pub fn new(record: &'a AttributeRecord, stem: &'a str, provenance: &'a Provenance) -> Self {
        Self {
            title: record.display_name(stem),
            id: &record.id,
            data_type: record.data_type.to_string(),
            description: &record.description,
            source_system: provenance.system,
            source_type: provenance.source_type,
            source_entity: provenance.entity,
            refresh_rate: provenance.refresh,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ObjectPage {
    pub title: String,
    pub description: String,
}

impl ObjectPage {
    pub fn new(record: &ObjectRecord, stem: &str) -> Self {
        let name = record.display_name(stem);
        Self {
            title: name.to_string(),
            description: format!("Definition of the {name} business object."),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViewPage<'a> {
    pub title: String,
    pub description: &'a str,
}

impl<'a> ViewPage<'a> {
    /// Title comes from the file stem: `Airline_DashboardView` -> `Airline DashboardView`
    pub fn new(record: &'a ViewRecord, stem: &str) -> Self {
        Self {
            title: stem.replace('_', " "),
            description: &record.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PerspectivePage<'a> {
    pub title: &'a str,
    pub object_id: &'a str,
    pub perspective_id: &'a str,
}

/// Serialize `page` between `---` fences
pub fn render<T: Serialize>(page: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(page).context("Failed to serialize front matter")?;
    Ok(format!("---\n{yaml}---\n"))
}
