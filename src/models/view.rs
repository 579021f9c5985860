//! Reporting views (`data/views/*.yaml`).

use serde::Deserialize;

use super::de::{lenient_string, nullable};
use super::reference::AttributeRef;

/// A named collection of attributes presented together
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewRecord {
    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(rename = "IncludedAttributes", default, deserialize_with = "nullable")]
    pub included_attributes: Vec<AttributeRef>,
}

impl ViewRecord {
    /// Display title, falling back to the file stem
    pub fn display_title<'a>(&'a self, stem: &'a str) -> &'a str {
        if self.title.trim().is_empty() {
            stem
        } else {
            &self.title
        }
    }
}
