//! Names that are referenced but never defined.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::references::{ReferenceMap, ReferenceSite};
use crate::models::AttributeRecord;
use crate::store::Document;

/// Sites shown per missing name before collapsing into "+N more"
pub const SITE_PREVIEW_LIMIT: usize = 3;

/// Canonical keys of every attribute record with a non-blank name
pub fn defined_names(attributes: &[Document<AttributeRecord>]) -> BTreeSet<String> {
    attributes
        .iter()
        .filter_map(|doc| doc.body.canonical_name())
        .collect()
}

/// Referenced canonical keys absent from `defined`, ascending
pub fn missing_names(defined: &BTreeSet<String>, references: &ReferenceMap) -> Vec<String> {
    references
        .keys()
        .filter(|key| !defined.contains(*key))
        .map(str::to_string)
        .collect()
}

/// One referenced-but-undefined attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gap {
    pub key: String,
    pub display: String,
    pub sites: Vec<ReferenceSite>,
}

impl Gap {
    pub fn site_summary(&self) -> SiteSummary<'_> {
        let shown = self.sites.len().min(SITE_PREVIEW_LIMIT);
        SiteSummary {
            shown: &self.sites[..shown],
            remaining: self.sites.len() - shown,
        }
    }
}

/// At most [`SITE_PREVIEW_LIMIT`] sites plus a count of the rest
#[derive(Debug, Clone, Copy)]
pub struct SiteSummary<'a> {
    pub shown: &'a [ReferenceSite],
    pub remaining: usize,
}

impl fmt::Display for SiteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, site) in self.shown.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{site}")?;
        }
        if self.remaining > 0 {
            write!(f, " (+{} more)", self.remaining)?;
        }
        Ok(())
    }
}

/// Missing names with their reference sites, in canonical order
pub fn find_gaps(defined: &BTreeSet<String>, references: &ReferenceMap) -> Vec<Gap> {
    missing_names(defined, references)
        .into_iter()
        .filter_map(|key| {
            let referenced = references.get(&key)?;
            Some(Gap {
                display: referenced.display.clone(),
                sites: referenced.sites.clone(),
                key,
            })
        })
        .collect()
}
