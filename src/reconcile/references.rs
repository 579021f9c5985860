//! Collect every attribute name referenced by Objects, Perspectives and Views.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{AttributeRef, ObjectRecord, ViewRecord};
use crate::names::normalize;
use crate::store::Document;

/// Where a name was used. Only used for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name")]
pub enum ReferenceSite {
    Object(String),
    Perspective(String),
    View(String),
}

impl fmt::Display for ReferenceSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSite::Object(name) => write!(f, "Object: {name}"),
            ReferenceSite::Perspective(name) => write!(f, "Perspective: {name}"),
            ReferenceSite::View(name) => write!(f, "View: {name}"),
        }
    }
}

/// Everything known about one referenced canonical name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferencedName {
    /// First spelling encountered, trimmed
    pub display: String,
    /// Sites in traversal order
    pub sites: Vec<ReferenceSite>,
}

/// Canonical name -> references, iterated in canonical order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceMap {
    entries: BTreeMap<String, ReferencedName>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one use of `name` at `site`. Blank names are ignored.
    pub fn record(&mut self, name: &str, site: ReferenceSite) {
        let key = normalize(name);
        if key.is_empty() {
            return;
        }

        self.entries
            .entry(key)
            .or_insert_with(|| ReferencedName {
                display: name.trim().to_string(),
                sites: Vec::new(),
            })
            .sites
            .push(site);
    }

    pub fn get(&self, key: &str) -> Option<&ReferencedName> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferencedName)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record_all(&mut self, refs: &[AttributeRef], site: impl Fn() -> ReferenceSite) {
        for name in refs.iter().filter_map(AttributeRef::name) {
            self.record(&name, site());
        }
    }
}

/// Walk objects (core attributes, then each perspective in document order)
/// and then views, recording every named reference.
pub fn collect_references(
    objects: &[Document<ObjectRecord>],
    views: &[Document<ViewRecord>],
) -> ReferenceMap {
    let mut map = ReferenceMap::new();

    for doc in objects {
        let object = &doc.body;
        let object_name = object.display_name(&doc.stem);

        map.record_all(&object.core_attributes, || {
            ReferenceSite::Object(object_name.to_string())
        });

        for (perspective_name, perspective) in &object.perspectives {
            map.record_all(&perspective.relevant_attributes, || {
                ReferenceSite::Perspective(perspective_name.clone())
            });
        }
    }

    for doc in views {
        let view_title = doc.body.display_title(&doc.stem);
        map.record_all(&doc.body.included_attributes, || {
            ReferenceSite::View(view_title.to_string())
        });
    }

    map
}
