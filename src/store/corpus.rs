use super::{load_documents, Diagnostics, Document, YAML_EXTENSION};
use crate::config::ProjectLayout;
use crate::models::{AttributeRecord, ObjectRecord, ViewRecord};

/// All three collections, loaded leniently in one pass
#[derive(Debug, Default)]
pub struct Corpus {
    pub attributes: Vec<Document<AttributeRecord>>,
    pub objects: Vec<Document<ObjectRecord>>,
    pub views: Vec<Document<ViewRecord>>,
    pub diagnostics: Diagnostics,
}

impl Corpus {
    pub fn load(layout: &ProjectLayout) -> Self {
        let mut diagnostics = Diagnostics::new();
        let attributes = load_documents(&layout.attributes_dir, YAML_EXTENSION, &mut diagnostics);
        let objects = load_documents(&layout.objects_dir, YAML_EXTENSION, &mut diagnostics);
        let views = load_documents(&layout.views_dir, YAML_EXTENSION, &mut diagnostics);

        Self {
            attributes,
            objects,
            views,
            diagnostics,
        }
    }
}
