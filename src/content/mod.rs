//! Static-site content generation.
//!
//! Every record in the corpus gets a Markdown page under `content/` whose
//! front matter carries what the site templates need. The body is left
//! empty; templates pull the rest from `data/`.

pub mod pages;
pub mod provenance;

pub use provenance::{Provenance, ProvenanceTable};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ProjectLayout;
use crate::models::{AttributeRecord, ObjectRecord, ViewRecord};
use crate::names::slugify;
use crate::store::{load_documents_strict, Document, YAML_EXTENSION};
use pages::{AttributePage, ObjectPage, PerspectivePage, ViewPage};

/// Kind of generated page, also the `content/` subdirectory name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Attribute,
    Object,
    View,
    Perspective,
}

impl PageKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            PageKind::Attribute => "attributes",
            PageKind::Object => "objects",
            PageKind::View => "views",
            PageKind::Perspective => "perspectives",
        }
    }
}

/// One written page
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub kind: PageKind,
    pub path: PathBuf,
    /// What the page was generated from, for display
    pub origin: String,
}

#[derive(Debug, Default)]
pub struct ContentReport {
    pub pages: Vec<GeneratedPage>,
}

impl ContentReport {
    pub fn count(&self, kind: PageKind) -> usize {
        self.pages.iter().filter(|p| p.kind == kind).count()
    }

    pub fn total(&self) -> usize {
        self.pages.len()
    }
}

/// Writes pages for one project. Any failure aborts the run.
pub struct ContentGenerator<'a> {
    layout: &'a ProjectLayout,
    provenance: &'a ProvenanceTable,
}

impl<'a> ContentGenerator<'a> {
    pub fn new(layout: &'a ProjectLayout, provenance: &'a ProvenanceTable) -> Self {
        Self { layout, provenance }
    }

    /// Generate attribute, object, view and perspective pages, in that order.
    ///
    /// `on_page` is called after each file is written.
    pub fn generate(&self, mut on_page: impl FnMut(&GeneratedPage)) -> Result<ContentReport> {
        let attributes: Vec<Document<AttributeRecord>> =
            load_documents_strict(&self.layout.attributes_dir, YAML_EXTENSION)?;
        let objects: Vec<Document<ObjectRecord>> =
            load_documents_strict(&self.layout.objects_dir, YAML_EXTENSION)?;
        let views: Vec<Document<ViewRecord>> =
            load_documents_strict(&self.layout.views_dir, YAML_EXTENSION)?;

        let mut report = ContentReport::default();
        let mut emit = |page: GeneratedPage| {
            on_page(&page);
            report.pages.push(page);
        };

        let dir = self.prepare_dir(PageKind::Attribute)?;
        for doc in &attributes {
            let provenance = self.provenance.lookup(doc.body.display_name(&doc.stem));
            let page = AttributePage::new(&doc.body, &doc.stem, provenance);
            let path = dir.join(format!("{}.md", doc.stem));
            write_page(&path, &pages::render(&page)?)?;
            emit(GeneratedPage {
                kind: PageKind::Attribute,
                path,
                origin: file_name(&doc.path),
            });
        }

        let dir = self.prepare_dir(PageKind::Object)?;
        for doc in &objects {
            let page = ObjectPage::new(&doc.body, &doc.stem);
            let path = dir.join(format!("{}.md", doc.stem.to_lowercase()));
            write_page(&path, &pages::render(&page)?)?;
            emit(GeneratedPage {
                kind: PageKind::Object,
                path,
                origin: file_name(&doc.path),
            });
        }

        let dir = self.prepare_dir(PageKind::View)?;
        for doc in &views {
            let page = ViewPage::new(&doc.body, &doc.stem);
            let path = dir.join(format!("{}.md", doc.stem));
            write_page(&path, &pages::render(&page)?)?;
            emit(GeneratedPage {
                kind: PageKind::View,
                path,
                origin: file_name(&doc.path),
            });
        }

        let dir = self.prepare_dir(PageKind::Perspective)?;
        for doc in &objects {
            let object_slug = doc.stem.to_lowercase();
            for (perspective_name, _) in &doc.body.perspectives {
                let page = PerspectivePage {
                    title: perspective_name,
                    object_id: &doc.stem,
                    perspective_id: perspective_name,
                };
                let path = dir.join(format!("{object_slug}-{}.md", slugify(perspective_name)));
                write_page(&path, &pages::render(&page)?)?;
                emit(GeneratedPage {
                    kind: PageKind::Perspective,
                    path,
                    origin: format!("{} -> {perspective_name}", doc.stem),
                });
            }
        }

        Ok(report)
    }

    fn prepare_dir(&self, kind: PageKind) -> Result<PathBuf> {
        let dir = self.layout.content_subdir(kind.dir_name());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        Ok(dir)
    }
}

fn write_page(path: &Path, content: &str) -> Result<()> {
    debug!(path = %path.display(), "writing page");
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
