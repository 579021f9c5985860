//! Read access to the YAML corpus.
//!
//! Each collection is a flat directory of `*.yaml` files, one document per
//! file. Files are visited in lexical order so reports are reproducible.
//! A missing directory is an empty collection.

mod corpus;
mod diagnostics;
mod error;

pub use corpus::Corpus;
pub use diagnostics::Diagnostics;
pub use error::DocumentError;

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of every document in the corpus
pub const YAML_EXTENSION: &str = "yaml";

/// A parsed document and where it came from
#[derive(Debug, Clone)]
pub struct Document<T> {
    pub path: PathBuf,
    /// File name without extension
    pub stem: String,
    pub body: T,
}

/// Lazy scan over one collection directory.
///
/// Yields one item per non-empty file. Empty documents (YAML null) are
/// skipped without an error.
pub struct DocumentScan<T> {
    paths: std::vec::IntoIter<Result<PathBuf, DocumentError>>,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> Iterator for DocumentScan<T> {
    type Item = Result<Document<T>, DocumentError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = match self.paths.next()? {
                Ok(path) => path,
                Err(e) => return Some(Err(e)),
            };

            match read_document(&path) {
                Ok(Some(doc)) => return Some(Ok(doc)),
                Ok(None) => {
                    debug!(path = %path.display(), "empty document");
                    continue;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Scan `dir` (non-recursively) for files ending in `.{extension}`.
pub fn scan_documents<T: DeserializeOwned>(dir: &Path, extension: &str) -> DocumentScan<T> {
    DocumentScan {
        paths: list_files(dir, extension).into_iter(),
        _marker: PhantomData,
    }
}

/// Collect every readable document, reporting and skipping the rest.
pub fn load_documents<T: DeserializeOwned>(
    dir: &Path,
    extension: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<Document<T>> {
    scan_documents(dir, extension)
        .filter_map(|result| match result {
            Ok(doc) => Some(doc),
            Err(e) => {
                diagnostics.report(e);
                None
            }
        })
        .collect()
}

/// Collect every document, failing on the first unreadable one.
pub fn load_documents_strict<T: DeserializeOwned>(
    dir: &Path,
    extension: &str,
) -> Result<Vec<Document<T>>, DocumentError> {
    scan_documents(dir, extension).collect()
}

fn list_files(dir: &Path, extension: &str) -> Vec<Result<PathBuf, DocumentError>> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        extension
    );

    let entries = match glob::glob(&pattern) {
        Ok(entries) => entries,
        Err(source) => return vec![Err(DocumentError::Pattern { pattern, source })],
    };

    entries
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(Ok(path)),
            Ok(_) => None,
            Err(e) => Some(Err(DocumentError::from(e))),
        })
        .collect()
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<Document<T>>, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(None);
    }

    let parse_error = |source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_yaml::from_str(&content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(None);
    }
    let body: T = serde_yaml::from_value(value).map_err(parse_error)?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Some(Document {
        path: path.to_path_buf(),
        stem,
        body,
    }))
}
