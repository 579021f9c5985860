use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn one file of the corpus into a typed document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to list {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to list directory entry: {0}")]
    Glob(#[from] glob::GlobError),
}

impl DocumentError {
    /// File the error is about, when there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DocumentError::Read { path, .. } | DocumentError::Parse { path, .. } => Some(path),
            DocumentError::Glob(e) => Some(e.path()),
            DocumentError::Pattern { .. } => None,
        }
    }
}
