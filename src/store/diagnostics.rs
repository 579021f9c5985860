use tracing::warn;

use super::error::DocumentError;

/// Collects per-file failures during a lenient scan.
///
/// Every failure is also emitted as a `warn!` event as it is recorded.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<DocumentError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, error: DocumentError) {
        match error.path() {
            Some(path) => warn!(path = %path.display(), "skipping document: {error}"),
            None => warn!("skipping documents: {error}"),
        }
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[DocumentError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
