//! File-based collection source.
//!
//! Reads the collection document from a local JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{CollectionDocument, ItemRecord, ItemSource, LoadError};

/// A source that loads the collection from a JSON file on disk.
///
/// This is the traditional mode of operation: a metadata exporter writes the
/// collection next to the viewer, and the viewer reads it once at startup.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for FileSource {
    fn load(&mut self) -> Result<Vec<ItemRecord>, LoadError> {
        let content = fs::read_to_string(&self.path)?;
        let document: CollectionDocument = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), items = document.len(), "loaded collection");
        Ok(document)
    }

    fn description(&self) -> &str {
        &self.description
    }
}
