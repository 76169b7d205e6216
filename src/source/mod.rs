//! Data source abstraction for loading the collection document.
//!
//! This module provides a trait-based abstraction for loading item records
//! from various sources (local files, HTTP endpoints). The collection is
//! loaded exactly once at startup; a failed load is surfaced to the UI and is
//! never retried automatically.

mod collection;
mod file;
mod http;

pub use collection::{CollectionDocument, ItemAttribute, ItemRecord, TraitValue};
pub use file::FileSource;
pub use http::HttpSource;

use std::fmt::Debug;

use thiserror::Error;

/// Errors that can occur while loading a collection document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the document from disk failed.
    #[error("Read error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[error("Endpoint returned status {0}")]
    Status(u16),

    /// The document was not a valid collection.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Timeout waiting for the endpoint.
    #[error("Request timed out")]
    Timeout,

    /// Connection failed.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LoadError::Timeout
        } else if err.is_connect() {
            LoadError::Connection(err.to_string())
        } else {
            LoadError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Trait for loading the collection document from some backend.
///
/// Implementations perform one complete load per call. The application calls
/// `load` once at startup and again only on an explicit reload request.
///
/// # Example
///
/// ```
/// use mintview::{FileSource, ItemSource};
///
/// let mut source = FileSource::new("items.json");
/// match source.load() {
///     Ok(items) => println!("Loaded {} items", items.len()),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
pub trait ItemSource: Send + Debug {
    /// Load the full collection document.
    fn load(&mut self) -> Result<Vec<ItemRecord>, LoadError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
