//! HTTP-based collection source.
//!
//! Performs a single GET of the collection document from an endpoint.

use reqwest::Client;
use tokio::runtime::Runtime;
use tracing::debug;

use super::{CollectionDocument, ItemRecord, ItemSource, LoadError};

/// A source that fetches the collection from an HTTP endpoint.
///
/// The request is a plain one-shot GET; there is no pagination, caching, or
/// authentication. The source owns a tokio runtime and drives the async
/// client to completion inside `load`.
///
/// # Example
///
/// ```no_run
/// use mintview::{HttpSource, ItemSource};
///
/// # fn main() -> anyhow::Result<()> {
/// let mut source = HttpSource::new("https://cdn.example/items.json")?;
/// let items = source.load()?;
/// println!("Fetched {} items", items.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpSource {
    url: String,
    description: String,
    client: Client,
    runtime: Runtime,
}

impl HttpSource {
    /// Create a new HTTP source for the given endpoint.
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self {
            url: url.to_string(),
            description: format!("url: {}", url),
            client: Client::new(),
            runtime,
        })
    }

    /// Returns the endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<CollectionDocument, LoadError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }

        let document: CollectionDocument =
            response.json().await.map_err(|e| LoadError::Parse(e.to_string()))?;
        Ok(document)
    }
}

impl ItemSource for HttpSource {
    fn load(&mut self) -> Result<Vec<ItemRecord>, LoadError> {
        let document = self.runtime.block_on(self.fetch())?;
        debug!(url = %self.url, items = document.len(), "fetched collection");
        Ok(document)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_new() {
        let source = HttpSource::new("http://localhost:9999/items.json").unwrap();
        assert_eq!(source.url(), "http://localhost:9999/items.json");
        assert_eq!(source.description(), "url: http://localhost:9999/items.json");
    }

    #[test]
    fn test_http_source_connection_error() {
        // Port 1 is not expected to serve HTTP
        let mut source = HttpSource::new("http://127.0.0.1:1/items.json").unwrap();
        let err = source.load().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Connection(_) | LoadError::Http(_) | LoadError::Timeout
        ));
    }
}
