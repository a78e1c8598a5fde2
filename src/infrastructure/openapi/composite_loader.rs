//! Composite spec loader that dispatches on the source kind

use async_trait::async_trait;

use super::document::{SpecDocument, http_url};
use super::{FileSpecLoader, HttpSpecLoader, SpecLoader};
use crate::core::Result;

/// Routes URLs to the HTTP loader and everything else to the file loader
pub struct CompositeSpecLoader {
    http: HttpSpecLoader,
    file: FileSpecLoader,
}

impl CompositeSpecLoader {
    pub fn with_loaders(http: HttpSpecLoader, file: FileSpecLoader) -> Self {
        Self { http, file }
    }

    /// Whether `source` is fetched over the network
    pub fn is_remote(source: &str) -> bool {
        http_url(source).is_some()
    }
}

#[async_trait]
impl SpecLoader for CompositeSpecLoader {
    async fn load(&self, source: &str) -> Result<SpecDocument> {
        tracing::debug!("CompositeSpecLoader: Loading from source: {source}");

        if Self::is_remote(source) {
            tracing::debug!("CompositeSpecLoader: Using HTTP loader");
            self.http.load(source).await
        } else {
            tracing::debug!("CompositeSpecLoader: Using file loader");
            self.file.load(source).await
        }
    }
}
