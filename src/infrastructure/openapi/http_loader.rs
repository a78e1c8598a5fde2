//! HTTP-based spec loader

use async_trait::async_trait;
use reqwest::Client;

use super::document::{DocumentFormat, SpecDocument, http_url};
use super::SpecLoader;
use crate::core::{Error, Result};

/// Loads specifications from HTTP/HTTPS URLs with a single GET
#[derive(Debug, Clone)]
pub struct HttpSpecLoader {
    client: Client,
}

impl HttpSpecLoader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SpecLoader for HttpSpecLoader {
    async fn load(&self, source: &str) -> Result<SpecDocument> {
        if http_url(source).is_none() {
            return Err(Error::transport(
                source,
                "HttpSpecLoader only handles HTTP(S) URLs",
            ));
        }

        let response = self
            .client
            .get(source)
            .send()
            .await
            .map_err(|e| Error::transport(source, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(source, format!("HTTP {status}")));
        }

        let content = response
            .bytes()
            .await
            .map_err(|e| Error::transport(source, format!("failed to read response body: {e}")))?;

        SpecDocument::decode(source, &content, DocumentFormat::from_source(source))
    }
}
