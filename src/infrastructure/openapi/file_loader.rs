//! File-based spec loader
//!
//! Reads from the host filesystem unless a [`FileSystem`] handle is supplied.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::document::{DocumentFormat, SpecDocument};
use super::filesystem::FileSystem;
use super::SpecLoader;
use crate::core::{Error, Result};

/// Loads specifications from local files
#[derive(Default, Clone)]
pub struct FileSpecLoader {
    filesystem: Option<Arc<dyn FileSystem>>,
}

impl FileSpecLoader {
    pub fn new() -> Self {
        Self { filesystem: None }
    }

    /// Read through `filesystem` instead of the host filesystem
    pub fn with_filesystem(filesystem: Arc<dyn FileSystem>) -> Self {
        Self {
            filesystem: Some(filesystem),
        }
    }
}

#[async_trait]
impl SpecLoader for FileSpecLoader {
    async fn load(&self, source: &str) -> Result<SpecDocument> {
        let path = Path::new(source);
        let content = match &self.filesystem {
            Some(fs) => fs.read(path),
            None => tokio::fs::read(path).await,
        }
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        SpecDocument::decode(source, &content, DocumentFormat::from_source(source))
    }
}
