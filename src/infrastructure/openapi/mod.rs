//! Specification loading
//!
//! Documents come from a local path or an `http(s)://` URL and are decoded as
//! YAML (`.yaml`/`.yml`) or JSON (anything else). Each load is a single
//! attempt; timeouts and cancellation are left to the caller.

pub mod composite_loader;
pub mod document;
pub mod fields;
pub mod file_loader;
pub mod filesystem;
pub mod http_loader;

use std::sync::Arc;

use async_trait::async_trait;

pub use composite_loader::CompositeSpecLoader;
pub use document::{DocumentFormat, SpecDocument};
pub use fields::{FieldDescriptor, ModelDescriptor, extract_models};
pub use file_loader::FileSpecLoader;
pub use filesystem::{FileSystem, MemoryFileSystem, RealFileSystem};
pub use http_loader::HttpSpecLoader;

use crate::core::Result;

/// Loads specification documents
#[async_trait]
pub trait SpecLoader: Send + Sync {
    /// Load a document from a source
    async fn load(&self, source: &str) -> Result<SpecDocument>;
}

/// Load a document from a path or URL.
///
/// Local paths are read through `filesystem` when one is supplied, otherwise
/// from the host filesystem.
pub async fn load_async(
    source: &str,
    filesystem: Option<Arc<dyn FileSystem>>,
) -> Result<SpecDocument> {
    let file = match filesystem {
        Some(fs) => FileSpecLoader::with_filesystem(fs),
        None => FileSpecLoader::new(),
    };
    let loader = CompositeSpecLoader::with_loaders(HttpSpecLoader::new()?, file);
    loader.load(source).await
}
