//! Pluggable read-only filesystem handle
//!
//! The templating layer stages generated files in memory before they are
//! committed to disk. Loading a document through a [`FileSystem`] lets a spec
//! that only exists in such a staged tree be read like a real file.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Read access to a (possibly virtual) file tree
pub trait FileSystem: Send + Sync {
    /// Read the whole file at `path`
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The host filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// In-memory file tree keyed by path
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RwLock<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a file, replacing any previous content
    pub fn insert<P: Into<PathBuf>, C: Into<Vec<u8>>>(&self, path: P, content: C) {
        let mut files = self.files.write().unwrap_or_else(|e| e.into_inner());
        files.insert(path.into(), content.into());
    }

    /// Builder-style [`MemoryFileSystem::insert`]
    pub fn with_file<P: Into<PathBuf>, C: Into<Vec<u8>>>(self, path: P, content: C) -> Self {
        self.insert(path, content);
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let files = self.files.read().unwrap_or_else(|e| e.into_inner());
        files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not in the staged tree", path.display()),
            )
        })
    }
}
