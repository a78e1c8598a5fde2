//! Configuration for project preconditions and toolchain detection.
//!
//! Every field has a default matching the Swift server generator layout, so a
//! configuration file only needs to name the values it overrides:
//!
//! ```toml
//! project_marker = ".swiftservergenerator-project"
//!
//! [toolchain]
//! command = "swift"
//! minimum_major = 4
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::core::error::{Error, Result};

/// Zero-byte file whose presence marks an initialized project
pub const DEFAULT_PROJECT_MARKER: &str = ".swiftservergenerator-project";

/// Project descriptor written at generation time
pub const DEFAULT_PROJECT_DESCRIPTOR: &str = "spec.json";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Marker file name, relative to the project root
    pub project_marker: String,

    /// Project descriptor path, relative to the project root
    pub project_descriptor: String,

    /// `appType` value identifying a CRUD project
    pub crud_app_type: String,

    /// Required toolchain
    pub toolchain: ToolchainConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_marker: DEFAULT_PROJECT_MARKER.to_string(),
            project_descriptor: DEFAULT_PROJECT_DESCRIPTOR.to_string(),
            crud_app_type: "crud".to_string(),
            toolchain: ToolchainConfig::default(),
        }
    }
}

/// How to find and version-check the target language toolchain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    /// Executable to spawn
    pub command: String,

    /// Arguments that make the executable print its version
    pub version_args: Vec<String>,

    /// Regex whose first capture group is the major version
    pub version_pattern: String,

    /// Lowest accepted major version
    pub minimum_major: u32,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            command: "swift".to_string(),
            version_args: vec!["--version".to_string()],
            version_pattern: r"Swift version\s+(\d+)\.\d+".to_string(),
            minimum_major: 3,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("invalid TOML: {e}")))
    }

    /// Load configuration from a TOML file
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }
}
