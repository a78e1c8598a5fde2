//! Error handling for the scaffolding core.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Every variant carries the
//! offending input (path, URL, type or directory) so messages can be shown to
//! the user as-is.
//!
//! # Examples
//!
//! ```
//! use swiftserve_scaffold::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::project_state("/tmp/app is not an empty directory"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for scaffolding core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for scaffolding core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Content could not be decoded as JSON/YAML, or decoded to the wrong shape
    #[error("Failed to decode {origin}: {message}")]
    Decode { origin: String, message: String },

    /// Remote document could not be fetched
    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// Local document could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External toolchain binary could not be started
    #[error("Could not start {command}. Is it installed and on your PATH? ({message})")]
    ProcessStart { command: String, message: String },

    /// External toolchain binary exited unsuccessfully
    #[error("{command} exited with exit code {code}")]
    ProcessExit { command: String, code: i32 },

    /// Toolchain output did not contain a recognisable version
    #[error("Could not determine {command} version")]
    VersionParse { command: String },

    /// Toolchain is installed but too old
    #[error("{command} version {required} or later is required, found {found}")]
    VersionTooLow {
        command: String,
        found: u32,
        required: u32,
    },

    /// Declared or run-time type has no mapping
    #[error("Unrecognised type '{0}'")]
    UnrecognizedType(String),

    /// A project precondition does not hold
    #[error("{0}")]
    ProjectState(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new decode error for the named origin
    pub fn decode<O: Into<String>, M: ToString>(origin: O, message: M) -> Self {
        Self::Decode {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    /// Create a new transport error for the given URL
    pub fn transport<U: Into<String>, M: ToString>(url: U, message: M) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a new project state error
    pub fn project_state<S: Into<String>>(msg: S) -> Self {
        Self::ProjectState(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
