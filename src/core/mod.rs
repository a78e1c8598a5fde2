//! Shared configuration and error types.

pub mod config;
pub mod error;

pub use config::{Config, ToolchainConfig};
pub use error::{Error, Result};
