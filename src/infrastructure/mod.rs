//! Infrastructure layer - spec loading and process execution

pub mod openapi;
pub mod shell;

pub use shell::*;
