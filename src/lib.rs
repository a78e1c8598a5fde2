//! Core of the Swift server scaffolding tool.
//!
//! Loads Swagger/OpenAPI descriptions from files or URLs, maps their declared
//! types and defaults onto Swift, names and describes provisioned cloud
//! services, and checks project preconditions before generation runs.
//!
//! ```no_run
//! # async fn run() -> swiftserve_scaffold::core::Result<()> {
//! use swiftserve_scaffold::core::Config;
//! use swiftserve_scaffold::infrastructure::ProcessCommandExecutor;
//! use swiftserve_scaffold::infrastructure::openapi::{extract_models, load_async};
//! use swiftserve_scaffold::preconditions::{Precondition, ProjectGate};
//!
//! let gate = ProjectGate::new("notes", Config::default());
//! gate.check_all(&[Precondition::InProject], &ProcessCommandExecutor::new())
//!     .await?;
//!
//! let doc = load_async("notes/spec.yaml", None).await?;
//! for model in extract_models(&doc)? {
//!     for field in &model.fields {
//!         println!("{}.{}: {}", model.name, field.name, field.type_name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod infrastructure;
pub mod preconditions;

pub use crate::core::{Config, Error, Result};
pub use crate::infrastructure::openapi::{SpecDocument, load_async};
