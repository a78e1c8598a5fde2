//! Helpers consumed by the Swift template stage
//!
//! Everything here is pure: type and literal mapping, service naming, catalog
//! lookups and identifier sanitizing.

pub mod catalog;
pub mod filters;
pub mod literals;
pub mod naming;
pub mod sanitizers;
pub mod types;

pub use catalog::{ServiceMetadata, catalog_label, default_plan, service_metadata};
pub use filters::register_filters;
pub use literals::{convert_default_value, to_literal_text, to_type_name};
pub use naming::{GeneratedName, generate_service_name, generate_service_name_with};
pub use types::{DeclaredType, LiteralValue};
