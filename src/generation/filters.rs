//! Tera filters exposing the Swift mapping to templates
//!
//! ```text
//! var {{ field.name }}: {{ field.type | swift_type(optional=field.optional) }} = {{ field.default | swift_literal(type=field.type) }}
//! let plan = "{{ service.kind | service_plan }}"
//! ```

use std::collections::HashMap;

use tera::{Tera, Value};

use crate::generation::catalog::{catalog_label, default_plan};
use crate::generation::literals::{convert_default_value, to_literal_text, to_type_name};
use crate::generation::types::LiteralValue;

/// Register every filter on `tera`
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter("swift_type", swift_type);
    tera.register_filter("swift_literal", swift_literal);
    tera.register_filter("service_label", service_label);
    tera.register_filter("service_plan", service_plan);
}

fn string_input<'a>(filter: &str, value: &'a Value) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("Filter `{filter}` expects a string, got {value}")))
}

fn swift_type(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let declared = string_input("swift_type", value)?;
    let optional = args
        .get("optional")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    to_type_name(declared, optional)
        .map(Value::String)
        .map_err(|e| tera::Error::msg(e.to_string()))
}

fn swift_literal(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let literal = match (args.get("type").and_then(Value::as_str), value) {
        (Some(declared), Value::String(raw)) => convert_default_value(declared, raw),
        _ => LiteralValue::try_from(value.clone()),
    }
    .and_then(|literal| to_literal_text(&literal))
    .map_err(|e| tera::Error::msg(e.to_string()))?;

    Ok(Value::String(literal))
}

fn service_label(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let kind = string_input("service_label", value)?;
    Ok(Value::String(catalog_label(kind).to_string()))
}

fn service_plan(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let kind = string_input("service_plan", value)?;
    Ok(Value::String(default_plan(kind).to_string()))
}
