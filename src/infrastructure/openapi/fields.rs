//! Shape extraction from model definitions
//!
//! Only the information the Swift templates need is pulled out of each
//! property: name, declared type, optionality and default. No further schema
//! validation happens here.

use serde_json::{Map, Value as JsonValue};

use super::document::SpecDocument;
use crate::core::{Error, Result};
use crate::generation::literals::{convert_default_value, to_literal_text};
use crate::generation::types::{DeclaredType, LiteralValue};

/// Where model definitions live, in lookup order
const MODEL_LOCATIONS: &[&str] = &["definitions", "components/schemas"];

/// Keywords that give an untyped property the shape of a model reference
const COMPOSITION_KEYWORDS: &[&str] = &["$ref", "allOf", "oneOf", "anyOf"];

/// One property of a model
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: DeclaredType,
    pub optional: bool,
    pub default_value: Option<JsonValue>,
}

impl FieldDescriptor {
    /// Swift type for this field, e.g. `String?`
    pub fn type_name(&self) -> String {
        self.declared_type.type_name(self.optional)
    }

    /// Default converted to a typed value, if one is declared
    pub fn default_literal(&self) -> Result<Option<LiteralValue>> {
        let Some(raw) = &self.default_value else {
            return Ok(None);
        };

        let value = match raw {
            JsonValue::String(text) => convert_default_value(self.declared_type.as_str(), text)?,
            other => {
                let value = LiteralValue::try_from(other.clone())?;
                if value.declared_type() != self.declared_type {
                    return Err(Error::decode(
                        format!("default of '{}'", self.name),
                        format!(
                            "expected {}, found {}",
                            self.declared_type,
                            value.declared_type()
                        ),
                    ));
                }
                value
            }
        };
        Ok(Some(value))
    }

    /// Default rendered as Swift literal text, if one is declared
    pub fn default_literal_text(&self) -> Result<Option<String>> {
        self.default_literal()?
            .map(|value| to_literal_text(&value))
            .transpose()
    }
}

/// A named model with its properties
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

/// Extract every model from `definitions` (Swagger 2) and
/// `components/schemas` (OpenAPI 3).
pub fn extract_models(doc: &SpecDocument) -> Result<Vec<ModelDescriptor>> {
    let mut models = Vec::new();
    for location in MODEL_LOCATIONS {
        let Some(JsonValue::Object(schemas)) = doc.pointer(location) else {
            continue;
        };
        for (name, schema) in schemas {
            models.push(ModelDescriptor {
                name: name.clone(),
                fields: extract_fields(doc.origin(), name, schema)?,
            });
        }
    }
    Ok(models)
}

/// Extract the properties of one model schema
pub fn extract_fields(
    origin: &str,
    model: &str,
    schema: &JsonValue,
) -> Result<Vec<FieldDescriptor>> {
    let Some(properties) = schema.get("properties") else {
        return Ok(Vec::new());
    };
    let properties = properties.as_object().ok_or_else(|| {
        Error::decode(
            format!("{origin} model '{model}'"),
            "'properties' must be a mapping",
        )
    })?;

    let required: Vec<&str> = schema
        .get("required")
        .and_then(JsonValue::as_array)
        .map(|names| names.iter().filter_map(JsonValue::as_str).collect())
        .unwrap_or_default();

    properties
        .iter()
        .map(|(name, property)| {
            let property = property.as_object().ok_or_else(|| {
                Error::decode(
                    format!("{origin} property '{model}.{name}'"),
                    "property must be a mapping",
                )
            })?;
            let listed = required.contains(&name.as_str());
            field_from_property(origin, model, name, property, listed)
        })
        .collect()
}

fn field_from_property(
    origin: &str,
    model: &str,
    name: &str,
    property: &Map<String, JsonValue>,
    listed_required: bool,
) -> Result<FieldDescriptor> {
    let declared_type = match property.get("type").and_then(JsonValue::as_str) {
        // Swagger integers map onto the same Swift type as numbers
        Some("integer") => DeclaredType::Number,
        Some(other) => other.parse()?,
        None if COMPOSITION_KEYWORDS.iter().any(|k| property.contains_key(*k)) => {
            DeclaredType::Object
        }
        None => match enum_type(property) {
            Some(declared) => declared,
            None => {
                return Err(Error::decode(
                    format!("{origin} property '{model}.{name}'"),
                    "missing 'type'",
                ));
            }
        },
    };

    let required_flag = property
        .get("required")
        .and_then(JsonValue::as_bool)
        .unwrap_or(false);

    Ok(FieldDescriptor {
        name: name.to_string(),
        declared_type,
        optional: !(listed_required || required_flag),
        default_value: property.get("default").cloned(),
    })
}

/// Type of an untyped `enum` property, taken from its first value
fn enum_type(property: &Map<String, JsonValue>) -> Option<DeclaredType> {
    let first = property.get("enum")?.as_array()?.first()?;
    LiteralValue::try_from(first.clone())
        .ok()
        .map(|value| value.declared_type())
}
