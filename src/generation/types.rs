//! Declared types and typed default values

use std::fmt;
use std::str::FromStr;

use serde_json::Value as JsonValue;

use crate::core::Error;

/// Property type as written in a specification document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl DeclaredType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Swift type name, with the optional `?` suffix when requested
    pub fn type_name(&self, optional: bool) -> String {
        let base = match self {
            Self::String => "String",
            Self::Number => "Double",
            Self::Boolean => "Bool",
            Self::Object => "Any",
            Self::Array => "[Any]",
        };
        if optional {
            format!("{base}?")
        } else {
            base.to_string()
        }
    }
}

impl FromStr for DeclaredType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            other => Err(Error::UnrecognizedType(other.to_string())),
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A default value tagged with its type.
///
/// Object entries keep the order they were decoded in.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Array(Vec<LiteralValue>),
    Object(Vec<(String, LiteralValue)>),
}

impl LiteralValue {
    /// The declared type this value satisfies
    pub fn declared_type(&self) -> DeclaredType {
        match self {
            Self::String(_) => DeclaredType::String,
            Self::Number(_) => DeclaredType::Number,
            Self::Boolean(_) => DeclaredType::Boolean,
            Self::Array(_) => DeclaredType::Array,
            Self::Object(_) => DeclaredType::Object,
        }
    }
}

impl TryFrom<JsonValue> for LiteralValue {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Ok(match value {
            JsonValue::Null => return Err(Error::UnrecognizedType("null".to_string())),
            JsonValue::Bool(b) => Self::Boolean(b),
            JsonValue::Number(n) => Self::Number(
                n.as_f64()
                    .ok_or_else(|| Error::UnrecognizedType(format!("number {n}")))?,
            ),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::Array(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| -> Result<_, Error> { Ok((key, Self::try_from(value)?)) })
                    .collect::<Result<_, Error>>()?,
            ),
        })
    }
}
