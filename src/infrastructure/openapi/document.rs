//! Normalized in-memory form of a loaded API description

use serde_json::{Map, Value as JsonValue};

use crate::core::{Error, Result};

/// Encoding of a specification document, chosen from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format for a local path or URL.
    ///
    /// `.yaml` and `.yml` decode as YAML; everything else decodes as JSON.
    /// For URLs only the path component is considered, so query strings and
    /// fragments do not affect the choice.
    pub fn from_source(source: &str) -> Self {
        let path = match http_url(source) {
            Some(url) => url.path().to_string(),
            None => source.to_string(),
        };

        let extension = std::path::Path::new(&path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// A decoded specification document.
///
/// The root is always a mapping; decoding anything else is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    origin: String,
    root: Map<String, JsonValue>,
}

impl SpecDocument {
    /// Decode `content` in the given format. `origin` names the source in errors.
    pub fn decode(origin: &str, content: &[u8], format: DocumentFormat) -> Result<Self> {
        let value: JsonValue = match format {
            DocumentFormat::Json => {
                serde_json::from_slice(content).map_err(|e| Error::decode(origin, e))?
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_slice(content).map_err(|e| Error::decode(origin, e))?
            }
        };
        Self::from_value(origin, value)
    }

    /// Wrap an already decoded value, rejecting non-mapping roots
    pub fn from_value(origin: &str, value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(root) => Ok(Self {
                origin: origin.to_string(),
                root,
            }),
            other => Err(Error::decode(
                origin,
                format!("document root must be a mapping, found {}", kind_of(&other)),
            )),
        }
    }

    /// Where the document was loaded from
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Top-level mapping
    pub fn root(&self) -> &Map<String, JsonValue> {
        &self.root
    }

    /// Look up a top-level entry
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.root.get(key)
    }

    /// Follow a `/`-separated path of mapping keys from the root
    pub fn pointer(&self, path: &str) -> Option<&JsonValue> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let first = self.root.get(segments.next()?)?;
        segments.try_fold(first, |node, key| node.get(key))
    }
}

/// Parse `source` as a URL if its scheme is `http` or `https`, in any case
pub(crate) fn http_url(source: &str) -> Option<url::Url> {
    url::Url::parse(source)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "sequence",
        JsonValue::Object(_) => "mapping",
    }
}
