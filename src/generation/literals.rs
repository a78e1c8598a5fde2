//! Declared type and default value translation to Swift
//!
//! Templates never inspect types themselves; they ask this module for the
//! Swift type name of a property and the Swift literal for its default.
//! Retargeting the generated language means changing only this module.

use crate::core::{Error, Result};
use crate::generation::types::{DeclaredType, LiteralValue};

/// Convert the textual default of a property into a typed value.
///
/// - `string`: the text unchanged
/// - `number`: parsed as a finite `f64`
/// - `boolean`: `true` only for the exact text `"true"`, otherwise `false`
/// - `object`/`array`: decoded as JSON, which must be of that shape
///
/// # Examples
/// ```
/// use swiftserve_scaffold::generation::{LiteralValue, convert_default_value};
///
/// assert_eq!(
///     convert_default_value("number", "3.14159").unwrap(),
///     LiteralValue::Number(3.14159)
/// );
/// assert_eq!(
///     convert_default_value("boolean", "True").unwrap(),
///     LiteralValue::Boolean(false)
/// );
/// assert!(convert_default_value("pi", "3.14159").is_err());
/// ```
pub fn convert_default_value(declared_type: &str, raw_text: &str) -> Result<LiteralValue> {
    let declared: DeclaredType = declared_type.parse()?;
    let origin = || format!("{declared} default '{raw_text}'");

    match declared {
        DeclaredType::String => Ok(LiteralValue::String(raw_text.to_string())),
        DeclaredType::Number => {
            let number: f64 = raw_text
                .trim()
                .parse()
                .map_err(|e| Error::decode(origin(), e))?;
            if !number.is_finite() {
                return Err(Error::decode(origin(), "number is not finite"));
            }
            Ok(LiteralValue::Number(number))
        }
        DeclaredType::Boolean => Ok(LiteralValue::Boolean(raw_text == "true")),
        DeclaredType::Object | DeclaredType::Array => {
            let json: serde_json::Value =
                serde_json::from_str(raw_text).map_err(|e| Error::decode(origin(), e))?;
            let value = LiteralValue::try_from(json)?;
            if value.declared_type() != declared {
                return Err(Error::decode(
                    origin(),
                    format!("expected {declared}, found {}", value.declared_type()),
                ));
            }
            Ok(value)
        }
    }
}

/// Render a typed value as Swift literal text.
///
/// Objects render as dictionary literals (`["key": value]`, `[:]` when empty),
/// arrays as array literals.
pub fn to_literal_text(value: &LiteralValue) -> Result<String> {
    let mut out = String::new();
    write_literal(&mut out, value)?;
    Ok(out)
}

fn write_literal(out: &mut String, value: &LiteralValue) -> Result<()> {
    match value {
        LiteralValue::String(s) => write_string(out, s),
        LiteralValue::Number(n) => {
            if !n.is_finite() {
                return Err(Error::UnrecognizedType(format!("non-finite number {n}")));
            }
            out.push_str(&n.to_string());
        }
        LiteralValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        LiteralValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item)?;
            }
            out.push(']');
        }
        LiteralValue::Object(entries) if entries.is_empty() => out.push_str("[:]"),
        LiteralValue::Object(entries) => {
            out.push('[');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_string(out, key);
                out.push_str(": ");
                write_literal(out, item)?;
            }
            out.push(']');
        }
    }
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Swift type name for a declared type, e.g. `to_type_name("array", true)` is `[Any]?`
pub fn to_type_name(declared_type: &str, optional: bool) -> Result<String> {
    let declared: DeclaredType = declared_type.parse()?;
    Ok(declared.type_name(optional))
}
