//! Rendering of command results in the selected output format.
//!
//! `text` prints a one-line summary per record; `json` and `yaml` dump the
//! complete server response, including fields the client does not model.

use super::OutputFormat;
use crate::constants;
use crate::error::Error;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// Space-separated one-line description of a record.
pub trait TextSummary {
    fn summary(&self) -> String;
}

/// `value`, or the placeholder for a missing value.
pub fn na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| constants::NO_VALUE.to_string(), |v| v.to_string())
}

/// Serialize `value` as pretty JSON or YAML.
///
/// # Errors
///
/// Returns a serialization error.
pub fn render_structured<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
) -> Result<String, Error> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
        OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// One record: its summary line in text mode, otherwise the full record.
///
/// # Errors
///
/// Returns a serialization error.
pub fn render_record<T: Serialize + TextSummary>(
    format: OutputFormat,
    record: &T,
) -> Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(record.summary()),
        OutputFormat::Json | OutputFormat::Yaml => render_structured(format, record),
    }
}

/// A list: one summary line per item in text mode, otherwise `response`
/// (the whole envelope for paginated endpoints).
///
/// # Errors
///
/// Returns a serialization error.
pub fn render_list<T: TextSummary, R: Serialize + ?Sized>(
    format: OutputFormat,
    items: &[T],
    response: &R,
) -> Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(items
            .iter()
            .map(TextSummary::summary)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json | OutputFormat::Yaml => render_structured(format, response),
    }
}

/// Result of a delete: the bare id, or `{"id": "<n>"}`.
///
/// # Errors
///
/// Returns a serialization error.
pub fn render_deleted(format: OutputFormat, id: i64) -> Result<String, Error> {
    match format {
        OutputFormat::Text => Ok(id.to_string()),
        OutputFormat::Json | OutputFormat::Yaml => {
            render_structured(format, &serde_json::json!({ "id": id.to_string() }))
        }
    }
}

/// An untyped server response body.
///
/// Text mode prints the body as received. JSON and YAML re-encode it when it
/// parses as JSON and fall back to the raw body otherwise.
///
/// # Errors
///
/// Returns a serialization error.
pub fn render_raw(format: OutputFormat, body: &str) -> Result<String, Error> {
    if format == OutputFormat::Text {
        return Ok(body.trim_end().to_string());
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => render_structured(format, &value),
        Err(_) => Ok(body.trim_end().to_string()),
    }
}

/// A parsed JSON value: pretty JSON in text and json modes, YAML otherwise.
///
/// # Errors
///
/// Returns a serialization error.
pub fn render_value(format: OutputFormat, value: &Value) -> Result<String, Error> {
    render_structured(format, value)
}

/// Print rendered output, skipping empty text (an empty list in text mode).
pub fn emit(rendered: &str) {
    if !rendered.is_empty() {
        println!("{rendered}");
    }
}
