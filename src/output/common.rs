//! Common utilities for output formatters

use chrono::DateTime;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Shorten an RFC 3339 timestamp to `YYYY-MM-DD HH:MM` (UTC offset dropped).
/// Unparseable values are returned unchanged.
pub fn format_timestamp(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize JSON: {}", e),
    }
}

/// Print any serializable value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(data: &T) {
    match serde_yml::to_string(data) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Error: failed to serialize YAML: {}", e),
    }
}

/// Output an API payload as returned by the server.
/// Table and CSV have no raw form, so they fall back to JSON.
pub fn output_raw(raw: &serde_json::Value, format: &OutputFormat) {
    match format {
        OutputFormat::Yaml => print_yaml(raw),
        _ => print_json(raw),
    }
}
