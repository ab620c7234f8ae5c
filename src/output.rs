//! Output formatting for scan results.
//!
//! Provides functions to render a [`ScanResult`] as a plain-text report, JSON,
//! or a bare list of keys.

use crate::{ScanResult, UsageError};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The key map, the list of keys and the key count.
    Text,
    Json,
    /// One key per line.
    Keys,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text | OutputFormat::Keys => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the scan result into a string.
pub fn format_result(
    result: &ScanResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, UsageError> {
    Ok(match format {
        OutputFormat::Text => format_text(result),
        OutputFormat::Json => format_json(result, pretty)?,
        OutputFormat::Keys => format_keys(result),
    })
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &ScanResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), UsageError> {
    let content = format_result(result, format, pretty)?;
    fs::write(&path, content).map_err(|e| UsageError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_text(result: &ScanResult) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("Map:\n");
    for (key, paths) in &result.keys {
        let paths: Vec<_> = paths.iter().map(|p| p.display().to_string()).collect();
        let _ = writeln!(out, "  {:?}: [{}]", key, paths.join(", "));
    }
    out.push_str("Keys:\n");
    out.push_str(&format_keys(result));
    let _ = writeln!(out, "Count: {}", result.keys.len());
    if !result.skipped.is_empty() {
        let _ = writeln!(out, "Skipped: {}", result.skipped.len());
        for entry in &result.skipped {
            let _ = writeln!(out, "  {}", entry.reason);
        }
    }
    out
}

fn format_keys(result: &ScanResult) -> String {
    let mut out = String::new();
    for key in result.keys.keys() {
        out.push_str(key);
        out.push('\n');
    }
    out
}

fn format_json(result: &ScanResult, pretty: bool) -> Result<String, UsageError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
