//! Output reporters for analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors and emoji
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

pub use text::render_explain;

use crate::models::AnalysisResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render one or more analysis results in the specified format
pub fn report(results: &[AnalysisResult], format: &str, emoji: bool) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(results, fmt, emoji)
}

/// Render using an OutputFormat enum. `emoji` only affects the text format.
pub fn report_with_format(
    results: &[AnalysisResult],
    format: OutputFormat,
    emoji: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(results, emoji),
        OutputFormat::Json => json::render(results),
        OutputFormat::Markdown => markdown::render(results),
    }
}

/// Get the recommended file extension for a format
#[allow(dead_code)] // Public API helper
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}
