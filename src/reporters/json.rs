//! JSON reporter
//!
//! Outputs analysis results as pretty-printed JSON: a single object for one
//! result, an array for a batch. Useful for piping to jq or further
//! processing.

use crate::models::AnalysisResult;
use anyhow::Result;

/// Render results as JSON
pub fn render(results: &[AnalysisResult]) -> Result<String> {
    match results {
        [single] => Ok(serde_json::to_string_pretty(single)?),
        many => Ok(serde_json::to_string_pretty(many)?),
    }
}

/// Render results as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(results: &[AnalysisResult]) -> Result<String> {
    match results {
        [single] => Ok(serde_json::to_string(single)?),
        many => Ok(serde_json::to_string(many)?),
    }
}
