//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for pull request comments, wikis, and docs.

use crate::models::{AnalysisResult, Polarity, Sentiment};
use anyhow::Result;
use chrono::Local;

/// Render results as GitHub-flavored Markdown
pub fn render(results: &[AnalysisResult]) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(results));
    md.push('\n');

    for result in results {
        md.push_str(&render_result(result));
        md.push('\n');
    }

    md.push_str(&render_footer());
    Ok(md)
}

fn render_header(results: &[AnalysisResult]) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "# Sentilex Report\n\n{} text{} analyzed | Generated: {}\n",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        timestamp
    )
}

fn render_result(result: &AnalysisResult) -> String {
    let mut md = String::new();

    md.push_str(&format!("## {}\n\n", sentiment_heading(result.sentiment)));
    md.push_str(&format!("> {}\n\n", result.text.trim()));

    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!(
        "| **Sentiment** | {} |\n",
        result.sentiment
    ));
    md.push_str(&format!("| **Confidence** | {} |\n", result.confidence));
    md.push_str(&format!("| **Total score** | {} |\n", result.total_score));
    md.push_str(&format!(
        "| **Average score** | {:.2} |\n",
        result.average_score
    ));
    md.push_str(&format!(
        "| **Words** | {} ({} positive, {} negative, {} neutral) |\n\n",
        result.summary.total,
        result.summary.positive,
        result.summary.negative,
        result.summary.neutral
    ));

    // Word table, sentiment-bearing words only
    let scored: Vec<_> = result
        .words
        .iter()
        .filter(|w| w.polarity != Polarity::Neutral)
        .collect();
    if !scored.is_empty() {
        md.push_str("| Word | Weight | Polarity |\n");
        md.push_str("|------|--------|----------|\n");
        for w in scored {
            md.push_str(&format!("| {} | {} | {} |\n", w.word, w.weight, w.polarity));
        }
        md.push('\n');
    }

    md
}

fn sentiment_heading(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "😊 Positive",
        Sentiment::Negative => "😢 Negative",
        Sentiment::Neutral => "😐 Neutral",
    }
}

fn render_footer() -> String {
    "---\n\n*Generated by [sentilex](https://github.com/sentilex/sentilex)*\n".to_string()
}
