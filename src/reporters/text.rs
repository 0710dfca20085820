//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisResult, Confidence, Polarity, Sentiment};
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const YELLOW: &str = "\x1b[33m";

/// Color for a signed weight or score
fn score_color(score: i32) -> &'static str {
    match score {
        s if s > 0 => GREEN,
        s if s < 0 => RED,
        _ => GRAY,
    }
}

fn sentiment_color(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => GREEN,
        Sentiment::Negative => RED,
        Sentiment::Neutral => GRAY,
    }
}

fn confidence_color(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => GREEN,
        Confidence::Medium => YELLOW,
        Confidence::Low => GRAY,
    }
}

/// Sentiment label with optional emoji suffix
fn sentiment_label(sentiment: Sentiment, emoji: bool) -> String {
    if !emoji {
        return sentiment.to_string();
    }
    let face = match sentiment {
        Sentiment::Positive => "😊",
        Sentiment::Negative => "😢",
        Sentiment::Neutral => "😐",
    };
    format!("{} {}", sentiment, face)
}

/// Signed weight for display: "+3", "-2", "0"
fn signed(weight: i32) -> String {
    if weight > 0 {
        format!("+{}", weight)
    } else {
        weight.to_string()
    }
}

/// Render results as formatted terminal output
pub fn render(results: &[AnalysisResult], emoji: bool) -> Result<String> {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_one(&mut out, result, emoji);
    }
    Ok(out)
}

fn render_one(out: &mut String, result: &AnalysisResult, emoji: bool) {
    out.push_str(&format!("\n{BOLD}Sentilex Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!("{DIM}\"{}\"{RESET}\n\n", result.text.trim()));

    // Per-word scores on one row
    if !result.words.is_empty() {
        out.push_str(&format!("{BOLD}WORDS{RESET}\n  "));
        let mut parts = Vec::new();
        for w in &result.words {
            let color = score_color(w.weight);
            parts.push(if w.polarity == Polarity::Neutral {
                format!("{GRAY}{}{RESET}", w.word)
            } else {
                format!("{color}{}({}){RESET}", w.word, signed(w.weight))
            });
        }
        out.push_str(&parts.join(" "));
        out.push_str("\n\n");
    }

    // Result block
    let s_color = sentiment_color(result.sentiment);
    let c_color = confidence_color(result.confidence);
    out.push_str(&format!("{BOLD}RESULT{RESET}\n"));
    out.push_str(&format!(
        "  Sentiment: {s_color}{BOLD}{}{RESET}  Confidence: {c_color}{}{RESET}\n",
        sentiment_label(result.sentiment, emoji),
        result.confidence
    ));
    out.push_str(&format!(
        "  Score: {}{}{RESET}  Average: {:.2}  Words: {} ({} positive, {} negative, {} neutral)\n",
        score_color(result.total_score),
        signed(result.total_score),
        result.average_score,
        result.summary.total,
        result.summary.positive,
        result.summary.negative,
        result.summary.neutral,
    ));
    if !result.summary.clue_words.is_empty() {
        out.push_str(&format!(
            "  Clue words: {DIM}{}{RESET}\n",
            result.summary.clue_words.join(", ")
        ));
    }
}

/// Render a step-by-step breakdown of one analysis: tokens, weights,
/// the addition line, and the final label
pub fn render_explain(result: &AnalysisResult, emoji: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Step 1: Break into words{RESET}\n  "));
    if result.words.is_empty() {
        out.push_str(&format!("{DIM}(no words after normalization){RESET}\n"));
    } else {
        let tokens: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }

    out.push_str(&format!("\n{BOLD}Step 2: Assign word scores{RESET}\n  "));
    let scored: Vec<String> = result
        .words
        .iter()
        .map(|w| {
            let color = score_color(w.weight);
            format!("{color}{}({}){RESET}", w.word, signed(w.weight))
        })
        .collect();
    out.push_str(&scored.join(" "));
    out.push('\n');

    out.push_str(&format!("\n{BOLD}Step 3: Add up the scores{RESET}\n  "));
    let positive: i32 = result.words.iter().map(|w| w.weight.max(0)).sum();
    let negative: i32 = result.words.iter().map(|w| w.weight.min(0)).sum();
    match (positive > 0, negative < 0) {
        (true, true) => out.push_str(&format!(
            "{GREEN}+{}{RESET} + {RED}({}){RESET} = {}{}{RESET}\n",
            positive,
            negative,
            score_color(result.total_score),
            result.total_score
        )),
        _ => out.push_str(&format!(
            "{}{}{RESET}\n",
            score_color(result.total_score),
            result.total_score
        )),
    }

    out.push_str(&format!("\n{BOLD}Step 4: Final result{RESET}\n"));
    let s_color = sentiment_color(result.sentiment);
    out.push_str(&format!(
        "  {s_color}{BOLD}{}{RESET} (confidence: {})\n",
        sentiment_label(result.sentiment, emoji),
        result.confidence
    ));

    out
}
