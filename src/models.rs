//! Core data models for Sentilex
//!
//! These models are used throughout the codebase for representing
//! scored words, per-analysis summaries, and analysis results.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Categorical sign of a single word's weight
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Polarity {
    /// Derive polarity from a signed weight
    pub fn from_weight(weight: i32) -> Self {
        match weight {
            w if w > 0 => Polarity::Positive,
            w if w < 0 => Polarity::Negative,
            _ => Polarity::Neutral,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

/// Overall sentiment label for an analyzed text
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" | "pos" => Ok(Sentiment::Positive),
            "negative" | "neg" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(format!(
                "Unknown sentiment '{}'. Valid values: positive, negative, neutral",
                s
            )),
        }
    }
}

/// Coarse qualitative bucket for how strong a score's magnitude is.
/// Display-only signal, never fed back into scoring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

/// A single token after lexicon lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: String,
    /// Weight from the lexicon; 0 for unknown words
    pub weight: i32,
    pub polarity: Polarity,
}

impl ScoredWord {
    pub fn new(word: impl Into<String>, weight: i32) -> Self {
        Self {
            word: word.into(),
            weight,
            polarity: Polarity::from_weight(weight),
        }
    }
}

/// Token counts per polarity, plus the matched sentiment-bearing words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
    /// Non-neutral words that matched the lexicon, in input order
    pub clue_words: Vec<String>,
}

impl WordSummary {
    pub fn from_words(words: &[ScoredWord]) -> Self {
        let mut summary = Self::default();
        for w in words {
            match w.polarity {
                Polarity::Positive => summary.positive += 1,
                Polarity::Negative => summary.negative += 1,
                Polarity::Neutral => summary.neutral += 1,
            }
            if w.polarity != Polarity::Neutral {
                summary.clue_words.push(w.word.clone());
            }
            summary.total += 1;
        }
        summary
    }
}

/// Result of analyzing one text
///
/// Invariants: `total_score` is the sum of `words[i].weight`; `average_score`
/// is `total_score / words.len()` rounded to two decimals, defined as `0.0`
/// when the input produced no tokens. Created fresh per analysis, never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Original input text, as supplied
    pub text: String,
    pub words: Vec<ScoredWord>,
    pub total_score: i32,
    pub average_score: f64,
    pub sentiment: Sentiment,
    pub confidence: Confidence,
    pub summary: WordSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_from_weight() {
        assert_eq!(Polarity::from_weight(3), Polarity::Positive);
        assert_eq!(Polarity::from_weight(-1), Polarity::Negative);
        assert_eq!(Polarity::from_weight(0), Polarity::Neutral);
    }

    #[test]
    fn test_sentiment_parsing() {
        assert_eq!(Sentiment::from_str("positive").unwrap(), Sentiment::Positive);
        assert_eq!(Sentiment::from_str("NEG").unwrap(), Sentiment::Negative);
        assert_eq!(Sentiment::from_str("Neutral").unwrap(), Sentiment::Neutral);
        assert!(Sentiment::from_str("mixed").is_err());
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
    }

    #[test]
    fn test_word_summary_partitions() {
        let words = vec![
            ScoredWord::new("love", 3),
            ScoredWord::new("the", 0),
            ScoredWord::new("boring", -1),
            ScoredWord::new("cake", 0),
        ];
        let summary = WordSummary::from_words(&words);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 2);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.clue_words, vec!["love", "boring"]);
    }
}
