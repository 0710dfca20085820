//! Lexicon-based analyzer
//!
//! Pure function of (text, lexicon, policy). Never fails: degenerate input
//! resolves to a neutral zero result instead of erroring.

use crate::lexicon::Lexicon;
use crate::models::{AnalysisResult, Confidence, ScoredWord, Sentiment, WordSummary};
use crate::tokenize::tokenize;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Score magnitude above which a non-neutral DeadZone label is high-confidence
const HIGH_CONFIDENCE_THRESHOLD: i32 = 3;

/// Policy for mapping a total score to a sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdPolicy {
    /// Strict sign split: any non-zero total labels the text
    Simple,
    /// ±1 dead zone around zero, with confidence tiers
    #[default]
    DeadZone,
}

impl ThresholdPolicy {
    /// Map a total score to a label
    pub fn label(&self, total_score: i32) -> Sentiment {
        match self {
            ThresholdPolicy::Simple => match total_score {
                s if s > 0 => Sentiment::Positive,
                s if s < 0 => Sentiment::Negative,
                _ => Sentiment::Neutral,
            },
            ThresholdPolicy::DeadZone => match total_score {
                s if s > 1 => Sentiment::Positive,
                s if s < -1 => Sentiment::Negative,
                _ => Sentiment::Neutral,
            },
        }
    }

    /// Confidence for a label produced by this policy. Neutral is always
    /// `low`; `Simple` has no magnitude tiers and caps at `medium`.
    pub fn confidence(&self, total_score: i32, sentiment: Sentiment) -> Confidence {
        if sentiment == Sentiment::Neutral {
            return Confidence::Low;
        }
        match self {
            ThresholdPolicy::Simple => Confidence::Medium,
            ThresholdPolicy::DeadZone => {
                if total_score.abs() > HIGH_CONFIDENCE_THRESHOLD {
                    Confidence::High
                } else {
                    Confidence::Medium
                }
            }
        }
    }
}

impl FromStr for ThresholdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" | "sign" => Ok(ThresholdPolicy::Simple),
            "dead-zone" | "deadzone" | "dead_zone" => Ok(ThresholdPolicy::DeadZone),
            _ => Err(format!(
                "Unknown policy '{}'. Valid policies: simple, dead-zone",
                s
            )),
        }
    }
}

impl std::fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdPolicy::Simple => write!(f, "simple"),
            ThresholdPolicy::DeadZone => write!(f, "dead-zone"),
        }
    }
}

/// Reusable analyzer binding a lexicon to a threshold policy
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Lexicon,
    policy: ThresholdPolicy,
}

impl Analyzer {
    pub fn new(lexicon: Lexicon, policy: ThresholdPolicy) -> Self {
        Self { lexicon, policy }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    /// Analyze one text. Total function: empty or all-punctuation input
    /// yields a neutral zero-score result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let words: Vec<ScoredWord> = tokenize(text)
            .into_iter()
            .map(|token| {
                let weight = self.lexicon.weight_of(&token).unwrap_or(0);
                ScoredWord::new(token, weight)
            })
            .collect();

        let total_score: i32 = words.iter().map(|w| w.weight).sum();
        let average_score = if words.is_empty() {
            0.0
        } else {
            round2(total_score as f64 / words.len() as f64)
        };
        let sentiment = self.policy.label(total_score);
        let confidence = self.policy.confidence(total_score, sentiment);
        let summary = WordSummary::from_words(&words);

        debug!(
            tokens = words.len(),
            total_score,
            %sentiment,
            %confidence,
            "analyzed text"
        );

        AnalysisResult {
            text: text.to_string(),
            words,
            total_score,
            average_score,
            sentiment,
            confidence,
            summary,
        }
    }
}

/// One-call entry point for a single analysis
pub fn analyze(text: &str, lexicon: &Lexicon, policy: ThresholdPolicy) -> AnalysisResult {
    Analyzer::new(lexicon.clone(), policy).analyze(text)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
