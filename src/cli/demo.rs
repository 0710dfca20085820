//! Demo command: score the bundled demonstration sentences

use crate::config::UserConfig;
use crate::models::AnalysisResult;
use crate::reporters;
use crate::scoring::Analyzer;
use anyhow::Result;

use super::analyze::{resolve_lexicon, resolve_policy};

/// Demonstration sentences covering positive, negative, neutral, and mixed
/// cases against the built-in lexicon
pub(crate) const DEMO_SENTENCES: &[&str] = &[
    "I love this amazing ice cream!",
    "This homework is terrible and boring",
    "The cat is sleeping on the chair",
    "What a wonderful and beautiful day!",
    "I hate waiting in long lines",
    "This game is absolutely amazing!",
    "I hate doing homework on weekends",
    "The weather is sunny today",
    "My dog is the most wonderful pet ever",
    "This movie was terrible and boring",
];

pub(crate) fn run(format: &str, policy: Option<&str>, no_emoji: bool) -> Result<()> {
    let config = UserConfig::load()?;
    let lexicon = resolve_lexicon(None, &config, false)?;
    let policy = resolve_policy(policy, &config)?;
    let emoji = !no_emoji && config.emoji();

    let analyzer = Analyzer::new(lexicon, policy);
    let results: Vec<AnalysisResult> = DEMO_SENTENCES
        .iter()
        .map(|s| analyzer.analyze(s))
        .collect();

    print!("{}", reporters::report(&results, format, emoji)?);
    Ok(())
}
