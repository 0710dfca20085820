//! Sentilex - lexicon-based sentiment scoring
//!
//! A small, deterministic scoring engine: text in, signed sentiment score out.
//! Each known word carries an integer weight; the analyzer tokenizes input,
//! sums the weights, and maps the total to a label through a configurable
//! threshold policy.

pub mod cli;
pub mod config;
pub mod lexicon;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod tokenize;

pub use lexicon::{Lexicon, LexiconBuilder, LexiconError};
pub use models::{AnalysisResult, Confidence, Polarity, ScoredWord, Sentiment, WordSummary};
pub use scoring::{analyze, Analyzer, ThresholdPolicy};
