//! Sentiment scoring
//!
//! This module turns tokenized text into a labeled score using the lexicon.
//!
//! # Scoring Formula
//!
//! ```text
//! total_score   = Σ weight(token)        (unknown tokens weigh 0)
//! average_score = round2(total_score / token_count), 0.0 on empty input
//! label         = policy(total_score)
//! ```
//!
//! # Threshold Policies
//!
//! Two labeling policies are supported, selectable per analysis:
//!
//! - **Simple**: strict sign split. `total > 0` → positive, `total < 0` →
//!   negative, else neutral. Confidence is `medium` whenever non-neutral.
//! - **DeadZone** (default): ±1 dead zone. `total > 1` → positive,
//!   `total < -1` → negative, else neutral. Confidence is `high` when
//!   `|total| > 3`, otherwise `medium`; neutral results are `low`.
//!
//! A single positive word like "okay" (+1) therefore labels positive under
//! `Simple` but neutral under `DeadZone`.

mod analyzer;

pub use analyzer::{analyze, Analyzer, ThresholdPolicy};
