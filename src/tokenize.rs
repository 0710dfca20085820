//! Text normalization and tokenization
//!
//! Lower-case, drop everything that is not a word character or whitespace,
//! split on whitespace runs. No stemming, no fuzzy matching.

/// Normalize text for lexicon lookup: lowercase, keep only word
/// characters (alphanumeric + underscore) and whitespace.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split text into lookup-ready tokens. Empty tokens are discarded,
/// so all-punctuation input yields an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
