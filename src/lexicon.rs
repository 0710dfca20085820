//! Word-weight lexicon: construction, file loading, and lookup
//!
//! A `Lexicon` is an immutable lowercase-word → integer-weight table, built
//! once and read-only thereafter. Construction fails fast on conflicting
//! duplicate entries; analysis-time lookups never fail.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Conventional weight range for lexicon entries. Not a hard bound: totals
/// accumulate past it, and files may exceed it (reported as a warning by
/// `sentilex lexicon check`).
pub const WEIGHT_RANGE: std::ops::RangeInclusive<i32> = -3..=3;

/// Errors from lexicon construction and loading
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("word '{word}' already has weight {existing}, refusing to overwrite with {conflicting}")]
    DuplicateWord {
        word: String,
        existing: i32,
        conflicting: i32,
    },

    #[error("lexicon words must be non-empty")]
    EmptyWord,

    #[error("failed to read lexicon file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk lexicon format: a `[words]` table of `word = weight`
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    words: BTreeMap<String, i32>,
}

/// Immutable word → weight mapping
///
/// Keys are stored lowercase; `weight_of` lowercases its argument so lookups
/// are case-insensitive either way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: FxHashMap<String, i32>,
}

impl Lexicon {
    /// Start building a lexicon entry by entry
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Build from `(word, weight)` pairs. Conflicting duplicates are
    /// rejected; re-supplying an identical pair is accepted.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, i32)>,
        S: AsRef<str>,
    {
        let mut builder = Self::builder();
        for (word, weight) in entries {
            builder = builder.insert(word.as_ref(), weight)?;
        }
        Ok(builder.build())
    }

    /// The built-in demonstration lexicon
    pub fn built_in() -> Self {
        Self::from_entries(BUILT_IN_ENTRIES.iter().copied())
            .unwrap_or_else(|e| unreachable!("built-in lexicon is conflict-free: {e}"))
    }

    /// Load a lexicon from a TOML file with a `[words]` table
    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: LexiconFile =
            toml::from_str(&content).map_err(|source| LexiconError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), entries = file.words.len(), "loaded lexicon file");
        // TOML tables cannot repeat keys, so entries are conflict-free here
        Self::from_entries(file.words)
    }

    /// Overlay another lexicon on top of this one. On conflicting words the
    /// overlay's weight wins.
    pub fn merge(mut self, overlay: Lexicon) -> Self {
        self.entries.extend(overlay.entries);
        self
    }

    /// Weight for a word, if it is in the lexicon. Case-insensitive.
    pub fn weight_of(&self, word: &str) -> Option<i32> {
        self.entries.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by weight descending, then word, for deterministic display
    pub fn entries(&self) -> Vec<(&str, i32)> {
        let mut entries: Vec<(&str, i32)> = self
            .entries
            .iter()
            .map(|(w, &weight)| (w.as_str(), weight))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Builder enforcing the duplicate-word policy at construction time
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    entries: FxHashMap<String, i32>,
}

impl LexiconBuilder {
    /// Add a word. The word is trimmed and lowercased. Fails on empty words
    /// and on re-inserting an existing word with a different weight.
    pub fn insert(mut self, word: &str, weight: i32) -> Result<Self, LexiconError> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(LexiconError::EmptyWord);
        }
        match self.entries.get(&word) {
            Some(&existing) if existing != weight => Err(LexiconError::DuplicateWord {
                word,
                existing,
                conflicting: weight,
            }),
            _ => {
                self.entries.insert(word, weight);
                Ok(self)
            }
        }
    }

    pub fn build(self) -> Lexicon {
        Lexicon {
            entries: self.entries,
        }
    }
}

/// Default demonstration table: strong words at ±3, mild words at ±1,
/// common stopwords pinned to 0 so they never read as "unknown"
const BUILT_IN_ENTRIES: &[(&str, i32)] = &[
    // Positive words
    ("love", 3),
    ("amazing", 3),
    ("awesome", 3),
    ("wonderful", 3),
    ("fantastic", 3),
    ("excellent", 3),
    ("perfect", 3),
    ("great", 2),
    ("good", 2),
    ("happy", 2),
    ("nice", 2),
    ("beautiful", 2),
    ("excited", 2),
    ("like", 1),
    ("okay", 1),
    ("fine", 1),
    // Negative words
    ("hate", -3),
    ("terrible", -3),
    ("awful", -3),
    ("horrible", -3),
    ("worst", -3),
    ("bad", -2),
    ("sad", -2),
    ("angry", -2),
    ("disappointed", -2),
    ("ugly", -2),
    ("dislike", -1),
    ("boring", -1),
    ("meh", -1),
    // Neutral words
    ("the", 0),
    ("is", 0),
    ("and", 0),
    ("or", 0),
    ("but", 0),
    ("a", 0),
    ("an", 0),
];
