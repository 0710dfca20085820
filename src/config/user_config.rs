//! User-level configuration for sentilex
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/sentilex/config.toml

use crate::scoring::ThresholdPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Threshold policy: "simple" or "dead-zone"
    pub policy: Option<String>,

    /// Path to a lexicon file merged over the built-in table
    pub lexicon: Option<PathBuf>,

    /// Emoji in text output (default: on)
    pub emoji: Option<bool>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/sentilex/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        // Load user config
        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<UserConfig>(&content).ok())
        {
            config.merge(user_config);
        }

        // Environment variables override everything
        if let Ok(policy) = std::env::var("SENTILEX_POLICY") {
            config.scoring.policy = Some(policy);
        }
        if let Ok(path) = std::env::var("SENTILEX_LEXICON") {
            config.scoring.lexicon = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Get the user config directory path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sentilex").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.scoring.policy.is_some() {
            self.scoring.policy = other.scoring.policy;
        }
        if other.scoring.lexicon.is_some() {
            self.scoring.lexicon = other.scoring.lexicon;
        }
        if other.scoring.emoji.is_some() {
            self.scoring.emoji = other.scoring.emoji;
        }
    }

    /// Resolved threshold policy; invalid or missing values fall back to
    /// the default dead-zone policy
    pub fn policy(&self) -> ThresholdPolicy {
        self.scoring
            .policy
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Configured lexicon file, if any
    pub fn lexicon_path(&self) -> Option<&PathBuf> {
        self.scoring.lexicon.as_ref()
    }

    /// Emoji in text output, default on
    pub fn emoji(&self) -> bool {
        self.scoring.emoji.unwrap_or(true)
    }

    /// Initialize user config directory and create example config
    pub fn init_user_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if !config_path.exists() {
            let example = r#"# Sentilex User Configuration

[scoring]
# Threshold policy: "dead-zone" (default, ±1 dead zone with confidence
# tiers) or "simple" (strict sign split)
# policy = "dead-zone"

# Lexicon file merged over the built-in table
# lexicon = "/path/to/words.toml"

# Emoji in terminal output
# emoji = true
"#;
            std::fs::write(&config_path, example)?;
        }

        Ok(config_path)
    }
}
