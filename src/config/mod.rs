//! Configuration loading for sentilex

mod user_config;

pub use user_config::{ScoringConfig, UserConfig};
