//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding cached analyses
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Entries older than this many days count as stale
    #[serde(default = "default_stale_age")]
    pub stale_age_days: u32,
}

pub fn default_directory() -> String {
    "~/.itl/analyses".to_string()
}

pub fn default_stale_age() -> u32 {
    30
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            stale_age_days: default_stale_age(),
        }
    }
}

/// Analysis heuristic overrides layered over the built-in lexicon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Jaccard similarity at which a question chains onto the previous one
    #[serde(default = "default_follow_up_similarity")]
    pub follow_up_similarity: f64,
    /// Question-to-answer latency (seconds) that counts as a long pause
    #[serde(default = "default_pause_threshold")]
    pub pause_threshold_secs: f64,
    /// Momentum moving-average window
    #[serde(default = "default_momentum_window")]
    pub momentum_window: usize,
}

pub fn default_follow_up_similarity() -> f64 {
    0.30
}

pub fn default_pause_threshold() -> f64 {
    8.0
}

pub fn default_momentum_window() -> usize {
    3
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            follow_up_similarity: default_follow_up_similarity(),
            pause_threshold_secs: default_pause_threshold(),
            momentum_window: default_momentum_window(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default report format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

pub fn default_format() -> String {
    "text".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}
