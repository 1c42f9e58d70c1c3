//! Configuration management for ITL

mod io;
mod types;

pub use types::*;

use std::path::PathBuf;

use anyhow::Result;

use crate::analysis::Lexicon;

impl Config {
    /// Get the config file path (~/.config/itl/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/itl)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Expand ~ in the storage directory path
    pub fn storage_directory(&self) -> PathBuf {
        let dir = &self.storage.directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }

    /// Build the heuristic tables with this config's scalar overrides
    /// applied. Word lists stay at their built-in defaults; only the
    /// tunable thresholds move.
    pub fn lexicon(&self) -> Lexicon {
        let mut lexicon = Lexicon::default();
        lexicon.follow_up_similarity = self.analysis.follow_up_similarity;
        lexicon.pause_threshold_secs = self.analysis.pause_threshold_secs;
        lexicon.momentum_window = self.analysis.momentum_window;
        lexicon
    }
}
