//! Storage management for cached analyses.
//!
//! Maintenance over the on-disk cache: listing entries, aggregate stats
//! for `itl cache status`, and stale-entry cleanup. Entries that fail to
//! parse still show up in listings (flagged unreadable) so users can see
//! and clear them.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use humansize::{format_size, BINARY};

use crate::analysis::TimelineAnalysis;
use crate::config::Config;

/// Information about one cached analysis file.
#[derive(Debug, Clone)]
pub struct CacheEntryInfo {
    pub path: PathBuf,
    pub filename: String,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub age_days: i64,
    /// Session id, segment and marker counts from the record, when it
    /// parses.
    pub summary: Option<EntrySummary>,
}

/// Counts pulled from a parseable cache entry.
#[derive(Debug, Clone)]
pub struct EntrySummary {
    pub session_id: String,
    pub transcript_hash: String,
    pub segments: usize,
    pub markers: usize,
}

impl CacheEntryInfo {
    /// Human-readable size.
    pub fn size_human(&self) -> String {
        format_size(self.size, BINARY)
    }

    /// Age formatted for listing output.
    pub fn format_age(&self) -> String {
        format!("{:>4}d", self.age_days)
    }
}

/// Aggregate statistics over the cache directory.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub total_size: u64,
    pub entry_count: usize,
    pub unreadable_count: usize,
    pub oldest: Option<CacheEntryInfo>,
}

impl CacheStats {
    /// Human-readable total size.
    pub fn size_human(&self) -> String {
        format_size(self.total_size, BINARY)
    }

    /// Format a summary for display.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Cached analyses: {} ({} total)",
            self.entry_count,
            self.size_human()
        );
        if self.unreadable_count > 0 {
            summary.push_str(&format!(
                "\n   Unreadable entries: {} (run 'itl cache clear' to drop them)",
                self.unreadable_count
            ));
        }
        if let Some(oldest) = &self.oldest {
            summary.push_str(&format!(
                "\n   Oldest: {} ({} days ago)",
                oldest.modified.format("%Y-%m-%d"),
                oldest.age_days
            ));
        }
        summary
    }
}

/// Storage manager for the analysis cache directory.
pub struct StorageManager {
    config: Config,
}

impl StorageManager {
    /// Create a storage manager with the given config.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The cache directory path.
    pub fn cache_dir(&self) -> PathBuf {
        self.config.storage_directory()
    }

    /// List all cache entries, oldest first.
    pub fn list_entries(&self) -> Result<Vec<CacheEntryInfo>> {
        let dir = self.cache_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let now = Local::now();
        let mut entries = Vec::new();

        for entry in fs::read_dir(&dir)
            .with_context(|| format!("Failed to read cache directory: {}", dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let metadata = fs::metadata(&path)?;
            let modified: DateTime<Local> = metadata.modified()?.into();
            let age_days = (now - modified).num_days();

            let summary = fs::read_to_string(&path)
                .ok()
                .and_then(|raw| serde_json::from_str::<TimelineAnalysis>(&raw).ok())
                .map(|analysis| EntrySummary {
                    session_id: analysis.session_id,
                    transcript_hash: analysis.transcript_hash,
                    segments: analysis.segments.len(),
                    markers: analysis.markers.len(),
                });

            entries.push(CacheEntryInfo {
                filename: path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string(),
                size: metadata.len(),
                modified,
                age_days,
                summary,
                path,
            });
        }

        entries.sort_by(|a, b| a.modified.cmp(&b.modified));
        Ok(entries)
    }

    /// Aggregate stats over all entries.
    pub fn stats(&self) -> Result<CacheStats> {
        let entries = self.list_entries()?;
        Ok(CacheStats {
            total_size: entries.iter().map(|e| e.size).sum(),
            entry_count: entries.len(),
            unreadable_count: entries.iter().filter(|e| e.summary.is_none()).count(),
            oldest: entries.first().cloned(),
        })
    }

    /// Entries older than the configured stale-age threshold.
    pub fn stale_entries(&self) -> Result<Vec<CacheEntryInfo>> {
        let threshold = self.config.storage.stale_age_days as i64;
        Ok(self
            .list_entries()?
            .into_iter()
            .filter(|e| e.age_days > threshold)
            .collect())
    }

    /// Delete the given entries, returning freed bytes.
    pub fn delete_entries(&self, entries: &[CacheEntryInfo]) -> Result<u64> {
        let mut freed = 0u64;
        for entry in entries {
            if entry.path.exists() {
                fs::remove_file(&entry.path)
                    .with_context(|| format!("Failed to delete: {}", entry.path.display()))?;
                freed += entry.size;
            }
        }
        Ok(freed)
    }
}
