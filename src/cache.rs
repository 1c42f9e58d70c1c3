//! File-backed cache of analysis results.
//!
//! One JSON document per session, keyed by session id and guarded by the
//! transcript content hash. The engine never touches this module; the
//! command layer injects it around the pure computation.
//!
//! Behavioral contract at the boundary:
//! - **read**: anything other than a parseable, schema-valid, hash-matching
//!   record is a silent cache miss (logged at debug level).
//! - **write**: a record failing validation is dropped with a diagnostic
//!   log and never persisted; valid records are upserted unconditionally.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use deunicode::deunicode;
use tracing::{debug, warn};

use crate::analysis::{validate_analysis, MarkerCaps, TimelineAnalysis};

/// Keyed store of the most recent analysis per session.
pub struct AnalysisCache {
    dir: PathBuf,
    caps: MarkerCaps,
}

impl AnalysisCache {
    /// Create a cache rooted at the given directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            caps: MarkerCaps::default(),
        }
    }

    /// The cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the cache file for a session.
    pub fn entry_path(&self, session_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_session_id(session_id)))
    }

    /// Look up a cached analysis by session id and content hash.
    ///
    /// Returns `Some` only on an exact hash match with a schema-valid
    /// record; corrupted or stale entries read as absent.
    pub fn read(&self, session_id: &str, transcript_hash: &str) -> Option<TimelineAnalysis> {
        let path = self.entry_path(session_id);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %path.display(), %err, "cache miss: unreadable entry");
                return None;
            }
        };

        let analysis: TimelineAnalysis = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(path = %path.display(), %err, "cache miss: corrupted entry");
                return None;
            }
        };

        if let Err(err) = validate_analysis(&analysis, &self.caps) {
            debug!(path = %path.display(), %err, "cache miss: entry failed validation");
            return None;
        }

        if analysis.session_id != session_id || analysis.transcript_hash != transcript_hash {
            debug!(path = %path.display(), "cache miss: stale entry");
            return None;
        }

        Some(analysis)
    }

    /// Persist an analysis, upserting any previous entry for the session.
    ///
    /// Returns `Ok(true)` when written and `Ok(false)` when the record was
    /// dropped for failing validation; only real I/O problems error.
    pub fn write(&self, analysis: &TimelineAnalysis) -> Result<bool> {
        if let Err(err) = validate_analysis(analysis, &self.caps) {
            warn!(
                session = %analysis.session_id,
                %err,
                "dropping invalid analysis instead of caching it"
            );
            return Ok(false);
        }

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create cache directory: {}", self.dir.display()))?;

        let path = self.entry_path(&analysis.session_id);
        let json = serde_json::to_string_pretty(analysis)
            .context("Failed to serialize analysis for caching")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write cache entry: {}", path.display()))?;

        debug!(path = %path.display(), hash = %analysis.transcript_hash, "cached analysis");
        Ok(true)
    }

    /// Remove a session's cache entry. Returns whether anything existed.
    pub fn remove(&self, session_id: &str) -> Result<bool> {
        let path = self.entry_path(session_id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete cache entry: {}", path.display()))?;
        Ok(true)
    }
}

/// Turn an opaque session id into a safe file stem.
///
/// Session ids are caller-controlled; collisions after sanitization are
/// harmless because the stored record still carries the exact id and hash.
fn sanitize_session_id(session_id: &str) -> String {
    let folded = deunicode(session_id);
    let cleaned: String = folded
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '-' })
        .collect();
    if cleaned.is_empty() {
        "session".to_string()
    } else {
        cleaned
    }
}
