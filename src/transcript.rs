//! Transcript turn model and timestamp resolution.
//!
//! Turns arrive from the interview-session subsystem in chronological
//! display order; the engine never reorders them. Timestamps are untrusted:
//! `timestamp_ms` wins when present and finite, otherwise `created_at` is
//! parsed as ISO-8601, and anything unparseable resolves to `None` instead
//! of erroring.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Who produced a transcript turn.
///
/// Assistant turns are interviewer questions; user turns are candidate
/// answers. Anything else (system notes, tool output) is carried through
/// but ignored by segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
    #[serde(other)]
    Other,
}

/// One turn of interview dialogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptTurn {
    /// Opaque unique identifier supplied by the caller.
    pub id: String,

    /// Speaker role.
    pub role: Role,

    /// Raw turn text. May be empty or whitespace-only.
    #[serde(default)]
    pub content: String,

    /// ISO-8601 timestamp string. Untrusted; may fail to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Epoch milliseconds. Takes precedence over `created_at` when finite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<f64>,

    /// Speaking duration in seconds, present only for spoken answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_duration_sec: Option<f64>,
}

impl TranscriptTurn {
    /// Create a minimal turn with just an id, role and content.
    pub fn new(id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            created_at: None,
            timestamp_ms: None,
            answer_duration_sec: None,
        }
    }

    /// Attach an epoch-milliseconds timestamp.
    pub fn at_ms(mut self, timestamp_ms: f64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Check if this is an interviewer (assistant) turn.
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }

    /// Check if this is a candidate (user) turn.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Resolve this turn's timestamp to epoch milliseconds.
    ///
    /// Prefers `timestamp_ms` when finite, falls back to parsing
    /// `created_at`, and returns `None` when neither resolves.
    pub fn resolved_timestamp_ms(&self) -> Option<f64> {
        if let Some(ms) = self.timestamp_ms {
            if ms.is_finite() {
                return Some(ms);
            }
        }
        self.created_at.as_deref().and_then(parse_iso_millis)
    }
}

/// Parse an ISO-8601 timestamp string to epoch milliseconds.
///
/// Accepts RFC 3339 (with offset or `Z`) and the naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` form, which is treated as UTC.
pub fn parse_iso_millis(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.timestamp_millis() as f64);
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().timestamp_millis() as f64)
}

/// Compute turn-relative seconds for every turn.
///
/// The first turn with a resolvable timestamp becomes the origin; each
/// resolvable turn maps to `(timestamp - origin) / 1000`, floored at zero.
/// Turns without a resolvable timestamp map to `None`, and if nothing
/// resolves the whole series is `None`.
pub fn relative_seconds(turns: &[TranscriptTurn]) -> Vec<Option<f64>> {
    let resolved: Vec<Option<f64>> = turns.iter().map(|t| t.resolved_timestamp_ms()).collect();
    let origin = match resolved.iter().flatten().next() {
        Some(first) => *first,
        None => return vec![None; turns.len()],
    };

    resolved
        .into_iter()
        .map(|ms| ms.map(|v| ((v - origin) / 1000.0).max(0.0)))
        .collect()
}

/// Wire envelope for transcripts saved by the interview-session subsystem.
///
/// Files are either a bare turn array or an object wrapping the turns with
/// an optional session id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Envelope {
        #[serde(rename = "sessionId")]
        session_id: Option<String>,
        turns: Vec<TranscriptTurn>,
    },
    Bare(Vec<TranscriptTurn>),
}

/// A transcript loaded from disk, with the session id if the file had one.
#[derive(Debug, Clone)]
pub struct LoadedTranscript {
    pub session_id: Option<String>,
    pub turns: Vec<TranscriptTurn>,
}

/// Load a transcript JSON file.
///
/// Supports both a bare `[turn, ...]` array and a
/// `{"sessionId": ..., "turns": [...]}` envelope.
pub fn load_transcript<P: AsRef<Path>>(path: P) -> Result<LoadedTranscript> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;

    let parsed: TranscriptFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse transcript JSON: {}", path.display()))?;

    Ok(match parsed {
        TranscriptFile::Envelope { session_id, turns } => LoadedTranscript { session_id, turns },
        TranscriptFile::Bare(turns) => LoadedTranscript {
            session_id: None,
            turns,
        },
    })
}
