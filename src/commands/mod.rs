//! Command handlers for the ITL CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod analyze;
pub mod cache;
pub mod completions;
pub mod config;
pub mod markers;
pub mod segments;

use itl::analysis::TimelineBuilder;
use itl::transcript::{self, LoadedTranscript};
use itl::Config;

use anyhow::Result;
use std::path::Path;

/// Truncate a string to a maximum length, adding ellipsis if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Format relative seconds as mm:ss for report output.
pub fn format_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u32;
    let secs = seconds % 60.0;
    format!("{:02}:{:04.1}", minutes, secs)
}

/// Load a transcript and resolve the session id to analyze under.
///
/// Priority: explicit flag, then the file's own sessionId, then the file
/// stem.
pub fn load_with_session_id(
    file: &str,
    session_override: Option<&str>,
) -> Result<(String, LoadedTranscript)> {
    let loaded = transcript::load_transcript(file)?;

    let session_id = session_override
        .map(str::to_string)
        .or_else(|| loaded.session_id.clone())
        .unwrap_or_else(|| {
            Path::new(file)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("session")
                .to_string()
        });

    Ok((session_id, loaded))
}

/// Build the analysis pipeline from the active configuration.
pub fn builder_from_config(config: &Config) -> Result<TimelineBuilder> {
    TimelineBuilder::new(config.lexicon())
}
