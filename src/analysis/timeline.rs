//! Timeline assembly.
//!
//! The assembler is the engine's only public entry point: it runs
//! segmentation, marker detection and pruning, resolves marker times
//! against the transcript clock, builds the momentum curve, hashes the
//! input and packages everything into one immutable result record.
//!
//! The computation is synchronous, allocation-fresh and free of I/O;
//! callers may run it from any number of parallel request handlers.

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::hash;
use super::lexicon::{Lexicon, Vocab};
use super::marker::{self, Marker};
use super::momentum::{self, MomentumPoint};
use super::prune;
use super::segment::{self, Segment};
use crate::transcript::{self, TranscriptTurn};

/// Complete analysis of one interview transcript.
///
/// The unit of caching: recomputed whenever `transcript_hash` changes,
/// never mutated after assembly. Two runs over identical turns differ only
/// in `computed_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineAnalysis {
    /// Caller-supplied opaque session key.
    pub session_id: String,
    /// ISO timestamp of computation.
    pub computed_at: String,
    /// Content hash of the input transcript (cache-invalidation key only).
    pub transcript_hash: String,

    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
    pub momentum_points: Vec<MomentumPoint>,
}

impl TimelineAnalysis {
    /// Count markers in a given presentation category.
    pub fn markers_in_category(&self, category: marker::MarkerCategory) -> usize {
        self.markers.iter().filter(|m| m.category == category).count()
    }
}

/// The assembled analysis pipeline with its compiled vocabularies.
///
/// Build one per configuration and reuse it across transcripts; the
/// regexes compile once here.
#[derive(Debug)]
pub struct TimelineBuilder {
    vocab: Vocab,
}

impl TimelineBuilder {
    /// Compile a builder from heuristic tables.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        Ok(Self {
            vocab: Vocab::compile(lexicon)?,
        })
    }

    /// The heuristic tables this builder runs with.
    pub fn lexicon(&self) -> &Lexicon {
        self.vocab.lexicon()
    }

    /// Analyze a transcript.
    ///
    /// Deterministic given identical input content and ordering; an empty
    /// or unpairable transcript produces an empty result rather than an
    /// error.
    pub fn analyze(&self, session_id: &str, turns: &[TranscriptTurn]) -> TimelineAnalysis {
        let segments = segment::segment_turns(turns, &self.vocab);

        let candidates = marker::detect_markers(&segments, &self.vocab);
        let mut markers = prune::prune_markers(candidates, &self.vocab.lexicon().marker_caps);

        let clock = transcript::relative_seconds(turns);
        for marker in markers.iter_mut() {
            marker.event_time_sec = clock.get(marker.event_turn_index).copied().flatten();
        }

        let momentum_points =
            momentum::build_momentum(&segments, self.vocab.lexicon().momentum_window);

        TimelineAnalysis {
            session_id: session_id.to_string(),
            computed_at: Utc::now().to_rfc3339(),
            transcript_hash: hash::transcript_hash(turns),
            segments,
            markers,
            momentum_points,
        }
    }
}
