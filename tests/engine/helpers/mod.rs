//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use itl::analysis::{Lexicon, TimelineBuilder};
use itl::transcript::{LoadedTranscript, Role, TranscriptTurn};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load the interview fixture as parsed turns
pub fn interview_fixture() -> LoadedTranscript {
    itl::transcript::load_transcript(fixtures_dir().join("interview.json"))
        .expect("fixture should parse")
}

/// Build the engine with default heuristics
pub fn builder() -> TimelineBuilder {
    TimelineBuilder::new(Lexicon::default()).expect("default lexicon should compile")
}

/// Interviewer turn shorthand
pub fn assistant(id: &str, content: &str) -> TranscriptTurn {
    TranscriptTurn::new(id, Role::Assistant, content)
}

/// Candidate turn shorthand
pub fn user(id: &str, content: &str) -> TranscriptTurn {
    TranscriptTurn::new(id, Role::User, content)
}
