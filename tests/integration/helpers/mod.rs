//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use itl::analysis::{Lexicon, TimelineAnalysis, TimelineBuilder};
use itl::transcript::{Role, TranscriptTurn};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to the interview fixture
pub fn interview_fixture_path() -> PathBuf {
    fixtures_dir().join("interview.json")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Build a small analysis for cache/storage tests
pub fn sample_analysis(session_id: &str) -> TimelineAnalysis {
    let builder = TimelineBuilder::new(Lexicon::default()).expect("lexicon compiles");
    let turns = vec![
        TranscriptTurn::new("q1", Role::Assistant, "Describe a hard bug you fixed").at_ms(0.0),
        TranscriptTurn::new(
            "a1",
            Role::User,
            "First I bisected the release, then I reduced flaky retries 40% and shipped a fix.",
        )
        .at_ms(4_000.0),
    ];
    builder.analyze(session_id, &turns)
}
