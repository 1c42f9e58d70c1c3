//! Interview Timeline Analyzer (ITL) Library
//!
//! A Rust library for deriving scored timelines from mock-interview
//! transcripts: question/answer segments with five-dimension scores,
//! flagged moments (markers) and a smoothed momentum curve. The analysis
//! is deterministic and rule-based; no external model is called.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod storage;
pub mod transcript;

pub use analysis::{
    Lexicon, Marker, MarkerCategory, MarkerKind, MomentumPoint, ScoreCard, Segment,
    TimelineAnalysis, TimelineBuilder,
};
pub use cache::AnalysisCache;
pub use config::Config;
pub use storage::StorageManager;
pub use transcript::{Role, TranscriptTurn};
