//! Interview timeline analysis pipeline.
//!
//! A deterministic, rule-based signal-extraction engine over interview
//! transcripts: no model calls, no I/O, no shared state. Raw turns flow
//! one way through the pipeline:
//!
//! ```text
//! turns -> segments -> markers -> pruned markers -> assembled result
//! ```
//!
//! # Design Philosophy
//!
//! - **Degrade, don't fail**: malformed timestamps become `None`, empty
//!   transcripts become empty results. The engine has no error path of
//!   its own.
//! - **Data over control flow**: every word list and threshold lives in
//!   [`lexicon::Lexicon`]; the pipeline code never hard-codes vocabulary.
//! - **Cacheable by content**: results carry a transcript hash so callers
//!   can skip recomputation when nothing changed.
//!
//! # Module Structure
//!
//! - [`text`] - tokenizer and text metrics
//! - [`lexicon`] - heuristic tables and compiled vocabularies
//! - [`segment`] - question/answer segmentation and follow-up chains
//! - [`score`] - five-dimension answer scoring
//! - [`marker`] - notable-moment detection
//! - [`prune`] - per-kind capping and chronological ordering
//! - [`momentum`] - smoothed quality curve
//! - [`hash`] - transcript content hashing
//! - [`validate`] - schema validation at the persistence boundary
//! - [`timeline`] - the assembler and result record

pub mod hash;
pub mod lexicon;
pub mod marker;
pub mod momentum;
pub mod prune;
pub mod score;
pub mod segment;
pub mod text;
pub mod timeline;
pub mod validate;

pub use lexicon::{Lexicon, MarkerCaps};
pub use marker::{Marker, MarkerCategory, MarkerKind};
pub use momentum::MomentumPoint;
pub use score::ScoreCard;
pub use segment::Segment;
pub use timeline::{TimelineAnalysis, TimelineBuilder};
pub use validate::{validate_analysis, ValidationError};
