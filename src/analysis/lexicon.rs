//! Heuristic word tables and thresholds.
//!
//! Every regex-driven heuristic in the engine (stop words, cue phrases,
//! vocabulary lists, numeric thresholds) lives here as data rather than
//! inline literals, so behavior stays tunable without touching control flow.
//! [`Lexicon`] is the plain configuration value; [`Vocab`] is its compiled
//! form with the regexes built once per engine instance.

use anyhow::{Context, Result};
use regex::Regex;

/// Fixed per-kind marker caps applied by the pruner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerCaps {
    pub strong_answer: usize,
    pub weak_answer: usize,
    pub deep_follow_up: usize,
    pub confidence_dip: usize,
    pub pause_latency: usize,
    pub standout_quote: usize,
}

impl Default for MarkerCaps {
    fn default() -> Self {
        Self {
            strong_answer: 4,
            weak_answer: 4,
            deep_follow_up: 3,
            confidence_dip: 3,
            pause_latency: 3,
            standout_quote: 3,
        }
    }
}

/// Word lists and thresholds backing the scoring and marker heuristics.
///
/// The defaults are the tuned production tables. Lists hold lowercase
/// entries; multi-word phrases are matched on word boundaries.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Tokens removed before overlap/similarity computation.
    pub stop_words: Vec<&'static str>,
    /// Phrases marking a question as a follow-up probe.
    pub follow_up_cues: Vec<&'static str>,
    /// Sequencing cue words rewarded by the structure score.
    pub sequencing_cues: Vec<&'static str>,
    /// Explicit STAR-style vocabulary rewarded by the structure score.
    pub star_vocabulary: Vec<&'static str>,
    /// Domain detail keywords rewarded by the specificity score.
    pub detail_keywords: Vec<&'static str>,
    /// Outcome verbs rewarded by the impact score.
    pub outcome_verbs: Vec<&'static str>,
    /// Hedging phrases penalized by the clarity score.
    pub uncertainty_phrases: Vec<&'static str>,

    /// Jaccard similarity at or above which a question chains onto the
    /// previous one.
    pub follow_up_similarity: f64,
    /// Question-to-answer latency (seconds) at or above which a pause
    /// marker fires.
    pub pause_threshold_secs: f64,
    /// Momentum moving-average window (odd, centered).
    pub momentum_window: usize,
    /// Per-kind marker caps.
    pub marker_caps: MarkerCaps,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stop_words: vec![
                "a", "an", "the", "and", "or", "but", "if", "then", "so", "of", "to", "in", "on",
                "at", "by", "as", "from", "for", "with", "about", "into", "over", "after", "is", "are", "was", "were",
                "be", "been", "being", "do", "does", "did", "have", "has", "had", "i", "you", "he",
                "she", "it", "we", "they", "me", "my", "your", "our", "their", "this", "that",
                "these", "those", "what", "which", "who", "how", "when", "where", "tell", "us",
                "please", "would", "could", "can",
            ],
            follow_up_cues: vec![
                "walk me through",
                "can you",
                "specifically",
                "why",
                "how did",
                "dig deeper",
                "clarify",
                "follow up",
                "what exactly",
            ],
            sequencing_cues: vec![
                "first",
                "then",
                "after",
                "before",
                "finally",
                "because",
                "therefore",
                "result",
            ],
            star_vocabulary: vec!["situation", "task", "action", "result"],
            detail_keywords: vec![
                "metrics",
                "kpi",
                "kpis",
                "deadline",
                "deadlines",
                "sprint",
                "sprints",
                "incident",
                "incidents",
                "latency",
                "revenue",
                "conversion",
                "retention",
                "stakeholder",
                "stakeholders",
                "roadmap",
                "experiment",
                "experiments",
                "a/b test",
                "ab test",
                "users",
            ],
            outcome_verbs: vec![
                "increase",
                "increased",
                "decrease",
                "decreased",
                "improve",
                "improved",
                "reduced",
                "saved",
                "delivered",
                "launched",
                "shipped",
                "grew",
                "boosted",
                "cut",
                "lifted",
                "won",
            ],
            uncertainty_phrases: vec![
                "i'm not sure",
                "not certain",
                "not sure",
                "i think",
                "kind of",
                "sort of",
                "i guess",
                "i hope",
                "maybe",
                "probably",
                "um",
                "uh",
            ],
            follow_up_similarity: 0.30,
            pause_threshold_secs: 8.0,
            momentum_window: 3,
            marker_caps: MarkerCaps::default(),
        }
    }
}

/// Compiled form of a [`Lexicon`]: one case-insensitive word-boundary
/// regex per vocabulary, built once and reused across calls.
#[derive(Debug)]
pub struct Vocab {
    pub(crate) lexicon: Lexicon,
    pub(crate) follow_up_cue: Regex,
    pub(crate) sequencing: Regex,
    pub(crate) star: Regex,
    pub(crate) detail: Regex,
    pub(crate) outcome: Regex,
    pub(crate) uncertainty: Regex,
    pub(crate) numeric: Regex,
}

impl Vocab {
    /// Compile the lexicon's vocabularies into matchers.
    pub fn compile(lexicon: Lexicon) -> Result<Self> {
        let follow_up_cue = phrase_regex(&lexicon.follow_up_cues)?;
        let sequencing = phrase_regex(&lexicon.sequencing_cues)?;
        let star = phrase_regex(&lexicon.star_vocabulary)?;
        let detail = phrase_regex(&lexicon.detail_keywords)?;
        let outcome = phrase_regex(&lexicon.outcome_verbs)?;
        let uncertainty = phrase_regex(&lexicon.uncertainty_phrases)?;
        let numeric =
            Regex::new(r"\d+(?:[.,]\d+)?%?").context("Failed to compile numeric token pattern")?;

        Ok(Self {
            lexicon,
            follow_up_cue,
            sequencing,
            star,
            detail,
            outcome,
            uncertainty,
            numeric,
        })
    }

    /// The underlying configuration tables.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

/// Build one case-insensitive alternation matching any listed phrase on
/// word boundaries. Entries are regex-escaped, so lists may safely carry
/// characters like `/`.
fn phrase_regex(phrases: &[&str]) -> Result<Regex> {
    let escaped: Vec<String> = phrases.iter().map(|p| regex::escape(p)).collect();
    let pattern = format!(r"(?i)\b(?:{})\b", escaped.join("|"));
    Regex::new(&pattern).with_context(|| format!("Failed to compile phrase list: {:?}", phrases))
}
