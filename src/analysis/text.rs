//! Tokenizer and text metrics.
//!
//! Pure functions over transcript text: token sets, word and sentence
//! counts, vocabulary hit counting, whitespace normalization and evidence
//! snippets. Transcripts are ASCII-folded before matching so smart quotes
//! and accents from speech-to-text capture don't defeat the cue regexes.

use std::collections::BTreeSet;

use deunicode::deunicode;

use super::lexicon::Vocab;

/// Maximum evidence snippet length in characters.
pub const SNIPPET_MAX_CHARS: usize = 160;

/// Collapse all whitespace runs to single spaces and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// ASCII-fold and lowercase text for matching.
pub fn fold(text: &str) -> String {
    deunicode(text).to_lowercase()
}

/// Extract the meaningful token set: ASCII-folded, lowercased, split on
/// non-alphanumeric characters, stop words removed.
pub fn token_set(text: &str, stop_words: &[&str]) -> BTreeSet<String> {
    fold(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !stop_words.contains(t))
        .map(|t| t.to_string())
        .collect()
}

/// Token-set Jaccard similarity: `|A ∩ B| / |A ∪ B|`.
///
/// Two empty sets have similarity 0, not 1 — an empty question carries no
/// evidence of topical continuity.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Directed overlap ratio: how much of `base` is covered by `other`.
///
/// Returns `None` when `base` has no meaningful tokens.
pub fn overlap_ratio(base: &BTreeSet<String>, other: &BTreeSet<String>) -> Option<f64> {
    if base.is_empty() {
        return None;
    }
    Some(base.intersection(other).count() as f64 / base.len() as f64)
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentence count: split on `.`, `!`, `?` and count non-empty parts.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Count words whose first character is uppercase, beyond the first such
/// word. Sentence-initial capitalization is free; every additional proper
/// noun counts.
pub fn extra_capitalized_words(text: &str) -> usize {
    let capitalized = text
        .split_whitespace()
        .filter(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
        .count();
    capitalized.saturating_sub(1)
}

/// Per-answer text metrics consumed by the scoring heuristics.
#[derive(Debug, Clone, Default)]
pub struct TextMetrics {
    pub char_len: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub numeric_tokens: usize,
    pub extra_capitalized: usize,
    pub detail_hits: usize,
    pub outcome_hits: usize,
    pub uncertainty_hits: usize,
    pub has_sequencing_cue: bool,
    pub has_star_vocabulary: bool,
}

impl TextMetrics {
    /// Measure a normalized answer against the compiled vocabularies.
    pub fn measure(normalized: &str, vocab: &Vocab) -> Self {
        let folded = fold(normalized);
        Self {
            char_len: normalized.chars().count(),
            word_count: word_count(normalized),
            sentence_count: sentence_count(normalized),
            numeric_tokens: vocab.numeric.find_iter(&folded).count(),
            extra_capitalized: extra_capitalized_words(normalized),
            detail_hits: vocab.detail.find_iter(&folded).count(),
            outcome_hits: vocab.outcome.find_iter(&folded).count(),
            uncertainty_hits: vocab.uncertainty.find_iter(&folded).count(),
            has_sequencing_cue: vocab.sequencing.is_match(&folded),
            has_star_vocabulary: vocab.star.is_match(&folded),
        }
    }
}

/// Clip text to an evidence snippet of at most [`SNIPPET_MAX_CHARS`]
/// characters, appending an ellipsis when truncated.
pub fn evidence_snippet(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count <= SNIPPET_MAX_CHARS {
        return text.to_string();
    }
    let clipped: String = text.chars().take(SNIPPET_MAX_CHARS - 3).collect();
    format!("{}...", clipped.trim_end())
}
