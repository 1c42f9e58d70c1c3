//! Five-dimension answer scoring.
//!
//! Each dimension is an independent heuristic over the question/answer
//! pair, clamped to [1, 5] at one-decimal resolution. The heuristics are
//! additive bonus/penalty ladders; the constants are tuned tables, not
//! probabilities.

use serde::{Deserialize, Serialize};

use super::lexicon::Vocab;
use super::text::{self, TextMetrics};

/// Scores for one segment across the five dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub relevance: f64,
    pub structure: f64,
    pub specificity: f64,
    pub impact: f64,
    pub clarity: f64,
}

impl ScoreCard {
    /// Mean of the five dimensions, clamped like the dimensions themselves.
    pub fn average(&self) -> f64 {
        clamp_score(
            (self.relevance + self.structure + self.specificity + self.impact + self.clarity)
                / 5.0,
        )
    }

    /// Iterate the five dimension values in declaration order.
    pub fn values(&self) -> [f64; 5] {
        [
            self.relevance,
            self.structure,
            self.specificity,
            self.impact,
            self.clarity,
        ]
    }
}

/// Clamp a raw heuristic value to [1, 5] at one-decimal resolution.
pub fn clamp_score(raw: f64) -> f64 {
    (raw.clamp(1.0, 5.0) * 10.0).round() / 10.0
}

/// Score a question/answer pair.
///
/// `question` and `answer` are whitespace-normalized; `metrics` must be
/// measured from the same answer text. An empty answer scores 1 on every
/// dimension except relevance, which falls back to its empty-answer band.
pub fn score_answer(question: &str, answer: &str, metrics: &TextMetrics, vocab: &Vocab) -> ScoreCard {
    if answer.is_empty() {
        return ScoreCard {
            relevance: relevance_score(question, answer, vocab),
            structure: 1.0,
            specificity: 1.0,
            impact: 1.0,
            clarity: 1.0,
        };
    }

    ScoreCard {
        relevance: relevance_score(question, answer, vocab),
        structure: structure_score(answer, metrics),
        specificity: specificity_score(metrics),
        impact: impact_score(metrics),
        clarity: clarity_score(metrics),
    }
}

/// Relevance: how much of the question's meaningful vocabulary the answer
/// covers, banded. Falls back to answer-length banding when the question
/// has no meaningful tokens (or the answer is empty).
fn relevance_score(question: &str, answer: &str, vocab: &Vocab) -> f64 {
    let stop_words = &vocab.lexicon().stop_words;
    let answer_tokens = text::token_set(answer, stop_words);

    if answer.is_empty() {
        return token_count_band(0);
    }

    let question_tokens = text::token_set(question, stop_words);
    match text::overlap_ratio(&question_tokens, &answer_tokens) {
        Some(ratio) => clamp_score(match ratio {
            r if r >= 0.45 => 5.0,
            r if r >= 0.30 => 4.0,
            r if r >= 0.18 => 3.0,
            r if r >= 0.08 => 2.0,
            _ => 1.0,
        }),
        None => token_count_band(answer_tokens.len()),
    }
}

/// Length banding used when relevance can't be judged by overlap.
fn token_count_band(tokens: usize) -> f64 {
    if tokens > 8 {
        4.0
    } else if tokens > 3 {
        3.0
    } else {
        2.0
    }
}

/// Structure: length plus sequencing/STAR vocabulary plus multi-sentence
/// shape.
fn structure_score(answer: &str, metrics: &TextMetrics) -> f64 {
    let mut score = 1.5;

    let len = answer.chars().count();
    score += if len > 260 {
        2.0
    } else if len > 140 {
        1.5
    } else if len > 80 {
        1.0
    } else {
        0.0
    };

    if metrics.has_sequencing_cue {
        score += 0.8;
    }
    if metrics.has_star_vocabulary {
        score += 0.8;
    }
    if metrics.sentence_count >= 3 {
        score += 0.8;
    }

    clamp_score(score)
}

/// Specificity: numbers, domain detail vocabulary, and named entities.
fn specificity_score(metrics: &TextMetrics) -> f64 {
    let numeric = (metrics.numeric_tokens as f64 * 0.7).min(2.0);
    let detail = (metrics.detail_hits as f64 * 0.45).min(1.4);
    let named = (metrics.extra_capitalized as f64 * 0.2).min(0.8);
    clamp_score(1.4 + numeric + detail + named)
}

/// Impact: outcome verbs plus any measured quantity.
fn impact_score(metrics: &TextMetrics) -> f64 {
    let outcomes = (metrics.outcome_hits as f64 * 0.8).min(2.2);
    let measured = if metrics.numeric_tokens > 0 { 0.8 } else { 0.0 };
    clamp_score(1.6 + outcomes + measured)
}

/// Clarity: penalty-only. Short answers, hedging and rambling all cost.
fn clarity_score(metrics: &TextMetrics) -> f64 {
    let mut score = 4.3;

    if metrics.word_count < 12 {
        score -= 1.4;
    } else if metrics.word_count < 24 {
        score -= 0.8;
    }

    score -= (metrics.uncertainty_hits as f64 * 0.4).min(1.5);

    if metrics.char_len > 520 {
        score -= 0.9;
    } else if metrics.char_len > 340 {
        score -= 0.4;
    }

    clamp_score(score)
}
