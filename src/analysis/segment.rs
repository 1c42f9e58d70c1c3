//! Transcript segmentation.
//!
//! A segment pairs one interviewer question with the run of candidate
//! answer turns that follow it, up to (not including) the next interviewer
//! turn. Segments carry timing, the five-dimension score card, and the
//! follow-up chain counter computed in a second pass over question
//! similarity.

use serde::{Deserialize, Serialize};

use super::lexicon::Vocab;
use super::score::{self, ScoreCard};
use super::text::{self, TextMetrics};
use crate::transcript::TranscriptTurn;

/// One question/answer segment of the interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// 0-based insertion-order identity.
    pub segment_index: usize,

    /// Index of the question turn in the original transcript array.
    pub question_turn_index: usize,
    /// Index of the first answer turn; equals `question_turn_index` when no
    /// answer turns exist.
    pub answer_turn_start_index: usize,
    /// Index of the last answer turn; equals `question_turn_index` when no
    /// answer turns exist.
    pub answer_turn_end_index: usize,

    /// Whitespace-normalized question text.
    pub question: String,
    /// Whitespace-normalized concatenation of the answer turns.
    pub answer: String,

    /// Length of the follow-up chain ending at this segment; 0 when the
    /// question opens a new topic.
    pub follow_up_count: u32,

    /// Seconds between the question timestamp and the first answer-turn
    /// timestamp. `None` when either end is unresolvable or the raw delta
    /// is negative (clock skew is treated as missing data, not zero).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_sec: Option<f64>,

    /// Five-dimension score card.
    pub scores: ScoreCard,
    /// Mean of the five dimensions.
    pub average_score: f64,

    /// Clipped preview of the answer (or question when the answer is
    /// empty).
    pub evidence_snippet: String,

    /// Uncertainty-phrase hits in the answer, kept for marker detection.
    #[serde(skip)]
    pub(crate) uncertainty_hits: usize,
}

impl Segment {
    /// Whether the candidate gave any answer text at all.
    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }
}

/// Build segments from an ordered transcript.
///
/// Interviewer turns with empty content never open a segment; turns before
/// the first non-empty interviewer turn belong to no segment.
pub fn segment_turns(turns: &[TranscriptTurn], vocab: &Vocab) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while cursor < turns.len() {
        let turn = &turns[cursor];
        if !turn.is_assistant() {
            cursor += 1;
            continue;
        }

        let question = text::normalize_whitespace(&turn.content);
        if question.is_empty() {
            cursor += 1;
            continue;
        }

        // Collect everything up to the next interviewer turn; only user
        // turns contribute to the answer.
        let question_index = cursor;
        let mut answer_indices = Vec::new();
        let mut scan = cursor + 1;
        while scan < turns.len() && !turns[scan].is_assistant() {
            if turns[scan].is_user() {
                answer_indices.push(scan);
            }
            scan += 1;
        }

        let answer = text::normalize_whitespace(
            &answer_indices
                .iter()
                .map(|&i| turns[i].content.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        );

        let latency_sec = answer_indices
            .first()
            .and_then(|&first| question_latency(&turns[question_index], &turns[first]));

        let metrics = TextMetrics::measure(&answer, vocab);
        let scores = score::score_answer(&question, &answer, &metrics, vocab);
        let evidence_snippet =
            text::evidence_snippet(if answer.is_empty() { &question } else { &answer });

        segments.push(Segment {
            segment_index: segments.len(),
            question_turn_index: question_index,
            answer_turn_start_index: answer_indices.first().copied().unwrap_or(question_index),
            answer_turn_end_index: answer_indices.last().copied().unwrap_or(question_index),
            question,
            answer,
            follow_up_count: 0,
            latency_sec,
            average_score: scores.average(),
            scores,
            evidence_snippet,
            uncertainty_hits: metrics.uncertainty_hits,
        });

        cursor = scan;
    }

    chain_follow_ups(&mut segments, vocab);
    segments
}

/// Seconds from the question's resolved timestamp to the first answer
/// turn's. Negative raw deltas are treated as unresolvable.
fn question_latency(question: &TranscriptTurn, first_answer: &TranscriptTurn) -> Option<f64> {
    let q = question.resolved_timestamp_ms()?;
    let a = first_answer.resolved_timestamp_ms()?;
    let delta = (a - q) / 1000.0;
    if delta < 0.0 {
        return None;
    }
    Some(delta)
}

/// Second pass: chain questions that probe the previous topic.
///
/// A segment chains when its question is token-similar to the previous
/// question (Jaccard at or above the lexicon threshold) or carries an
/// explicit follow-up cue. Chains accumulate without a cap.
fn chain_follow_ups(segments: &mut [Segment], vocab: &Vocab) {
    let stop_words = &vocab.lexicon().stop_words;
    let threshold = vocab.lexicon().follow_up_similarity;

    let mut previous_tokens = None;
    let mut previous_count = 0u32;

    for segment in segments.iter_mut() {
        let tokens = text::token_set(&segment.question, stop_words);

        if let Some(prev) = &previous_tokens {
            let similar = text::jaccard(&tokens, prev) >= threshold;
            let cued = vocab.follow_up_cue.is_match(&text::fold(&segment.question));
            segment.follow_up_count = if similar || cued { previous_count + 1 } else { 0 };
        }

        previous_count = segment.follow_up_count;
        previous_tokens = Some(tokens);
    }
}
