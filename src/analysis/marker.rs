//! Marker detection.
//!
//! Markers flag notable moments on the interview timeline. Per-segment
//! rules fire independently (one segment can emit several markers), and
//! two global rules pick standout quotes across the whole interview. The
//! label/rationale/improvement strings are fixed per kind; only severity,
//! confidence and the evidence snippet are computed from the transcript.

use serde::{Deserialize, Serialize};

use super::lexicon::{MarkerCaps, Vocab};
use super::segment::Segment;
use super::text;

/// The six marker kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    StrongAnswer,
    WeakAnswer,
    DeepFollowUp,
    ConfidenceDip,
    PauseLatency,
    StandoutQuote,
}

impl MarkerKind {
    /// Presentation lane for this kind (fixed many-to-one mapping).
    pub fn category(&self) -> MarkerCategory {
        match self {
            MarkerKind::StrongAnswer | MarkerKind::StandoutQuote => MarkerCategory::Highlight,
            MarkerKind::WeakAnswer => MarkerCategory::WeakPoint,
            MarkerKind::DeepFollowUp => MarkerCategory::FollowUp,
            MarkerKind::ConfidenceDip => MarkerCategory::Confidence,
            MarkerKind::PauseLatency => MarkerCategory::Pacing,
        }
    }

    /// Per-kind cap applied by the pruner.
    pub fn cap(&self, caps: &MarkerCaps) -> usize {
        match self {
            MarkerKind::StrongAnswer => caps.strong_answer,
            MarkerKind::WeakAnswer => caps.weak_answer,
            MarkerKind::DeepFollowUp => caps.deep_follow_up,
            MarkerKind::ConfidenceDip => caps.confidence_dip,
            MarkerKind::PauseLatency => caps.pause_latency,
            MarkerKind::StandoutQuote => caps.standout_quote,
        }
    }

    /// All kinds, in detection order.
    pub fn all() -> [MarkerKind; 6] {
        [
            MarkerKind::StrongAnswer,
            MarkerKind::WeakAnswer,
            MarkerKind::DeepFollowUp,
            MarkerKind::ConfidenceDip,
            MarkerKind::PauseLatency,
            MarkerKind::StandoutQuote,
        ]
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MarkerKind::StrongAnswer => "strong_answer",
            MarkerKind::WeakAnswer => "weak_answer",
            MarkerKind::DeepFollowUp => "deep_follow_up",
            MarkerKind::ConfidenceDip => "confidence_dip",
            MarkerKind::PauseLatency => "pause_latency",
            MarkerKind::StandoutQuote => "standout_quote",
        };
        write!(f, "{}", name)
    }
}

/// Presentation lanes for the timeline strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    Highlight,
    WeakPoint,
    FollowUp,
    Confidence,
    Pacing,
}

impl std::fmt::Display for MarkerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MarkerCategory::Highlight => "HIGHLIGHT",
            MarkerCategory::WeakPoint => "WEAK POINT",
            MarkerCategory::FollowUp => "FOLLOW-UP",
            MarkerCategory::Confidence => "CONFIDENCE",
            MarkerCategory::Pacing => "PACING",
        };
        write!(f, "{}", name)
    }
}

/// One flagged moment on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Positional id assigned after pruning; not stable across runs with
    /// different pruning outcomes.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MarkerKind,
    pub category: MarkerCategory,

    pub segment_index: usize,
    /// Turn-index anchor used for axis placement.
    pub event_turn_index: usize,
    /// Seconds from the first resolvable turn timestamp; `None` when the
    /// anchor turn has no resolvable timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time_sec: Option<f64>,

    /// Ranking priority, 1-5.
    pub severity: u8,
    /// Presentation weight, 0-1.
    pub confidence: f64,

    pub short_label: String,
    pub rationale: String,
    pub why_it_matters: String,
    pub evidence_snippet: String,
    pub actionable_improvement: String,

    /// Transcript index range this marker's evidence covers.
    pub turn_start_index: usize,
    pub turn_end_index: usize,
}

/// Detect all candidate markers across the segment set (pre-pruning).
pub fn detect_markers(segments: &[Segment], vocab: &Vocab) -> Vec<Marker> {
    let mut markers = Vec::new();

    for segment in segments {
        if let Some(m) = strong_answer(segment) {
            markers.push(m);
        }
        if let Some(m) = weak_answer(segment) {
            markers.push(m);
        }
        if let Some(m) = deep_follow_up(segment) {
            markers.push(m);
        }
        if let Some(m) = confidence_dip(segment) {
            markers.push(m);
        }
        if let Some(m) = pause_latency(segment, vocab.lexicon().pause_threshold_secs) {
            markers.push(m);
        }
    }

    markers.extend(standout_quotes(segments));
    markers
}

fn strong_answer(segment: &Segment) -> Option<Marker> {
    if segment.average_score < 4.1 || segment.scores.specificity < 4.0 {
        return None;
    }

    let severity = if segment.average_score >= 4.6 {
        5
    } else if segment.average_score >= 4.35 {
        4
    } else {
        3
    };
    let confidence = confidence_from(
        0.62,
        0.3 * (segment.average_score - 3.8) + 0.2 * (segment.scores.specificity - 3.5),
    );

    Some(Marker {
        id: String::new(),
        kind: MarkerKind::StrongAnswer,
        category: MarkerKind::StrongAnswer.category(),
        segment_index: segment.segment_index,
        event_turn_index: segment.answer_turn_start_index,
        event_time_sec: None,
        severity,
        confidence,
        short_label: "Strong answer".to_string(),
        rationale: "High scores across the board with concrete specifics.".to_string(),
        why_it_matters: "Specific, structured answers are what interviewers remember and quote back in debriefs.".to_string(),
        evidence_snippet: segment.evidence_snippet.clone(),
        actionable_improvement: "Bank this story; reuse its structure for other questions.".to_string(),
        turn_start_index: segment.answer_turn_start_index,
        turn_end_index: segment.answer_turn_end_index,
    })
}

fn weak_answer(segment: &Segment) -> Option<Marker> {
    if segment.scores.relevance > 2.0 && segment.scores.structure > 2.0 {
        return None;
    }

    let weakest = segment.scores.relevance.min(segment.scores.structure);
    let severity = if weakest <= 1.5 {
        5
    } else if weakest <= 2.0 {
        4
    } else {
        3
    };
    let confidence = confidence_from(0.55, 0.25 * (2.0 - weakest));

    Some(Marker {
        id: String::new(),
        kind: MarkerKind::WeakAnswer,
        category: MarkerKind::WeakAnswer.category(),
        segment_index: segment.segment_index,
        event_turn_index: segment.answer_turn_start_index,
        event_time_sec: None,
        severity,
        confidence,
        short_label: "Weak answer".to_string(),
        rationale: "The answer drifts from the question or lacks a clear shape.".to_string(),
        why_it_matters: "Off-topic or unstructured answers make interviewers doubt the underlying experience.".to_string(),
        evidence_snippet: segment.evidence_snippet.clone(),
        actionable_improvement: "Restate the question in your first sentence, then answer it in order.".to_string(),
        turn_start_index: segment.answer_turn_start_index,
        turn_end_index: segment.answer_turn_end_index,
    })
}

fn deep_follow_up(segment: &Segment) -> Option<Marker> {
    if segment.follow_up_count < 2 {
        return None;
    }

    let severity = match segment.follow_up_count {
        2 => 3,
        3 => 4,
        _ => 5,
    };
    let confidence = confidence_from(0.50, 0.12 * (segment.follow_up_count as f64 - 2.0));

    Some(Marker {
        id: String::new(),
        kind: MarkerKind::DeepFollowUp,
        category: MarkerKind::DeepFollowUp.category(),
        segment_index: segment.segment_index,
        event_turn_index: segment.question_turn_index,
        event_time_sec: None,
        severity,
        confidence,
        short_label: "Deep follow-up probing".to_string(),
        rationale: "The interviewer kept probing the same topic across consecutive questions.".to_string(),
        why_it_matters: "Repeated probing means the first answers left gaps, or the topic is central to the role.".to_string(),
        evidence_snippet: text::evidence_snippet(&segment.question),
        actionable_improvement: "Front-load the detail that keeps getting asked for: numbers, your role, the outcome.".to_string(),
        turn_start_index: segment.question_turn_index,
        turn_end_index: segment.answer_turn_end_index,
    })
}

fn confidence_dip(segment: &Segment) -> Option<Marker> {
    if segment.uncertainty_hits == 0 || segment.scores.specificity > 2.8 {
        return None;
    }

    let severity = if segment.uncertainty_hits >= 3 || segment.scores.specificity <= 2.0 {
        4
    } else {
        3
    };
    let confidence = confidence_from(
        0.45,
        0.1 * segment.uncertainty_hits as f64 + 0.08 * (2.8 - segment.scores.specificity),
    );

    Some(Marker {
        id: String::new(),
        kind: MarkerKind::ConfidenceDip,
        category: MarkerKind::ConfidenceDip.category(),
        segment_index: segment.segment_index,
        event_turn_index: segment.answer_turn_start_index,
        event_time_sec: None,
        severity,
        confidence,
        short_label: "Confidence dip".to_string(),
        rationale: "Hedging language paired with low specificity.".to_string(),
        why_it_matters: "Hedged, vague answers read as not owning the work, even when you did.".to_string(),
        evidence_snippet: segment.evidence_snippet.clone(),
        actionable_improvement: "Swap hedges for facts: one number or one named decision beats three qualifiers.".to_string(),
        turn_start_index: segment.answer_turn_start_index,
        turn_end_index: segment.answer_turn_end_index,
    })
}

fn pause_latency(segment: &Segment, threshold_secs: f64) -> Option<Marker> {
    let latency = segment.latency_sec?;
    if latency < threshold_secs {
        return None;
    }

    let severity = if latency >= 25.0 {
        5
    } else if latency >= 15.0 {
        4
    } else {
        3
    };
    let confidence = confidence_from(0.38, latency / 60.0);

    Some(Marker {
        id: String::new(),
        kind: MarkerKind::PauseLatency,
        category: MarkerKind::PauseLatency.category(),
        segment_index: segment.segment_index,
        event_turn_index: segment.question_turn_index,
        event_time_sec: None,
        severity,
        confidence,
        short_label: "Long pause before answering".to_string(),
        rationale: "A noticeable gap between the question and the start of the answer.".to_string(),
        why_it_matters: "Long silences raise pressure; a short thinking-out-loud bridge keeps the room with you.".to_string(),
        evidence_snippet: text::evidence_snippet(&segment.question),
        actionable_improvement: "Buy time out loud: \"Let me think about the trade-offs here\" beats silence.".to_string(),
        turn_start_index: segment.question_turn_index,
        turn_end_index: segment.answer_turn_start_index,
    })
}

/// Global rule: the two strongest segments and the single weakest become
/// standout quotes, de-duplicated by segment identity (strongest framing
/// wins on overlap).
fn standout_quotes(segments: &[Segment]) -> Vec<Marker> {
    if segments.is_empty() {
        return Vec::new();
    }

    let mut by_score: Vec<&Segment> = segments.iter().collect();
    by_score.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.segment_index.cmp(&b.segment_index))
    });

    let mut picked: Vec<(&Segment, bool)> = by_score.iter().take(2).map(|s| (*s, true)).collect();
    if let Some(weakest) = by_score.last() {
        if !picked.iter().any(|(s, _)| s.segment_index == weakest.segment_index) {
            picked.push((*weakest, false));
        }
    }

    picked
        .into_iter()
        .map(|(segment, strongest)| {
            let midpoint = ((segment.question_turn_index + segment.answer_turn_end_index) as f64
                / 2.0)
                .round() as usize;
            let confidence =
                confidence_from(0.72, 0.08 * (segment.average_score - 3.0).abs());

            let (short_label, rationale, improvement) = if strongest {
                (
                    "Key quote",
                    "One of the strongest moments of the interview.",
                    "Lead with material like this when the stakes are highest.",
                )
            } else {
                (
                    "Quote to fix",
                    "The weakest moment of the interview, worth rehearsing.",
                    "Rewrite this answer once, out loud, with one concrete result in it.",
                )
            };

            Marker {
                id: String::new(),
                kind: MarkerKind::StandoutQuote,
                category: MarkerKind::StandoutQuote.category(),
                segment_index: segment.segment_index,
                event_turn_index: midpoint,
                event_time_sec: None,
                severity: 4,
                confidence,
                short_label: short_label.to_string(),
                rationale: rationale.to_string(),
                why_it_matters: "Standout moments anchor how the whole interview is remembered.".to_string(),
                evidence_snippet: segment.evidence_snippet.clone(),
                actionable_improvement: improvement.to_string(),
                turn_start_index: segment.question_turn_index,
                turn_end_index: segment.answer_turn_end_index,
            }
        })
        .collect()
}

/// Clamp `floor + boost` to `[floor, 1.0]`, rounded to two decimals.
fn confidence_from(floor: f64, boost: f64) -> f64 {
    ((floor + boost.max(0.0)).min(1.0) * 100.0).round() / 100.0
}
