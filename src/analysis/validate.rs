//! Boundary validation for analysis results.
//!
//! A `TimelineAnalysis` coming back from persistence (or about to go in)
//! is untrusted: corrupted files, partial writes and internal logic bugs
//! all land here. Validation failures are never surfaced to users; the
//! cache treats a bad read as a miss and drops a bad write with a log.

use thiserror::Error;

use super::hash;
use super::lexicon::MarkerCaps;
use super::marker::MarkerKind;
use super::timeline::TimelineAnalysis;

/// Why a `TimelineAnalysis` failed schema validation.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("session id is empty")]
    EmptySessionId,

    #[error("transcript hash {0:?} is malformed")]
    MalformedHash(String),

    #[error("segment {index} has score {value} outside [1, 5]")]
    ScoreOutOfRange { index: usize, value: f64 },

    #[error("segment {index} has index {got} out of order (expected {expected})")]
    SegmentIndexMismatch {
        index: usize,
        got: usize,
        expected: usize,
    },

    #[error("segment {index} spans turns {start}..{end} backwards")]
    BackwardsSpan {
        index: usize,
        start: usize,
        end: usize,
    },

    #[error("marker {id:?} references segment {segment} of {segments}")]
    MarkerSegmentOutOfRange {
        id: String,
        segment: usize,
        segments: usize,
    },

    #[error("marker {id:?} severity {severity} outside [1, 5]")]
    SeverityOutOfRange { id: String, severity: u8 },

    #[error("marker {id:?} confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange { id: String, confidence: f64 },

    #[error("{count} markers of kind {kind} exceed cap {cap}")]
    MarkerCapExceeded {
        kind: MarkerKind,
        count: usize,
        cap: usize,
    },

    #[error("markers are not in chronological order at position {position}")]
    MarkersOutOfOrder { position: usize },

    #[error("momentum has {points} points for {segments} segments")]
    MomentumLengthMismatch { points: usize, segments: usize },

    #[error("momentum point {index} value {value} outside [0, 100]")]
    MomentumOutOfRange { index: usize, value: f64 },
}

/// Validate a full analysis record against the schema contract.
pub fn validate_analysis(
    analysis: &TimelineAnalysis,
    caps: &MarkerCaps,
) -> Result<(), ValidationError> {
    if analysis.session_id.trim().is_empty() {
        return Err(ValidationError::EmptySessionId);
    }
    if !hash::is_well_formed(&analysis.transcript_hash) {
        return Err(ValidationError::MalformedHash(
            analysis.transcript_hash.clone(),
        ));
    }

    for (position, segment) in analysis.segments.iter().enumerate() {
        if segment.segment_index != position {
            return Err(ValidationError::SegmentIndexMismatch {
                index: position,
                got: segment.segment_index,
                expected: position,
            });
        }
        if segment.answer_turn_end_index < segment.answer_turn_start_index {
            return Err(ValidationError::BackwardsSpan {
                index: position,
                start: segment.answer_turn_start_index,
                end: segment.answer_turn_end_index,
            });
        }
        for value in segment
            .scores
            .values()
            .into_iter()
            .chain([segment.average_score])
        {
            if !(1.0..=5.0).contains(&value) {
                return Err(ValidationError::ScoreOutOfRange {
                    index: position,
                    value,
                });
            }
        }
    }

    let mut previous_turn = 0usize;
    for (position, marker) in analysis.markers.iter().enumerate() {
        if marker.segment_index >= analysis.segments.len() {
            return Err(ValidationError::MarkerSegmentOutOfRange {
                id: marker.id.clone(),
                segment: marker.segment_index,
                segments: analysis.segments.len(),
            });
        }
        if !(1..=5).contains(&marker.severity) {
            return Err(ValidationError::SeverityOutOfRange {
                id: marker.id.clone(),
                severity: marker.severity,
            });
        }
        if !(0.0..=1.0).contains(&marker.confidence) {
            return Err(ValidationError::ConfidenceOutOfRange {
                id: marker.id.clone(),
                confidence: marker.confidence,
            });
        }
        if position > 0 && marker.event_turn_index < previous_turn {
            return Err(ValidationError::MarkersOutOfOrder { position });
        }
        previous_turn = marker.event_turn_index;
    }

    for kind in MarkerKind::all() {
        let count = analysis.markers.iter().filter(|m| m.kind == kind).count();
        let cap = kind.cap(caps);
        if count > cap {
            return Err(ValidationError::MarkerCapExceeded { kind, count, cap });
        }
    }

    if analysis.momentum_points.len() != analysis.segments.len() {
        return Err(ValidationError::MomentumLengthMismatch {
            points: analysis.momentum_points.len(),
            segments: analysis.segments.len(),
        });
    }
    for (index, point) in analysis.momentum_points.iter().enumerate() {
        if !(0.0..=100.0).contains(&point.value) {
            return Err(ValidationError::MomentumOutOfRange {
                index,
                value: point.value,
            });
        }
    }

    Ok(())
}
