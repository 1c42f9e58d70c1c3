//! Momentum curve.
//!
//! Per-segment average scores mapped linearly from 1-5 to 0-100 and
//! smoothed with a centered moving average. Edge points average over the
//! neighbors that exist, so a short interview still gets a full curve.

use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// One point of the smoothed momentum series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumPoint {
    pub segment_index: usize,
    /// Rounded midpoint of the segment's question/answer-end span, used as
    /// the x-axis anchor.
    pub event_turn_index: usize,
    /// Smoothed quality value in [0, 100], one decimal.
    pub value: f64,
}

/// Build the momentum series for a segment set.
///
/// `window` is the centered moving-average width (3 = prev/self/next); it
/// is treated as its floor half-width, so even values behave like the next
/// odd size down.
pub fn build_momentum(segments: &[Segment], window: usize) -> Vec<MomentumPoint> {
    let normalized: Vec<f64> = segments
        .iter()
        .map(|s| (s.average_score - 1.0) / 4.0 * 100.0)
        .collect();

    let half = window.max(1) / 2;
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let lo = i.saturating_sub(half);
            let hi = (i + half).min(normalized.len() - 1);
            let slice = &normalized[lo..=hi];
            let mean = slice.iter().sum::<f64>() / slice.len() as f64;

            MomentumPoint {
                segment_index: segment.segment_index,
                event_turn_index: ((segment.question_turn_index
                    + segment.answer_turn_end_index) as f64
                    / 2.0)
                    .round() as usize,
                value: (mean * 10.0).round() / 10.0,
            }
        })
        .collect()
}
