//! Pipeline-level properties: determinism, hashing, segmentation
//! completeness, score bounds, pruning caps and output ordering.

use itl::analysis::{hash, validate_analysis, MarkerCaps, MarkerKind};
use itl::transcript::TranscriptTurn;

use crate::helpers::{assistant, builder, interview_fixture, user};

#[test]
fn analysis_is_deterministic() {
    let b = builder();
    let turns = interview_fixture().turns;

    let first = b.analyze("practice-1", &turns);
    let second = b.analyze("practice-1", &turns);

    assert_eq!(first.transcript_hash, second.transcript_hash);
    assert_eq!(
        serde_json::to_value(&first.segments).unwrap(),
        serde_json::to_value(&second.segments).unwrap()
    );
    assert_eq!(
        serde_json::to_value(&first.markers).unwrap(),
        serde_json::to_value(&second.markers).unwrap()
    );
    assert_eq!(
        serde_json::to_value(&first.momentum_points).unwrap(),
        serde_json::to_value(&second.momentum_points).unwrap()
    );
}

#[test]
fn hash_is_stable_and_content_sensitive() {
    let turns = interview_fixture().turns;
    let again = interview_fixture().turns;
    assert_eq!(hash::transcript_hash(&turns), hash::transcript_hash(&again));

    for i in 0..turns.len() {
        let mut mutated = interview_fixture().turns;
        mutated[i].content.push('x');
        assert_ne!(
            hash::transcript_hash(&turns),
            hash::transcript_hash(&mutated),
            "changing turn {} content should change the hash",
            i
        );
    }
}

#[test]
fn empty_transcript_yields_empty_result() {
    let analysis = builder().analyze("empty", &[]);
    assert!(analysis.segments.is_empty());
    assert!(analysis.markers.is_empty());
    assert!(analysis.momentum_points.is_empty());
}

#[test]
fn transcript_without_questions_yields_empty_result() {
    let turns = vec![
        user("a1", "Unprompted remark."),
        user("a2", "Another one."),
    ];
    let analysis = builder().analyze("chatter", &turns);
    assert!(analysis.segments.is_empty());
    assert!(analysis.markers.is_empty());
}

#[test]
fn every_turn_belongs_to_at_most_one_segment() {
    let turns = interview_fixture().turns;
    let analysis = builder().analyze("practice-1", &turns);

    let mut seen = std::collections::BTreeSet::new();
    for segment in &analysis.segments {
        for index in segment.question_turn_index..=segment.answer_turn_end_index {
            assert!(
                seen.insert(index),
                "turn {} claimed by more than one segment",
                index
            );
        }
    }
}

#[test]
fn turns_before_the_first_question_are_excluded() {
    let mut turns = vec![
        user("pre1", "Testing my mic."),
        user("pre2", "Okay, ready."),
    ];
    turns.extend(interview_fixture().turns);

    let analysis = builder().analyze("practice-1", &turns);
    let first_span_start = analysis.segments[0].question_turn_index;
    assert_eq!(first_span_start, 2);
}

#[test]
fn scores_stay_in_bounds_across_the_fixture() {
    let analysis = builder().analyze("practice-1", &interview_fixture().turns);
    assert!(!analysis.segments.is_empty());

    for segment in &analysis.segments {
        for value in segment.scores.values() {
            assert!((1.0..=5.0).contains(&value));
        }
        assert!((1.0..=5.0).contains(&segment.average_score));
    }
    for point in &analysis.momentum_points {
        assert!((0.0..=100.0).contains(&point.value));
    }
}

#[test]
fn marker_counts_respect_per_kind_caps() {
    // Ten question/answer pairs that each trip weak_answer (irrelevant,
    // unstructured) and pause_latency (30s gaps).
    let mut turns = Vec::new();
    for i in 0..10 {
        let base = (i as f64) * 120_000.0;
        turns.push(
            assistant(&format!("q{}", i), "Describe your database migration strategy in detail")
                .at_ms(base),
        );
        turns.push(user(&format!("a{}", i), "Lunch was great.").at_ms(base + 30_000.0));
    }

    let analysis = builder().analyze("caps", &turns);
    let caps = MarkerCaps::default();
    for kind in MarkerKind::all() {
        let count = analysis.markers.iter().filter(|m| m.kind == kind).count();
        assert!(
            count <= kind.cap(&caps),
            "{} markers of kind {} exceed cap",
            count,
            kind
        );
    }

    let weak = analysis
        .markers
        .iter()
        .filter(|m| m.kind == MarkerKind::WeakAnswer)
        .count();
    let pause = analysis
        .markers
        .iter()
        .filter(|m| m.kind == MarkerKind::PauseLatency)
        .count();
    assert_eq!(weak, 4, "ten weak answers should be pruned to the cap");
    assert_eq!(pause, 3, "ten long pauses should be pruned to the cap");
}

#[test]
fn pruned_markers_are_chronological() {
    let analysis = builder().analyze("practice-1", &interview_fixture().turns);
    assert!(!analysis.markers.is_empty());

    for pair in analysis.markers.windows(2) {
        assert!(pair[0].event_turn_index <= pair[1].event_turn_index);
    }
    for (position, marker) in analysis.markers.iter().enumerate() {
        assert_eq!(marker.id, format!("marker-{}", position));
    }
}

#[test]
fn assembled_result_passes_schema_validation() {
    let analysis = builder().analyze("practice-1", &interview_fixture().turns);
    assert_eq!(validate_analysis(&analysis, &MarkerCaps::default()), Ok(()));
}

#[test]
fn momentum_has_one_point_per_segment() {
    let analysis = builder().analyze("practice-1", &interview_fixture().turns);
    assert_eq!(analysis.momentum_points.len(), analysis.segments.len());
    for (i, point) in analysis.momentum_points.iter().enumerate() {
        assert_eq!(point.segment_index, i);
    }
}

#[test]
fn unresolvable_timestamps_degrade_to_none() {
    let turns = vec![
        TranscriptTurn {
            created_at: Some("not-a-date".to_string()),
            ..assistant("q1", "A question with a broken clock?")
        },
        user("a1", "An answer without any timestamp at all."),
    ];
    let analysis = builder().analyze("broken-clock", &turns);

    assert_eq!(analysis.segments.len(), 1);
    assert_eq!(analysis.segments[0].latency_sec, None);
    assert!(analysis.markers.iter().all(|m| m.event_time_sec.is_none()));
}
