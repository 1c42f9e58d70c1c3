//! Scenario tests mirroring real interview shapes.

use itl::analysis::{MarkerCategory, MarkerKind};

use crate::helpers::{assistant, builder, user};

#[test]
fn strong_specific_answer_scores_high_and_gets_flagged() {
    let turns = vec![
        assistant("q1", "Tell me about a time you improved a process").at_ms(0.0),
        user(
            "a1",
            "Situation: our deployment process was slow. Task: I owned the fix. Action: first I \
             profiled the pipeline, then I parallelized the test stages. Result: we reduced \
             deployment delays by 28% over two sprints, saved 10 hours a week, boosted \
             confidence, and improved the stakeholder roadmap metrics.",
        )
        .at_ms(4_000.0),
    ];
    let analysis = builder().analyze("strong", &turns);
    let segment = &analysis.segments[0];

    assert!(segment.scores.specificity >= 4.0, "specificity {}", segment.scores.specificity);
    assert!(segment.scores.impact >= 4.0, "impact {}", segment.scores.impact);
    assert!(segment.average_score >= 4.1, "average {}", segment.average_score);
    assert!(analysis
        .markers
        .iter()
        .any(|m| m.kind == MarkerKind::StrongAnswer && m.segment_index == 0));
}

#[test]
fn vague_answer_flags_weakness_and_confidence_on_one_segment() {
    let turns = vec![
        assistant("q1", "What exactly did you measure?"),
        user("a1", "I think it was mostly fine, kind of hard to say"),
    ];
    let analysis = builder().analyze("vague", &turns);
    let segment = &analysis.segments[0];

    assert!(segment.scores.relevance <= 2.0 || segment.scores.structure <= 2.0);

    let weak = analysis
        .markers
        .iter()
        .find(|m| m.kind == MarkerKind::WeakAnswer)
        .expect("weak answer marker");
    let dip = analysis
        .markers
        .iter()
        .find(|m| m.kind == MarkerKind::ConfidenceDip)
        .expect("confidence dip marker");

    assert_eq!(weak.segment_index, 0);
    assert_eq!(dip.segment_index, 0);
    assert_eq!(weak.category, MarkerCategory::WeakPoint);
    assert_eq!(dip.category, MarkerCategory::Confidence);
}

#[test]
fn repeated_probing_builds_a_follow_up_chain() {
    // Three questions sharing well over 30% of their meaningful tokens.
    let turns = vec![
        assistant("q1", "Describe the checkout latency incident"),
        user("a1", "Checkout latency doubled during the sale."),
        assistant("q2", "What caused the checkout latency incident?"),
        user("a2", "A cache stampede on the pricing service."),
        assistant("q3", "When did the checkout latency incident end?"),
        user("a3", "After we shipped request coalescing."),
    ];
    let analysis = builder().analyze("probing", &turns);

    let counts: Vec<u32> = analysis.segments.iter().map(|s| s.follow_up_count).collect();
    assert_eq!(counts, vec![0, 1, 2]);

    let deep = analysis
        .markers
        .iter()
        .find(|m| m.kind == MarkerKind::DeepFollowUp)
        .expect("third probe should flag a deep follow-up");
    assert_eq!(deep.segment_index, 2);
    assert_eq!(deep.event_turn_index, 4);
}

#[test]
fn long_pause_yields_latency_and_a_pacing_marker() {
    let turns = vec![
        assistant("q1", "Design a rate limiter for our public API").at_ms(0.0),
        user("a1", "I would start with a token bucket per client key.").at_ms(20_000.0),
    ];
    let analysis = builder().analyze("pause", &turns);

    let latency = analysis.segments[0].latency_sec.expect("latency should resolve");
    assert!((latency - 20.0).abs() < 0.1);

    let pause = analysis
        .markers
        .iter()
        .find(|m| m.kind == MarkerKind::PauseLatency)
        .expect("pause marker");
    assert_eq!(pause.severity, 4);
    assert_eq!(pause.category, MarkerCategory::Pacing);
    assert_eq!(pause.event_time_sec, Some(0.0));
}

#[test]
fn standout_quotes_cover_best_and_worst_moments() {
    let turns = vec![
        assistant("q1", "Tell me about a launch that went well"),
        user(
            "a1",
            "First we shipped the beta to 200 users, then we launched broadly and grew revenue \
             18% in one sprint. The result: retention improved and the stakeholder review was \
             the shortest on record because the metrics spoke for themselves.",
        ),
        assistant("q2", "How did the team handle the rollout?"),
        user("a2", "We ran the rollout in stages and the team handled the paging calmly."),
        assistant("q3", "And one that went poorly?"),
        user("a3", "um, probably the dashboard one, not sure"),
    ];
    let analysis = builder().analyze("quotes", &turns);

    let quotes: Vec<_> = analysis
        .markers
        .iter()
        .filter(|m| m.kind == MarkerKind::StandoutQuote)
        .collect();

    assert_eq!(quotes.len(), 3);
    assert!(quotes.iter().any(|m| m.short_label == "Key quote" && m.segment_index == 0));
    assert!(quotes.iter().any(|m| m.short_label == "Quote to fix" && m.segment_index == 2));
}

#[test]
fn interview_with_only_empty_questions_produces_nothing() {
    let turns = vec![
        assistant("q1", "   "),
        user("a1", "Hello?"),
        assistant("q2", ""),
    ];
    let analysis = builder().analyze("silence", &turns);
    assert!(analysis.segments.is_empty());
    assert!(analysis.markers.is_empty());
    assert!(analysis.momentum_points.is_empty());
}
