//! Segments command handler

use anyhow::Result;

use itl::Config;

use super::{builder_from_config, load_with_session_id, truncate_string};

/// Show scored segments for a transcript without touching the cache.
pub fn handle(file: &str) -> Result<()> {
    let config = Config::load()?;
    let (session_id, loaded) = load_with_session_id(file, None)?;
    let builder = builder_from_config(&config)?;
    let analysis = builder.analyze(&session_id, &loaded.turns);

    if analysis.segments.is_empty() {
        println!("No question/answer pairs found.");
        return Ok(());
    }

    for segment in &analysis.segments {
        println!(
            "#{} (turns {}-{})  avg {:.1}",
            segment.segment_index,
            segment.question_turn_index,
            segment.answer_turn_end_index,
            segment.average_score
        );
        println!("  Q: {}", truncate_string(&segment.question, 76));
        if segment.has_answer() {
            println!("  A: {}", truncate_string(&segment.answer, 76));
        } else {
            println!("  A: (no answer)");
        }
        println!(
            "  relevance {:.1}  structure {:.1}  specificity {:.1}  impact {:.1}  clarity {:.1}",
            segment.scores.relevance,
            segment.scores.structure,
            segment.scores.specificity,
            segment.scores.impact,
            segment.scores.clarity
        );
        if let Some(latency) = segment.latency_sec {
            println!("  latency: {:.1}s", latency);
        }
        if segment.follow_up_count > 0 {
            println!("  follow-up chain: {}", segment.follow_up_count);
        }
        println!();
    }

    Ok(())
}
