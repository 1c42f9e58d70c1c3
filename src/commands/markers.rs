//! Markers command handler

use anyhow::Result;

use itl::Config;

use super::{builder_from_config, format_time, load_with_session_id};

/// Show pruned timeline markers for a transcript without touching the
/// cache.
pub fn handle(file: &str) -> Result<()> {
    let config = Config::load()?;
    let (session_id, loaded) = load_with_session_id(file, None)?;
    let builder = builder_from_config(&config)?;
    let analysis = builder.analyze(&session_id, &loaded.turns);

    if analysis.markers.is_empty() {
        println!("No markers detected.");
        return Ok(());
    }

    for marker in &analysis.markers {
        let when = match marker.event_time_sec {
            Some(secs) => format_time(secs),
            None => format!("turn {}", marker.event_turn_index),
        };
        println!(
            "{:>8}  [{}] {}  severity {}  confidence {:.2}",
            when, marker.category, marker.short_label, marker.severity, marker.confidence
        );
        println!("          {}", marker.rationale);
        println!("          evidence: {}", marker.evidence_snippet);
        println!("          try: {}", marker.actionable_improvement);
        println!();
    }

    Ok(())
}
