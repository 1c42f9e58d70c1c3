//! Analyze command handler
//!
//! Runs the full pipeline over a transcript file:
//! 1. Load and parse the transcript JSON
//! 2. Check the cache by (session id, transcript hash)
//! 3. Segment, score, detect and prune markers, build momentum
//! 4. Persist the result and print the report

use anyhow::Result;

use itl::analysis::{hash, TimelineAnalysis};
use itl::cache::AnalysisCache;
use itl::Config;

use super::{builder_from_config, format_time, load_with_session_id, truncate_string};
use crate::cli::ReportFormat;

/// Analyze a transcript file, consulting the cache unless disabled.
pub fn handle(
    file: &str,
    session_override: Option<&str>,
    format: Option<ReportFormat>,
    no_cache: bool,
) -> Result<()> {
    let config = Config::load()?;
    let (session_id, loaded) = load_with_session_id(file, session_override)?;

    let format = format.unwrap_or(if config.output.format == "json" {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    });

    let cache = AnalysisCache::new(config.storage_directory());
    let transcript_hash = hash::transcript_hash(&loaded.turns);

    let (analysis, from_cache) = if no_cache {
        let builder = builder_from_config(&config)?;
        (builder.analyze(&session_id, &loaded.turns), false)
    } else if let Some(cached) = cache.read(&session_id, &transcript_hash) {
        (cached, true)
    } else {
        let builder = builder_from_config(&config)?;
        let analysis = builder.analyze(&session_id, &loaded.turns);
        cache.write(&analysis)?;
        (analysis, false)
    };

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        ReportFormat::Text => print_report(&analysis, from_cache),
    }

    Ok(())
}

/// Print the human-readable report.
fn print_report(analysis: &TimelineAnalysis, from_cache: bool) {
    println!(
        "Session {} ({}){}",
        analysis.session_id,
        analysis.transcript_hash,
        if from_cache { " [cached]" } else { "" }
    );

    if analysis.segments.is_empty() {
        println!("\nNo question/answer pairs found - not enough data to analyze yet.");
        return;
    }

    println!("\nSegments ({}):", analysis.segments.len());
    for segment in &analysis.segments {
        let chain = if segment.follow_up_count > 0 {
            format!("  follow-up x{}", segment.follow_up_count)
        } else {
            String::new()
        };
        println!(
            "  #{:<2} avg {:.1}  [R {:.1} S {:.1} Sp {:.1} I {:.1} C {:.1}]{}",
            segment.segment_index,
            segment.average_score,
            segment.scores.relevance,
            segment.scores.structure,
            segment.scores.specificity,
            segment.scores.impact,
            segment.scores.clarity,
            chain,
        );
        println!("      Q: {}", truncate_string(&segment.question, 70));
    }

    println!("\nMarkers ({}):", analysis.markers.len());
    for marker in &analysis.markers {
        let when = match marker.event_time_sec {
            Some(secs) => format_time(secs),
            None => format!("turn {}", marker.event_turn_index),
        };
        println!(
            "  {:>8}  [{}] {} (severity {})",
            when, marker.category, marker.short_label, marker.severity
        );
        println!("            {}", truncate_string(&marker.evidence_snippet, 70));
    }

    let momentum: Vec<String> = analysis
        .momentum_points
        .iter()
        .map(|p| format!("{:.1}", p.value))
        .collect();
    println!("\nMomentum: {}", momentum.join(" -> "));
}
