//! CLI definitions for ITL
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so command handlers and tests can build the command tree
//! without pulling in the dispatch logic.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

/// Build clap styles using our theme colors.
///
/// - Cyan: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    Text,
    /// Full analysis record as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "itl")]
#[command(styles = build_cli_styles())]
#[command(about = "[ Interview Timeline Analyzer ] - turn mock-interview transcripts into scored timelines")]
#[command(
    long_about = "Interview Timeline Analyzer (ITL) - analyze mock-interview transcripts.

ITL reads a transcript of interviewer questions and candidate answers and
derives a scored timeline: question/answer segments with five-dimension
scores, flagged moments (strong answers, weak answers, deep follow-ups,
confidence dips, long pauses, standout quotes) and a smoothed momentum
curve. Analysis is deterministic and rule-based; no model calls are made.

Results are cached per session under ~/.itl/analyses, keyed by a content
hash of the transcript, so unchanged transcripts are never recomputed.

QUICK START:
    itl analyze interview.json     Analyze a transcript
    itl segments interview.json    Show scored segments only
    itl markers interview.json     Show flagged moments only
    itl cache status               Check the analysis cache"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a transcript into segments, markers and momentum
    #[command(long_about = "Run the full analysis pipeline over a transcript file.

The transcript is a JSON file holding either a bare array of turns or a
{\"sessionId\": ..., \"turns\": [...]} envelope. The cache is consulted
first: if a result for the same session and transcript hash exists, it is
returned without recomputation.

EXAMPLES:
    itl analyze interview.json
    itl analyze interview.json --format json
    itl analyze interview.json --session-id practice-3
    itl analyze interview.json --no-cache")]
    Analyze {
        /// Path to the transcript JSON file
        file: String,
        /// Session id (defaults to the file's sessionId, then its stem)
        #[arg(long)]
        session_id: Option<String>,
        /// Report format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
        /// Skip the cache entirely: always recompute, never persist
        #[arg(long)]
        no_cache: bool,
    },

    /// Show scored question/answer segments for a transcript
    Segments {
        /// Path to the transcript JSON file
        file: String,
    },

    /// Show flagged timeline moments for a transcript
    Markers {
        /// Path to the transcript JSON file
        file: String,
    },

    /// Manage the analysis cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Show cache statistics and list entries
    Status,
    /// Delete cache entries
    #[command(long_about = "Delete cached analyses.

Without flags, deletes entries older than the configured stale-age
threshold. Use --all to wipe the cache or --session-id to drop one entry.

EXAMPLES:
    itl cache clear
    itl cache clear --all
    itl cache clear --session-id practice-3")]
    Clear {
        /// Delete every entry, not just stale ones
        #[arg(long)]
        all: bool,
        /// Delete only this session's entry
        #[arg(long)]
        session_id: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
}
