//! Interview Timeline Analyzer (ITL) - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{CacheCommands, Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    // Diagnostics go to stderr so reports stay pipeable; RUST_LOG controls
    // verbosity.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            session_id,
            format,
            no_cache,
        } => commands::analyze::handle(&file, session_id.as_deref(), format, no_cache),

        Commands::Segments { file } => commands::segments::handle(&file),

        Commands::Markers { file } => commands::markers::handle(&file),

        Commands::Cache(command) => match command {
            CacheCommands::Status => commands::cache::handle_status(),
            CacheCommands::Clear { all, session_id } => {
                commands::cache::handle_clear(all, session_id.as_deref())
            }
        },

        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },

        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
