//! Cache command handlers

use anyhow::Result;

use itl::cache::AnalysisCache;
use itl::{Config, StorageManager};

/// Show cache statistics and list entries.
pub fn handle_status() -> Result<()> {
    let config = Config::load()?;
    let manager = StorageManager::new(config);

    let stats = manager.stats()?;
    println!("{}", stats.summary());

    let entries = manager.list_entries()?;
    if entries.is_empty() {
        return Ok(());
    }

    println!();
    for entry in &entries {
        match &entry.summary {
            Some(summary) => println!(
                "  {}  {:>9}  {}  {} segments, {} markers",
                entry.format_age(),
                entry.size_human(),
                summary.session_id,
                summary.segments,
                summary.markers
            ),
            None => println!(
                "  {}  {:>9}  {}  (unreadable)",
                entry.format_age(),
                entry.size_human(),
                entry.filename
            ),
        }
    }

    Ok(())
}

/// Delete cache entries: one session, everything, or just stale ones.
pub fn handle_clear(all: bool, session_id: Option<&str>) -> Result<()> {
    let config = Config::load()?;

    if let Some(session_id) = session_id {
        let cache = AnalysisCache::new(config.storage_directory());
        if cache.remove(session_id)? {
            println!("Deleted cache entry for session {}.", session_id);
        } else {
            println!("No cache entry for session {}.", session_id);
        }
        return Ok(());
    }

    let manager = StorageManager::new(config);
    let entries = if all {
        manager.list_entries()?
    } else {
        manager.stale_entries()?
    };

    if entries.is_empty() {
        println!("Nothing to delete.");
        return Ok(());
    }

    let freed = manager.delete_entries(&entries)?;
    println!(
        "Deleted {} entries, freed {}.",
        entries.len(),
        humansize::format_size(freed, humansize::BINARY)
    );

    Ok(())
}
