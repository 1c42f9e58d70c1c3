//! Integration tests for cache directory maintenance.

use std::fs;

use itl::cache::AnalysisCache;
use itl::{Config, StorageManager};
use tempfile::TempDir;

use crate::helpers::sample_analysis;

fn manager_for(temp: &TempDir) -> StorageManager {
    let mut config = Config::default();
    config.storage.directory = temp.path().to_string_lossy().to_string();
    StorageManager::new(config)
}

#[test]
fn missing_directory_lists_nothing() {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.storage.directory = temp.path().join("never-created").to_string_lossy().to_string();
    let manager = StorageManager::new(config);

    assert!(manager.list_entries().unwrap().is_empty());
    assert_eq!(manager.stats().unwrap().entry_count, 0);
}

#[test]
fn entries_are_listed_with_summaries() {
    let temp = TempDir::new().unwrap();
    let cache = AnalysisCache::new(temp.path());
    cache.write(&sample_analysis("alpha")).unwrap();
    cache.write(&sample_analysis("beta")).unwrap();

    let manager = manager_for(&temp);
    let entries = manager.list_entries().unwrap();

    assert_eq!(entries.len(), 2);
    for entry in &entries {
        let summary = entry.summary.as_ref().expect("entry should parse");
        assert_eq!(summary.segments, 1);
        assert!(summary.transcript_hash.starts_with("itl-"));
    }
}

#[test]
fn unreadable_entries_are_counted_not_hidden() {
    let temp = TempDir::new().unwrap();
    let cache = AnalysisCache::new(temp.path());
    cache.write(&sample_analysis("alpha")).unwrap();
    fs::write(temp.path().join("broken.json"), "not json").unwrap();

    let manager = manager_for(&temp);
    let stats = manager.stats().unwrap();

    assert_eq!(stats.entry_count, 2);
    assert_eq!(stats.unreadable_count, 1);
    assert!(stats.total_size > 0);
}

#[test]
fn non_json_files_are_ignored() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), "hello").unwrap();

    let manager = manager_for(&temp);
    assert!(manager.list_entries().unwrap().is_empty());
}

#[test]
fn delete_entries_frees_their_bytes() {
    let temp = TempDir::new().unwrap();
    let cache = AnalysisCache::new(temp.path());
    cache.write(&sample_analysis("alpha")).unwrap();
    cache.write(&sample_analysis("beta")).unwrap();

    let manager = manager_for(&temp);
    let entries = manager.list_entries().unwrap();
    let expected: u64 = entries.iter().map(|e| e.size).sum();

    let freed = manager.delete_entries(&entries).unwrap();
    assert_eq!(freed, expected);
    assert!(manager.list_entries().unwrap().is_empty());
}

#[test]
fn fresh_entries_are_not_stale() {
    let temp = TempDir::new().unwrap();
    let cache = AnalysisCache::new(temp.path());
    cache.write(&sample_analysis("alpha")).unwrap();

    let manager = manager_for(&temp);
    assert!(manager.stale_entries().unwrap().is_empty());
}

#[test]
fn stats_summary_mentions_unreadable_entries() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.json"), "not json").unwrap();

    let manager = manager_for(&temp);
    let summary = manager.stats().unwrap().summary();
    assert!(summary.contains("Unreadable entries: 1"));
}
