// ABOUTME: Integration tests for run history storage backends
// ABOUTME: Exercises the in-memory and JSON file stores through the HistoryProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;
use trackpace::config::{HistoryBackend, HistoryConfig};
use trackpace::engine::{PaceInput, RunParameters};
use trackpace::errors::ErrorCode;
use trackpace::history::{
    record_from_plan, resolve_id, HistoryProvider, HistoryStore, InMemoryHistory,
    JsonFileHistory,
};
use trackpace::models::{RunRecord, SplitBasis};
use uuid::Uuid;

/// Helper: record for a run of `distance` meters saved `minutes` after a fixed start
fn sample_record(distance: f64, minutes: i64) -> RunRecord {
    let plan = RunParameters::new(
        distance,
        PaceInput::Speed { kmh: 15.0 },
        1,
        SplitBasis::fixed(100.0),
    )
    .derive()
    .unwrap();
    let created_at = Utc.with_ymd_and_hms(2025, 3, 14, 7, 0, 0).unwrap() + Duration::minutes(minutes);
    record_from_plan(&plan, None, created_at)
}

/// Helper: file-backed store inside a fresh temp dir
fn file_store() -> (TempDir, JsonFileHistory) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileHistory::new(dir.path().join("nested").join("history.json"));
    (dir, store)
}

async fn check_save_and_list_newest_first(store: &dyn HistoryProvider) {
    let first = store.save(sample_record(400.0, 0)).await.unwrap();
    let second = store.save(sample_record(800.0, 5)).await.unwrap();

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, second.id);
    assert_eq!(records[1].id, first.id);
}

async fn check_get_rename_delete(store: &dyn HistoryProvider) {
    let a = store.save(sample_record(400.0, 0)).await.unwrap();
    let b = store.save(sample_record(800.0, 1)).await.unwrap();
    let c = store.save(sample_record(1500.0, 2)).await.unwrap();

    let fetched = store.get(b.id).await.unwrap();
    assert_eq!(fetched.id, b.id);
    assert_eq!(fetched.name, "Session 800m");
    assert_eq!(fetched.splits.len(), b.splits.len());

    let renamed = store.rename(b.id, "  Tuesday 800s ").await.unwrap();
    assert_eq!(renamed.name, "Tuesday 800s");
    assert_eq!(store.get(b.id).await.unwrap().name, "Tuesday 800s");

    let err = store.rename(b.id, "   ").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let removed = store.delete_many(&[a.id, c.id, Uuid::new_v4()]).await.unwrap();
    assert_eq!(removed, 2);
    let remaining = store.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b.id);

    let err = store.get(a.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    let err = store.rename(a.id, "gone").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

async fn check_search_and_clear(store: &dyn HistoryProvider) {
    store.save(sample_record(400.0, 0)).await.unwrap();
    let eight = store.save(sample_record(800.0, 1)).await.unwrap();
    store.rename(eight.id, "Race pace").await.unwrap();

    assert_eq!(store.search("race").await.unwrap().len(), 1);
    assert_eq!(store.search("SESSION 400").await.unwrap().len(), 1);
    assert_eq!(store.search("2025-03-14").await.unwrap().len(), 2);
    assert_eq!(store.search("Mar 14").await.unwrap().len(), 2);
    assert_eq!(store.search("").await.unwrap().len(), 2);
    assert!(store.search("marathon").await.unwrap().is_empty());

    assert_eq!(store.clear().await.unwrap(), 2);
    assert!(store.list().await.unwrap().is_empty());
    assert_eq!(store.clear().await.unwrap(), 0);
}

#[tokio::test]
async fn test_memory_save_and_list() {
    check_save_and_list_newest_first(&InMemoryHistory::new()).await;
}

#[tokio::test]
async fn test_memory_get_rename_delete() {
    check_get_rename_delete(&InMemoryHistory::new()).await;
}

#[tokio::test]
async fn test_memory_search_and_clear() {
    check_search_and_clear(&InMemoryHistory::new()).await;
}

#[tokio::test]
async fn test_memory_clones_share_records() {
    let store = InMemoryHistory::new();
    let clone = store.clone();
    store.save(sample_record(400.0, 0)).await.unwrap();
    assert_eq!(clone.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_file_save_and_list() {
    let (_dir, store) = file_store();
    check_save_and_list_newest_first(&store).await;
}

#[tokio::test]
async fn test_file_get_rename_delete() {
    let (_dir, store) = file_store();
    check_get_rename_delete(&store).await;
}

#[tokio::test]
async fn test_file_search_and_clear() {
    let (_dir, store) = file_store();
    check_search_and_clear(&store).await;
}

#[tokio::test]
async fn test_file_missing_is_empty() {
    let (_dir, store) = file_store();
    assert!(store.list().await.unwrap().is_empty());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_file_survives_reopen() {
    let (dir, store) = file_store();
    let saved = store.save(sample_record(800.0, 0)).await.unwrap();

    let reopened = JsonFileHistory::new(store.path());
    let records = reopened.list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, saved.id);
    assert_eq!(records[0].created_at, saved.created_at);
    assert_eq!(records[0].basis, saved.basis);
    assert!((records[0].total_time_seconds - saved.total_time_seconds).abs() < 1e-9);

    // No temp file is left behind after a write
    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("nested"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[tokio::test]
async fn test_file_corrupt_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileHistory::new(&path);
    let err = store.list().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_store_factory_selects_backend() {
    let dir = TempDir::new().unwrap();
    let file_config = HistoryConfig {
        backend: HistoryBackend::File,
        path: dir.path().join("history.json"),
    };
    let file = HistoryStore::new(&file_config);
    assert_eq!(file.backend_name(), "file");
    file.save(sample_record(400.0, 0)).await.unwrap();
    assert!(file_config.path.exists());

    let memory_config = HistoryConfig {
        backend: HistoryBackend::Memory,
        path: dir.path().join("unused.json"),
    };
    let memory = HistoryStore::new(&memory_config);
    assert_eq!(memory.backend_name(), "memory");
    memory.save(sample_record(400.0, 0)).await.unwrap();
    assert!(!memory_config.path.exists());
    assert_eq!(memory.search("400").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_resolve_id_by_prefix() {
    let store = InMemoryHistory::new();
    let saved = store.save(sample_record(400.0, 0)).await.unwrap();
    let records = store.list().await.unwrap();

    let prefix: String = saved.id.simple().to_string().chars().take(8).collect();
    assert_eq!(resolve_id(&records, &prefix).unwrap(), saved.id);
    assert_eq!(resolve_id(&records, &saved.id.to_string()).unwrap(), saved.id);

    let err = resolve_id(&records, "zzzz").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    let err = resolve_id(&records, "").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_resolve_id_ambiguous_prefix() {
    let mut first = sample_record(400.0, 0);
    let mut second = sample_record(800.0, 1);
    first.id = Uuid::parse_str("aaaa0000-0000-4000-8000-000000000001").unwrap();
    second.id = Uuid::parse_str("aaaa0000-0000-4000-8000-000000000002").unwrap();
    let store = InMemoryHistory::with_records(vec![second, first]);
    let records = store.list().await.unwrap();

    let err = resolve_id(&records, "aaaa").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
