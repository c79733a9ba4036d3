// ABOUTME: In-memory run history backed by a shared vector
// ABOUTME: Used for tests and for sessions that should not touch the disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use super::{find_record, remove_records, rename_record, HistoryProvider};
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::RunRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local history, newest record at index 0
///
/// Clones share the same records.
#[derive(Clone, Default)]
pub struct InMemoryHistory {
    records: Arc<RwLock<Vec<RunRecord>>>,
}

impl InMemoryHistory {
    /// Empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// History pre-filled with records, newest first
    #[must_use]
    pub fn with_records(records: Vec<RunRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl HistoryProvider for InMemoryHistory {
    async fn save(&self, record: RunRecord) -> AppResult<RunRecord> {
        self.records.write().await.insert(0, record.clone());
        AppLogger::log_history_event("save", 1, true);
        Ok(record)
    }

    async fn list(&self) -> AppResult<Vec<RunRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> AppResult<RunRecord> {
        find_record(&self.records.read().await, id)
    }

    async fn rename(&self, id: Uuid, name: &str) -> AppResult<RunRecord> {
        let renamed = rename_record(&mut self.records.write().await, id, name)?;
        AppLogger::log_history_event("rename", 1, true);
        Ok(renamed)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> AppResult<usize> {
        let removed = remove_records(&mut *self.records.write().await, ids);
        AppLogger::log_history_event("delete", removed, true);
        Ok(removed)
    }

    async fn clear(&self) -> AppResult<usize> {
        let mut records = self.records.write().await;
        let removed = records.len();
        records.clear();
        drop(records);
        AppLogger::log_history_event("clear", removed, true);
        Ok(removed)
    }
}
