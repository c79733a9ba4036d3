// ABOUTME: History store factory for configuration-based backend selection
// ABOUTME: Wraps the memory and file backends behind one cloneable handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use super::{HistoryProvider, InMemoryHistory, JsonFileHistory};
use crate::config::{HistoryBackend, HistoryConfig};
use crate::errors::AppResult;
use crate::models::RunRecord;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
enum Backend {
    Memory(InMemoryHistory),
    File(Arc<JsonFileHistory>),
}

/// Unified run history interface
#[derive(Clone)]
pub struct HistoryStore {
    backend: Backend,
}

impl HistoryStore {
    /// Create a store for the configured backend
    #[must_use]
    pub fn new(config: &HistoryConfig) -> Self {
        match config.backend {
            HistoryBackend::Memory => {
                info!("Using in-memory run history");
                Self::memory()
            }
            HistoryBackend::File => {
                info!(path = %config.path.display(), "Using JSON file run history");
                Self {
                    backend: Backend::File(Arc::new(JsonFileHistory::new(config.path.clone()))),
                }
            }
        }
    }

    /// Empty in-memory store
    #[must_use]
    pub fn memory() -> Self {
        Self {
            backend: Backend::Memory(InMemoryHistory::new()),
        }
    }

    /// Name of the active backend
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Memory(_) => "memory",
            Backend::File(_) => "file",
        }
    }

    fn provider(&self) -> &dyn HistoryProvider {
        match &self.backend {
            Backend::Memory(history) => history,
            Backend::File(history) => history.as_ref(),
        }
    }
}

#[async_trait]
impl HistoryProvider for HistoryStore {
    async fn save(&self, record: RunRecord) -> AppResult<RunRecord> {
        self.provider().save(record).await
    }

    async fn list(&self) -> AppResult<Vec<RunRecord>> {
        self.provider().list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<RunRecord> {
        self.provider().get(id).await
    }

    async fn rename(&self, id: Uuid, name: &str) -> AppResult<RunRecord> {
        self.provider().rename(id, name).await
    }

    async fn delete_many(&self, ids: &[Uuid]) -> AppResult<usize> {
        self.provider().delete_many(ids).await
    }

    async fn clear(&self) -> AppResult<usize> {
        self.provider().clear().await
    }

    async fn search(&self, query: &str) -> AppResult<Vec<RunRecord>> {
        self.provider().search(query).await
    }
}
