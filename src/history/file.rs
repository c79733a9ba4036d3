// ABOUTME: JSON file run history that rewrites the whole file on every change
// ABOUTME: Writes go through a temp file and rename so a crash never leaves a partial file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use super::{find_record, remove_records, rename_record, HistoryProvider};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::RunRecord;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// History stored as a JSON array in a single file
///
/// A missing file reads as an empty history. Every mutation is a full
/// read-modify-write held under one lock.
pub struct JsonFileHistory {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileHistory {
    /// History backed by the file at `path`; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the history file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AppResult<Vec<RunRecord>> {
        let started = Instant::now();
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "History file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read history file {}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<RunRecord> = serde_json::from_str(&contents).map_err(|e| {
            AppError::serialization(format!(
                "History file {} is not valid run history JSON",
                self.path.display()
            ))
            .with_source(e)
        })?;

        AppLogger::log_storage_operation(
            "read",
            &self.path.display().to_string(),
            elapsed_ms(started),
        );
        Ok(records)
    }

    async fn persist(&self, records: &[RunRecord]) -> AppResult<()> {
        let started = Instant::now();
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!(
                    "Failed to create history directory {}",
                    parent.display()
                ))
                .with_source(e)
            })?;
        }

        let json = serde_json::to_string_pretty(records)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to write history file {}",
                temp_path.display()
            ))
            .with_source(e)
        })?;
        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to replace history file {}",
                self.path.display()
            ))
            .with_source(e)
        })?;

        AppLogger::log_storage_operation(
            "write",
            &self.path.display().to_string(),
            elapsed_ms(started),
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl HistoryProvider for JsonFileHistory {
    async fn save(&self, record: RunRecord) -> AppResult<RunRecord> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        records.insert(0, record.clone());
        self.persist(&records).await?;
        AppLogger::log_history_event("save", 1, true);
        Ok(record)
    }

    async fn list(&self) -> AppResult<Vec<RunRecord>> {
        self.load().await
    }

    async fn get(&self, id: Uuid) -> AppResult<RunRecord> {
        find_record(&self.load().await?, id)
    }

    async fn rename(&self, id: Uuid, name: &str) -> AppResult<RunRecord> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let renamed = rename_record(&mut records, id, name)?;
        self.persist(&records).await?;
        AppLogger::log_history_event("rename", 1, true);
        Ok(renamed)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> AppResult<usize> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let removed = remove_records(&mut records, ids);
        if removed > 0 {
            self.persist(&records).await?;
        }
        AppLogger::log_history_event("delete", removed, true);
        Ok(removed)
    }

    async fn clear(&self) -> AppResult<usize> {
        let _guard = self.write_lock.lock().await;
        let removed = self.load().await?.len();
        self.persist(&[]).await?;
        AppLogger::log_history_event("clear", removed, true);
        Ok(removed)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
