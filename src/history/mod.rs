// ABOUTME: Saved run history with a pluggable async storage backend
// ABOUTME: Defines the HistoryProvider trait and list operations shared by all backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

//! Run history
//!
//! Saved runs are kept newest first. Each backend implements
//! [`HistoryProvider`]; [`HistoryStore`] picks one from configuration.

use crate::constants::defaults;
use crate::engine::{RunPlan, UnitConverter};
use crate::errors::{AppError, AppResult};
use crate::models::RunRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// History store factory
pub mod factory;
/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use factory::HistoryStore;
pub use file::JsonFileHistory;
pub use memory::InMemoryHistory;

/// Storage backend for saved runs
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Insert a record at the front of the history
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot persist the record
    async fn save(&self, record: RunRecord) -> AppResult<RunRecord>;

    /// All records, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list(&self) -> AppResult<Vec<RunRecord>>;

    /// Fetch one record
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` if no record has this id
    async fn get(&self, id: Uuid) -> AppResult<RunRecord>;

    /// Give a record a new name
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for a blank name and
    /// `AppError::ResourceNotFound` if no record has this id
    async fn rename(&self, id: Uuid, name: &str) -> AppResult<RunRecord>;

    /// Delete every record whose id is listed, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot persist the change
    async fn delete_many(&self, ids: &[Uuid]) -> AppResult<usize>;

    /// Remove all records, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot persist the change
    async fn clear(&self) -> AppResult<usize>;

    /// Records matching a case-insensitive query over name, distance, and date
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn search(&self, query: &str) -> AppResult<Vec<RunRecord>> {
        let records = self.list().await?;
        Ok(records
            .into_iter()
            .filter(|record| record.matches_query(query))
            .collect())
    }
}

/// Build a record from a derived plan
///
/// The speed is stored rounded to two decimals, as shown to the user. A blank
/// or missing name falls back to `Session {distance}m`.
#[must_use]
pub fn record_from_plan(plan: &RunPlan, name: Option<&str>, created_at: DateTime<Utc>) -> RunRecord {
    let params = &plan.parameters;
    let name = name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or_else(|| RunRecord::default_name(params.distance_meters), str::to_owned);

    RunRecord::new(
        name,
        created_at,
        params.distance_meters,
        UnitConverter::round_to_places(plan.speed_kmh, defaults::SPEED_DECIMALS),
        params.lane,
        params.basis,
        plan.splits.clone(),
    )
}

/// Resolve a full id or a unique id prefix against a set of records
///
/// # Errors
///
/// Returns `AppError::ResourceNotFound` when nothing matches and
/// `AppError::InvalidInput` when the prefix is ambiguous
pub fn resolve_id(records: &[RunRecord], id_or_prefix: &str) -> AppResult<Uuid> {
    if let Ok(id) = Uuid::parse_str(id_or_prefix) {
        return Ok(id);
    }

    let prefix = id_or_prefix.trim().to_lowercase().replace('-', "");
    if prefix.is_empty() {
        return Err(AppError::invalid_input("Run id must not be empty"));
    }

    let mut matches = records
        .iter()
        .filter(|record| record.id.simple().to_string().starts_with(&prefix));

    match (matches.next(), matches.next()) {
        (Some(record), None) => Ok(record.id),
        (Some(_), Some(_)) => Err(AppError::invalid_input(format!(
            "Run id prefix '{id_or_prefix}' matches more than one saved run"
        ))),
        (None, _) => Err(AppError::not_found(format!("Run '{id_or_prefix}'"))),
    }
}

fn validated_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("Run name must not be empty"));
    }
    Ok(trimmed.to_owned())
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Run {id}"))
}

fn find_record(records: &[RunRecord], id: Uuid) -> AppResult<RunRecord> {
    records
        .iter()
        .find(|record| record.id == id)
        .cloned()
        .ok_or_else(|| not_found(id))
}

fn rename_record(records: &mut [RunRecord], id: Uuid, name: &str) -> AppResult<RunRecord> {
    let name = validated_name(name)?;
    let record = records
        .iter_mut()
        .find(|record| record.id == id)
        .ok_or_else(|| not_found(id))?;
    record.name = name;
    Ok(record.clone())
}

fn remove_records(records: &mut Vec<RunRecord>, ids: &[Uuid]) -> usize {
    let before = records.len();
    records.retain(|record| !ids.contains(&record.id));
    before - records.len()
}
