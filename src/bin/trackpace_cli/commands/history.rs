// ABOUTME: Run history commands for trackpace-cli
// ABOUTME: Handles list, search, show, rename, delete, and clear for saved runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use trackpace::{
    engine::RunParameters,
    errors::{AppError, AppResult},
    formatters::{share::share_text, table::short_id, OutputFormat},
    history::{resolve_id, HistoryProvider, HistoryStore},
};

use tracing::{info, warn};
use uuid::Uuid;

use crate::helpers::display::{display_plan, display_record, display_records, print_structured};

type Result<T> = AppResult<T>;

/// List saved runs
pub async fn list(store: &HistoryStore, format: OutputFormat) -> Result<()> {
    let records = store.list().await?;
    if format.is_structured() {
        return print_structured(&records, format);
    }
    display_records(&records);
    Ok(())
}

/// Search saved runs
pub async fn search(store: &HistoryStore, query: &str, format: OutputFormat) -> Result<()> {
    let records = store.search(query).await?;
    info!(query, matches = records.len(), "History search");
    if format.is_structured() {
        return print_structured(&records, format);
    }
    display_records(&records);
    Ok(())
}

/// Show one saved run, optionally recalculated from its parameters
pub async fn show(
    store: &HistoryStore,
    id: &str,
    share: bool,
    recalculate: bool,
    format: OutputFormat,
) -> Result<()> {
    let id = lookup(store, id).await?;
    let record = store.get(id).await?;

    if recalculate {
        let plan = RunParameters::from_record(&record).derive()?;
        if format.is_structured() {
            return print_structured(&plan, format);
        }
        println!("{}", record.name);
        display_plan(&plan);
        return Ok(());
    }

    if format.is_structured() {
        return print_structured(&record, format);
    }
    if share {
        println!("{}", share_text(&record));
    } else {
        display_record(&record);
    }
    Ok(())
}

/// Rename a saved run
pub async fn rename(store: &HistoryStore, id: &str, name: &str) -> Result<()> {
    let id = lookup(store, id).await?;
    let record = store.rename(id, name).await?;
    println!("Renamed {} to \"{}\"", short_id(&record), record.name);
    Ok(())
}

/// Delete saved runs
pub async fn delete(store: &HistoryStore, ids: &[String]) -> Result<()> {
    let records = store.list().await?;
    let resolved = ids
        .iter()
        .map(|id| resolve_id(&records, id))
        .collect::<Result<Vec<Uuid>>>()?;

    let removed = store.delete_many(&resolved).await?;
    if removed < resolved.len() {
        warn!(
            requested = resolved.len(),
            removed, "Some runs were already gone"
        );
    }
    println!("Deleted {removed} saved run(s)");
    Ok(())
}

/// Delete the whole history
pub async fn clear(store: &HistoryStore, confirmed: bool) -> Result<()> {
    if !confirmed {
        return Err(AppError::invalid_input(
            "Refusing to clear history without --yes",
        ));
    }
    let removed = store.clear().await?;
    println!("Cleared {removed} saved run(s)");
    Ok(())
}

async fn lookup(store: &HistoryStore, id: &str) -> Result<Uuid> {
    let records = store.list().await?;
    resolve_id(&records, id)
}
