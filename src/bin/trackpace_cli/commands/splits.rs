// ABOUTME: Split calculation command for trackpace-cli
// ABOUTME: Builds run parameters from flags and config defaults, derives the plan, optionally saves it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use chrono::Utc;
use trackpace::{
    config::TrackpaceConfig,
    constants::defaults,
    engine::{PaceInput, RunParameters},
    errors::AppResult,
    formatters::{share::share_text, table::short_id, OutputFormat},
    history::{record_from_plan, HistoryProvider, HistoryStore},
    logging::AppLogger,
    models::SplitBasis,
};

use tracing::info;

use crate::helpers::display::{display_plan, print_structured};

type Result<T> = AppResult<T>;

/// Flags of the `splits` command
pub struct SplitsArgs {
    pub distance: Option<f64>,
    pub speed: Option<f64>,
    pub pace: Option<f64>,
    pub time: Option<f64>,
    pub lane: Option<u32>,
    pub basis: Option<SplitBasis>,
    pub save: bool,
    pub name: Option<String>,
    pub share: bool,
}

impl SplitsArgs {
    /// Authoritative pace field; clap allows at most one of the three flags
    fn pace_input(&self) -> PaceInput {
        if let Some(seconds) = self.time {
            PaceInput::TotalTime { seconds }
        } else if let Some(seconds_per_km) = self.pace {
            PaceInput::Pace { seconds_per_km }
        } else {
            PaceInput::Speed {
                kmh: self.speed.unwrap_or(defaults::SPEED_KMH),
            }
        }
    }

    fn parameters(&self, config: &TrackpaceConfig) -> RunParameters {
        RunParameters::new(
            self.distance.unwrap_or(config.defaults.distance_meters),
            self.pace_input(),
            self.lane.unwrap_or(config.defaults.lane),
            self.basis.unwrap_or(config.defaults.basis),
        )
    }
}

/// Calculate and print splits
pub async fn run(
    config: &TrackpaceConfig,
    store: &HistoryStore,
    args: SplitsArgs,
    format: OutputFormat,
) -> Result<()> {
    let params = args.parameters(config);
    let plan = params.derive()?;

    AppLogger::log_split_calculation(
        params.distance_meters,
        params.pace.field_name(),
        params.lane,
        &params.basis.to_string(),
        plan.splits.len(),
    );

    let saved = if args.save {
        let record = record_from_plan(&plan, args.name.as_deref(), Utc::now());
        let record = store.save(record).await?;
        info!(id = %record.id, name = %record.name, "Saved run");
        Some(record)
    } else {
        None
    };

    if format.is_structured() {
        return print_structured(&plan, format);
    }

    if args.share {
        let record = saved
            .clone()
            .unwrap_or_else(|| record_from_plan(&plan, args.name.as_deref(), Utc::now()));
        println!("{}", share_text(&record));
    } else {
        display_plan(&plan);
    }

    if let Some(record) = saved {
        println!("\nSaved \"{}\" as {}", record.name, short_id(&record));
    }

    Ok(())
}
