// ABOUTME: Trackpace CLI - command-line split calculator for track running
// ABOUTME: Computes lane-adjusted splits, prints lane stagger, and manages saved runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors
//!
//! Usage:
//! ```bash
//! # 800m at 15 km/h in lane 1, a split every 100m
//! trackpace-cli splits --distance 800 --speed 15
//!
//! # 400m at 4:00/km in lane 8, a split every 200m, saved to history
//! trackpace-cli splits --distance 400 --pace 4:00 --lane 8 --basis 200 --save
//!
//! # 1500m in 5:30 total, quarter-lap splits as JSON
//! trackpace-cli --format json splits --distance 1500 --time 5:30 --basis laps
//!
//! # Lane stagger reference
//! trackpace-cli lanes
//!
//! # Saved runs
//! trackpace-cli history list
//! trackpace-cli history search 800m
//! trackpace-cli history show 3f2a9c1b --share
//! trackpace-cli history rename 3f2a9c1b "Tuesday intervals"
//! trackpace-cli history delete 3f2a9c1b 77aa0e42
//! trackpace-cli history clear --yes
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use trackpace::{
    config::TrackpaceConfig,
    errors::{AppError, AppResult},
    formatters::{time::parse_clock_time, OutputFormat},
    history::HistoryStore,
    logging::LoggingConfig,
    models::SplitBasis,
};

use tracing::debug;

use commands::splits::SplitsArgs;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "trackpace-cli",
    about = "Track running pace and split calculator",
    long_about = "Computes the split times a runner should hit on a track, corrected for the extra distance run in outer lanes, and keeps a history of saved runs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (table, json, toon); defaults to `TRACKPACE_OUTPUT_FORMAT`
    #[arg(long, short = 'f', global = true)]
    format: Option<OutputFormat>,

    /// Use a throwaway in-memory history instead of the configured backend
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate splits for a run
    Splits {
        /// Target distance in meters
        #[arg(long, short = 'd')]
        distance: Option<f64>,

        /// Speed in km/h
        #[arg(long, short = 's', conflicts_with_all = ["pace", "time"])]
        speed: Option<f64>,

        /// Pace per kilometer, e.g. 4:00 or 3:45.5
        #[arg(long, short = 'p', value_parser = parse_clock_time, conflicts_with = "time")]
        pace: Option<f64>,

        /// Target finish time, e.g. 3:12 or 1:05:00
        #[arg(long, short = 't', value_parser = parse_clock_time)]
        time: Option<f64>,

        /// Lane, 1 is the innermost
        #[arg(long, short = 'l')]
        lane: Option<u32>,

        /// Split basis in meters (100, 200m) or `laps` for quarter laps
        #[arg(long, short = 'b')]
        basis: Option<SplitBasis>,

        /// Save the result to history
        #[arg(long)]
        save: bool,

        /// Name for the saved run (defaults to "Session {distance}m")
        #[arg(long, requires = "save")]
        name: Option<String>,

        /// Print plain share text instead of the table
        #[arg(long)]
        share: bool,
    },

    /// Show lane stagger factors and lap lengths
    Lanes {
        /// Highest lane to show
        #[arg(long, default_value = "8")]
        max_lane: u32,
    },

    /// Saved run history
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HistoryCommand {
    /// List saved runs, newest first
    List,

    /// Search saved runs by name, distance, or date
    Search {
        /// Case-insensitive text to look for
        query: String,
    },

    /// Show one saved run with its splits
    Show {
        /// Run id or unique id prefix
        id: String,

        /// Print plain share text
        #[arg(long)]
        share: bool,

        /// Recalculate the splits from the saved parameters
        #[arg(long)]
        recalculate: bool,
    },

    /// Rename a saved run
    Rename {
        /// Run id or unique id prefix
        id: String,

        /// New name
        name: String,
    },

    /// Delete one or more saved runs
    Delete {
        /// Run ids or unique id prefixes
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete every saved run
    Clear {
        /// Confirm deleting the whole history
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env()
        .with_verbose(cli.verbose)
        .init()
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;

    let config = TrackpaceConfig::from_env()
        .map_err(|e| AppError::config(format!("{e:#}")))?;
    let format = cli.format.unwrap_or(config.output_format);

    let store = if cli.ephemeral {
        HistoryStore::memory()
    } else {
        HistoryStore::new(&config.history)
    };
    debug!(backend = store.backend_name(), %format, "Trackpace CLI started");

    match cli.command {
        Command::Splits {
            distance,
            speed,
            pace,
            time,
            lane,
            basis,
            save,
            name,
            share,
        } => {
            let args = SplitsArgs {
                distance,
                speed,
                pace,
                time,
                lane,
                basis,
                save,
                name,
                share,
            };
            commands::splits::run(&config, &store, args, format).await?;
        }
        Command::Lanes { max_lane } => {
            commands::lanes::run(max_lane, format)?;
        }
        Command::History { action } => match action {
            HistoryCommand::List => {
                commands::history::list(&store, format).await?;
            }
            HistoryCommand::Search { query } => {
                commands::history::search(&store, &query, format).await?;
            }
            HistoryCommand::Show {
                id,
                share,
                recalculate,
            } => {
                commands::history::show(&store, &id, share, recalculate, format).await?;
            }
            HistoryCommand::Rename { id, name } => {
                commands::history::rename(&store, &id, &name).await?;
            }
            HistoryCommand::Delete { ids } => {
                commands::history::delete(&store, &ids).await?;
            }
            HistoryCommand::Clear { yes } => {
                commands::history::clear(&store, yes).await?;
            }
        },
    }

    Ok(())
}
