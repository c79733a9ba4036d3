// ABOUTME: Main library entry point for the Trackpace split calculator
// ABOUTME: Wires the calculation engine to logging, configuration, formatting, and run history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

#![deny(unsafe_code)]

//! # Trackpace
//!
//! Track running pace and split calculator. Given a target distance, a speed
//! (or pace, or target finish time), a lane, and a marking basis, Trackpace
//! produces the intermediate timing marks a runner should hit, corrected for
//! the extra distance run in outer lanes.
//!
//! ## Architecture
//!
//! - **`trackpace-core`**: errors, constants, and data models
//! - **`trackpace-engine`**: lane stagger, split generation, unit conversion
//! - **this crate**: logging, environment configuration, output formatters,
//!   run history storage, and the `trackpace-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use trackpace::engine::{PaceInput, RunParameters};
//! use trackpace::formatters::time::format_time_with_centis;
//! use trackpace::models::SplitBasis;
//!
//! let plan = RunParameters::new(
//!     800.0,
//!     PaceInput::Pace { seconds_per_km: 240.0 },
//!     1,
//!     SplitBasis::fixed(200.0),
//! )
//! .derive()?;
//!
//! assert_eq!(format_time_with_centis(plan.finish_time()), "03:12.00");
//! # Ok::<(), trackpace::errors::AppError>(())
//! ```

/// Unified error handling re-exported from `trackpace-core`
pub use trackpace_core::errors;

/// Application constants re-exported from `trackpace-core`
pub use trackpace_core::constants;

/// Data models re-exported from `trackpace-core`
pub use trackpace_core::models;

/// Calculation engine re-exported from `trackpace-engine`
pub use trackpace_engine as engine;

/// Environment-based configuration
pub mod config;

/// Output formatting: clock times, split tables, JSON/TOON, share text
pub mod formatters;

/// Saved run history with pluggable storage backends
pub mod history;

/// Structured logging setup
pub mod logging;
