// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Track geometry, unit conversion, and default values for the split calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Standard outdoor track geometry
pub mod track;
/// Unit conversion and measurement constants
pub mod units;

/// Default calculator inputs (mirrors the values a fresh calculator screen starts with)
pub mod defaults {
    /// Default target distance in meters
    pub const DISTANCE_METERS: f64 = 800.0;
    /// Default running speed in km/h
    pub const SPEED_KMH: f64 = 15.0;
    /// Default lane
    pub const LANE: u32 = 1;
    /// Default fixed split interval in meters
    pub const BASIS_METERS: f64 = 100.0;
    /// Decimal places kept when a speed is stored or displayed
    pub const SPEED_DECIMALS: i32 = 2;
    /// Name given to a saved run when the caller does not supply one
    pub const SESSION_NAME_PREFIX: &str = "Session";
    /// Directory under the platform data dir holding the history file
    pub const HISTORY_DIR_NAME: &str = "trackpace";
    /// History file name
    pub const HISTORY_FILE_NAME: &str = "history.json";
}

/// Calculation limits
pub mod limits {
    /// Upper bound on generated splits, guards against microscopic bases
    pub const MAX_SPLITS: usize = 100_000;
    /// Raw fixed-interval marks closer than this to the finish are folded into it
    pub const MARK_EPSILON_METERS: f64 = 1e-9;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the CLI service
    pub const TRACKPACE_CLI: &str = "trackpace-cli";
}

/// Environment variable names read by the app crate
pub mod env_config {
    /// History backend selector (`memory` or `file`)
    pub const HISTORY_BACKEND: &str = "TRACKPACE_HISTORY_BACKEND";
    /// Path of the JSON history file
    pub const HISTORY_PATH: &str = "TRACKPACE_HISTORY_PATH";
    /// Default distance in meters
    pub const DEFAULT_DISTANCE: &str = "TRACKPACE_DEFAULT_DISTANCE";
    /// Default lane
    pub const DEFAULT_LANE: &str = "TRACKPACE_DEFAULT_LANE";
    /// Default split basis (`100`, `200m`, `laps`)
    pub const DEFAULT_BASIS: &str = "TRACKPACE_DEFAULT_BASIS";
    /// Default output format (`table`, `json`, `toon`)
    pub const OUTPUT_FORMAT: &str = "TRACKPACE_OUTPUT_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
