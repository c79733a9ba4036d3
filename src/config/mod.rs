// ABOUTME: Configuration module for the split calculator
// ABOUTME: Exposes environment-driven settings for history storage, defaults, and output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

/// Environment variable parsing and typed settings
pub mod environment;

pub use environment::{
    Environment, HistoryBackend, HistoryConfig, LogLevel, RunDefaults, TrackpaceConfig,
};
