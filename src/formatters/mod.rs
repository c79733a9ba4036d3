// ABOUTME: Output format selection and structured serialization for command results
// ABOUTME: Supports plain-text tables (default), pretty JSON, and TOON behind a cargo feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

//! Output formatting
//!
//! - [`time`]: clock strings for running times and paces
//! - [`table`]: fixed-width split, lane, and history tables
//! - [`share`]: plain-text export of a saved run
//! - [`format_output`]: JSON or TOON serialization of any `Serialize` value

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Plain-text share/export rendering
pub mod share;
/// Fixed-width text tables
pub mod table;
/// Clock formatting and parsing
pub mod time;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// TOON (Token-Oriented Object Notation), requires the `toon` feature
    Toon,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Table => "text/plain",
            Self::Json => "application/json",
            // TOON has no registered MIME type
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }

    /// Whether output goes through serde rather than a text table
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Json | Self::Toon)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "toon" => Ok(Self::Toon),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format '{other}'. Use table, json, or toon"
            ))),
        }
    }
}

/// Serialize data to JSON or TOON
///
/// # Errors
///
/// Returns `AppError::SerializationError` if encoding fails,
/// `AppError::ConfigError` for TOON when the `toon` feature is disabled, and
/// `AppError::InvalidInput` for `Table`, which has no generic rendering.
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Toon => encode_toon(data),
        OutputFormat::Table => Err(AppError::invalid_input(
            "Table output has no generic rendering; use a table renderer",
        )),
    }
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> AppResult<String> {
    let value = serde_json::to_value(data)?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options)
        .map_err(|e| AppError::serialization(format!("TOON encoding failed: {e}")))
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> AppResult<String> {
    Err(AppError::config(
        "TOON output requires building with the `toon` feature",
    ))
}
