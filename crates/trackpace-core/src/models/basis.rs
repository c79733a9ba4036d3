// ABOUTME: Split marking basis selection (fixed meter interval or quarter laps)
// ABOUTME: Parsed from CLI/config strings and stored with saved runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use crate::constants::defaults;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where split marks are placed along the run
///
/// - `FixedInterval`: every `meters` of nominal distance, plus the finish
/// - `LapFraction`: every quarter of the lane-adjusted lap, plus the finish
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SplitBasis {
    /// Marks at every multiple of a fixed distance
    FixedInterval {
        /// Step between marks in meters
        meters: f64,
    },
    /// Marks at 1/4, 1/2, 3/4 and whole laps of the effective lap distance
    LapFraction,
}

impl Default for SplitBasis {
    fn default() -> Self {
        Self::FixedInterval {
            meters: defaults::BASIS_METERS,
        }
    }
}

impl SplitBasis {
    /// Fixed-interval basis with the given step
    #[must_use]
    pub const fn fixed(meters: f64) -> Self {
        Self::FixedInterval { meters }
    }

    /// Get basis name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FixedInterval { .. } => "fixed_interval",
            Self::LapFraction => "lap_fraction",
        }
    }

    /// Get basis description
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::FixedInterval { meters } => format!("Split every {meters}m"),
            Self::LapFraction => "Split every quarter lap of the lane-adjusted track".to_owned(),
        }
    }

    /// Check that a fixed step is positive and finite
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for a non-positive or non-finite step
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            Self::FixedInterval { meters } if !meters.is_finite() || *meters <= 0.0 => Err(
                AppError::invalid_input(format!("Split basis must be positive, got {meters}")),
            ),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SplitBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedInterval { meters } => write!(f, "{meters}m"),
            Self::LapFraction => f.write_str("laps"),
        }
    }
}

impl FromStr for SplitBasis {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "lap" | "laps" | "lap_fraction" | "quarters" => Ok(Self::LapFraction),
            other => {
                let numeric = other.strip_suffix('m').unwrap_or(other).trim();
                let meters: f64 = numeric.parse().map_err(|_| {
                    AppError::invalid_input(format!(
                        "Unknown split basis: '{s}'. Use a distance in meters (e.g. 100, 200m) or 'laps'"
                    ))
                })?;
                let basis = Self::FixedInterval { meters };
                basis.validate()?;
                Ok(basis)
            }
        }
    }
}
