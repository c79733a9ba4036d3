// ABOUTME: Immutable run parameters and the pure derivation of a full run plan
// ABOUTME: Tracks the authoritative pace field so derived values never feed back into it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use crate::algorithms::{LaneAdjuster, SplitGenerator, UnitConverter};
use crate::validation::ensure_positive;
use serde::{Deserialize, Serialize};
use trackpace_core::constants::defaults;
use trackpace_core::errors::AppResult;
use trackpace_core::models::{RunRecord, Split, SplitBasis};

/// The single pace field the user last edited
///
/// The other two representations are always derived from this one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PaceInput {
    /// Running speed in km/h
    Speed {
        /// Kilometers per hour
        kmh: f64,
    },
    /// Time per kilometer
    Pace {
        /// Seconds per kilometer
        seconds_per_km: f64,
    },
    /// Target finish time for the whole distance
    TotalTime {
        /// Seconds for the nominal distance
        seconds: f64,
    },
}

impl PaceInput {
    /// Name of the authoritative field
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Speed { .. } => "speed",
            Self::Pace { .. } => "pace",
            Self::TotalTime { .. } => "total_time",
        }
    }
}

impl Default for PaceInput {
    fn default() -> Self {
        Self::Speed {
            kmh: defaults::SPEED_KMH,
        }
    }
}

/// Everything needed to compute one split sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// Nominal target distance in meters
    pub distance_meters: f64,
    /// Authoritative pace field
    pub pace: PaceInput,
    /// Track lane, 1 is the innermost
    pub lane: u32,
    /// Split marking basis
    pub basis: SplitBasis,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            distance_meters: defaults::DISTANCE_METERS,
            pace: PaceInput::default(),
            lane: defaults::LANE,
            basis: SplitBasis::default(),
        }
    }
}

impl RunParameters {
    /// Create run parameters
    #[must_use]
    pub const fn new(distance_meters: f64, pace: PaceInput, lane: u32, basis: SplitBasis) -> Self {
        Self {
            distance_meters,
            pace,
            lane,
            basis,
        }
    }

    /// Rebuild the parameters a saved run was computed from, with speed authoritative
    #[must_use]
    pub fn from_record(record: &RunRecord) -> Self {
        Self {
            distance_meters: record.distance_meters,
            pace: PaceInput::Speed {
                kmh: record.speed_kmh,
            },
            lane: record.lane,
            basis: record.basis,
        }
    }

    /// Copy with a different distance
    #[must_use]
    pub const fn with_distance(self, distance_meters: f64) -> Self {
        Self {
            distance_meters,
            ..self
        }
    }

    /// Copy with a new authoritative pace field
    #[must_use]
    pub const fn with_pace(self, pace: PaceInput) -> Self {
        Self { pace, ..self }
    }

    /// Copy with a different lane
    #[must_use]
    pub const fn with_lane(self, lane: u32) -> Self {
        Self { lane, ..self }
    }

    /// Copy with a different marking basis
    #[must_use]
    pub const fn with_basis(self, basis: SplitBasis) -> Self {
        Self { basis, ..self }
    }

    /// Derive speed, pace, total time, and splits from these parameters
    ///
    /// The authoritative field is passed through untouched; only the other
    /// two are computed. The whole plan is recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for non-positive or non-finite inputs
    /// or lane 0, and `AppError::ValueOutOfRange` when too many splits would
    /// be generated.
    pub fn derive(&self) -> AppResult<RunPlan> {
        ensure_positive("Distance", self.distance_meters)?;

        let speed_kmh = UnitConverter::resolve_speed(self.distance_meters, &self.pace)?;
        let pace_seconds_per_km = match self.pace {
            PaceInput::Pace { seconds_per_km } => seconds_per_km,
            PaceInput::Speed { .. } | PaceInput::TotalTime { .. } => {
                UnitConverter::pace_from_speed(speed_kmh)?
            }
        };
        let total_time_seconds = match self.pace {
            PaceInput::TotalTime { seconds } => seconds,
            PaceInput::Speed { .. } | PaceInput::Pace { .. } => {
                UnitConverter::total_time_from_speed(self.distance_meters, speed_kmh)?
            }
        };

        let lane_factor = LaneAdjuster::adjustment_factor(self.lane)?;
        let splits = SplitGenerator::generate(self.distance_meters, speed_kmh, self.lane, self.basis)?;

        tracing::debug!(
            source = self.pace.field_name(),
            speed_kmh,
            pace_seconds_per_km,
            total_time_seconds,
            "Derived run plan"
        );

        Ok(RunPlan {
            parameters: *self,
            speed_kmh,
            pace_seconds_per_km,
            total_time_seconds,
            lane_factor,
            splits,
        })
    }
}

/// Derived view of a set of run parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPlan {
    /// Parameters the plan was derived from
    pub parameters: RunParameters,
    /// Canonical speed in km/h
    pub speed_kmh: f64,
    /// Pace in seconds per kilometer
    pub pace_seconds_per_km: f64,
    /// Time for the nominal distance, ignoring lane stagger
    pub total_time_seconds: f64,
    /// Lane stagger multiplier
    pub lane_factor: f64,
    /// Split sequence
    pub splits: Vec<Split>,
}

impl RunPlan {
    /// Running time of the final split
    #[must_use]
    pub fn finish_time(&self) -> f64 {
        self.splits.last().map_or(0.0, |split| split.running)
    }

    /// Extra seconds the finish takes compared to the nominal total time
    #[must_use]
    pub fn lane_penalty_seconds(&self) -> f64 {
        self.finish_time() - self.total_time_seconds
    }
}
