// ABOUTME: Lane stagger adjustment using the IAAF outdoor track formula
// ABOUTME: Converts a lane number into an effective distance multiplier and lap length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use crate::validation::ensure_lane;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use trackpace_core::constants::track::{
    FIRST_LANE, LANE_ONE_LAP_METERS, LANE_WIDTH_METERS, STANDARD_LANE_COUNT,
};
use trackpace_core::errors::AppResult;

/// Lane stagger calculator
///
/// Running one lap in lane `n` covers `400 + 2π(n-1)·1.22` meters: each lane
/// out adds one lane width to the radius of both bends. The adjustment factor
/// is that distance divided by the lane 1 lap.
///
/// Lanes above 8 are accepted and follow the same formula.
pub struct LaneAdjuster;

/// One row of the lane comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneRow {
    /// Lane number
    pub lane: u32,
    /// Effective distance multiplier
    pub factor: f64,
    /// Length of one lap in this lane
    pub effective_lap_meters: f64,
    /// Extra meters per lap compared to lane 1
    pub stagger_meters: f64,
}

impl LaneAdjuster {
    /// Effective distance multiplier for a lane
    ///
    /// Lane 1 returns exactly `1.0`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `lane` is 0
    pub fn adjustment_factor(lane: u32) -> AppResult<f64> {
        ensure_lane(lane)?;

        if lane == FIRST_LANE {
            return Ok(1.0);
        }
        if lane > STANDARD_LANE_COUNT {
            tracing::debug!(lane, "Lane beyond standard track width, extrapolating stagger");
        }

        let extra_radius_lanes = f64::from(lane - FIRST_LANE);
        let lane_distance = (2.0 * PI * extra_radius_lanes).mul_add(LANE_WIDTH_METERS, LANE_ONE_LAP_METERS);

        Ok(lane_distance / LANE_ONE_LAP_METERS)
    }

    /// Length of one lap run in `lane`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `lane` is 0
    pub fn effective_lap_distance(lane: u32) -> AppResult<f64> {
        Ok(LANE_ONE_LAP_METERS * Self::adjustment_factor(lane)?)
    }

    /// Extra meters per lap in `lane` compared to lane 1
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `lane` is 0
    pub fn stagger_meters(lane: u32) -> AppResult<f64> {
        Ok(Self::effective_lap_distance(lane)? - LANE_ONE_LAP_METERS)
    }

    /// Factor, lap length, and stagger for lanes `1..=max_lane`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `max_lane` is 0
    pub fn lane_table(max_lane: u32) -> AppResult<Vec<LaneRow>> {
        ensure_lane(max_lane)?;

        (FIRST_LANE..=max_lane)
            .map(|lane| {
                let factor = Self::adjustment_factor(lane)?;
                let effective_lap_meters = LANE_ONE_LAP_METERS * factor;
                Ok(LaneRow {
                    lane,
                    factor,
                    effective_lap_meters,
                    stagger_meters: effective_lap_meters - LANE_ONE_LAP_METERS,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_one_is_exact() {
        assert!((LaneAdjuster::adjustment_factor(1).unwrap() - 1.0).abs() < f64::EPSILON);
        assert!((LaneAdjuster::effective_lap_distance(1).unwrap() - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lane_two_stagger() {
        // 2π × 1.22 ≈ 7.665m extra per lap
        let stagger = LaneAdjuster::stagger_meters(2).unwrap();
        assert!((stagger - 7.665).abs() < 0.001, "got {stagger}");
    }

    #[test]
    fn test_lane_zero_rejected() {
        assert!(LaneAdjuster::adjustment_factor(0).is_err());
        assert!(LaneAdjuster::lane_table(0).is_err());
    }

    #[test]
    fn test_lane_table_rows() {
        let rows = LaneAdjuster::lane_table(8).unwrap();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].lane, 1);
        assert!(rows[0].stagger_meters.abs() < f64::EPSILON);
        assert_eq!(rows[7].lane, 8);
        assert!((rows[7].effective_lap_meters - 453.658).abs() < 0.001);
    }
}
