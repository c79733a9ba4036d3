// ABOUTME: Bidirectional conversion between speed, pace, and total time
// ABOUTME: Resolves whichever field the user edited into a canonical km/h speed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use crate::plan::PaceInput;
use crate::validation::ensure_positive;
use trackpace_core::constants::units::{METERS_PER_KM, MS_TO_KMH, SECONDS_PER_HOUR};
use trackpace_core::errors::AppResult;

/// Speed / pace / total time converter
///
/// | From | To | Formula |
/// |---|---|---|
/// | pace (s/km) | speed (km/h) | `3600 / pace` |
/// | distance, time | speed (km/h) | `distance / time × 3.6` |
/// | speed (km/h) | pace (s/km) | `3600 / speed` |
/// | distance, speed | time (s) | `distance / (speed × 1000 / 3600)` |
///
/// Derived values are never rounded here. Rounding is a display concern, see
/// [`UnitConverter::round_to_places`].
pub struct UnitConverter;

impl UnitConverter {
    /// Speed in km/h from a pace in seconds per kilometer
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the pace is not positive and finite
    pub fn speed_from_pace(pace_seconds_per_km: f64) -> AppResult<f64> {
        ensure_positive("Pace", pace_seconds_per_km)?;
        Ok(SECONDS_PER_HOUR / pace_seconds_per_km)
    }

    /// Speed in km/h needed to cover `distance_meters` in `total_time_seconds`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if either value is not positive and finite
    pub fn speed_from_total_time(distance_meters: f64, total_time_seconds: f64) -> AppResult<f64> {
        ensure_positive("Distance", distance_meters)?;
        ensure_positive("Total time", total_time_seconds)?;
        Ok((distance_meters / total_time_seconds) * MS_TO_KMH)
    }

    /// Pace in seconds per kilometer from a speed in km/h
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the speed is not positive and finite
    pub fn pace_from_speed(speed_kmh: f64) -> AppResult<f64> {
        ensure_positive("Speed", speed_kmh)?;
        Ok(SECONDS_PER_HOUR / speed_kmh)
    }

    /// Seconds needed to cover `distance_meters` at `speed_kmh`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if either value is not positive and finite
    pub fn total_time_from_speed(distance_meters: f64, speed_kmh: f64) -> AppResult<f64> {
        ensure_positive("Distance", distance_meters)?;
        ensure_positive("Speed", speed_kmh)?;
        Ok(distance_meters / Self::meters_per_second(speed_kmh))
    }

    /// km/h to m/s without validation
    #[must_use]
    pub fn meters_per_second(speed_kmh: f64) -> f64 {
        speed_kmh * METERS_PER_KM / SECONDS_PER_HOUR
    }

    /// Canonical speed in km/h from the authoritative pace input
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the input or distance is not positive and finite
    pub fn resolve_speed(distance_meters: f64, input: &PaceInput) -> AppResult<f64> {
        match *input {
            PaceInput::Speed { kmh } => {
                ensure_positive("Speed", kmh)?;
                Ok(kmh)
            }
            PaceInput::Pace { seconds_per_km } => Self::speed_from_pace(seconds_per_km),
            PaceInput::TotalTime { seconds } => Self::speed_from_total_time(distance_meters, seconds),
        }
    }

    /// Round to a fixed number of decimal places
    #[must_use]
    pub fn round_to_places(value: f64, places: i32) -> f64 {
        let scale = 10_f64.powi(places);
        (value * scale).round() / scale
    }
}
