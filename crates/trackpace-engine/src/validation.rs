// ABOUTME: Shared input guards for the calculation engine
// ABOUTME: Rejects non-finite, zero, and negative values before any arithmetic runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use trackpace_core::constants::track::FIRST_LANE;
use trackpace_core::errors::{AppError, AppResult};

/// Require a finite, strictly positive value
pub fn ensure_positive(name: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    if value <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Require a lane number of at least 1
pub fn ensure_lane(lane: u32) -> AppResult<()> {
    if lane < FIRST_LANE {
        return Err(AppError::invalid_input(format!(
            "Lane must be {FIRST_LANE} or greater, got {lane}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_rejects_bad_values() {
        assert!(ensure_positive("Distance", 0.0).is_err());
        assert!(ensure_positive("Distance", -1.0).is_err());
        assert!(ensure_positive("Distance", f64::NAN).is_err());
        assert!(ensure_positive("Distance", f64::INFINITY).is_err());
        assert!(ensure_positive("Distance", 0.001).is_ok());
    }

    #[test]
    fn test_ensure_lane() {
        assert!(ensure_lane(0).is_err());
        assert!(ensure_lane(1).is_ok());
        assert!(ensure_lane(12).is_ok());
    }
}
