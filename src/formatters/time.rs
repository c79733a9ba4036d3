// ABOUTME: Clock-style formatting of running times and paces
// ABOUTME: Parses user clock input such as 4:00 or 3:12.5 back into seconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use crate::constants::units::{CENTISECONDS_PER_SECOND, SECONDS_PER_MINUTE};
use crate::errors::{AppError, AppResult};

const TENTHS_PER_MINUTE: u64 = 600;
const CENTIS_PER_MINUTE: u64 = 6000;

/// Keeps values like 0.29 from flooring to 28 centiseconds
const CENTI_FLOOR_EPSILON: f64 = 1e-6;

/// Shown for non-finite times
const UNKNOWN_TIME: &str = "--:--.-";

/// Format seconds as `mm:ss.s`, rounded to the nearest tenth
///
/// `192.0` becomes `"03:12.0"`. Negative values clamp to zero.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return UNKNOWN_TIME.to_owned();
    }
    let tenths = (seconds.max(0.0) * 10.0).round() as u64;
    let minutes = tenths / TENTHS_PER_MINUTE;
    let remainder = tenths % TENTHS_PER_MINUTE;
    format!("{minutes:02}:{:02}.{}", remainder / 10, remainder % 10)
}

/// Format seconds as `mm:ss.cc`, truncating to whole centiseconds
///
/// Truncation matches a stopwatch: `136.098` becomes `"02:16.09"`.
#[must_use]
pub fn format_time_with_centis(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--.--".to_owned();
    }
    let centis = seconds
        .max(0.0)
        .mul_add(CENTISECONDS_PER_SECOND, CENTI_FLOOR_EPSILON)
        .floor() as u64;
    let minutes = centis / CENTIS_PER_MINUTE;
    let remainder = centis % CENTIS_PER_MINUTE;
    format!("{minutes:02}:{:02}.{:02}", remainder / 100, remainder % 100)
}

/// Format a pace in seconds per kilometer as `m:ss.s /km`
#[must_use]
pub fn format_pace(seconds_per_km: f64) -> String {
    if !seconds_per_km.is_finite() {
        return format!("{UNKNOWN_TIME} /km");
    }
    let tenths = (seconds_per_km.max(0.0) * 10.0).round() as u64;
    let minutes = tenths / TENTHS_PER_MINUTE;
    let remainder = tenths % TENTHS_PER_MINUTE;
    format!("{minutes}:{:02}.{} /km", remainder / 10, remainder % 10)
}

/// Parse `ss`, `m:ss`, or `h:mm:ss` (fractional seconds allowed) into seconds
///
/// # Errors
///
/// Returns `AppError::InvalidInput` for empty input, non-numeric parts,
/// negative values, or seconds of 60 or more in a clock form
pub fn parse_clock_time(input: &str) -> AppResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("Time must not be empty"));
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let invalid =
        || AppError::invalid_input(format!("Invalid time '{trimmed}'. Use ss, m:ss or h:mm:ss"));

    let (whole_parts, seconds_part) = match parts.split_last() {
        Some((last, rest)) if rest.len() <= 2 => (rest, *last),
        _ => return Err(invalid()),
    };

    let seconds: f64 = seconds_part.trim().parse().map_err(|_| invalid())?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(invalid());
    }
    if !whole_parts.is_empty() && seconds >= SECONDS_PER_MINUTE {
        return Err(invalid());
    }

    let mut total_minutes: u64 = 0;
    for (index, part) in whole_parts.iter().enumerate() {
        let value: u64 = part.trim().parse().map_err(|_| invalid())?;
        // Minutes after an hour field stay below 60
        if index > 0 && value >= 60 {
            return Err(invalid());
        }
        total_minutes = total_minutes
            .checked_mul(60)
            .and_then(|scaled| scaled.checked_add(value))
            .ok_or_else(invalid)?;
    }

    Ok((total_minutes as f64).mul_add(SECONDS_PER_MINUTE, seconds))
}
