// ABOUTME: Unit conversion constants for distance, time, and speed
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Multiply m/s by this to get km/h
pub const MS_TO_KMH: f64 = SECONDS_PER_HOUR / METERS_PER_KM;

/// Centiseconds per second
pub const CENTISECONDS_PER_SECOND: f64 = 100.0;
