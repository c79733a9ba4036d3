// ABOUTME: Standard 400m outdoor track geometry constants
// ABOUTME: Lane width and lap length used by the IAAF stagger formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

/// Length of one lap measured in lane 1
pub const LANE_ONE_LAP_METERS: f64 = 400.0;

/// Standard outdoor lane width
pub const LANE_WIDTH_METERS: f64 = 1.22;

/// Innermost lane number
pub const FIRST_LANE: u32 = 1;

/// Number of lanes on a standard track (not enforced as an upper bound)
pub const STANDARD_LANE_COUNT: u32 = 8;

/// Tolerance for treating a lap-fraction mark as the finish
pub const LAP_ALIGNMENT_TOLERANCE_METERS: f64 = 0.1;

/// Lap fractions marked in lap-fraction mode
pub const QUARTERS_PER_LAP: u32 = 4;
