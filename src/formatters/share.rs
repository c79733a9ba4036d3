// ABOUTME: Plain-text export of a saved run for pasting into messages or notes
// ABOUTME: One header line per run parameter followed by one line per split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use super::table::{format_meters, mark_label};
use super::time::{format_pace, format_time_with_centis};
use crate::constants::units::SECONDS_PER_HOUR;
use crate::models::RunRecord;
use std::fmt::Write as _;

/// Share text for a run
///
/// ```text
/// Session 800m
/// Mar 14, 2025 07:30:00
/// 800m @ 15.00 km/h (4:00.0 /km), lane 1, splits 100m
/// 100m    00:24.00 (+24.00s)
/// ...
/// Finish: 03:12.00
/// ```
#[must_use]
pub fn share_text(record: &RunRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", record.name);
    let _ = writeln!(out, "{}", record.date_label());
    let _ = writeln!(
        out,
        "{} @ {:.2} km/h ({}), lane {}, splits {}",
        format_meters(record.distance_meters),
        record.speed_kmh,
        format_pace(SECONDS_PER_HOUR / record.speed_kmh),
        record.lane,
        record.basis
    );
    for split in &record.splits {
        let _ = writeln!(
            out,
            "{:<10}{} (+{:.2}s)",
            mark_label(split),
            format_time_with_centis(split.running),
            split.interval
        );
    }
    let _ = write!(
        out,
        "Finish: {}",
        format_time_with_centis(record.total_time_seconds)
    );
    out
}
