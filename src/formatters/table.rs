// ABOUTME: Fixed-width text tables for split sequences, lane stagger, and saved runs
// ABOUTME: Renders plan summaries the way the calculator screen lays them out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use super::time::{format_pace, format_time_with_centis};
use crate::constants::units::SECONDS_PER_HOUR;
use crate::engine::{LaneRow, RunPlan};
use crate::models::{RunRecord, Split, SplitBasis, FINISH_LABEL};
use std::fmt::Write as _;

/// Display text for a split's mark column
///
/// Lap-fraction splits show their label, fixed splits show meters.
#[must_use]
pub fn mark_label(split: &Split) -> String {
    split
        .label()
        .map_or_else(|| format_meters(split.mark), str::to_owned)
}

/// Meters without a trailing `.0` for whole values: `200m`, `400.5m`
#[must_use]
pub fn format_meters(meters: f64) -> String {
    if (meters - meters.round()).abs() < 1e-9 {
        format!("{meters:.0}m")
    } else {
        format!("{meters:.1}m")
    }
}

/// Split table with mark, interval, and running columns
#[must_use]
pub fn render_split_table(splits: &[Split]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14}{:>12}{:>12}", "MARK", "INTERVAL", "RUNNING");
    let last_index = splits.len().saturating_sub(1);
    for (index, split) in splits.iter().enumerate() {
        let mut mark = mark_label(split);
        if index == last_index && !split.is_finish() {
            let _ = write!(mark, " {FINISH_LABEL}");
        }
        let _ = writeln!(
            out,
            "{:<14}{:>12}{:>12}",
            mark,
            format!("{:.2}s", split.interval),
            format_time_with_centis(split.running)
        );
    }
    out
}

/// Summary block printed above the split table
#[must_use]
pub fn render_plan_summary(plan: &RunPlan) -> String {
    let params = &plan.parameters;
    let mut out = String::new();
    let _ = writeln!(out, "Distance:     {}", format_meters(params.distance_meters));
    let _ = writeln!(
        out,
        "Lane:         {} (factor {:.4})",
        params.lane, plan.lane_factor
    );
    let _ = writeln!(out, "Speed:        {:.2} km/h", plan.speed_kmh);
    let _ = writeln!(out, "Pace:         {}", format_pace(plan.pace_seconds_per_km));
    let _ = writeln!(
        out,
        "Target time:  {}",
        format_time_with_centis(plan.total_time_seconds)
    );
    let _ = writeln!(
        out,
        "Finish time:  {}",
        format_time_with_centis(plan.finish_time())
    );
    if plan.lane_penalty_seconds().abs() >= 0.005 {
        let _ = writeln!(out, "Lane penalty: +{:.2}s", plan.lane_penalty_seconds());
    }
    let _ = writeln!(out, "Splits:       {}", basis_label(params.basis));
    out
}

/// Lane stagger reference table
#[must_use]
pub fn render_lane_table(rows: &[LaneRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6}{:>10}{:>14}{:>12}",
        "LANE", "FACTOR", "LAP", "STAGGER"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<6}{:>10.4}{:>14}{:>12}",
            row.lane,
            row.factor,
            format!("{:.2}m", row.effective_lap_meters),
            format!("+{:.2}m", row.stagger_meters)
        );
    }
    out
}

/// Saved runs, newest first, with a short id for follow-up commands
#[must_use]
pub fn render_history_table(records: &[RunRecord]) -> String {
    if records.is_empty() {
        return "No saved runs\n".to_owned();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}{:<24}{:<24}{:>10}{:>6}{:>11}{:>14}",
        "ID", "NAME", "DATE", "DISTANCE", "LANE", "TIME", "PACE"
    );
    for record in records {
        let _ = writeln!(
            out,
            "{:<10}{:<24}{:<24}{:>10}{:>6}{:>11}{:>14}",
            short_id(record),
            truncate(&record.name, 23),
            record.date_label(),
            format_meters(record.distance_meters),
            record.lane,
            format_time_with_centis(record.total_time_seconds),
            format_pace(SECONDS_PER_HOUR / record.speed_kmh)
        );
    }
    out
}

/// First eight hex digits of the record id
#[must_use]
pub fn short_id(record: &RunRecord) -> String {
    record.id.simple().to_string().chars().take(8).collect()
}

fn basis_label(basis: SplitBasis) -> String {
    match basis {
        SplitBasis::FixedInterval { meters } => format!("every {}", format_meters(meters)),
        SplitBasis::LapFraction => "every quarter lap".to_owned(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut shortened: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    shortened.push('~');
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_meters() {
        assert_eq!(format_meters(200.0), "200m");
        assert_eq!(format_meters(453.658), "453.7m");
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long session name", 8), "a very ~");
    }
}
