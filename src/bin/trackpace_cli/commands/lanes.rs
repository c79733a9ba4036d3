// ABOUTME: Lane stagger reference command for trackpace-cli
// ABOUTME: Prints factor, lap length, and stagger for each lane
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use trackpace::{
    engine::LaneAdjuster, errors::AppResult, formatters::table::render_lane_table,
    formatters::OutputFormat,
};

use crate::helpers::display::print_structured;

/// Print the lane table for lanes `1..=max_lane`
pub fn run(max_lane: u32, format: OutputFormat) -> AppResult<()> {
    let rows = LaneAdjuster::lane_table(max_lane)?;
    if format.is_structured() {
        return print_structured(&rows, format);
    }
    print!("{}", render_lane_table(&rows));
    Ok(())
}
