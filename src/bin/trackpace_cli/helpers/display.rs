// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors
// ABOUTME: Output helpers for trackpace-cli
// ABOUTME: Prints plans, saved runs, and structured JSON/TOON output to stdout

use serde::Serialize;
use trackpace::{
    constants::units::SECONDS_PER_HOUR,
    engine::RunPlan,
    errors::AppResult,
    formatters::{
        format_output,
        table::{format_meters, render_history_table, render_plan_summary, render_split_table},
        time::format_pace,
        OutputFormat,
    },
    models::RunRecord,
};

/// Print a derived plan: summary block, then the split table
pub fn display_plan(plan: &RunPlan) {
    print!("{}", render_plan_summary(plan));
    println!();
    print!("{}", render_split_table(&plan.splits));
}

/// Print one saved run with its stored splits
pub fn display_record(record: &RunRecord) {
    println!("{}", record.name);
    println!("{}", "=".repeat(record.name.chars().count().max(12)));
    println!("Id:        {}", record.id);
    println!("Saved:     {}", record.date_label());
    println!("Distance:  {}", format_meters(record.distance_meters));
    println!("Lane:      {}", record.lane);
    println!(
        "Speed:     {:.2} km/h ({})",
        record.speed_kmh,
        format_pace(SECONDS_PER_HOUR / record.speed_kmh)
    );
    println!("Splits:    {}", record.basis.description());
    println!();
    print!("{}", render_split_table(&record.splits));
}

/// Print a list of saved runs
pub fn display_records(records: &[RunRecord]) {
    print!("{}", render_history_table(records));
}

/// Print any serializable value as JSON or TOON
pub fn print_structured<T: Serialize>(data: &T, format: OutputFormat) -> AppResult<()> {
    println!("{}", format_output(data, format)?);
    Ok(())
}
