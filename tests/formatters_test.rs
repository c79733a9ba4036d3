// ABOUTME: Integration tests for clock formatting, split tables, share text, and output formats
// ABOUTME: Validates the exact strings shown to runners and the JSON/TOON serialization paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use trackpace::engine::{LaneAdjuster, RunParameters};
use trackpace::errors::ErrorCode;
use trackpace::formatters::share::share_text;
use trackpace::formatters::table::{
    render_history_table, render_lane_table, render_plan_summary, render_split_table,
};
use trackpace::formatters::time::{
    format_pace, format_time, format_time_with_centis, parse_clock_time,
};
use trackpace::formatters::{format_output, OutputFormat};
use trackpace::history::record_from_plan;
use trackpace::models::SplitBasis;

#[test]
fn test_format_time() {
    assert_eq!(format_time(0.0), "00:00.0");
    assert_eq!(format_time(192.0), "03:12.0");
    assert_eq!(format_time(75.24), "01:15.2");
    assert_eq!(format_time(-4.0), "00:00.0");
    assert_eq!(format_time(f64::NAN), "--:--.-");
}

#[test]
fn test_format_time_with_centis() {
    assert_eq!(format_time_with_centis(192.0), "03:12.00");
    assert_eq!(format_time_with_centis(24.0), "00:24.00");
    assert_eq!(format_time_with_centis(136.098), "02:16.09");
    assert_eq!(format_time_with_centis(59.999), "00:59.99");
}

#[test]
fn test_format_pace() {
    assert_eq!(format_pace(240.0), "4:00.0 /km");
    assert_eq!(format_pace(3600.0 / 14.01), "4:17.0 /km");
    assert_eq!(format_pace(605.0), "10:05.0 /km");
}

#[test]
fn test_parse_clock_time_forms() {
    assert!((parse_clock_time("4:00").unwrap() - 240.0).abs() < 1e-9);
    assert!((parse_clock_time("3:12.5").unwrap() - 192.5).abs() < 1e-9);
    assert!((parse_clock_time("75").unwrap() - 75.0).abs() < 1e-9);
    assert!((parse_clock_time(" 1:05:00 ").unwrap() - 3900.0).abs() < 1e-9);
}

#[test]
fn test_parse_clock_time_rejects_garbage() {
    for input in ["", "  ", "abc", "4:75", "-3", "4:-1", "1:2:3:4", "x:30"] {
        let err = parse_clock_time(input).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "input {input:?}");
    }
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("toon".parse::<OutputFormat>().unwrap(), OutputFormat::Toon);
    assert!("xml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::default(), OutputFormat::Table);
    assert!(!OutputFormat::Table.is_structured());
    assert_eq!(OutputFormat::Json.content_type(), "application/json");
}

#[test]
fn test_json_output_of_plan() {
    let plan = RunParameters::default().derive().unwrap();
    let json = format_output(&plan, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["speed_kmh"], 15.0);
    assert_eq!(value["splits"].as_array().unwrap().len(), 8);
}

#[test]
fn test_table_has_no_generic_rendering() {
    let plan = RunParameters::default().derive().unwrap();
    let err = format_output(&plan, OutputFormat::Table).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[cfg(feature = "toon")]
#[test]
fn test_toon_output_of_lane_table() {
    let rows = LaneAdjuster::lane_table(4).unwrap();
    let toon = format_output(&rows, OutputFormat::Toon).unwrap();
    assert!(!toon.is_empty());
    assert!(toon.contains("lane"));
}

#[test]
fn test_split_table_rows() {
    let plan = RunParameters::default().derive().unwrap();
    let table = render_split_table(&plan.splits);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("MARK"));
    assert!(lines[1].starts_with("100m"));
    assert!(lines[1].contains("24.00s"));
    assert!(lines[1].contains("00:24.00"));
    assert!(lines[8].starts_with("800m Finish"));
    assert!(lines[8].contains("03:12.00"));
}

#[test]
fn test_lap_split_table_uses_labels() {
    let plan = RunParameters::default()
        .with_distance(900.0)
        .with_basis(SplitBasis::LapFraction)
        .derive()
        .unwrap();
    let table = render_split_table(&plan.splits);
    assert!(table.contains("1/4 lap"));
    assert!(table.contains("2 lap"));
    let last = table.lines().last().unwrap();
    assert!(last.starts_with("Finish"));
    assert!(!last.contains("Finish Finish"));
}

#[test]
fn test_plan_summary_reports_lane_penalty_only_outside_lane_one() {
    let inside = render_plan_summary(&RunParameters::default().derive().unwrap());
    assert!(inside.contains("Pace:         4:00.0 /km"));
    assert!(inside.contains("Target time:  03:12.00"));
    assert!(!inside.contains("Lane penalty"));

    let outside = render_plan_summary(&RunParameters::default().with_lane(5).derive().unwrap());
    assert!(outside.contains("Lane penalty: +"));

    let laps = RunParameters::default()
        .with_lane(5)
        .with_basis(SplitBasis::LapFraction)
        .derive()
        .unwrap();
    assert!(render_plan_summary(&laps).contains("Lane penalty: +"));
}

#[test]
fn test_lane_table() {
    let rows = LaneAdjuster::lane_table(8).unwrap();
    let table = render_lane_table(&rows);
    assert_eq!(table.lines().count(), 9);
    assert!(table.contains("400.00m"));
    assert!(table.contains("453.66m"));
}

#[test]
fn test_share_text() {
    let plan = RunParameters::default().derive().unwrap();
    let created_at = Utc.with_ymd_and_hms(2025, 3, 14, 7, 30, 0).unwrap();
    let record = record_from_plan(&plan, None, created_at);
    let text = share_text(&record);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Session 800m");
    assert_eq!(lines[1], "Mar 14, 2025 07:30:00");
    assert_eq!(
        lines[2],
        "800m @ 15.00 km/h (4:00.0 /km), lane 1, splits 100m"
    );
    assert!(lines[3].starts_with("100m"));
    assert!(lines[3].contains("00:24.00 (+24.00s)"));
    assert_eq!(*lines.last().unwrap(), "Finish: 03:12.00");
}

#[test]
fn test_empty_history_table() {
    assert_eq!(render_history_table(&[]), "No saved runs\n");
}
