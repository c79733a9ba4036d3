// ABOUTME: Integration tests for lane stagger adjustment
// ABOUTME: Validates the lane factor formula, monotonicity, and lane table output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::f64::consts::PI;
use trackpace::engine::LaneAdjuster;
use trackpace::errors::ErrorCode;

fn expected_factor(lane: u32) -> f64 {
    (400.0 + 2.0 * PI * f64::from(lane - 1) * 1.22) / 400.0
}

#[test]
fn test_lane_one_factor_is_exactly_one() {
    let factor = LaneAdjuster::adjustment_factor(1).unwrap();
    assert!((factor - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_factor_matches_formula_for_standard_lanes() {
    for lane in 2..=8 {
        let factor = LaneAdjuster::adjustment_factor(lane).unwrap();
        assert!(
            (factor - expected_factor(lane)).abs() < 1e-12,
            "lane {lane}: {factor}"
        );
    }
}

#[test]
fn test_lane_eight_factor() {
    let factor = LaneAdjuster::adjustment_factor(8).unwrap();
    assert!((factor - 1.134_146).abs() < 1e-6, "got {factor}");
}

#[test]
fn test_factor_strictly_increasing() {
    let factors: Vec<f64> = (1..=8)
        .map(|lane| LaneAdjuster::adjustment_factor(lane).unwrap())
        .collect();
    assert!(factors.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_lanes_beyond_eight_extrapolate() {
    let nine = LaneAdjuster::adjustment_factor(9).unwrap();
    let eight = LaneAdjuster::adjustment_factor(8).unwrap();
    assert!(nine > eight);
    assert!((nine - expected_factor(9)).abs() < 1e-12);
}

#[test]
fn test_lane_zero_is_invalid_input() {
    let err = LaneAdjuster::adjustment_factor(0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_effective_lap_and_stagger_agree() {
    for lane in 1..=8 {
        let lap = LaneAdjuster::effective_lap_distance(lane).unwrap();
        let stagger = LaneAdjuster::stagger_meters(lane).unwrap();
        assert!((lap - 400.0 - stagger).abs() < 1e-9);
    }
}

#[test]
fn test_lane_table_matches_individual_calls() {
    let rows = LaneAdjuster::lane_table(6).unwrap();
    assert_eq!(rows.len(), 6);
    for row in rows {
        let factor = LaneAdjuster::adjustment_factor(row.lane).unwrap();
        assert!((row.factor - factor).abs() < f64::EPSILON);
        assert!((row.effective_lap_meters - 400.0 * factor).abs() < 1e-9);
    }
}
