// ABOUTME: Split sequence generation in fixed-interval and lap-fraction modes
// ABOUTME: Applies lane stagger and converts every mark into interval and running times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use super::conversion::UnitConverter;
use super::lane_stagger::LaneAdjuster;
use crate::validation::{ensure_lane, ensure_positive};
use trackpace_core::constants::limits::{MARK_EPSILON_METERS, MAX_SPLITS};
use trackpace_core::constants::track::{LAP_ALIGNMENT_TOLERANCE_METERS, QUARTERS_PER_LAP};
use trackpace_core::errors::{AppError, AppResult};
use trackpace_core::models::{Split, SplitBasis, FINISH_LABEL};

/// Split sequence generator
///
/// Two marking modes:
///
/// - **Fixed interval**: marks are nominal meters (`basis`, `2 × basis`, …,
///   `distance`). Each mark's running time uses `mark × lane factor`.
/// - **Lap fraction**: marks are quarter laps of the lane's effective lap,
///   already in lane-adjusted meters, so running time is `mark / speed`.
///   The finish sits at `distance × lane factor`.
///
/// For the same distance, speed, and lane both modes finish at the same
/// running time.
pub struct SplitGenerator;

impl SplitGenerator {
    /// Generate the ordered split sequence for a run
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if distance, speed, or a fixed basis is
    /// not positive and finite, or the lane is 0. Returns
    /// `AppError::ValueOutOfRange` if the run would need more than 100 000 splits.
    pub fn generate(
        distance_meters: f64,
        speed_kmh: f64,
        lane: u32,
        basis: SplitBasis,
    ) -> AppResult<Vec<Split>> {
        ensure_positive("Distance", distance_meters)?;
        ensure_positive("Speed", speed_kmh)?;
        ensure_lane(lane)?;
        basis.validate()?;

        let speed_ms = UnitConverter::meters_per_second(speed_kmh);

        let splits = match basis {
            SplitBasis::FixedInterval { meters } => {
                Self::fixed_interval(distance_meters, speed_ms, lane, meters)?
            }
            SplitBasis::LapFraction => Self::lap_fraction(distance_meters, speed_ms, lane)?,
        };

        tracing::debug!(
            distance_meters,
            speed_kmh,
            lane,
            basis = %basis,
            split_count = splits.len(),
            "Generated split sequence"
        );

        Ok(splits)
    }

    /// Marks at every multiple of `step` below `distance`, then `distance`
    fn fixed_interval(
        distance_meters: f64,
        speed_ms: f64,
        lane: u32,
        step: f64,
    ) -> AppResult<Vec<Split>> {
        Self::check_split_count(distance_meters / step)?;
        let adjustment = LaneAdjuster::adjustment_factor(lane)?;

        let mut marks = Vec::with_capacity((distance_meters / step).ceil() as usize);
        let mut index: u32 = 1;
        loop {
            let mark = f64::from(index) * step;
            // Floating steps can land a hair short of the finish; fold those into it
            if mark >= distance_meters - MARK_EPSILON_METERS {
                break;
            }
            marks.push(mark);
            index += 1;
        }
        marks.push(distance_meters);

        let mut previous_running = 0.0;
        Ok(marks
            .into_iter()
            .map(|mark| {
                let running = mark * adjustment / speed_ms;
                let interval = running - previous_running;
                previous_running = running;
                Split::fixed(mark, interval, running)
            })
            .collect())
    }

    /// Quarter-lap marks on the effective lap, then a labelled finish
    ///
    /// Everything is measured in effective meters, including the finish.
    fn lap_fraction(distance_meters: f64, speed_ms: f64, lane: u32) -> AppResult<Vec<Split>> {
        let lap_distance = LaneAdjuster::effective_lap_distance(lane)?;
        let finish_mark = distance_meters * LaneAdjuster::adjustment_factor(lane)?;
        let quarter_distance = lap_distance / f64::from(QUARTERS_PER_LAP);
        Self::check_split_count(finish_mark / quarter_distance)?;

        let mut marks: Vec<(f64, String)> = Vec::new();
        let mut lap: u32 = 0;
        'laps: while f64::from(lap) * lap_distance < finish_mark {
            for quarter in 1..=QUARTERS_PER_LAP {
                let quarters = lap * QUARTERS_PER_LAP + quarter;
                let mark = quarter_distance * f64::from(quarters);
                if (mark - finish_mark).abs() <= LAP_ALIGNMENT_TOLERANCE_METERS
                    || mark > finish_mark
                {
                    break 'laps;
                }
                marks.push((mark, lap_label(quarters)));
            }
            lap += 1;
        }
        marks.push((finish_mark, FINISH_LABEL.to_owned()));

        let mut previous_running = 0.0;
        Ok(marks
            .into_iter()
            .map(|(mark, label)| {
                let running = mark / speed_ms;
                let interval = running - previous_running;
                previous_running = running;
                Split::lap_fraction(mark, interval, running, label)
            })
            .collect())
    }

    fn check_split_count(estimated: f64) -> AppResult<()> {
        if estimated.ceil() > MAX_SPLITS as f64 {
            return Err(AppError::out_of_range(format!(
                "Run would produce {estimated:.0} splits, more than the limit of {MAX_SPLITS}"
            )));
        }
        Ok(())
    }
}

/// Generate the ordered split sequence for a run
///
/// Free-function form of [`SplitGenerator::generate`].
///
/// # Errors
///
/// See [`SplitGenerator::generate`]
pub fn generate_splits(
    distance_meters: f64,
    speed_kmh: f64,
    lane: u32,
    basis: SplitBasis,
) -> AppResult<Vec<Split>> {
    SplitGenerator::generate(distance_meters, speed_kmh, lane, basis)
}

/// Label for a count of quarter laps: `"3/4 lap"`, `"2 lap"`, `"1 1/2 lap"`
fn lap_label(quarters: u32) -> String {
    let whole = quarters / QUARTERS_PER_LAP;
    let fraction = match quarters % QUARTERS_PER_LAP {
        1 => Some("1/4"),
        2 => Some("1/2"),
        3 => Some("3/4"),
        _ => None,
    };
    match (whole, fraction) {
        (0, Some(fraction)) => format!("{fraction} lap"),
        (whole, Some(fraction)) => format!("{whole} {fraction} lap"),
        (whole, None) => format!("{whole} lap"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lap_labels() {
        assert_eq!(lap_label(1), "1/4 lap");
        assert_eq!(lap_label(2), "1/2 lap");
        assert_eq!(lap_label(3), "3/4 lap");
        assert_eq!(lap_label(4), "1 lap");
        assert_eq!(lap_label(5), "1 1/4 lap");
        assert_eq!(lap_label(8), "2 lap");
        assert_eq!(lap_label(11), "2 3/4 lap");
    }

    #[test]
    fn test_floating_step_does_not_duplicate_finish() {
        // 3 × 0.7 evaluates to 2.0999999999999996
        let splits = SplitGenerator::generate(2.1, 10.0, 1, SplitBasis::fixed(0.7)).unwrap();
        assert_eq!(splits.len(), 3);
        assert!(splits.windows(2).all(|w| w[1].running > w[0].running));
    }

    #[test]
    fn test_tiny_basis_rejected() {
        let result = SplitGenerator::generate(42_195.0, 12.0, 1, SplitBasis::fixed(0.01));
        assert!(result.is_err());
    }

    #[test]
    fn test_lap_finish_is_lane_adjusted() {
        let splits = SplitGenerator::generate(400.0, 12.0, 8, SplitBasis::LapFraction).unwrap();
        let factor = LaneAdjuster::adjustment_factor(8).unwrap();
        let last = splits.last().unwrap();
        assert_eq!(splits.len(), 4);
        assert!(last.is_finish());
        assert!((last.mark - 400.0 * factor).abs() < 1e-9);
        assert!((last.running - 400.0 * factor / (12.0 / 3.6)).abs() < 1e-9);
    }

    #[test]
    fn test_lap_mark_within_tolerance_becomes_finish() {
        let splits = SplitGenerator::generate(400.05, 15.0, 1, SplitBasis::LapFraction).unwrap();
        assert_eq!(splits.len(), 4);
        let last = splits.last().unwrap();
        assert!(last.is_finish());
        assert!((last.mark - 400.05).abs() < f64::EPSILON);
    }
}
