// ABOUTME: Stored run session model for the run history
// ABOUTME: Embeds the full split sequence computed when the run was saved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use super::{Split, SplitBasis};
use crate::constants::defaults;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved run session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Unique record identifier
    pub id: Uuid,
    /// User-editable name
    pub name: String,
    /// When the run was saved
    pub created_at: DateTime<Utc>,
    /// Nominal target distance in meters
    pub distance_meters: f64,
    /// Running speed in km/h, rounded for storage
    pub speed_kmh: f64,
    /// Track lane
    pub lane: u32,
    /// Marking basis the splits were generated with
    #[serde(default)]
    pub basis: SplitBasis,
    /// Running time of the final split
    pub total_time_seconds: f64,
    /// Full split sequence
    pub splits: Vec<Split>,
}

impl RunRecord {
    /// Build a record with a fresh id; the total time is taken from the last split
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        distance_meters: f64,
        speed_kmh: f64,
        lane: u32,
        basis: SplitBasis,
        splits: Vec<Split>,
    ) -> Self {
        let total_time_seconds = splits.last().map_or(0.0, |split| split.running);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at,
            distance_meters,
            speed_kmh,
            lane,
            basis,
            total_time_seconds,
            splits,
        }
    }

    /// Name used when a run is saved without one, e.g. `Session 800m`
    #[must_use]
    pub fn default_name(distance_meters: f64) -> String {
        format!("{} {distance_meters}m", defaults::SESSION_NAME_PREFIX)
    }

    /// Date text shown in listings and matched by search
    #[must_use]
    pub fn date_label(&self) -> String {
        self.created_at.format("%b %-d, %Y %H:%M:%S").to_string()
    }

    /// Case-insensitive substring match over name, distance, and date
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.distance_meters.to_string().contains(&needle)
            || self.date_label().to_lowercase().contains(&needle)
            || self
                .created_at
                .format("%Y-%m-%d")
                .to_string()
                .contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> RunRecord {
        let created_at = Utc.with_ymd_and_hms(2025, 3, 14, 7, 30, 0).unwrap();
        RunRecord::new(
            "Tuesday intervals",
            created_at,
            800.0,
            15.0,
            1,
            SplitBasis::default(),
            vec![
                Split::fixed(400.0, 96.0, 96.0),
                Split::fixed(800.0, 96.0, 192.0),
            ],
        )
    }

    #[test]
    fn test_total_time_from_last_split() {
        assert!((sample().total_time_seconds - 192.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_name_uses_plain_distance() {
        assert_eq!(RunRecord::default_name(800.0), "Session 800m");
        assert_eq!(RunRecord::default_name(1500.5), "Session 1500.5m");
    }

    #[test]
    fn test_matches_query_fields() {
        let record = sample();
        assert!(record.matches_query("tuesday"));
        assert!(record.matches_query("800"));
        assert!(record.matches_query("mar 14"));
        assert!(record.matches_query("2025-03"));
        assert!(record.matches_query("  "));
        assert!(!record.matches_query("tempo"));
    }
}
