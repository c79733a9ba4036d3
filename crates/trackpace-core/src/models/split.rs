// ABOUTME: Split record model with a tagged kind for fixed and lap-fraction marks
// ABOUTME: Every split carries mark, interval, and running time regardless of kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

use serde::{Deserialize, Serialize};

/// Label of the final mark in lap-fraction mode
pub const FINISH_LABEL: &str = "Finish";

/// How a split mark was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplitKind {
    /// Mark on a fixed meter interval; `mark` is the nominal distance
    Fixed,
    /// Mark on a quarter-lap boundary; `mark` is in lane-adjusted meters
    LapFraction {
        /// Lap count tag such as `"1 1/4 lap"` or `"Finish"`
        label: String,
    },
}

/// A single timing mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Distance from the start in meters
    pub mark: f64,
    /// Seconds since the previous mark
    pub interval: f64,
    /// Seconds since the start
    pub running: f64,
    /// Fixed or lap-fraction mark
    #[serde(flatten)]
    pub kind: SplitKind,
}

impl Split {
    /// Create a fixed-interval split
    #[must_use]
    pub const fn fixed(mark: f64, interval: f64, running: f64) -> Self {
        Self {
            mark,
            interval,
            running,
            kind: SplitKind::Fixed,
        }
    }

    /// Create a lap-fraction split
    #[must_use]
    pub fn lap_fraction(mark: f64, interval: f64, running: f64, label: impl Into<String>) -> Self {
        Self {
            mark,
            interval,
            running,
            kind: SplitKind::LapFraction {
                label: label.into(),
            },
        }
    }

    /// Label of a lap-fraction split, `None` for fixed-interval splits
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            SplitKind::Fixed => None,
            SplitKind::LapFraction { label } => Some(label),
        }
    }

    /// Whether this split is the explicit lap-fraction finish mark
    #[must_use]
    pub fn is_finish(&self) -> bool {
        self.label() == Some(FINISH_LABEL)
    }
}
