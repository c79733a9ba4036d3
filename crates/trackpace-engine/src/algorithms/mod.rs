// ABOUTME: Calculation algorithms for lane stagger, split marks, and pace conversion
// ABOUTME: Re-exports the three calculators used by the run plan derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

//! Algorithm Module
//!
//! - [`LaneAdjuster`]: IAAF stagger factor for a lane
//! - [`SplitGenerator`]: fixed-interval and lap-fraction split sequences
//! - [`UnitConverter`]: speed, pace, and total time conversions
//!
//! # Example
//!
//! ```rust
//! use trackpace_core::models::SplitBasis;
//! use trackpace_engine::algorithms::SplitGenerator;
//!
//! let splits = SplitGenerator::generate(800.0, 15.0, 1, SplitBasis::fixed(100.0))?;
//! assert_eq!(splits.len(), 8);
//! # Ok::<(), trackpace_core::errors::AppError>(())
//! ```

pub mod conversion;
pub mod lane_stagger;
pub mod splits;

pub use conversion::UnitConverter;
pub use lane_stagger::{LaneAdjuster, LaneRow};
pub use splits::{generate_splits, SplitGenerator};
