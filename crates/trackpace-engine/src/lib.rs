// ABOUTME: Split generation, lane stagger, and pace conversion engine
// ABOUTME: Pure calculations with no I/O, shared mutable state, or wall-clock access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

#![deny(unsafe_code)]

//! # Trackpace Engine
//!
//! Every function in this crate is deterministic: identical inputs always
//! produce identical output. Inputs are validated up front and rejected with
//! `AppError::InvalidInput` instead of propagating `NaN` or infinite values.
//!
//! ## Modules
//!
//! - **algorithms**: `LaneAdjuster`, `SplitGenerator`, `UnitConverter`
//! - **plan**: `RunParameters` and the wholesale derivation into a `RunPlan`

/// Lane stagger, split generation, and unit conversion
pub mod algorithms;

/// Immutable run parameters and their derived plan
pub mod plan;

mod validation;

pub use algorithms::{generate_splits, LaneAdjuster, LaneRow, SplitGenerator, UnitConverter};
pub use plan::{PaceInput, RunParameters, RunPlan};
