// ABOUTME: Core data models for split calculation and run history
// ABOUTME: Re-exports Split, SplitKind, SplitBasis, and RunRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

//! Data models shared by the engine and the application crate.
//!
//! Models are plain serde-serializable values. Nothing here performs any
//! calculation beyond simple accessors; split generation lives in
//! `trackpace-engine`.

mod basis;
mod run_record;
mod split;

pub use basis::SplitBasis;
pub use run_record::RunRecord;
pub use split::{Split, SplitKind, FINISH_LABEL};
