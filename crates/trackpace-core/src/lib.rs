// ABOUTME: Core types and constants for the Trackpace split calculator
// ABOUTME: Foundation crate with error handling, track geometry constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

#![deny(unsafe_code)]

//! # Trackpace Core
//!
//! Foundation crate providing shared types and constants for the Trackpace
//! split calculator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Track geometry, unit conversion, and default values
//! - **models**: Split records, marking basis, and stored run records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Split, `SplitBasis`, `RunRecord`)
pub mod models;
