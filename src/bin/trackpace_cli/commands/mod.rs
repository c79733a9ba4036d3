// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors
// ABOUTME: Re-exports command modules for trackpace-cli
// ABOUTME: Provides the split, lane, and history commands

pub mod history;
pub mod lanes;
pub mod splits;
