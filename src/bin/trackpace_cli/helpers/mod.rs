// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors
// ABOUTME: Helper modules for trackpace-cli
// ABOUTME: Provides display utilities shared by all commands

pub mod display;
