// ABOUTME: Tests for logging initialization and structured domain events
// ABOUTME: Validates that the global subscriber installs once and app events emit without a panic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tracing_subscriber::layer::SubscriberExt;
use trackpace::logging::{AppLogger, LogFormat, LoggingConfig};

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("PRETTY"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
}

#[test]
fn test_every_format_builds_a_layer() {
    for format in [LogFormat::Json, LogFormat::Pretty, LogFormat::Compact] {
        let config = LoggingConfig {
            format,
            include_location: true,
            include_thread: true,
            ..LoggingConfig::default()
        };
        let subscriber = tracing_subscriber::registry().with(config.format_layer());

        tracing::subscriber::with_default(subscriber, || {
            AppLogger::log_history_event("list", 0, true);
        });
    }
}

#[test]
fn test_init_installs_subscriber_once() {
    let config = LoggingConfig {
        level: "debug".into(),
        format: LogFormat::Json,
        ..LoggingConfig::default()
    };

    config.init().unwrap();
    AppLogger::log_split_calculation(800.0, "speed", 1, "100m", 8);
    AppLogger::log_history_event("save", 1, true);
    AppLogger::log_storage_operation("write", "/tmp/history.json", 3);

    assert!(config.init().is_err());
}
