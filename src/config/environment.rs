// ABOUTME: Environment configuration for the split calculator and its history store
// ABOUTME: Parses TRACKPACE_* variables into typed settings with defaults for unset values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trackpace Contributors

//! Environment-based configuration

use crate::constants::{defaults, env_config};
use crate::formatters::OutputFormat;
use crate::models::SplitBasis;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational events
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Warn`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Run history storage backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryBackend {
    /// Process-local, lost on exit
    Memory,
    /// JSON file on disk
    #[default]
    File,
}

impl HistoryBackend {
    /// Parse a backend name
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `memory` or `file`
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "in_memory" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            other => Err(anyhow::anyhow!(
                "Unknown history backend '{other}'. Use 'memory' or 'file'"
            )),
        }
    }
}

impl fmt::Display for HistoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// History storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Selected backend
    pub backend: HistoryBackend,
    /// File location for the `file` backend
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            backend: HistoryBackend::default(),
            path: default_history_path(),
        }
    }
}

/// Calculator inputs used when the command line leaves them out
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunDefaults {
    /// Target distance in meters
    pub distance_meters: f64,
    /// Lane
    pub lane: u32,
    /// Split basis
    pub basis: SplitBasis,
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            distance_meters: defaults::DISTANCE_METERS,
            lane: defaults::LANE,
            basis: SplitBasis::fixed(defaults::BASIS_METERS),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackpaceConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level taken from `RUST_LOG`
    pub log_level: LogLevel,
    /// History storage
    pub history: HistoryConfig,
    /// Calculator defaults
    pub defaults: RunDefaults,
    /// Output format for command results
    #[serde(skip)]
    pub output_format: OutputFormat,
}

impl TrackpaceConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable holds an unparseable or invalid value
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let backend = match env::var(env_config::HISTORY_BACKEND) {
            Ok(value) => HistoryBackend::parse(&value)
                .with_context(|| format!("Invalid {}", env_config::HISTORY_BACKEND))?,
            Err(_) => HistoryBackend::default(),
        };
        let path = env::var(env_config::HISTORY_PATH)
            .map_or_else(|_| default_history_path(), PathBuf::from);

        let distance_meters: f64 = env_var_or(
            env_config::DEFAULT_DISTANCE,
            &defaults::DISTANCE_METERS.to_string(),
        )
        .parse()
        .with_context(|| format!("Invalid {} value", env_config::DEFAULT_DISTANCE))?;

        let lane: u32 = env_var_or(env_config::DEFAULT_LANE, &defaults::LANE.to_string())
            .parse()
            .with_context(|| format!("Invalid {} value", env_config::DEFAULT_LANE))?;

        let basis: SplitBasis = env_var_or(
            env_config::DEFAULT_BASIS,
            &defaults::BASIS_METERS.to_string(),
        )
        .parse()
        .with_context(|| format!("Invalid {} value", env_config::DEFAULT_BASIS))?;

        let output_format: OutputFormat = env_var_or(env_config::OUTPUT_FORMAT, "table")
            .parse()
            .with_context(|| format!("Invalid {} value", env_config::OUTPUT_FORMAT))?;

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "warn")),
            history: HistoryConfig { backend, path },
            defaults: RunDefaults {
                distance_meters,
                lane,
                basis,
            },
            output_format,
        };

        config.validate()?;
        info!("{}", config.summary());
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a default distance or lane cannot produce a run
    pub fn validate(&self) -> Result<()> {
        if !self.defaults.distance_meters.is_finite() || self.defaults.distance_meters <= 0.0 {
            return Err(anyhow::anyhow!(
                "{} must be a positive number of meters, got {}",
                env_config::DEFAULT_DISTANCE,
                self.defaults.distance_meters
            ));
        }
        if self.defaults.lane == 0 {
            return Err(anyhow::anyhow!(
                "{} must be 1 or greater",
                env_config::DEFAULT_LANE
            ));
        }
        Ok(())
    }

    /// One-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Trackpace configuration: environment={}, history={} ({}), distance={}m, lane={}, basis={}, output={}",
            self.environment,
            self.history.backend,
            self.history.path.display(),
            self.defaults.distance_meters,
            self.defaults.lane,
            self.defaults.basis,
            self.output_format
        )
    }
}

/// Platform data directory location of the history file
#[must_use]
pub fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(defaults::HISTORY_DIR_NAME)
        .join(defaults::HISTORY_FILE_NAME)
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Warn);
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_history_backend_parsing() {
        assert_eq!(HistoryBackend::parse("Memory").unwrap(), HistoryBackend::Memory);
        assert_eq!(HistoryBackend::parse("file").unwrap(), HistoryBackend::File);
        assert!(HistoryBackend::parse("redis").is_err());
    }

    #[test]
    fn test_default_history_path_ends_with_file_name() {
        let path = default_history_path();
        assert!(path.ends_with("trackpace/history.json"));
    }

    #[test]
    fn test_validate_rejects_lane_zero() {
        let mut config = TrackpaceConfig::default();
        config.defaults.lane = 0;
        assert!(config.validate().is_err());
    }
}
