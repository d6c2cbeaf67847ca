//! Daemon configuration.
//!
//! Layers, later wins:
//! 1. Built-in defaults
//! 2. Optional JSON settings file (`appsettings.json` unless `ORDERFLOW_SETTINGS` is set)
//! 3. Environment variables (a `.env` file is loaded first if present)

use crate::error::{DaemonError, DaemonResult};
use orderflow_pipeline::LogLevel;
use orderflow_store::DEFAULT_LOOKUP_LATENCY;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file used when `ORDERFLOW_SETTINGS` is unset.
pub const DEFAULT_SETTINGS_PATH: &str = "appsettings.json";

// =============================================================================
// Configuration
// =============================================================================

/// Daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Console logger configuration
    pub logging: LoggingConfig,

    /// Order store configuration
    pub store: StoreConfig,

    /// Settings file consulted while loading
    pub settings_path: PathBuf,
}

/// Console logger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level for console output
    pub level: LogLevel,
}

/// Order store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Simulated latency applied to every lookup
    pub lookup_latency: Duration,
}

/// Shape of the JSON settings file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Settings {
    log_level: Option<LogLevel>,
    lookup_latency_ms: Option<u64>,
}

impl Config {
    /// Load configuration from the settings file and environment variables.
    pub fn from_env() -> DaemonResult<Self> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        Self::load(|key| env::var(key).ok())
    }

    /// Load configuration, reading variables through `var`.
    pub fn load(var: impl Fn(&str) -> Option<String>) -> DaemonResult<Self> {
        let settings_path = var("ORDERFLOW_SETTINGS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

        let mut config = Self {
            settings_path: settings_path.clone(),
            ..Self::default()
        };

        if let Some(contents) = Self::read_settings_file(&settings_path)? {
            config.apply_settings(&contents)?;
        }
        config.apply_env(var)?;

        Ok(config)
    }

    /// Create test configuration (no simulated latency).
    pub fn test() -> Self {
        Self {
            logging: LoggingConfig {
                level: LogLevel::Info,
            },
            store: StoreConfig {
                lookup_latency: Duration::ZERO,
            },
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }

    /// Overlay values from a JSON settings document.
    pub fn apply_settings(&mut self, json: &str) -> DaemonResult<()> {
        let settings: Settings = serde_json::from_str(json).map_err(|e| {
            DaemonError::Config(format!(
                "Invalid settings file {}: {}",
                self.settings_path.display(),
                e
            ))
        })?;

        if let Some(level) = settings.log_level {
            self.logging.level = level;
        }
        if let Some(ms) = settings.lookup_latency_ms {
            self.store.lookup_latency = Duration::from_millis(ms);
        }

        Ok(())
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> DaemonResult<()> {
        if let Some(level) = var("ORDERFLOW_LOG_LEVEL") {
            self.logging.level = level
                .parse()
                .map_err(|e| DaemonError::Config(format!("Invalid ORDERFLOW_LOG_LEVEL: {}", e)))?;
        }

        if let Some(ms) = var("ORDERFLOW_LOOKUP_LATENCY_MS") {
            let ms = ms.trim().parse::<u64>().map_err(|_| {
                DaemonError::Config(format!("Invalid ORDERFLOW_LOOKUP_LATENCY_MS: {}", ms))
            })?;
            self.store.lookup_latency = Duration::from_millis(ms);
        }

        Ok(())
    }

    /// Read the settings file; a missing file is not an error.
    fn read_settings_file(path: &Path) -> DaemonResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DaemonError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: LogLevel::Info,
            },
            store: StoreConfig {
                lookup_latency: DEFAULT_LOOKUP_LATENCY,
            },
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
