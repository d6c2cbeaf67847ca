//! Reference adapters for the pipeline ports.
//!
//! - `PositiveIdValidator`: accepts strictly positive identifiers
//! - `ConsoleLogger`: timestamped `INFO:`/`ERROR:` lines, filtered by `LogLevel`
//! - `EmailNotifier`: writes `[Email Notification] ...` lines; never delivers mail

use async_trait::async_trait;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Mutex;

use orderflow_domain::{is_valid_order_id, OrderId};

use crate::error::{NotifyError, ProcessError};
use crate::ports::{Notifier, OrderLogger, OrderValidator};

/// Timestamp layout for console lines (`yyyy-MM-dd HH:mm:ss`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

type Sink = Mutex<Box<dyn Write + Send>>;

// =============================================================================
// Validator
// =============================================================================

/// Validator accepting any strictly positive identifier.
///
/// Matches the store's own argument check, so invalid ids never cost a lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveIdValidator;

impl OrderValidator for PositiveIdValidator {
    fn is_valid(&self, id: OrderId) -> bool {
        is_valid_order_id(id)
    }
}

// =============================================================================
// Log Level
// =============================================================================

/// Minimum level emitted by `ConsoleLogger`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    /// Info and error lines
    #[default]
    Info,
    /// Error lines only
    Error,
}

impl LogLevel {
    /// Whether informational lines are emitted at this level.
    pub fn allows_info(&self) -> bool {
        matches!(self, LogLevel::Info)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("Invalid log level: {}. Expected: Info, Error", other)),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Error => write!(f, "Error"),
        }
    }
}

// =============================================================================
// Console Logger
// =============================================================================

/// Logger writing timestamped lines to a sink (stdout by default).
///
/// Sink write failures are ignored.
pub struct ConsoleLogger {
    level: LogLevel,
    sink: Sink,
}

impl ConsoleLogger {
    /// Logger writing to stdout.
    pub fn stdout(level: LogLevel) -> Self {
        Self::with_sink(level, Box::new(io::stdout()))
    }

    /// Logger writing to an arbitrary sink.
    pub fn with_sink(level: LogLevel, sink: Box<dyn Write + Send>) -> Self {
        Self {
            level,
            sink: Mutex::new(sink),
        }
    }

    /// Configured minimum level.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    fn timestamp() -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }

    fn emit(&self, text: &str) {
        // Both lines of an error entry go out under one lock.
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.write_all(text.as_bytes());
            let _ = sink.flush();
        }
    }
}

/// Render an informational entry.
pub fn format_info(timestamp: &str, message: &str) -> String {
    format!("[{}] INFO: {}\n", timestamp, message)
}

/// Render an error entry, including the cause's kind and message.
pub fn format_error(timestamp: &str, message: &str, cause: &ProcessError) -> String {
    format!(
        "[{}] ERROR: {}\nException: {} - {}\n",
        timestamp,
        message,
        cause.kind(),
        cause
    )
}

impl OrderLogger for ConsoleLogger {
    fn log_info(&self, message: &str) {
        if !self.level.allows_info() {
            return;
        }
        self.emit(&format_info(&Self::timestamp(), message));
    }

    fn log_error(&self, message: &str, cause: &ProcessError) {
        self.emit(&format_error(&Self::timestamp(), message, cause));
    }
}

// =============================================================================
// Email Notifier
// =============================================================================

/// Notifier standing in for email delivery.
pub struct EmailNotifier {
    sink: Sink,
}

impl EmailNotifier {
    /// Notifier writing to stdout.
    pub fn stdout() -> Self {
        Self::with_sink(Box::new(io::stdout()))
    }

    /// Notifier writing to an arbitrary sink.
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|e| NotifyError::Transport(format!("notification sink poisoned: {}", e)))?;

        writeln!(sink, "[Email Notification] {}", message)
            .and_then(|_| sink.flush())
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        tracing::debug!(notification = message, "Notification sent");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
