//! Recording test doubles.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use orderflow_domain::{Order, OrderId};
use orderflow_pipeline::{NotifyError, Notifier, OrderLogger, OrderValidator, ProcessError};
use orderflow_store::{MemoryStore, OrderRepository, StoreError};

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking test thread must not hide what was recorded before it.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Seeded memory store with no simulated latency.
pub fn fast_seeded_store() -> MemoryStore {
    MemoryStore::seeded().with_lookup_latency(Duration::ZERO)
}

// =============================================================================
// Logger
// =============================================================================

/// One call recorded by `RecordingLogger`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// `log_info` call
    Info(String),
    /// `log_error` call with its cause
    Error {
        /// Message text
        message: String,
        /// Cause passed by the caller
        cause: ProcessError,
    },
}

/// Logger that keeps every call in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in call order.
    pub fn entries(&self) -> Vec<LogEntry> {
        guard(&self.entries).clone()
    }

    /// Messages passed to `log_info`.
    pub fn infos(&self) -> Vec<String> {
        guard(&self.entries)
            .iter()
            .filter_map(|entry| match entry {
                LogEntry::Info(message) => Some(message.clone()),
                LogEntry::Error { .. } => None,
            })
            .collect()
    }

    /// `(message, cause)` pairs passed to `log_error`.
    pub fn errors(&self) -> Vec<(String, ProcessError)> {
        guard(&self.entries)
            .iter()
            .filter_map(|entry| match entry {
                LogEntry::Error { message, cause } => Some((message.clone(), cause.clone())),
                LogEntry::Info(_) => None,
            })
            .collect()
    }

    /// Number of `log_error` calls.
    pub fn error_count(&self) -> usize {
        self.errors().len()
    }
}

impl OrderLogger for RecordingLogger {
    fn log_info(&self, message: &str) {
        guard(&self.entries).push(LogEntry::Info(message.to_string()));
    }

    fn log_error(&self, message: &str, cause: &ProcessError) {
        guard(&self.entries).push(LogEntry::Error {
            message: message.to_string(),
            cause: cause.clone(),
        });
    }
}

// =============================================================================
// Notifier
// =============================================================================

/// Notifier that records sent messages, or fails every send.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<String>>,
    attempts: Mutex<usize>,
}

impl RecordingNotifier {
    /// Notifier that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier that rejects every message with a transport error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Messages accepted so far.
    pub fn messages(&self) -> Vec<String> {
        guard(&self.sent).clone()
    }

    /// Number of `send` calls, successful or not.
    pub fn attempts(&self) -> usize {
        *guard(&self.attempts)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        *guard(&self.attempts) += 1;
        if self.fail {
            return Err(NotifyError::Transport("simulated transport failure".to_string()));
        }
        guard(&self.sent).push(message.to_string());
        Ok(())
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Wraps a repository and counts calls per operation.
pub struct CountingRepository<R> {
    inner: R,
    lookups: Mutex<Vec<OrderId>>,
    inserts: Mutex<Vec<OrderId>>,
}

impl<R: OrderRepository> CountingRepository<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            lookups: Mutex::new(Vec::new()),
            inserts: Mutex::new(Vec::new()),
        }
    }

    /// Wrapped repository.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Ids passed to `lookup`, in call order.
    pub fn lookups(&self) -> Vec<OrderId> {
        guard(&self.lookups).clone()
    }

    /// Ids passed to `insert`, in call order.
    pub fn inserts(&self) -> Vec<OrderId> {
        guard(&self.inserts).clone()
    }
}

#[async_trait]
impl<R: OrderRepository> OrderRepository for CountingRepository<R> {
    async fn lookup(&self, id: OrderId) -> Result<String, StoreError> {
        guard(&self.lookups).push(id);
        self.inner.lookup(id).await
    }

    async fn insert(&self, order: Order) -> Result<(), StoreError> {
        guard(&self.inserts).push(order.id);
        self.inner.insert(order).await
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Validator returning a fixed verdict and recording what it was asked.
#[derive(Debug, Default)]
pub struct FixedValidator {
    verdict: bool,
    calls: Mutex<Vec<OrderId>>,
}

impl FixedValidator {
    /// Validator that accepts every id.
    pub fn accepting() -> Self {
        Self {
            verdict: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Validator that rejects every id.
    pub fn rejecting() -> Self {
        Self::default()
    }

    /// Ids passed to `is_valid`, in call order.
    pub fn calls(&self) -> Vec<OrderId> {
        guard(&self.calls).clone()
    }
}

impl OrderValidator for FixedValidator {
    fn is_valid(&self, id: OrderId) -> bool {
        guard(&self.calls).push(id);
        self.verdict
    }
}
