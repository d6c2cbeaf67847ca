//! Pipeline error types.

use orderflow_store::StoreError;
use thiserror::Error;

/// Errors raised by a notifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// Message could not be delivered
    #[error("{0}")]
    Transport(String),
}

impl NotifyError {
    /// Failure kind name, as shown on the `Exception:` console line.
    pub fn kind(&self) -> &'static str {
        match self {
            NotifyError::Transport(_) => "TransportError",
        }
    }
}

/// Failure recorded by the processor for one workflow invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// Identifier rejected before reaching the store
    #[error("{0}")]
    InvalidArgument(String),

    /// Store lookup failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Notification delivery failed
    #[error(transparent)]
    Notify(#[from] NotifyError),

    /// Task running the workflow panicked or was cancelled
    #[error("{0}")]
    Aborted(String),
}

impl ProcessError {
    /// Failure kind name (e.g. `NotFoundError`).
    pub fn kind(&self) -> &'static str {
        match self {
            ProcessError::InvalidArgument(_) => "InvalidArgumentError",
            ProcessError::Store(err) => err.kind(),
            ProcessError::Notify(err) => err.kind(),
            ProcessError::Aborted(_) => "TaskAbortedError",
        }
    }
}
