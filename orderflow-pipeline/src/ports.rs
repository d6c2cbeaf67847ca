//! Pipeline port definitions.
//!
//! Ports define the collaborator interfaces the processor depends on.
//! Adapters implement these ports (console, email stub, test doubles).
//! The order repository port lives in `orderflow-store`.

use async_trait::async_trait;
use orderflow_domain::OrderId;

use crate::error::{NotifyError, ProcessError};

// =============================================================================
// Validator Port
// =============================================================================

/// Pure predicate deciding whether an identifier may be processed.
///
/// Implementations must be deterministic and free of side effects.
pub trait OrderValidator: Send + Sync {
    /// Returns true when `id` is acceptable.
    fn is_valid(&self, id: OrderId) -> bool;
}

// =============================================================================
// Notifier Port
// =============================================================================

/// Fire-and-forget message emission.
///
/// Implementations:
/// - `EmailNotifier` - Writes the message to a console sink
/// - `RecordingNotifier` - For testing (in `orderflow-testkit`)
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a message. No delivery guarantee, no retry.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

// =============================================================================
// Logger Port
// =============================================================================

/// Informational and error emission for workflow outcomes.
pub trait OrderLogger: Send + Sync {
    /// Record an informational event. May be suppressed by level.
    fn log_info(&self, message: &str);

    /// Record a failure. Never suppressed; must carry the cause's kind and message.
    fn log_error(&self, message: &str, cause: &ProcessError);
}
