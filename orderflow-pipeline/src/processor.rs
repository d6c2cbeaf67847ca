//! OrderProcessor: runs one workflow invocation per order identifier.
//!
//! # Flow
//!
//! ```text
//! Start → Validate → Fetch → Notify → Done
//!            │          │
//!            └ Rejected └ Failed
//! ```
//!
//! Every path ends in a terminal `Outcome`; no error escapes `process`.

use std::sync::Arc;
use tracing::debug;

use orderflow_domain::OrderId;
use orderflow_store::OrderRepository;

use crate::error::ProcessError;
use crate::ports::{Notifier, OrderLogger, OrderValidator};

// =============================================================================
// Outcome
// =============================================================================

/// Terminal state of one workflow invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Order fetched; `notified` is false when the notifier failed
    Processed {
        /// Product name returned by the store
        product: String,
        /// Whether the notification was delivered
        notified: bool,
    },
    /// Identifier failed validation; the store was never consulted
    Rejected,
    /// Store lookup failed
    Failed(ProcessError),
}

impl Outcome {
    /// True for `Processed` with a delivered notification.
    pub fn is_notified(&self) -> bool {
        matches!(self, Outcome::Processed { notified: true, .. })
    }

    /// True for `Rejected` and `Failed`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Rejected | Outcome::Failed(_))
    }
}

// =============================================================================
// OrderProcessor
// =============================================================================

/// Orchestrates validator, repository, notifier and logger.
///
/// Cheap to share: all collaborators sit behind `Arc`, so one processor
/// can serve any number of concurrent invocations.
pub struct OrderProcessor {
    repository: Arc<dyn OrderRepository>,
    logger: Arc<dyn OrderLogger>,
    validator: Arc<dyn OrderValidator>,
    notifier: Arc<dyn Notifier>,
}

impl OrderProcessor {
    /// Create a new processor.
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        logger: Arc<dyn OrderLogger>,
        validator: Arc<dyn OrderValidator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            logger,
            validator,
            notifier,
        }
    }

    /// Run one workflow invocation for `id`.
    pub async fn process(&self, id: OrderId) -> Outcome {
        self.logger.log_info(&format!("Starting to process order {}.", id));

        if !self.validator.is_valid(id) {
            let cause = ProcessError::InvalidArgument("Order ID must be positive.".to_string());
            self.logger.log_error(&format!("Invalid order ID: {}.", id), &cause);
            return Outcome::Rejected;
        }

        let product = match self.repository.lookup(id).await {
            Ok(product) => product,
            Err(err) => {
                let cause = ProcessError::from(err);
                debug!(order_id = id, kind = cause.kind(), "Order fetch failed");
                self.logger.log_error(&format!("Failed to process order {}.", id), &cause);
                return Outcome::Failed(cause);
            },
        };

        self.logger.log_info(&format!(
            "Order {} processed successfully. Product: {}.",
            id, product
        ));

        let message = format!("Order {} ({}) has been processed.", id, product);
        let notified = match self.notifier.send(&message).await {
            Ok(()) => true,
            Err(err) => {
                let cause = ProcessError::from(err);
                self.logger.log_error(
                    &format!("Failed to send notification for order {}.", id),
                    &cause,
                );
                false
            },
        };

        Outcome::Processed { product, notified }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::PositiveIdValidator;
    use crate::error::NotifyError;
    use async_trait::async_trait;
    use orderflow_domain::Order;
    use orderflow_store::{MemoryStore, StoreError};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct Lines(Mutex<Vec<String>>);

    impl OrderLogger for Lines {
        fn log_info(&self, message: &str) {
            self.0.lock().unwrap().push(format!("INFO {}", message));
        }

        fn log_error(&self, message: &str, cause: &ProcessError) {
            self.0.lock().unwrap().push(format!("ERROR {} [{}]", message, cause.kind()));
        }
    }

    struct Outbox {
        fail: bool,
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Notifier for Outbox {
        async fn send(&self, message: &str) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Transport("smtp down".to_string()));
            }
            self.sent.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    struct Fixture {
        processor: OrderProcessor,
        lines: Arc<Lines>,
        outbox: Arc<Outbox>,
    }

    fn fixture(fail_notify: bool) -> Fixture {
        let lines = Arc::new(Lines::default());
        let outbox = Arc::new(Outbox {
            fail: fail_notify,
            sent: Mutex::new(Vec::new()),
        });
        let store = Arc::new(MemoryStore::seeded().with_lookup_latency(Duration::ZERO));
        let processor = OrderProcessor::new(
            store,
            lines.clone(),
            Arc::new(PositiveIdValidator),
            outbox.clone(),
        );
        Fixture {
            processor,
            lines,
            outbox,
        }
    }

    #[tokio::test]
    async fn test_process_existing_order() {
        let f = fixture(false);

        let outcome = f.processor.process(1).await;

        assert_eq!(
            outcome,
            Outcome::Processed {
                product: "Laptop".to_string(),
                notified: true
            }
        );
        assert_eq!(
            *f.lines.0.lock().unwrap(),
            vec![
                "INFO Starting to process order 1.".to_string(),
                "INFO Order 1 processed successfully. Product: Laptop.".to_string(),
            ]
        );
        assert_eq!(
            *f.outbox.sent.lock().unwrap(),
            vec!["Order 1 (Laptop) has been processed.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_process_invalid_id() {
        let f = fixture(false);

        let outcome = f.processor.process(-1).await;

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(
            *f.lines.0.lock().unwrap(),
            vec![
                "INFO Starting to process order -1.".to_string(),
                "ERROR Invalid order ID: -1. [InvalidArgumentError]".to_string(),
            ]
        );
        assert!(f.outbox.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_process_missing_order() {
        let f = fixture(false);

        let outcome = f.processor.process(999).await;

        assert_eq!(outcome, Outcome::Failed(StoreError::not_found(999).into()));
        assert!(outcome.is_failure());
        let lines = f.lines.0.lock().unwrap();
        assert_eq!(lines.last().unwrap(), "ERROR Failed to process order 999. [NotFoundError]");
        assert!(f.outbox.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_notification_failure_is_logged_not_fatal() {
        let f = fixture(true);

        let outcome = f.processor.process(2).await;

        assert_eq!(
            outcome,
            Outcome::Processed {
                product: "Phone".to_string(),
                notified: false
            }
        );
        assert!(!outcome.is_notified());
        assert!(!outcome.is_failure());
        let lines = f.lines.0.lock().unwrap();
        assert_eq!(
            lines.last().unwrap(),
            "ERROR Failed to send notification for order 2. [TransportError]"
        );
    }

    #[tokio::test]
    async fn test_process_sees_inserted_order() {
        let lines = Arc::new(Lines::default());
        let outbox = Arc::new(Outbox {
            fail: false,
            sent: Mutex::new(Vec::new()),
        });
        let store = Arc::new(MemoryStore::seeded().with_lookup_latency(Duration::ZERO));
        store.insert(Order::new(3, "Tablet").unwrap()).await.unwrap();

        let processor =
            OrderProcessor::new(store, lines, Arc::new(PositiveIdValidator), outbox.clone());

        assert!(processor.process(3).await.is_notified());
        assert_eq!(
            *outbox.sent.lock().unwrap(),
            vec!["Order 3 (Tablet) has been processed.".to_string()]
        );
    }
}
