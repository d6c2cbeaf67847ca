//! Composition root.
//!
//! Builds the concrete collaborators once at startup and wires them into an
//! `OrderProcessor`. Everything is held behind `Arc<dyn ...>` so tests can
//! swap any piece for a double via `Services::new`.

use std::sync::Arc;

use tracing::debug;

use orderflow_pipeline::{
    ConsoleLogger, EmailNotifier, Notifier, OrderLogger, OrderProcessor, OrderValidator,
    PositiveIdValidator,
};
use orderflow_store::{MemoryStore, OrderRepository};

use crate::config::Config;

/// The wired object graph.
#[derive(Clone)]
pub struct Services {
    /// Order store shared by every workflow
    pub store: Arc<dyn OrderRepository>,
    /// Console logger
    pub logger: Arc<dyn OrderLogger>,
    /// Identifier validator
    pub validator: Arc<dyn OrderValidator>,
    /// Notification sink
    pub notifier: Arc<dyn Notifier>,
    /// Processor built from the four collaborators above
    pub processor: Arc<OrderProcessor>,
}

impl Services {
    /// Build the reference implementations from configuration.
    pub fn build(config: &Config) -> Self {
        debug!(
            log_level = %config.logging.level,
            lookup_latency_ms = config.store.lookup_latency.as_millis() as u64,
            "Wiring services"
        );

        let store =
            Arc::new(MemoryStore::seeded().with_lookup_latency(config.store.lookup_latency));
        let logger = Arc::new(ConsoleLogger::stdout(config.logging.level));
        let validator = Arc::new(PositiveIdValidator);
        let notifier = Arc::new(EmailNotifier::stdout());

        Self::new(store, logger, validator, notifier)
    }

    /// Wire caller-provided collaborators.
    pub fn new(
        store: Arc<dyn OrderRepository>,
        logger: Arc<dyn OrderLogger>,
        validator: Arc<dyn OrderValidator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let processor = Arc::new(OrderProcessor::new(
            store.clone(),
            logger.clone(),
            validator.clone(),
            notifier.clone(),
        ));

        Self {
            store,
            logger,
            validator,
            notifier,
            processor,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
