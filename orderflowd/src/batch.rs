//! Batch runner: concurrent workflow invocations with join semantics.
//!
//! Every id becomes its own task and every insertion another. All tasks are
//! awaited before the report is returned; a failing or panicking task never
//! cancels its siblings.

use tokio::task::JoinHandle;
use tracing::{error, warn};

use orderflow_domain::{Order, OrderId};
use orderflow_pipeline::{Outcome, ProcessError};
use orderflow_store::StoreError;

use crate::container::Services;
use crate::error::DaemonResult;

/// Identifiers processed by the demonstration batch.
pub const DEMO_ORDER_IDS: [OrderId; 3] = [1, 2, -1];

/// Order inserted alongside the demonstration batch.
pub const DEMO_INSERT: (OrderId, &str) = (3, "Tablet");

/// What a batch did.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Terminal state per processed id, in submission order
    pub outcomes: Vec<(OrderId, Outcome)>,
    /// Result per inserted order, in submission order
    pub insertions: Vec<(OrderId, Result<(), StoreError>)>,
    /// Ids whose task panicked instead of finishing, workflows first
    pub join_failures: Vec<OrderId>,
}

impl BatchReport {
    /// Workflows whose notification was delivered.
    pub fn notified_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| outcome.is_notified()).count()
    }

    /// Rejected or failed workflows, failed insertions, and panicked tasks.
    pub fn failure_count(&self) -> usize {
        let workflows = self.outcomes.iter().filter(|(_, o)| o.is_failure()).count();
        let insertions = self.insertions.iter().filter(|(_, r)| r.is_err()).count();
        workflows + insertions + self.join_failures.len()
    }
}

/// Run the demonstration batch: ids 1, 2 and -1 plus an insert of 3 → Tablet.
pub async fn run_demo_batch(services: &Services) -> DaemonResult<BatchReport> {
    let (id, product) = DEMO_INSERT;
    let order = Order::new(id, product)?;
    Ok(run_batch(services, &DEMO_ORDER_IDS, vec![order]).await)
}

/// Process `ids` and insert `orders`, all concurrently, then join.
pub async fn run_batch(services: &Services, ids: &[OrderId], orders: Vec<Order>) -> BatchReport {
    let workflows: Vec<(OrderId, JoinHandle<Outcome>)> = ids
        .iter()
        .map(|&id| {
            let processor = services.processor.clone();
            (id, tokio::spawn(async move { processor.process(id).await }))
        })
        .collect();

    let insertions: Vec<(OrderId, JoinHandle<Result<(), StoreError>>)> = orders
        .into_iter()
        .map(|order| {
            let id = order.id;
            let store = services.store.clone();
            let logger = services.logger.clone();
            let handle = tokio::spawn(async move {
                let result = store.insert(order).await;
                if let Err(err) = &result {
                    // Fail-soft: the insert is best effort.
                    warn!(order_id = id, error = %err, "Insertion failed");
                    logger.log_error(
                        &format!("Failed to add order {}.", id),
                        &ProcessError::from(err.clone()),
                    );
                }
                result
            });
            (id, handle)
        })
        .collect();

    let mut report = BatchReport::default();

    for (id, handle) in workflows {
        match handle.await {
            Ok(outcome) => report.outcomes.push((id, outcome)),
            Err(e) => {
                error!(order_id = id, error = %e, "Workflow task did not complete");
                services.logger.log_error(
                    &format!("Failed to process order {}.", id),
                    &ProcessError::Aborted(e.to_string()),
                );
                report.join_failures.push(id);
            },
        }
    }

    for (id, handle) in insertions {
        match handle.await {
            Ok(result) => report.insertions.push((id, result)),
            Err(e) => {
                error!(order_id = id, error = %e, "Insertion task did not complete");
                services.logger.log_error(
                    &format!("Failed to add order {}.", id),
                    &ProcessError::Aborted(e.to_string()),
                );
                report.join_failures.push(id);
            },
        }
    }

    report
}

// =============================================================================
// Tests
// =============================================================================
