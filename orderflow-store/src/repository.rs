//! Repository trait definitions (Ports)
//!
//! These traits define the storage interface for the domain.
//! Implementations can be in-memory or test doubles.

use crate::error::StoreError;
use async_trait::async_trait;
use orderflow_domain::{Order, OrderId};

/// Repository for Order entities
///
/// Implementations must be safe to share across concurrent workflows
/// without any locking on the caller's side.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch the product name of an order.
    ///
    /// Fails with `InvalidArgument` for `id <= 0` and `NotFound` when absent.
    async fn lookup(&self, id: OrderId) -> Result<String, StoreError>;

    /// Insert a new order.
    ///
    /// Fails with `InvalidArgument` for a malformed order and
    /// `AlreadyExists` when the id is taken. Never overwrites.
    async fn insert(&self, order: Order) -> Result<(), StoreError>;
}
