//! In-memory store implementation
//!
//! Thread-safe using RwLock for concurrent access. Lookups suspend for a
//! configurable latency before reading, simulating I/O; the lock is never
//! held across that suspension.

use crate::error::StoreError;
use crate::repository::OrderRepository;
use async_trait::async_trait;
use orderflow_domain::{is_valid_order_id, Order, OrderId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tracing::debug;

/// Simulated latency applied to every lookup unless overridden.
pub const DEFAULT_LOOKUP_LATENCY: Duration = Duration::from_millis(100);

/// Seed records present in a freshly seeded store.
const SEED: [(OrderId, &str); 2] = [(1, "Laptop"), (2, "Phone")];

/// Orders present in a freshly seeded store.
pub fn seed_orders() -> Vec<Order> {
    SEED.iter().filter_map(|(id, product)| Order::new(*id, *product).ok()).collect()
}

/// In-memory order store
pub struct MemoryStore {
    orders: RwLock<HashMap<OrderId, Order>>,
    lookup_latency: Duration,
}

impl MemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            lookup_latency: DEFAULT_LOOKUP_LATENCY,
        }
    }

    /// Create a store pre-populated with the seed orders (1 → Laptop, 2 → Phone)
    pub fn seeded() -> Self {
        let orders = seed_orders().into_iter().map(|order| (order.id, order)).collect();
        Self {
            orders: RwLock::new(orders),
            lookup_latency: DEFAULT_LOOKUP_LATENCY,
        }
    }

    /// Override the simulated lookup latency
    pub fn with_lookup_latency(mut self, latency: Duration) -> Self {
        self.lookup_latency = latency;
        self
    }

    /// Configured lookup latency
    pub fn lookup_latency(&self) -> Duration {
        self.lookup_latency
    }

    /// Get the number of orders
    pub fn order_count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    /// Whether an order with this id exists
    pub fn contains(&self, id: OrderId) -> Result<bool, StoreError> {
        Ok(self.read()?.contains_key(&id))
    }

    /// All orders, sorted by id
    pub fn snapshot(&self) -> Result<Vec<Order>, StoreError> {
        let mut orders: Vec<Order> = self.read()?.values().cloned().collect();
        orders.sort_by_key(|order| order.id);
        Ok(orders)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<OrderId, Order>>, StoreError> {
        self.orders
            .read()
            .map_err(|e| StoreError::Unavailable(format!("order map lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<OrderId, Order>>, StoreError> {
        self.orders
            .write()
            .map_err(|e| StoreError::Unavailable(format!("order map lock poisoned: {}", e)))
    }

    async fn simulate_latency(&self) {
        if self.lookup_latency.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.lookup_latency).await;
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Order Repository Implementation
// =============================================================================

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn lookup(&self, id: OrderId) -> Result<String, StoreError> {
        if !is_valid_order_id(id) {
            return Err(StoreError::invalid_argument("Order ID must be positive."));
        }

        self.simulate_latency().await;

        let orders = self.read()?;
        match orders.get(&id) {
            Some(order) => {
                debug!(order_id = id, product = order.product(), "Order found");
                Ok(order.product().to_string())
            },
            None => {
                debug!(order_id = id, "Order not found");
                Err(StoreError::not_found(id))
            },
        }
    }

    async fn insert(&self, order: Order) -> Result<(), StoreError> {
        order.validate()?;

        let id = order.id;
        let mut orders = self.write()?;
        match orders.entry(id) {
            Entry::Occupied(_) => Err(StoreError::already_exists(id)),
            Entry::Vacant(slot) => {
                slot.insert(order);
                debug!(order_id = id, "Order inserted");
                Ok(())
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use orderflow_domain::ProductName;
    use std::sync::Arc;

    fn fast_store() -> MemoryStore {
        MemoryStore::seeded().with_lookup_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = fast_store();

        assert_eq!(store.order_count().unwrap(), 2);
        assert_eq!(store.lookup(1).await.unwrap(), "Laptop");
        assert_eq!(store.lookup(2).await.unwrap(), "Phone");
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.order_count().unwrap(), 0);
        assert_eq!(store.lookup_latency(), DEFAULT_LOOKUP_LATENCY);
    }

    #[tokio::test]
    async fn test_lookup_rejects_non_positive_id() {
        let store = fast_store();

        let err = store.lookup(0).await.unwrap_err();
        assert_eq!(err.kind(), "InvalidArgumentError");

        let err = store.lookup(-1).await.unwrap_err();
        assert_eq!(err.kind(), "InvalidArgumentError");
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let store = fast_store();

        let err = store.lookup(999).await.unwrap_err();
        assert_eq!(err, StoreError::not_found(999));
    }

    #[tokio::test]
    async fn test_insert_then_lookup() {
        let store = fast_store();

        store.insert(Order::new(3, "Tablet").unwrap()).await.unwrap();

        assert_eq!(store.lookup(3).await.unwrap(), "Tablet");
        assert!(store.contains(3).unwrap());
        assert_eq!(store.order_count().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_insert_duplicate_is_rejected() {
        let store = fast_store();

        let err = store.insert(Order::new(1, "Desktop").unwrap()).await.unwrap_err();
        assert_eq!(err, StoreError::already_exists(1));

        // Original record untouched
        assert_eq!(store.lookup(1).await.unwrap(), "Laptop");
    }

    #[tokio::test]
    async fn test_insert_malformed_order() {
        let store = fast_store();
        let order = Order {
            id: 0,
            product_name: ProductName::new("Ghost").unwrap(),
        };

        let err = store.insert(order).await.unwrap_err();
        assert_eq!(err.kind(), "InvalidArgumentError");
        assert_eq!(store.order_count().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_snapshot_sorted() {
        let store = fast_store();
        store.insert(Order::new(10, "Monitor").unwrap()).await.unwrap();
        store.insert(Order::new(5, "Mouse").unwrap()).await.unwrap();

        let ids: Vec<OrderId> = store.snapshot().unwrap().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 5, 10]);
    }

    fn poison(store: &Arc<MemoryStore>) {
        let store = store.clone();
        let writer = std::thread::spawn(move || {
            let _guard = store.orders.write().unwrap();
            panic!("writer died holding the order map");
        });
        assert!(writer.join().is_err());
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_unavailable() {
        let store = Arc::new(fast_store());
        poison(&store);

        let err = store.lookup(1).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(err.kind(), "StoreError");

        let err = store.insert(Order::new(5, "Keyboard").unwrap()).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(err.kind(), "StoreError");

        assert!(store.order_count().is_err());
        assert!(store.snapshot().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_waits_for_latency() {
        let store = MemoryStore::seeded();
        let started = tokio::time::Instant::now();

        store.lookup(1).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_LOOKUP_LATENCY);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_insert_same_id() {
        let store = Arc::new(fast_store());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.insert(Order::new(42, format!("Watch-{}", i)).unwrap()).await
                })
            })
            .collect();

        let mut successes = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => successes += 1,
                Err(StoreError::AlreadyExists { id: 42 }) => duplicates += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 15);
        assert_eq!(store.order_count().unwrap(), 3);
        assert!(store.lookup(42).await.unwrap().starts_with("Watch-"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_lookup_and_insert() {
        let store = Arc::new(fast_store());

        let inserter = {
            let store = store.clone();
            tokio::spawn(async move {
                for id in 100..150 {
                    store.insert(Order::new(id, "Cable").unwrap()).await.unwrap();
                }
            })
        };
        let reader = {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    assert_eq!(store.lookup(1).await.unwrap(), "Laptop");
                }
            })
        };

        inserter.await.unwrap();
        reader.await.unwrap();

        assert_eq!(store.order_count().unwrap(), 52);
    }
}
