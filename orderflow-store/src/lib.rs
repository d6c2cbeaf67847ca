//! Orderflow Storage Layer
//!
//! Provides the order repository port and its in-memory implementation.
//!
//! # Architecture
//!
//! - **Repository trait**: Defines the storage interface (port)
//! - **In-memory store**: Lock-guarded map, seeded with demonstration orders
//!
//! # Usage
//!
//! ```rust
//! use orderflow_domain::Order;
//! use orderflow_store::{MemoryStore, OrderRepository};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MemoryStore::seeded();
//!
//!     store.insert(Order::new(3, "Tablet").unwrap()).await.unwrap();
//!
//!     let product = store.lookup(3).await.unwrap();
//!     println!("Order 3: {}", product);
//! }
//! ```

#![warn(clippy::all)]

// Modules
mod error;
mod memory;
mod repository;

// Re-exports
pub use error::StoreError;
pub use memory::{seed_orders, MemoryStore, DEFAULT_LOOKUP_LATENCY};
pub use repository::OrderRepository;
