//! Orderflow Domain Layer
//!
//! Pure domain types with zero I/O dependencies.
//! Contains the order entity and its validated value objects.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{Order, OrderId};
pub use value_objects::{is_valid_order_id, DomainError, ProductName};
