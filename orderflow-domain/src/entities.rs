//! Domain Entities for Orderflow
//!
//! Orders are immutable once created: there is no update or delete path.

use crate::value_objects::{is_valid_order_id, DomainError, ProductName};
use serde::{Deserialize, Serialize};

/// Unique identifier for an Order
pub type OrderId = i64;

// =============================================================================
// Order
// =============================================================================

/// Order identifies a purchased product by numeric id and name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Strictly positive, unique within a store
    pub id: OrderId,
    /// Product the order refers to
    pub product_name: ProductName,
}

impl Order {
    /// Create a new order with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidOrderId` if `id <= 0` and
    /// `DomainError::InvalidProductName` if the name is blank.
    pub fn new(id: OrderId, product_name: impl Into<String>) -> Result<Self, DomainError> {
        let order = Self {
            id,
            product_name: ProductName::new(product_name)?,
        };
        order.validate()?;
        Ok(order)
    }

    /// Re-check invariants for an order that was assembled field by field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !is_valid_order_id(self.id) {
            return Err(DomainError::InvalidOrderId(self.id));
        }
        Ok(())
    }

    /// Product name as a string slice
    pub fn product(&self) -> &str {
        self.product_name.as_str()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = Order::new(1, "Laptop").unwrap();
        assert_eq!(order.id, 1);
        assert_eq!(order.product(), "Laptop");
    }

    #[test]
    fn test_order_rejects_non_positive_id() {
        assert_eq!(Order::new(0, "Laptop"), Err(DomainError::InvalidOrderId(0)));
        assert_eq!(Order::new(-5, "Laptop"), Err(DomainError::InvalidOrderId(-5)));
    }

    #[test]
    fn test_order_rejects_blank_product() {
        assert!(matches!(Order::new(1, ""), Err(DomainError::InvalidProductName(_))));
    }

    #[test]
    fn test_validate_catches_hand_built_order() {
        let order = Order {
            id: -1,
            product_name: ProductName::new("Phone").unwrap(),
        };
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_order_serialization() {
        let order = Order::new(3, "Tablet").unwrap();
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"id":3,"product_name":"Tablet"}"#);

        let parsed: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }
}
