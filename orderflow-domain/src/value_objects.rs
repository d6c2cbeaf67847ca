//! Value Objects for the Orderflow Domain
//!
//! Immutable, validated domain primitives.
//! All value objects enforce invariants at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain errors for value object validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Order ID must be strictly positive
    #[error("Invalid order ID: {0}")]
    InvalidOrderId(i64),

    /// Product name must contain at least one non-whitespace character
    #[error("Invalid product name: {0}")]
    InvalidProductName(String),
}

/// Returns true when `id` can identify an order (strictly positive).
pub fn is_valid_order_id(id: i64) -> bool {
    id > 0
}

// =============================================================================
// ProductName
// =============================================================================

/// Name of the product an order refers to
///
/// # Invariants
/// - Must not be empty or whitespace-only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Create a new ProductName with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidProductName` if the name is blank
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidProductName(
                "Product name must not be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
