//! Storage layer errors

use orderflow_domain::{DomainError, OrderId};
use thiserror::Error;

/// Errors that can occur in the storage layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Identifier or order failed validation
    #[error("{0}")]
    InvalidArgument(String),

    /// No order with this id
    #[error("Order with ID {id} not found.")]
    NotFound {
        /// Requested order ID
        id: OrderId,
    },

    /// Order id already present (inserts never overwrite)
    #[error("Order with ID {id} already exists.")]
    AlreadyExists {
        /// Conflicting order ID
        id: OrderId,
    },

    /// Backing storage cannot be used (e.g. poisoned lock)
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a not found error
    pub fn not_found(id: OrderId) -> Self {
        Self::NotFound { id }
    }

    /// Create an already exists error
    pub fn already_exists(id: OrderId) -> Self {
        Self::AlreadyExists { id }
    }

    /// Failure kind name, as shown on the `Exception:` console line.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::InvalidArgument(_) => "InvalidArgumentError",
            StoreError::NotFound { .. } => "NotFoundError",
            StoreError::AlreadyExists { .. } => "AlreadyExistsError",
            StoreError::Unavailable(_) => "StoreError",
        }
    }
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidOrderId(_) => {
                StoreError::InvalidArgument("Order ID must be positive.".to_string())
            },
            DomainError::InvalidProductName(msg) => StoreError::InvalidArgument(msg),
        }
    }
}
