//! Orderflow Processing Pipeline
//!
//! Validate → fetch → notify → log, one workflow invocation per order id.
//!
//! # Architecture
//!
//! ```text
//! OrderProcessor → OrderValidator
//!                → OrderRepository (orderflow-store)
//!                → Notifier
//!                → OrderLogger
//! ```
//!
//! # Components
//!
//! - **Ports**: Traits for the validator, notifier and logger collaborators
//! - **Adapters**: Reference implementations (positive-id validator, console logger, email stub)
//! - **Processor**: The workflow engine
//!
//! # Example
//!
//! ```rust,ignore
//! use orderflow_pipeline::{
//!     ConsoleLogger, EmailNotifier, LogLevel, OrderProcessor, PositiveIdValidator,
//! };
//! use orderflow_store::MemoryStore;
//! use std::sync::Arc;
//!
//! let processor = OrderProcessor::new(
//!     Arc::new(MemoryStore::seeded()),
//!     Arc::new(ConsoleLogger::stdout(LogLevel::Info)),
//!     Arc::new(PositiveIdValidator),
//!     Arc::new(EmailNotifier::stdout()),
//! );
//!
//! let outcome = processor.process(1).await;
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod error;
pub mod ports;
pub mod processor;

// Re-exports for convenience
pub use adapters::{ConsoleLogger, EmailNotifier, LogLevel, PositiveIdValidator};
pub use error::{NotifyError, ProcessError};
pub use ports::{Notifier, OrderLogger, OrderValidator};
pub use processor::{OrderProcessor, Outcome};
