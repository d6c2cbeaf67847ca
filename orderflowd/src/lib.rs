//! Orderflow Daemon Library
//!
//! Composition root and batch runner for the order-processing pipeline.
//!
//! # Architecture
//!
//! ```text
//! Config → Services (composition root) → Batch runner → OrderProcessor × N
//!                                                      → Store insert
//! ```
//!
//! # Components
//!
//! - **Config**: Defaults, `appsettings.json`, environment overrides
//! - **Services**: Wires store, logger, validator, notifier and processor
//! - **Batch**: Spawns one task per workflow and joins them all
//!
//! # Example
//!
//! ```rust,ignore
//! use orderflowd::{run_demo_batch, Config, Services};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().expect("Failed to load config");
//!     let services = Services::build(&config);
//!     let report = run_demo_batch(&services).await.expect("Batch error");
//!     println!("{} notified", report.notified_count());
//! }
//! ```

#![warn(clippy::all)]

pub mod batch;
pub mod config;
pub mod container;
pub mod error;

// Re-exports for convenience
pub use batch::{run_batch, run_demo_batch, BatchReport, DEMO_INSERT, DEMO_ORDER_IDS};
pub use config::{Config, LoggingConfig, StoreConfig, DEFAULT_SETTINGS_PATH};
pub use container::Services;
pub use error::{DaemonError, DaemonResult};
