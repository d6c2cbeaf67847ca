//! Orderflow Daemon
//!
//! Runs the demonstration batch: orders 1, 2 and -1 processed concurrently
//! while order 3 (Tablet) is inserted, then waits for everything to finish.
//!
//! # Usage
//!
//! ```bash
//! # Run with appsettings.json from the current directory
//! cargo run -p orderflowd
//!
//! # Errors only, no simulated latency
//! ORDERFLOW_LOG_LEVEL=Error ORDERFLOW_LOOKUP_LATENCY_MS=0 cargo run -p orderflowd
//! ```
//!
//! # Environment Variables
//!
//! - `ORDERFLOW_SETTINGS`: Settings file path (default: appsettings.json)
//! - `ORDERFLOW_LOG_LEVEL`: Console level, `Info` or `Error` (default: Info)
//! - `ORDERFLOW_LOOKUP_LATENCY_MS`: Simulated lookup latency (default: 100)
//! - `RUST_LOG`: Diagnostic tracing filter (written to stderr)

use orderflowd::{run_demo_batch, Config, Services};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the console log format
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("orderflowd=info".parse()?))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.logging.level,
        lookup_latency_ms = config.store.lookup_latency.as_millis() as u64,
        settings = %config.settings_path.display(),
        "Orderflow daemon"
    );

    let services = Services::build(&config);
    let report = run_demo_batch(&services).await?;

    info!(
        processed = report.outcomes.len(),
        notified = report.notified_count(),
        failures = report.failure_count(),
        "Batch finished"
    );

    println!("All orders processed.");

    Ok(())
}
