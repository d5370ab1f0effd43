//! Server entry point.
//!
//! Loads configuration, initializes logging, constructs the application
//! object once, and starts it. Failures from `start()` propagate out and
//! terminate the process.

use std::path::Path;

use hello_server::app::Application;
use hello_server::config::{self, AppConfig};
use hello_server::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: path to a TOML config file.
    let config = match std::env::args().nth(1) {
        Some(path) => config::load_config(Path::new(&path))?,
        None => AppConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("hello-server v0.1.0 starting");
    tracing::info!(
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.limits.request_timeout_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let app = Application::new(config);
    app.start().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
