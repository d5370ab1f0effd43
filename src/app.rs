//! The application object.
//!
//! One `Application` owns the whole server lifecycle. It is constructed once
//! in `main` (construction does no I/O) and consumed by [`Application::start`],
//! so a given instance can never be started twice. Embedders and tests hold a
//! [`Shutdown`] handle to stop it from the outside.

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Errors surfaced by [`Application::start`].
///
/// No retry or recovery is attempted; whatever the server raises propagates
/// to the caller unmodified.
#[derive(Debug, Error)]
pub enum StartError {
    /// Binding the listener failed.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    /// The server loop failed.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// The single-owner application instance.
pub struct Application {
    config: AppConfig,
    shutdown: Shutdown,
}

impl Application {
    /// Create the application from a validated configuration.
    ///
    /// Pure construction: no sockets are opened and no tasks are spawned
    /// until [`start`](Self::start) runs.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            shutdown: Shutdown::new(),
        }
    }

    /// Get a handle that stops the application when triggered.
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Start the application and run until it halts.
    ///
    /// Consumes `self`: starting is a one-shot operation. Blocks until a
    /// termination signal arrives or the shutdown handle fires, then drains
    /// and returns.
    pub async fn start(self) -> Result<(), StartError> {
        let Self { config, shutdown } = self;

        if config.observability.metrics_enabled {
            match config.observability.metrics_address.parse() {
                Ok(addr) => metrics::init_metrics(addr),
                Err(_) => {
                    tracing::error!(
                        metrics_address = %config.observability.metrics_address,
                        "Failed to parse metrics address"
                    );
                }
            }
        }

        let listener = TcpListener::bind(&config.server.bind_address)
            .await
            .map_err(|source| StartError::Bind {
                address: config.server.bind_address.clone(),
                source,
            })?;

        tracing::info!(
            address = %listener.local_addr()?,
            "Listening for connections"
        );

        let server = HttpServer::new(config);
        server.run(listener, shutdown.subscribe()).await?;

        Ok(())
    }
}
