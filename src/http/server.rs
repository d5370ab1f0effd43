//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, limits, Server header)
//! - Bind server to listener
//! - Graceful shutdown on signal or trigger
//! - Observability (metrics, correlation IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::signals;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Greeting served by the benchmark endpoints.
    pub message: Arc<str>,
}

/// HTTP server for the hello service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            message: Arc::from(config.response.message.as_str()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        // Validated at load time; the static token covers configs built by hand.
        let server_header = HeaderValue::from_str(&config.response.server_header)
            .unwrap_or_else(|_| HeaderValue::from_static("hello-server"));

        Router::new()
            .route("/plaintext", get(handlers::plaintext))
            .route("/json", get(handlers::json))
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(middleware::from_fn(track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.limits.request_timeout_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::SERVER,
                server_header,
            ))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once a termination signal arrives or `shutdown` fires, after
    /// in-flight requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown trigger received");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Record metrics for every response that leaves the server.
async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request.uri().path().to_string();

    let response = next.run(request).await;

    metrics::record_request(&method, response.status().as_u16(), &route, start);
    response
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use super::*;

    fn request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_known_routes_respond() {
        let server = HttpServer::new(AppConfig::default());

        for path in ["/plaintext", "/json", "/health"] {
            let response = server.router.clone().oneshot(request(path)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let server = HttpServer::new(AppConfig::default());

        let response = server.router.clone().oneshot(request("/db")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_server_header_and_request_id_attached() {
        let server = HttpServer::new(AppConfig::default());

        let response = server
            .router
            .clone()
            .oneshot(request("/plaintext"))
            .await
            .unwrap();
        assert_eq!(response.headers().get("server").unwrap(), "hello-server");
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_config_accessor() {
        let mut config = AppConfig::default();
        config.response.server_header = "bench".to_string();

        let server = HttpServer::new(config);
        assert_eq!(server.config().response.server_header, "bench");
    }
}
