//! Metrics collection and exposition.
//!
//! # Metrics
//! - `hello_requests_total` (counter): total requests by method, status, route
//! - `hello_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Prometheus-compatible endpoint on its own listener
//! - Low-overhead metric updates (atomic operations)
//! - Labels for method, route, status code

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own HTTP listener.
///
/// Failure to install is logged and otherwise ignored; the server keeps
/// serving without metrics rather than refusing to start.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "hello_requests_total",
                "Total HTTP requests by method, status, and route"
            );
            describe_histogram!(
                "hello_request_duration_seconds",
                "HTTP request latency in seconds"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record a completed request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    counter!(
        "hello_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "route" => route.to_string()
    )
    .increment(1);

    histogram!(
        "hello_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
