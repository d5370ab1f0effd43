//! Shared utilities for integration testing.

use std::time::Duration;

use hello_server::config::AppConfig;

/// Build a config bound to a local test port, with metrics disabled so tests
/// never fight over the global recorder.
pub fn test_config(port: u16) -> AppConfig {
    let mut config = AppConfig::default();
    config.server.bind_address = format!("127.0.0.1:{}", port);
    config.observability.metrics_enabled = false;
    config
}

/// Non-pooled client so shutdown tests observe fresh connections.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .expect("client builds")
}

/// Poll the health endpoint until the server answers.
pub async fn wait_ready(client: &reqwest::Client, base_url: &str) {
    for _ in 0..100 {
        if let Ok(res) = client.get(format!("{}/health", base_url)).send().await {
            if res.status().is_success() {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("server did not become ready at {}", base_url);
}
