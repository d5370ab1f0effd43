//! Endpoint conformance tests for the hello server.

use hello_server::Application;
use uuid::Uuid;

mod common;

async fn spawn(port: u16) -> (hello_server::Shutdown, String, reqwest::Client) {
    let config = common::test_config(port);
    let base_url = format!("http://{}", config.server.bind_address);

    let app = Application::new(config);
    let shutdown = app.shutdown_handle();
    tokio::spawn(async move {
        let _ = app.start().await;
    });

    let client = common::test_client();
    common::wait_ready(&client, &base_url).await;
    (shutdown, base_url, client)
}

#[tokio::test]
async fn test_plaintext_endpoint() {
    let (shutdown, base_url, client) = spawn(28401).await;

    let res = client
        .get(format!("{}/plaintext", base_url))
        .send()
        .await
        .expect("server reachable");

    assert_eq!(res.status(), 200);

    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let server = res
        .headers()
        .get("server")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert_eq!(server, "hello-server");

    assert_eq!(res.text().await.unwrap(), "Hello, World!");

    shutdown.trigger();
}

#[tokio::test]
async fn test_json_endpoint() {
    let (shutdown, base_url, client) = spawn(28402).await;

    let res = client
        .get(format!("{}/json", base_url))
        .send()
        .await
        .expect("server reachable");

    assert_eq!(res.status(), 200);

    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Hello, World!");

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (shutdown, base_url, client) = spawn(28403).await;

    let res = client
        .get(format!("{}/fortunes", base_url))
        .send()
        .await
        .expect("server reachable");

    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let (shutdown, base_url, client) = spawn(28404).await;

    // Generated when absent, and UUID-shaped.
    let res = client
        .get(format!("{}/plaintext", base_url))
        .send()
        .await
        .expect("server reachable");
    let generated = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("response carries a request id")
        .to_string();
    assert!(Uuid::parse_str(&generated).is_ok());

    // Echoed back when the client supplies one.
    let res = client
        .get(format!("{}/plaintext", base_url))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .expect("server reachable");
    let echoed = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert_eq!(echoed, "test-correlation-id");

    shutdown.trigger();
}

#[tokio::test]
async fn test_configured_message_served() {
    let mut config = common::test_config(28405);
    config.response.message = "Hello, Benchmark!".to_string();
    let base_url = format!("http://{}", config.server.bind_address);

    let app = Application::new(config);
    let shutdown = app.shutdown_handle();
    tokio::spawn(async move {
        let _ = app.start().await;
    });

    let client = common::test_client();
    common::wait_ready(&client, &base_url).await;

    let text = client
        .get(format!("{}/plaintext", base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(text, "Hello, Benchmark!");

    let body: serde_json::Value = client
        .get(format!("{}/json", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Hello, Benchmark!");

    shutdown.trigger();
}
