//! Benchmark endpoint handlers.
//!
//! The payloads follow the plaintext and JSON serialization benchmark tests:
//! a fixed greeting as `text/plain`, and a single-key object serialized per
//! request (never a cached byte buffer).

use axum::extract::State;
use axum::Json;

use crate::http::response::Message;
use crate::http::server::AppState;

/// `GET /plaintext` — the greeting as a plain text body.
pub async fn plaintext(State(state): State<AppState>) -> String {
    state.message.as_ref().to_owned()
}

/// `GET /json` — the greeting wrapped in a JSON object.
pub async fn json(State(state): State<AppState>) -> Json<Message> {
    Json(Message {
        message: state.message.as_ref().to_owned(),
    })
}

/// `GET /health` — liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
