//! Hello benchmark server library.
//!
//! A small production HTTP service built with Tokio and Axum, serving the
//! plaintext and JSON serialization benchmark endpoints.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │               HELLO SERVER                  │
//!                    │                                             │
//!   Client Request   │  ┌──────────┐    ┌──────────┐              │
//!   ─────────────────┼─▶│   http   │───▶│ handlers │              │
//!                    │  │  server  │    │          │              │
//!                    │  └──────────┘    └────┬─────┘              │
//!                    │                       │                     │
//!   Client Response  │  ┌──────────┐         │                     │
//!   ◀────────────────┼──│ response │◀────────┘                     │
//!                    │  └──────────┘                               │
//!                    │                                             │
//!                    │  ┌───────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns        │ │
//!                    │  │  ┌────────┐ ┌────────────┐ ┌─────────┐ │ │
//!                    │  │  │ config │ │ observa-   │ │lifecycle│ │ │
//!                    │  │  │        │ │ bility     │ │         │ │ │
//!                    │  │  └────────┘ └────────────┘ └─────────┘ │ │
//!                    │  └───────────────────────────────────────┘ │
//!                    └────────────────────────────────────────────┘
//! ```
//!
//! The [`app::Application`] ties it together: built once from an
//! [`config::AppConfig`], consumed by `start()`, stopped by signal or by its
//! [`lifecycle::Shutdown`] handle.

// Core subsystems
pub mod app;
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use app::Application;
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
