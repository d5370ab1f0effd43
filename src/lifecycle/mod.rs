//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs → app.rs):
//!     Load config → Validate → Initialize subsystems → Start server
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then observability, then listener
//! - Shutdown reacts to either an OS signal or an explicit trigger

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
