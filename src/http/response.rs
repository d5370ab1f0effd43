//! Response payload types.

use serde::Serialize;

/// JSON body served by the `/json` endpoint.
#[derive(Debug, Serialize)]
pub struct Message {
    /// The greeting text.
    pub message: String,
}
