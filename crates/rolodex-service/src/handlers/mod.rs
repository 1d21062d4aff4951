//! API handlers.

pub mod addresses;
pub mod customers;
pub mod health;

use serde::Serialize;

/// Acknowledgment body for successful writes. Creates intentionally do not
/// echo the generated identifier.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable acknowledgment.
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
