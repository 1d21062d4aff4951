//! Wire types specific to the client.
//!
//! Entity and payload types are shared with the service via `rolodex-core`;
//! only the acknowledgment and error envelopes live here.

use serde::Deserialize;

/// Acknowledgment body returned by successful writes.
#[derive(Debug, Clone, Deserialize)]
pub struct Acknowledgment {
    /// Human-readable acknowledgment.
    pub message: String,
}

/// Error response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// The error payload.
    pub error: ErrorBody,
}

/// Error payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
