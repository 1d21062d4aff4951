//! Client error types.

/// Errors that can occur when using the rolodex client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the payload (missing required fields).
    #[error("validation error: {message}")]
    Validation {
        /// Error message naming the missing fields.
        message: String,
    },

    /// The requested record does not exist.
    #[error("not found: {message}")]
    NotFound {
        /// Error message naming the entity and id.
        message: String,
    },

    /// Server returned an error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
