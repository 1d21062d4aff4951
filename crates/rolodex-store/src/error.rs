//! Error types for rolodex storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Record not found, detected by an empty read or a zero affected-row
    /// count after a write.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of record ("customer" or "address").
        entity: &'static str,
        /// The id that matched nothing.
        id: i64,
    },
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
