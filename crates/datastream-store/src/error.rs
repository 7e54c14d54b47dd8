//! Store error types.

use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the definition store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A definition already exists under the name; nothing was written.
    #[error("datastream '{0}' already exists")]
    AlreadyExists(String),

    /// The storage backend failed.
    #[error("store backend error: {0}")]
    Backend(String),
}
