//! Client-facing error taxonomy for the management API.

use thiserror::Error;

/// Result alias for resource-layer operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Errors surfaced to management API callers.
///
/// Each variant maps to a distinct client-visible outcome (the HTTP layer
/// translates them to 400/409/404/405/500). Callers rely on the variant to
/// decide whether to retry, fix their input, or fall back to a fetch, so
/// failures must never be collapsed into a single generic kind.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The request was malformed or failed semantic validation; never
    /// retried as-is. The message names the violated constraint.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A definition with the same name already exists. Distinct from
    /// [`InvalidInput`](Self::InvalidInput) so callers can implement
    /// create-or-fetch patterns.
    #[error("datastream '{0}' already exists")]
    Conflict(String),

    /// No definition exists under the requested name.
    #[error("datastream '{0}' not found")]
    NotFound(String),

    /// The operation is not supported by this layer.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// An unexpected store or coordinator failure. The message is generic;
    /// the underlying cause is logged, not surfaced.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Returns `true` for the variants caused by the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::Conflict(_) | Self::NotFound(_) | Self::MethodNotAllowed
        )
    }
}
