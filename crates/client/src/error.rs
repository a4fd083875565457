use model::ValidationError;
use thiserror::Error;

/// Errors surfaced by the restaurant client.
///
/// Every failure reaches the caller; nothing is swallowed or retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A field failed local validation; no request was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The server rejected the name as already taken (HTTP 403).
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// The requested record does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success response from the server.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A network or protocol failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
