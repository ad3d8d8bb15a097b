use thiserror::Error;

/// Top-level error type for the `pawbowl-api` crate.
///
/// Two failure modes matter to callers: transport failure (network,
/// TLS, JSON parse) and application-level rejection (the service
/// answered with `success:false`). Both are terminal for the call —
/// nothing in this crate retries. `pawbowl-core` maps these into
/// user-facing behavior per operation.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The service rejected the request with a `success:false` envelope.
    #[error("API error: {message}")]
    Api { message: String },

    /// Non-success HTTP status with no parseable envelope.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// JSON deserialization failed, with a body preview for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error indicates the requested entity does
    /// not exist (HTTP 404, or the service's "not found" rejection text).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Http { status: 404, .. } => true,
            Self::Api { message } => message.to_lowercase().contains("not found"),
            _ => false,
        }
    }

    /// The server-provided rejection message, if this was an
    /// application-level failure.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }
}
