// ── Core error types ──
//
// User-facing errors from pawbowl-core. Consumers never see HTTP status
// codes or JSON parse failures directly; the `From<pawbowl_api::Error>`
// impl translates transport-layer errors into domain-appropriate
// variants. The two variants the UIs care about are `Rejected` (the
// service said no, with its own message) and `Connection` (we never got
// a usable answer).

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The service answered with a failure envelope. `message` is the
    /// server-provided text, surfaced verbatim to the user.
    #[error("{message}")]
    Rejected { message: String },

    /// Transport-level failure: the request never produced a usable
    /// response (network, TLS, malformed body).
    #[error("Cannot reach the roster service: {reason}")]
    Connection { reason: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: i64 },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for application-level rejections (failure
    /// envelope), as opposed to transport failures.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::PlayerNotFound { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<pawbowl_api::Error> for CoreError {
    fn from(err: pawbowl_api::Error) -> Self {
        match err {
            pawbowl_api::Error::Api { message } => CoreError::Rejected { message },
            pawbowl_api::Error::Http { status, message } => CoreError::Rejected {
                message: format!("HTTP {status}: {message}"),
            },
            pawbowl_api::Error::Transport(e) => CoreError::Connection {
                reason: e.to_string(),
            },
            pawbowl_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            pawbowl_api::Error::Deserialization { message, .. } => CoreError::Connection {
                reason: format!("unreadable response: {message}"),
            },
        }
    }
}
