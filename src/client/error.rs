//! Client error taxonomy
//!
//! Callers match on the variant; nothing here requires inspecting optional
//! fields to tell failures apart.

use thiserror::Error;

use super::request::ApiResponse;

/// Failure to obtain any response from the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// DNS or connection failure
    #[error("connection failed: {0}")]
    Connect(String),

    /// No response within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The request could not be built (bad URL, header, body)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Connection dropped or body could not be read
    #[error("transport failure: {0}")]
    Other(String),
}

impl TransportError {
    /// Whether resending the same request might succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::InvalidRequest(_))
    }
}

/// The last transient failure seen before giving up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryableFailure {
    /// No response was received
    Network(String),
    /// A response with a retryable status
    Status(u16),
}

impl std::fmt::Display for RetryableFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Status(status) => write!(f, "status {status}"),
        }
    }
}

/// Errors surfaced by [`ApiClient`](super::ApiClient)
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent and retrying would not help
    #[error("network error: {0}")]
    Network(#[source] TransportError),

    /// The session could not be renewed; the user has been signed out
    #[error("authentication expired, sign in again")]
    AuthenticationExpired,

    /// A transient failure persisted past the retry budget
    #[error("gave up after {attempts} attempts, last failure: {last}")]
    RetryBudgetExhausted {
        /// Total attempts made, including the first
        attempts: u32,
        /// Failure seen on the final attempt
        last: RetryableFailure,
    },

    /// Non-retryable 4xx response
    #[error("request rejected with status {status}: {body}")]
    Client {
        /// HTTP status
        status: u16,
        /// Response body, for caller-specific handling
        body: String,
    },

    /// Non-retryable 5xx response
    #[error("server error {status}: {body}")]
    Server {
        /// HTTP status
        status: u16,
        /// Response body
        body: String,
    },

    /// A status outside 2xx/4xx/5xx, such as a redirect the transport did
    /// not follow
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status
        status: u16,
        /// Response body
        body: String,
    },

    /// A JSON body could not be encoded or decoded
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Classify a non-success response that will not be retried
    #[must_use]
    pub fn from_response(response: &ApiResponse) -> Self {
        let body = response.text();
        let status = response.status;
        match status {
            500.. => Self::Server { status, body },
            400..500 => Self::Client { status, body },
            _ => Self::UnexpectedStatus { status, body },
        }
    }

    /// HTTP status carried by the error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Client { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::RetryBudgetExhausted {
                last: RetryableFailure::Status(status),
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

/// Failure of the session refresh call itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No refresh token is available
    #[error("no refresh token available")]
    MissingRefreshToken,

    /// The backend refused the credentials
    #[error("credentials rejected with status {0}")]
    Rejected(u16),

    /// The authentication endpoint could not be reached
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The token response did not have the expected shape
    #[error("malformed token response: {0}")]
    Malformed(String),
}
