use thiserror::Error;

/// Failure surface of the API client.
///
/// Non-200 responses are split only into the client (4xx) and server (5xx)
/// classes, both carrying the status code and the user-facing message from
/// the response's `error` field. Interpreting individual status codes is the
/// domain layer's job; `User::load_or_create` is the one place that looks at
/// a specific code, through [`ApiError::is_not_found`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request (non-200, non-5xx).
    #[error("HTTP {status}: {message}")]
    Client { status: u16, message: String },

    /// The server failed to process the request (5xx).
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The request never completed.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body was not the JSON we expected.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the server produced a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Client { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// User-facing message from the API's error envelope.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Client { message, .. } | ApiError::Server { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True when the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Client { status: 404, .. })
    }
}
