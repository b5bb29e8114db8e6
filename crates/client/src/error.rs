//! Error types for the request client

use thiserror::Error;

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Request client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Server replied with a non-success status code
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// HTTP reason phrase (e.g. "Not Found")
        status_text: String,
        /// Response body text, or a default when the body was unreadable
        message: String,
    },

    /// Network-level failure (DNS, connection refused, timeout) — no
    /// status code is available
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body declared JSON but failed to parse
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Endpoint or base URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a `Status` error from a received non-success response.
    ///
    /// The message is the response body text; when the body is empty or
    /// unreadable it falls back to `API Error: <status> <status_text>`.
    pub fn from_response(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        let status_text = status_text.into();
        let body = body.into();
        let message = if body.is_empty() {
            format!("API Error: {status} {status_text}")
        } else {
            body
        };
        Self::Status {
            status,
            status_text,
            message,
        }
    }

    /// HTTP status code, if the server produced a response at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status >= 500)
    }
}
