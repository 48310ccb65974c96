//! Error types for the management API client.
//!
//! Failures are classified in the order the wire makes them visible:
//! transport, HTTP status, blank body, malformed JSON, then vendor error
//! payloads embedded in otherwise successful responses.

use thiserror::Error;

/// Unified error type for the management API client.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never completed: connect failure, timeout, TLS, etc.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("API returned HTTP {status}{}", format_body(.body))]
    Status { status: u16, body: Option<String> },

    /// The API answered with a success status but an empty body.
    #[error("response body was empty")]
    EmptyResponse,

    /// The response body was not valid JSON.
    #[error("response was not valid JSON: {source}")]
    MalformedJson {
        source: serde_json::Error,
        body: String,
    },

    /// A vendor error payload embedded in a success response
    /// (`err_code`/`err_msg` or `error`/`reason`).
    #[error("Deepgram error {code}: {message}")]
    Vendor {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// A well-formed JSON response that does not match the expected record shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client construction failed (missing API key, bad base URL, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A request was rejected client-side before anything was sent.
    #[error("validation error: {0}")]
    Validation(String),
}

// Helper to append the response body to status-failure messages when present.
fn format_body(body: &Option<String>) -> String {
    match body {
        Some(b) => format!(": {}", b),
        None => String::new(),
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Coarse classification of the failure, where one applies.
    ///
    /// Status failures map from the HTTP code; transport timeouts map to
    /// [`ErrorKind::Timeout`]; everything else is unclassified.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Status { status, .. } => Some(ErrorKind::from_status(*status)),
            Error::Transport(e) if e.is_timeout() => Some(ErrorKind::Timeout),
            Error::Transport(_) => Some(ErrorKind::Network),
            _ => None,
        }
    }

    /// Whether retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        self.kind().map(|k| k.retryable()).unwrap_or(false)
    }
}

/// Coarse classification of remote failures.
///
/// Each variant carries a stable snake_case name and a retryable flag so
/// applications can branch on failure class without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed request, invalid parameters, or missing required fields
    InvalidRequest,
    /// Invalid, expired, or missing API key
    Authentication,
    /// Valid credentials but insufficient permissions
    PermissionDenied,
    /// Requested project, key, or resource does not exist
    NotFound,
    /// Request rate limit exceeded
    RateLimited,
    /// Internal server error on the vendor side
    ServerError,
    /// Request timed out before a response was received
    Timeout,
    /// The request never reached the API
    Network,
    /// Failure could not be classified
    Unknown,
}

impl ErrorKind {
    /// Map an HTTP status code onto a failure class.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            408 | 504 => Self::Timeout,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Returns the stable name (e.g. `"rate_limited"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Timeout => "timeout",
            Self::Network => "network",
            Self::Unknown => "unknown",
        }
    }

    /// Returns whether this failure class is retryable by default.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::Timeout | Self::Network
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
