use reqwest::StatusCode;
use thiserror::Error;

/// Result type for user client operations.
pub type ClientResult<T> = Result<T, UserClientError>;

/// Errors that can occur while talking to the user service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserClientError {
    /// The request never completed (connection refused, DNS, timeout).
    #[error("Network error calling {url}: {message}")]
    Network { url: String, message: String },
    #[error("User not found: {0}")]
    NotFound(String),
    /// The request completed with a failure status other than 404.
    #[error("User service responded {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl UserClientError {
    /// Classify a completed response with a non-success status.
    pub fn from_status(status: StatusCode, resource: &str, body: &str) -> Self {
        if status == StatusCode::NOT_FOUND {
            return Self::NotFound(resource.to_string());
        }
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_string()
        } else {
            body.trim().to_string()
        };
        Self::Server { status: status.as_u16(), message }
    }

    /// True when the request never reached a response.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
