//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (connect, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway rejected the request for sending too fast (HTTP 429)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// API reported a failure (error envelope or non-2xx body)
    #[error("API error: {0}")]
    Api(String),

    /// Success response missing required data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether this failure is the gateway's rate-limit signal.
    ///
    /// The payment pipeline retries on this and nothing else. Covers both
    /// an explicit 429 and an error envelope whose message carries a
    /// rate-limit indicator.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            ClientError::RateLimited(_) => true,
            ClientError::Api(message) => {
                let message = message.to_ascii_lowercase();
                message.contains("rate limit")
                    || message.contains("rate-limit")
                    || message.contains("too many requests")
            }
            _ => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
