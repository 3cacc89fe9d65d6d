//! StormGlass error types

use thiserror::Error;

/// Errors raised by an [`HttpTransport`](crate::HttpTransport)
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection to the remote host failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed or returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Remote service answered with a server error
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by the API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout in seconds
        timeout_secs: u64,
    },

    /// Response body was not valid JSON
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

impl TransportError {
    /// Returns true if repeating the same request could succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

/// Errors returned by the StormGlass client
#[derive(Debug, Error)]
pub enum StormGlassError {
    /// Transport failure, passed through unchanged
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response body did not have the expected forecast shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(TransportError::ConnectionFailed("refused".to_string()).is_retryable());
        assert!(TransportError::ServiceUnavailable("HTTP 503".to_string()).is_retryable());
        assert!(TransportError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(
            TransportError::RateLimitExceeded {
                retry_after_secs: None
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!TransportError::RequestFailed("HTTP 400".to_string()).is_retryable());
        assert!(!TransportError::InvalidBody("eof".to_string()).is_retryable());
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err: StormGlassError = TransportError::Timeout { timeout_secs: 5 }.into();
        assert_eq!(err.to_string(), "Request timed out after 5 seconds");
        assert!(matches!(
            err,
            StormGlassError::Transport(TransportError::Timeout { timeout_secs: 5 })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = TransportError::RateLimitExceeded {
            retry_after_secs: Some(60),
        };
        assert!(err.to_string().contains("60"));

        let err = StormGlassError::ParseError("missing field `hours`".to_string());
        assert!(err.to_string().contains("hours"));

        let err = StormGlassError::Configuration("source must not be empty".to_string());
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
