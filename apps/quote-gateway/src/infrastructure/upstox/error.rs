//! Upstox-specific error types.

use thiserror::Error;

use crate::application::ports::QuoteSourceError;

/// Errors from the Upstox adapter.
#[derive(Debug, Error)]
pub enum UpstoxError {
    /// Network error issuing the request or reading the response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body is not JSON.
    #[error("invalid JSON response: {0}")]
    JsonParse(String),
}

impl From<reqwest::Error> for UpstoxError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<UpstoxError> for QuoteSourceError {
    fn from(err: UpstoxError) -> Self {
        match err {
            UpstoxError::Network(msg) => Self::UpstreamUnreachable(msg),
            UpstoxError::JsonParse(msg) => Self::UpstreamInvalidResponse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_maps_to_unreachable() {
        let err = UpstoxError::Network("connection refused".to_string());
        assert!(matches!(
            QuoteSourceError::from(err),
            QuoteSourceError::UpstreamUnreachable(msg) if msg == "connection refused"
        ));
    }

    #[test]
    fn parse_failure_maps_to_invalid_response() {
        let err = UpstoxError::JsonParse("expected value at line 1".to_string());
        assert!(matches!(
            QuoteSourceError::from(err),
            QuoteSourceError::UpstreamInvalidResponse(msg) if msg.contains("expected value")
        ));
    }
}
