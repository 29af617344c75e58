//! Quote Source Port
//!
//! Defines the interface for upstream price lookups that the HTTP controller
//! requires. Implemented by the Upstox REST adapter in production and by
//! hand-rolled stubs in tests.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::instrument::InstrumentKey;

/// Errors a quote source can surface.
///
/// Both variants map to the same observable outcome at the HTTP boundary, a
/// 500 response carrying the error text. The kinds stay distinct here so the
/// type system records what actually went wrong.
#[derive(Debug, Error)]
pub enum QuoteSourceError {
    /// The upstream could not be reached or the request failed in transit.
    #[error("upstream request failed: {0}")]
    UpstreamUnreachable(String),

    /// The upstream answered with a body that is not JSON.
    #[error("upstream returned an invalid response: {0}")]
    UpstreamInvalidResponse(String),
}

/// Port for fetching last-traded-price payloads from the upstream API.
#[async_trait]
pub trait QuoteSourcePort: Send + Sync {
    /// Fetch the LTP payload for an instrument.
    ///
    /// The payload is relayed verbatim, whatever its shape: upstream error
    /// envelopes are still `Ok` here. Only transport failures and non-JSON
    /// bodies are errors.
    ///
    /// # Errors
    ///
    /// Returns `QuoteSourceError` if the upstream cannot be reached or its
    /// response cannot be parsed as JSON.
    async fn last_traded_price(
        &self,
        instrument: &InstrumentKey,
    ) -> Result<Value, QuoteSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_is_non_empty() {
        let unreachable = QuoteSourceError::UpstreamUnreachable("connection refused".to_string());
        assert!(!unreachable.to_string().is_empty());
        assert!(unreachable.to_string().contains("connection refused"));

        let invalid = QuoteSourceError::UpstreamInvalidResponse("expected value".to_string());
        assert!(!invalid.to_string().is_empty());
        assert!(invalid.to_string().contains("expected value"));
    }
}
