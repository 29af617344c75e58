//! HTTP client for the Upstox market quote API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::application::ports::{QuoteSourceError, QuoteSourcePort};
use crate::domain::instrument::InstrumentKey;
use crate::infrastructure::config::Credentials;

use super::error::UpstoxError;

/// Default base URL for the Upstox REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.upstox.com/v2";

/// Upstox client configuration.
#[derive(Debug, Clone)]
pub struct UpstoxConfig {
    /// Base URL for the upstream API.
    pub base_url: String,
    /// API credentials.
    pub credentials: Credentials,
}

impl UpstoxConfig {
    /// Configuration against the production API.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
        }
    }

    /// Configuration against a custom base URL (local mock servers).
    #[must_use]
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }
}

/// HTTP client for the Upstox quote API.
///
/// One shared `reqwest::Client` per process, built without a request timeout:
/// a lookup makes a single attempt and blocks for as long as the upstream
/// takes to answer. No retry, no backoff.
#[derive(Debug, Clone)]
pub struct UpstoxClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl UpstoxClient {
    /// Create a new client from config.
    ///
    /// # Errors
    ///
    /// Returns `UpstoxError::Network` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: UpstoxConfig) -> Result<Self, UpstoxError> {
        let client = Client::builder()
            .build()
            .map_err(|e| UpstoxError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            credentials: config.credentials,
        })
    }

    /// Fetch the last-traded-price payload for an instrument.
    ///
    /// The upstream body is parsed only as far as `serde_json::Value` and
    /// handed back verbatim, whatever status the upstream answered with.
    /// Upstream error envelopes are still `Ok` here.
    ///
    /// # Errors
    ///
    /// Returns `UpstoxError::Network` if the request fails in transit and
    /// `UpstoxError::JsonParse` if the body is not JSON.
    pub async fn ltp(&self, instrument: &InstrumentKey) -> Result<Value, UpstoxError> {
        let url = format!("{}/market/quote/ltp", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .bearer_auth(self.credentials.access_token())
            .query(&[("symbol", instrument.to_string())])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(
                status = status.as_u16(),
                instrument = %instrument,
                "upstream body is not JSON"
            );
            UpstoxError::JsonParse(e.to_string())
        })
    }
}

#[async_trait]
impl QuoteSourcePort for UpstoxClient {
    async fn last_traded_price(
        &self,
        instrument: &InstrumentKey,
    ) -> Result<Value, QuoteSourceError> {
        self.ltp(instrument).await.map_err(QuoteSourceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_production() {
        let config = UpstoxConfig::new(Credentials::default());
        assert_eq!(config.base_url, "https://api.upstox.com/v2");
    }

    #[test]
    fn custom_base_url_overrides_default() {
        let config = UpstoxConfig::with_base_url(Credentials::default(), "http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn client_builds_with_empty_credentials() {
        // Missing credentials are tolerated; upstream rejects the call itself.
        let client = UpstoxClient::new(UpstoxConfig::new(Credentials::default()));
        assert!(client.is_ok());
    }
}
