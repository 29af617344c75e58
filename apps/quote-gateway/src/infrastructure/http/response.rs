//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true` while the process can answer requests.
    pub ok: bool,
}

/// Response echoing a subscription request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeResponse {
    /// The submitted symbols, order preserved.
    pub subscribed: Vec<String>,
}

/// Error envelope for failed upstream lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Textual description of the failure.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_to_ok_true() {
        let json = serde_json::to_string(&HealthResponse { ok: true }).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn subscribe_response_uses_subscribed_key() {
        let response = SubscribeResponse {
            subscribed: vec!["INFY".to_string()],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"subscribed":["INFY"]}"#);
    }

    #[test]
    fn error_response_uses_error_key() {
        let response = ErrorResponse {
            error: "connection refused".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"connection refused"}"#);
    }
}
