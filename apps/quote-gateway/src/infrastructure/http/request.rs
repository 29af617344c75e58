//! HTTP request DTOs.

use serde::{Deserialize, Serialize};

/// Request to register interest in a set of symbols.
///
/// Subscription is bookkeeping only: nothing is registered with any upstream
/// feed and nothing survives the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscribeRequest {
    /// Symbols to subscribe, in client order.
    #[serde(default)]
    pub symbols: Vec<String>,
}

impl SubscribeRequest {
    /// Parse a request body.
    ///
    /// Absent or malformed input degrades to the empty list; this endpoint
    /// never raises a validation error.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn missing_field_defaults_to_empty() {
        let request = SubscribeRequest::from_body(b"{}");
        assert!(request.symbols.is_empty());
    }

    #[test]
    fn empty_body_defaults_to_empty() {
        let request = SubscribeRequest::from_body(b"");
        assert!(request.symbols.is_empty());
    }

    #[test]
    fn malformed_body_defaults_to_empty() {
        let request = SubscribeRequest::from_body(b"not json at all");
        assert!(request.symbols.is_empty());

        let request = SubscribeRequest::from_body(br#"{"symbols": "INFY"}"#);
        assert!(request.symbols.is_empty());
    }

    #[test]
    fn symbols_parse_in_order() {
        let request = SubscribeRequest::from_body(br#"{"symbols": ["INFY", "TCS", "SBIN"]}"#);
        assert_eq!(request.symbols, vec!["INFY", "TCS", "SBIN"]);
    }

    proptest! {
        // Echo law: any list of strings survives the parse unchanged.
        #[test]
        fn parse_preserves_arbitrary_symbol_lists(
            symbols in proptest::collection::vec(".*", 0..8)
        ) {
            let body = serde_json::to_vec(&serde_json::json!({ "symbols": symbols })).unwrap();
            let parsed = SubscribeRequest::from_body(&body);
            prop_assert_eq!(parsed.symbols, symbols);
        }
    }
}
