//! Gateway Configuration Settings
//!
//! Configuration types for the gateway, loaded from environment variables.

/// Upstox API credentials.
///
/// Read once at startup and immutable for the process lifetime. Missing
/// variables are not an error: the token defaults to the empty string and the
/// upstream rejects the resulting calls itself.
#[derive(Clone, Default)]
pub struct Credentials {
    access_token: String,
    api_key: String,
}

impl Credentials {
    /// Create new credentials.
    #[must_use]
    pub const fn new(access_token: String, api_key: String) -> Self {
        Self {
            access_token,
            api_key,
        }
    }

    /// Get the bearer access token for outbound calls.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API key.
    ///
    /// Carried in the configuration but not attached to outbound quote
    /// lookups; the upstream authenticates those with the access token alone.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether an access token was configured.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"[REDACTED]")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Server port settings.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// HTTP listen port.
    pub http_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { http_port: 5000 }
    }
}

/// Complete gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Upstox API credentials.
    pub credentials: Credentials,
    /// Server port settings.
    pub server: ServerSettings,
}

impl GatewayConfig {
    /// Create configuration from environment variables.
    ///
    /// Recognized variables:
    ///
    /// - `UPSTOX_ACCESS_TOKEN` - bearer token for upstream calls
    /// - `UPSTOX_API_KEY` - API key (currently unused by outbound calls)
    /// - `GATEWAY_HTTP_PORT` - listen port (default 5000)
    ///
    /// Nothing is required: absent credentials degrade to empty strings and
    /// an unparseable port falls back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let access_token = std::env::var("UPSTOX_ACCESS_TOKEN").unwrap_or_default();
        let api_key = std::env::var("UPSTOX_API_KEY").unwrap_or_default();

        let server = ServerSettings {
            http_port: parse_env_u16("GATEWAY_HTTP_PORT", ServerSettings::default().http_port),
        };

        Self {
            credentials: Credentials::new(access_token, api_key),
            server,
        }
    }
}

fn parse_env_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_settings_defaults() {
        let settings = ServerSettings::default();
        assert_eq!(settings.http_port, 5000);
    }

    #[test]
    fn credentials_default_to_empty() {
        let creds = Credentials::default();
        assert_eq!(creds.access_token(), "");
        assert_eq!(creds.api_key(), "");
        assert!(!creds.has_access_token());
    }

    #[test]
    fn credentials_accessors() {
        let creds = Credentials::new("token123".to_string(), "key456".to_string());
        assert_eq!(creds.access_token(), "token123");
        assert_eq!(creds.api_key(), "key456");
        assert!(creds.has_access_token());
    }

    #[test]
    fn credentials_redacted_debug() {
        let creds = Credentials::new("token123".to_string(), "key456".to_string());
        let debug = format!("{creds:?}");
        assert!(!debug.contains("token123"));
        assert!(!debug.contains("key456"));
        assert!(debug.contains("[REDACTED]"));
    }
}
