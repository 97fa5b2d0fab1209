//! Shipping provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Shipping provider configuration.
///
/// The provider authenticates with an OAuth client-credentials exchange;
/// the resulting bearer token is cached process-wide (see
/// [`crate::adapters::oauth::TokenCache`]).
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingConfig {
    /// OAuth client id
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: SecretString,

    /// OAuth token endpoint URL
    pub token_url: String,

    /// Base URL for the provider API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Timeout for the token request, in seconds
    #[serde(default = "default_token_timeout_secs")]
    pub token_timeout_secs: u64,

    /// Safety margin subtracted from the provider-reported token lifetime,
    /// in seconds. Guards against clock skew and in-flight latency.
    #[serde(default = "default_token_margin_secs")]
    pub token_margin_secs: i64,
}

impl ShippingConfig {
    /// Validate shipping configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_id.is_empty() {
            return Err(ValidationError::MissingRequired("SHIPPING__CLIENT_ID"));
        }
        if self.client_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SHIPPING__CLIENT_SECRET"));
        }
        if !self.token_url.starts_with("http://") && !self.token_url.starts_with("https://") {
            return Err(ValidationError::InvalidTokenUrl);
        }
        if self.token_margin_secs < 0 || self.token_margin_secs > 600 {
            return Err(ValidationError::InvalidTokenMargin);
        }
        Ok(())
    }
}

fn default_api_base_url() -> String {
    "https://api.shipping.example.com".to_string()
}

fn default_token_timeout_secs() -> u64 {
    15
}

fn default_token_margin_secs() -> i64 {
    60
}
