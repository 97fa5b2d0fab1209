//! Payments provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::webhook::TimestampUnit;

/// Payments provider configuration.
///
/// Each webhook route carries its own signing secret: merchant-status
/// callbacks and payment-intent callbacks are signed with distinct keys.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Provider secret API key (sk_...)
    pub api_key: SecretString,

    /// Base URL for the provider API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Signing secret for payment-intent webhook callbacks (whsec_...)
    pub payment_webhook_secret: SecretString,

    /// Signing secret for merchant-status webhook callbacks (whsec_...)
    pub merchant_webhook_secret: SecretString,

    /// Replay-protection window for webhook timestamps, in seconds
    #[serde(default = "default_webhook_tolerance_secs")]
    pub webhook_tolerance_secs: i64,

    /// Unit of the `t` field in the provider's signature header.
    ///
    /// The provider's documentation governs this; do not assume seconds.
    #[serde(default)]
    pub webhook_timestamp_unit: TimestampUnit,
}

impl PaymentConfig {
    /// Check if using a test-mode API key
    pub fn is_test_mode(&self) -> bool {
        self.api_key.expose_secret().starts_with("sk_test_")
    }

    /// Validate payments configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__API_KEY"));
        }
        if !self.api_key.expose_secret().starts_with("sk_") {
            return Err(ValidationError::InvalidPaymentApiKey);
        }

        for secret in [&self.payment_webhook_secret, &self.merchant_webhook_secret] {
            if secret.expose_secret().is_empty() {
                return Err(ValidationError::MissingRequired("PAYMENT__*_WEBHOOK_SECRET"));
            }
            if !secret.expose_secret().starts_with("whsec_") {
                return Err(ValidationError::InvalidWebhookSecret);
            }
        }

        if self.webhook_tolerance_secs < 1 || self.webhook_tolerance_secs > 3600 {
            return Err(ValidationError::InvalidWebhookTolerance);
        }

        Ok(())
    }
}

fn default_api_base_url() -> String {
    "https://api.payments.example.com".to_string()
}

fn default_webhook_tolerance_secs() -> i64 {
    300
}
