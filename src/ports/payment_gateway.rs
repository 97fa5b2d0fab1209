//! Payment gateway port for the external payments provider.
//!
//! The gateway is a pass-through: the handlers forward creation requests and
//! relay the provider's answer. No payment state is stored locally.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from payment provider operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network connectivity issue or timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider rejected the request.
    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The provider's response could not be decoded.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Whether the caller may retry the same request.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Network(_) => true,
            GatewayError::Provider { status, .. } => *status == 429 || *status >= 500,
            GatewayError::MalformedResponse(_) => false,
        }
    }
}

/// Request to create a payment intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in the currency's minor unit.
    pub amount: i64,

    /// ISO 4217 currency code, lowercase.
    pub currency: String,

    /// Provider-side merchant account to credit.
    pub merchant_account_id: String,

    /// Free-form statement descriptor.
    pub description: Option<String>,
}

/// A payment intent created at the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub client_secret: Option<String>,
}

/// Request to create a hosted checkout session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCheckoutSessionRequest {
    pub amount: i64,
    pub currency: String,
    pub merchant_account_id: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// A hosted checkout session created at the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,

    /// URL the shopper is redirected to.
    pub url: String,

    /// Session expiry (Unix timestamp).
    pub expires_at: i64,
}

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent at the provider.
    async fn create_payment_intent(
        &self,
        request: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent, GatewayError>;

    /// Create a hosted checkout session at the provider.
    async fn create_checkout_session(
        &self,
        request: CreateCheckoutSessionRequest,
    ) -> Result<CheckoutSession, GatewayError>;
}
