//! Shipping provider port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::token::UpstreamAuthError;

/// Errors from shipping provider operations.
#[derive(Debug, Error)]
pub enum ShippingError {
    /// Could not obtain a bearer token for the call.
    #[error(transparent)]
    Auth(#[from] UpstreamAuthError),

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

/// Request to register a shipper account with the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterShipperRequest {
    /// Carrier slug, e.g. `ups` or `dhl`.
    pub carrier: String,

    /// Display name for the account.
    pub account_name: String,

    /// Carrier account number.
    pub account_number: String,

    /// ISO country code of the account.
    pub country: String,
}

/// A shipper account registered at the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipperAccount {
    pub id: String,
    pub carrier: String,
    pub status: String,
}

/// Port for shipping provider integrations.
#[async_trait]
pub trait ShippingProvider: Send + Sync {
    /// Register a shipper account, authenticating with a bearer token.
    async fn register_shipper_account(
        &self,
        request: RegisterShipperRequest,
    ) -> Result<ShipperAccount, ShippingError>;
}
