//! HTTP implementation of the shipping provider port.
//!
//! Every call first obtains a bearer token from the [`TokenCache`]; a token
//! failure aborts the call as an upstream auth error rather than going out
//! unauthenticated.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::oauth::TokenCache;
use crate::config::ShippingConfig;
use crate::ports::{RegisterShipperRequest, ShipperAccount, ShippingError, ShippingProvider};

/// reqwest-backed [`ShippingProvider`].
pub struct HttpShippingProvider {
    client: reqwest::Client,
    api_base_url: String,
    tokens: Arc<TokenCache>,
}

impl HttpShippingProvider {
    /// Build the provider from shipping configuration and a shared token
    /// cache.
    pub fn from_config(config: &ShippingConfig, tokens: Arc<TokenCache>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Override the base URL (tests point this at a local stub).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Wire shape of a provider shipper account.
#[derive(Debug, Deserialize)]
struct WireShipperAccount {
    id: String,
    carrier: String,
    status: String,
}

#[async_trait]
impl ShippingProvider for HttpShippingProvider {
    async fn register_shipper_account(
        &self,
        request: RegisterShipperRequest,
    ) -> Result<ShipperAccount, ShippingError> {
        let bearer = self.tokens.bearer_token().await?;

        let url = format!("{}/v1/shipper_accounts", self.api_base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(bearer)
            .json(&request)
            .send()
            .await
            .map_err(|e| ShippingError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %message, "shipper account registration failed");
            return Err(ShippingError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let account: WireShipperAccount = response
            .json()
            .await
            .map_err(|e| ShippingError::MalformedResponse(e.to_string()))?;

        Ok(ShipperAccount {
            id: account.id,
            carrier: account.carrier,
            status: account.status,
        })
    }
}
